//! Byte-for-byte copy that also carries permissions and timestamps over.

use std::fs::{self, File, FileTimes, Metadata};
use std::io;
use std::path::Path;

use super::errors::CopyError;

/// Copy `source` to `destination`, preserving permissions and access and
/// modification times.
///
/// The source is only read. The destination is created or truncated; a
/// failure part way through may leave a partial destination behind.
/// Returns the number of bytes copied.
pub fn copy_with_metadata(source: &Path, destination: &Path) -> Result<u64, CopyError> {
    if is_same_file(source, destination) {
        return Err(CopyError::SameFile {
            path: source.to_path_buf(),
        });
    }

    let metadata = fs::metadata(source).map_err(|e| CopyError::io("read", source, e))?;

    // fs::copy carries permission bits over on every platform.
    let bytes = fs::copy(source, destination).map_err(|e| CopyError::io("copy", source, e))?;

    copy_times(&metadata, destination)
        .map_err(|e| CopyError::io("set timestamps on", destination, e))?;

    tracing::debug!(
        "Copied {} bytes: {} -> {}",
        bytes,
        source.display(),
        destination.display()
    );
    Ok(bytes)
}

// Compares file identity, so hard links and symlinks to the source count too.
fn is_same_file(a: &Path, b: &Path) -> bool {
    same_file::is_same_file(a, b).unwrap_or(false)
}

fn copy_times(metadata: &Metadata, destination: &Path) -> io::Result<()> {
    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    open_for_times(destination)?.set_times(times)
}

// The destination may already be read-only after permissions were copied.
#[cfg(windows)]
fn open_for_times(path: &Path) -> io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)
}

#[cfg(not(windows))]
fn open_for_times(path: &Path) -> io::Result<File> {
    File::open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    fn age(path: &Path, modified: SystemTime) {
        let file = fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_times(FileTimes::new().set_modified(modified)).unwrap();
    }

    #[test]
    fn copies_bytes_exactly() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("data.bin");
        let dst = dir.path().join("data.iso");
        let payload: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        fs::write(&src, &payload).unwrap();

        let bytes = copy_with_metadata(&src, &dst).unwrap();

        assert_eq!(bytes, payload.len() as u64);
        assert_eq!(fs::read(&dst).unwrap(), payload);
        assert_eq!(fs::read(&src).unwrap(), payload);
    }

    #[test]
    fn preserves_modification_time() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("old.txt");
        let dst = dir.path().join("old.md");
        fs::write(&src, b"hello").unwrap();
        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        age(&src, past);

        copy_with_metadata(&src, &dst).unwrap();

        assert_eq!(fs::metadata(&dst).unwrap().modified().unwrap(), past);
    }

    #[cfg(unix)]
    #[test]
    fn preserves_permissions_of_read_only_source() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let src = dir.path().join("locked.txt");
        let dst = dir.path().join("locked.csv");
        fs::write(&src, b"a,b").unwrap();
        let past = SystemTime::UNIX_EPOCH + Duration::from_secs(1_500_000_000);
        age(&src, past);
        fs::set_permissions(&src, fs::Permissions::from_mode(0o444)).unwrap();

        copy_with_metadata(&src, &dst).unwrap();

        let meta = fs::metadata(&dst).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o444);
        assert_eq!(meta.modified().unwrap(), past);
    }

    #[test]
    fn refuses_to_copy_onto_itself() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("same.tar");
        fs::write(&src, b"payload").unwrap();

        let err = copy_with_metadata(&src, &src).unwrap_err();

        assert!(matches!(err, CopyError::SameFile { .. }));
        assert_eq!(fs::read(&src).unwrap(), b"payload");
    }

    #[test]
    fn refuses_to_copy_onto_a_hard_link_of_the_source() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("notes.txt");
        let alias = dir.path().join("alias.txt");
        fs::write(&src, b"precious data").unwrap();
        fs::hard_link(&src, &alias).unwrap();

        let err = copy_with_metadata(&src, &alias).unwrap_err();

        assert!(matches!(err, CopyError::SameFile { .. }));
        assert_eq!(fs::read(&src).unwrap(), b"precious data");
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("gone.txt");
        let dst = dir.path().join("gone.pdf");

        let err = copy_with_metadata(&src, &dst).unwrap_err();

        assert!(matches!(err, CopyError::Io { operation: "read", .. }));
        assert!(!dst.exists());
    }

    #[test]
    fn missing_destination_directory_fails() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, b"x").unwrap();
        let dst = dir.path().join("no_such_dir").join("a.pdf");

        let err = copy_with_metadata(&src, &dst).unwrap_err();

        assert!(matches!(err, CopyError::Io { operation: "copy", .. }));
        assert_eq!(fs::read(&src).unwrap(), b"x");
    }
}
