//! File name derivation: extension lookup, suggested names and the final
//! extension rewrite applied to whatever the save dialog returned.

use std::path::{Path, PathBuf};

use crate::models::TargetExtension;

/// Split a file name into `(stem, extension)`.
///
/// The extension is whatever follows the last dot, without the dot.
/// Leading dots belong to the stem, so `.bashrc` has no extension while
/// `.config.toml` has `toml`. A trailing dot yields an empty extension.
pub fn split_file_name(name: &str) -> (&str, Option<&str>) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(idx) => {
            let dot = leading + idx;
            (&name[..dot], Some(&name[dot + 1..]))
        }
        None => (name, None),
    }
}

/// The lowercase extension of the file name component of `path`.
///
/// Returns `None` when the name has no extension or an empty one.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    match split_file_name(&name) {
        (_, Some(ext)) if !ext.is_empty() => Some(ext.to_lowercase()),
        _ => None,
    }
}

/// The file name of `path` without its extension.
pub fn stem_of(path: &Path) -> String {
    match path.file_name() {
        Some(name) => {
            let name = name.to_string_lossy();
            split_file_name(&name).0.to_string()
        }
        None => String::new(),
    }
}

/// The last component of `path` for display, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Suggested save-dialog file name: `<stem>.<target>`.
pub fn suggested_file_name(source: &Path, target: TargetExtension) -> String {
    format!("{}.{}", stem_of(source), target)
}

/// Make `target` the extension of `destination`.
///
/// A destination whose extension already matches (ASCII case-insensitive)
/// is returned as is. Otherwise its extension is replaced, or appended
/// when it has none.
pub fn enforce_extension(destination: &Path, target: TargetExtension) -> PathBuf {
    let Some(name) = destination.file_name() else {
        return destination.to_path_buf();
    };
    let name = name.to_string_lossy();
    let (stem, ext) = split_file_name(&name);

    if ext.is_some_and(|ext| ext.eq_ignore_ascii_case(target.as_str())) {
        return destination.to_path_buf();
    }

    destination.with_file_name(format!("{}.{}", stem, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ext(s: &str) -> TargetExtension {
        TargetExtension::parse(s).unwrap()
    }

    #[test]
    fn split_handles_hidden_and_trailing_dots() {
        assert_eq!(split_file_name("report.docx"), ("report", Some("docx")));
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", Some("gz")));
        assert_eq!(split_file_name(".bashrc"), (".bashrc", None));
        assert_eq!(split_file_name("..hidden"), ("..hidden", None));
        assert_eq!(split_file_name(".config.toml"), (".config", Some("toml")));
        assert_eq!(split_file_name("name."), ("name", Some("")));
        assert_eq!(split_file_name("README"), ("README", None));
    }

    #[test]
    fn extension_is_lowercase_and_bare() {
        assert_eq!(extension_of(Path::new("/tmp/Photo.JPG")), Some("jpg".to_string()));
        assert_eq!(extension_of(Path::new("/tmp/archive.tar.gz")), Some("gz".to_string()));
        assert_eq!(extension_of(Path::new("/tmp/.profile")), None);
        assert_eq!(extension_of(Path::new("/tmp/Makefile")), None);
        assert_eq!(extension_of(Path::new("/tmp/odd.")), None);
    }

    #[test]
    fn extension_only_looks_at_file_name() {
        assert_eq!(extension_of(Path::new("/some.dir/Makefile")), None);
        assert_eq!(stem_of(Path::new("/some.dir/notes.md")), "notes");
    }

    #[test]
    fn suggestion_swaps_extension() {
        assert_eq!(
            suggested_file_name(Path::new("/docs/report.docx"), ext("pdf")),
            "report.pdf"
        );
        assert_eq!(
            suggested_file_name(Path::new("/src/.env"), ext("txt")),
            ".env.txt"
        );
    }

    #[test]
    fn enforce_keeps_matching_extension() {
        let dest = Path::new("/out/report.PDF");
        assert_eq!(enforce_extension(dest, ext("pdf")), PathBuf::from("/out/report.PDF"));
    }

    #[test]
    fn enforce_replaces_or_appends() {
        assert_eq!(
            enforce_extension(Path::new("/out/report.txt"), ext("pdf")),
            PathBuf::from("/out/report.pdf")
        );
        assert_eq!(
            enforce_extension(Path::new("/out/report"), ext("pdf")),
            PathBuf::from("/out/report.pdf")
        );
        assert_eq!(
            enforce_extension(Path::new("/out/report."), ext("pdf")),
            PathBuf::from("/out/report.pdf")
        );
        assert_eq!(
            enforce_extension(Path::new("/out/.hidden"), ext("md")),
            PathBuf::from("/out/.hidden.md")
        );
    }

    #[test]
    fn display_name_is_basename() {
        assert_eq!(display_name(Path::new("/a/b/c.txt")), "c.txt");
    }
}
