//! The inputs of one save attempt, captured when the attempt starts.

use std::path::{Path, PathBuf};

use crate::models::{OriginalExtension, SourceFile, TargetExtension};

use super::naming;

/// Title of the mismatch warning dialog.
pub const WARNING_TITLE: &str = "Potential Compatibility Issue";

/// Title of the save dialog.
pub const SAVE_DIALOG_TITLE: &str = "Save File As (Rename Only)";

/// Snapshot of a save attempt: what is copied and under which extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    source: SourceFile,
    target: TargetExtension,
    original: OriginalExtension,
}

impl SavePlan {
    pub fn new(source: SourceFile, target: TargetExtension) -> Self {
        let original = source.original_extension();
        Self {
            source,
            target,
            original,
        }
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    pub fn target(&self) -> TargetExtension {
        self.target
    }

    pub fn original(&self) -> &OriginalExtension {
        &self.original
    }

    /// Whether the user must confirm the rename first.
    ///
    /// True exactly when the current extension differs from the target.
    pub fn needs_warning(&self) -> bool {
        self.original.bare() != self.target.as_str()
    }

    /// Body of the mismatch warning dialog.
    pub fn warning_message(&self) -> String {
        let target = self.target.dotted();
        let change = match self.original.bare() {
            "" => format!("You are adding the extension '{}' to a file that has none.", target),
            from => format!(
                "You are changing the file extension from '.{}' to '{}'.",
                from, target
            ),
        };
        format!(
            "{}\n\n\
             IMPORTANT: This action only RENAMES the file. It does NOT convert the actual file content or format.\n\n\
             Opening the renamed file with software expecting a '{}' format may fail, show errors, or display corrupted data.\n\n\
             Do you want to proceed with renaming?",
            change, target
        )
    }

    /// File name the save dialog starts with.
    pub fn suggested_file_name(&self) -> String {
        naming::suggested_file_name(self.source.path(), self.target)
    }

    /// Directory the save dialog starts in.
    pub fn suggested_directory(&self) -> Option<&Path> {
        self.source.directory()
    }

    /// Final destination for a path returned by the save dialog.
    pub fn destination_for(&self, chosen: &Path) -> PathBuf {
        naming::enforce_extension(chosen, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(path: &str, target: &str) -> SavePlan {
        SavePlan::new(SourceFile::new(path), TargetExtension::parse(target).unwrap())
    }

    #[test]
    fn warns_only_on_mismatch() {
        assert!(plan("/d/report.docx", "pdf").needs_warning());
        assert!(!plan("/d/archive.tar", "tar").needs_warning());
        assert!(!plan("/d/IMAGE.PNG", "png").needs_warning());
        assert!(plan("/d/Makefile", "txt").needs_warning());
    }

    #[test]
    fn warning_names_both_extensions() {
        let msg = plan("/d/report.docx", "pdf").warning_message();
        assert!(msg.starts_with("You are changing the file extension from '.docx' to '.pdf'."));
        assert!(msg.contains("only RENAMES"));
        assert!(msg.ends_with("Do you want to proceed with renaming?"));

        let msg = plan("/d/Makefile", "txt").warning_message();
        assert!(msg.starts_with("You are adding the extension '.txt'"));
    }

    #[test]
    fn suggestions_come_from_source() {
        let p = plan("/d/report.docx", "pdf");
        assert_eq!(p.suggested_file_name(), "report.pdf");
        assert_eq!(p.suggested_directory(), Some(Path::new("/d")));
    }

    #[test]
    fn destination_always_carries_target() {
        let p = plan("/d/report.docx", "pdf");
        assert_eq!(p.destination_for(Path::new("/x/final")), PathBuf::from("/x/final.pdf"));
        assert_eq!(p.destination_for(Path::new("/x/final.PDF")), PathBuf::from("/x/final.PDF"));
    }
}
