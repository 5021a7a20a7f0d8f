//! The fixed catalog of target extensions offered to the user.

use std::fmt;

use thiserror::Error;

/// Informal grouping of catalog entries, shown next to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionCategory {
    Images,
    Documents,
    Audio,
    Video,
    Archives,
    Code,
    Other,
}

impl fmt::Display for ExtensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionCategory::Images => write!(f, "Images"),
            ExtensionCategory::Documents => write!(f, "Documents"),
            ExtensionCategory::Audio => write!(f, "Audio"),
            ExtensionCategory::Video => write!(f, "Video"),
            ExtensionCategory::Archives => write!(f, "Archives"),
            ExtensionCategory::Code => write!(f, "Code/Text"),
            ExtensionCategory::Other => write!(f, "Other"),
        }
    }
}

/// Every extension the picker offers, grouped by category.
const CATALOG: &[(ExtensionCategory, &[&str])] = &[
    (
        ExtensionCategory::Images,
        &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp", "svg"],
    ),
    (
        ExtensionCategory::Documents,
        &[
            "txt", "rtf", "doc", "docx", "odt", "pdf", "xls", "xlsx", "ods", "ppt", "pptx", "odp",
            "csv",
        ],
    ),
    (
        ExtensionCategory::Audio,
        &["mp3", "wav", "ogg", "flac", "aac", "m4a"],
    ),
    (
        ExtensionCategory::Video,
        &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm"],
    ),
    (ExtensionCategory::Archives, &["zip", "rar", "7z", "tar", "gz"]),
    (
        ExtensionCategory::Code,
        &[
            "py", "js", "html", "css", "json", "xml", "md", "java", "c", "cpp",
        ],
    ),
    (ExtensionCategory::Other, &["exe", "dll", "iso", "bin"]),
];

/// Error returned when a string is not part of the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not one of the supported extensions")]
pub struct UnknownExtension(pub String);

/// An extension picked from the catalog.
///
/// Can only be built from a catalog entry, so downstream code never has to
/// re-validate it. Stored without a leading dot and in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetExtension(&'static str);

impl TargetExtension {
    /// Look up an extension in the catalog.
    ///
    /// A single leading dot is accepted and ignored; matching is
    /// ASCII case-insensitive.
    pub fn parse(value: &str) -> Result<Self, UnknownExtension> {
        let bare = value.strip_prefix('.').unwrap_or(value);
        CATALOG
            .iter()
            .flat_map(|(_, exts)| exts.iter())
            .find(|ext| ext.eq_ignore_ascii_case(bare))
            .map(|ext| TargetExtension(*ext))
            .ok_or_else(|| UnknownExtension(value.to_string()))
    }

    /// The bare extension, e.g. `"pdf"`.
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// The extension with a leading dot, e.g. `".pdf"`.
    pub fn dotted(&self) -> String {
        format!(".{}", self.0)
    }

    /// Label for the save dialog filter, e.g. `"PDF files"`.
    pub fn filter_label(&self) -> String {
        format!("{} files", self.0.to_uppercase())
    }

    /// Category this extension is listed under.
    pub fn category(&self) -> ExtensionCategory {
        CATALOG
            .iter()
            .find(|(_, exts)| exts.contains(&self.0))
            .map(|(category, _)| *category)
            .unwrap_or(ExtensionCategory::Other)
    }

    /// All catalog entries, sorted alphabetically as the picker shows them.
    pub fn choices() -> Vec<TargetExtension> {
        let mut all: Vec<TargetExtension> = CATALOG
            .iter()
            .flat_map(|(_, exts)| exts.iter().map(|ext| TargetExtension(*ext)))
            .collect();
        all.sort();
        all
    }
}

impl fmt::Display for TargetExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::str::FromStr for TargetExtension {
    type Err = UnknownExtension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
