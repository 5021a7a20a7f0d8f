//! The file the user picked and what is derived from it.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::rename::naming;

/// Extension of the current source, as shown in the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginalExtension {
    /// No source selected.
    NotApplicable,
    /// Source selected but its name has no extension.
    None,
    /// Lowercase extension without the dot.
    Known(String),
}

impl OriginalExtension {
    /// Derive the extension for an optional source path.
    pub fn of(path: Option<&Path>) -> Self {
        match path {
            None => OriginalExtension::NotApplicable,
            Some(p) => match naming::extension_of(p) {
                Some(ext) => OriginalExtension::Known(ext),
                None => OriginalExtension::None,
            },
        }
    }

    /// The bare extension used for comparison, empty when there is none.
    pub fn bare(&self) -> &str {
        match self {
            OriginalExtension::Known(ext) => ext,
            _ => "",
        }
    }
}

impl fmt::Display for OriginalExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginalExtension::NotApplicable => write!(f, "N/A"),
            OriginalExtension::None => write!(f, "none"),
            OriginalExtension::Known(ext) => write!(f, "{}", ext),
        }
    }
}

/// A selected source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name for status messages.
    pub fn file_name(&self) -> String {
        naming::display_name(&self.path)
    }

    /// Directory the save dialog opens in.
    pub fn directory(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    pub fn original_extension(&self) -> OriginalExtension {
        OriginalExtension::of(Some(&self.path))
    }
}
