//! Data models for Extension Renamer.
//!
//! - The fixed extension catalog and the validated [`TargetExtension`]
//! - The selected source file and its derived [`OriginalExtension`]

mod extension;
mod source;

pub use extension::{ExtensionCategory, TargetExtension, UnknownExtension};
pub use source::{OriginalExtension, SourceFile};
