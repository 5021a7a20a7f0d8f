//! Window state and the save-attempt state machine.
//!
//! A save attempt moves through
//! `Idle -> WarningIfMismatched -> AwaitingSavePath -> Copying -> {Success | Failed}`.
//! Each transition is a method on [`RenamerSession`] that returns what the
//! UI has to do next, so the whole flow runs the same with or without a
//! window in front of it.

use std::path::{Path, PathBuf};

use crate::models::{OriginalExtension, SourceFile, TargetExtension};
use crate::rename::{copy_with_metadata, CopyError, PreconditionError, SavePlan};

/// Status text before anything was selected.
pub const STATUS_INITIAL: &str = "Please select a file.";
/// Status text after the first selection dialog was dismissed.
pub const STATUS_SELECTION_CANCELLED: &str = "File selection cancelled.";
/// Status text when the mismatch warning was declined.
pub const STATUS_DECLINED: &str = "Save operation cancelled by user due to warning.";
/// Status text when the save dialog was dismissed.
pub const STATUS_SAVE_CANCELLED: &str = "Save operation cancelled.";

/// What a file-selection result did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceSelection {
    /// A new source was set.
    Selected,
    /// Dialog dismissed with nothing selected yet; state reset.
    Reset,
    /// Dialog dismissed while a source was already set; nothing changed.
    Unchanged,
}

/// Next step of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStep {
    /// Extensions differ: ask the user before going on.
    ConfirmMismatch(SavePlan),
    /// Ask the user where to save.
    ChooseDestination(SavePlan),
}

/// A finished copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedCopy {
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Everything the window shows.
///
/// The original extension and save readiness are computed from the stored
/// source and target on every call and are never stored themselves.
#[derive(Debug, Clone)]
pub struct RenamerSession {
    source: Option<SourceFile>,
    target: Option<TargetExtension>,
    status: String,
}

impl Default for RenamerSession {
    fn default() -> Self {
        Self {
            source: None,
            target: None,
            status: STATUS_INITIAL.to_string(),
        }
    }
}

impl RenamerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&SourceFile> {
        self.source.as_ref()
    }

    pub fn target(&self) -> Option<TargetExtension> {
        self.target
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn original_extension(&self) -> OriginalExtension {
        OriginalExtension::of(self.source.as_ref().map(|s| s.path()))
    }

    /// Whether the save action is enabled.
    pub fn ready_to_save(&self) -> bool {
        self.source.is_some() && self.target.is_some()
    }

    /// Apply the result of the file-open dialog (`None` when dismissed).
    pub fn select_source(&mut self, picked: Option<PathBuf>) -> SourceSelection {
        match picked {
            Some(path) => {
                let source = SourceFile::new(path);
                self.status = format!("Selected: {}", source.file_name());
                tracing::info!(
                    "Source selected: {} (extension: {})",
                    source.path().display(),
                    source.original_extension()
                );
                self.source = Some(source);
                SourceSelection::Selected
            }
            None if self.source.is_none() => {
                self.status = STATUS_SELECTION_CANCELLED.to_string();
                tracing::debug!("File selection cancelled with no source set");
                SourceSelection::Reset
            }
            None => SourceSelection::Unchanged,
        }
    }

    pub fn choose_target(&mut self, target: TargetExtension) {
        tracing::debug!("Target extension chosen: {} ({})", target, target.category());
        self.target = Some(target);
    }

    /// Start a save attempt.
    ///
    /// Fails without touching any state when a source or target is missing.
    pub fn begin_save(&self) -> Result<SaveStep, PreconditionError> {
        let source = self.source.clone().ok_or(PreconditionError::NoSource)?;
        let target = self.target.ok_or(PreconditionError::NoTarget)?;

        let plan = SavePlan::new(source, target);
        if plan.needs_warning() {
            Ok(SaveStep::ConfirmMismatch(plan))
        } else {
            Ok(SaveStep::ChooseDestination(plan))
        }
    }

    /// Apply the answer to the mismatch warning.
    ///
    /// Returns the plan to continue with, or `None` if the user declined.
    pub fn answer_warning(&mut self, plan: SavePlan, proceed: bool) -> Option<SavePlan> {
        if proceed {
            tracing::info!(
                "Rename from '{}' to '{}' confirmed",
                plan.original(),
                plan.target()
            );
            Some(plan)
        } else {
            tracing::info!("Rename declined at compatibility warning");
            self.status = STATUS_DECLINED.to_string();
            None
        }
    }

    /// Apply the result of the save dialog (`None` when dismissed).
    ///
    /// Returns the destination with the target extension enforced.
    pub fn choose_destination(
        &mut self,
        plan: &SavePlan,
        chosen: Option<PathBuf>,
    ) -> Option<PathBuf> {
        match chosen {
            Some(path) => {
                let destination = plan.destination_for(&path);
                if destination != path {
                    tracing::debug!(
                        "Destination {} rewritten to {}",
                        path.display(),
                        destination.display()
                    );
                }
                Some(destination)
            }
            None => {
                self.status = STATUS_SAVE_CANCELLED.to_string();
                tracing::debug!("Save dialog cancelled");
                None
            }
        }
    }

    /// Copy the plan's source to `destination` and record the result.
    pub fn complete_save(
        &mut self,
        plan: &SavePlan,
        destination: &Path,
    ) -> Result<SavedCopy, CopyError> {
        match copy_with_metadata(plan.source().path(), destination) {
            Ok(bytes) => {
                let name = crate::rename::naming::display_name(destination);
                self.status = format!("File renamed and saved as: {}", name);
                tracing::info!("Saved {} ({} bytes)", destination.display(), bytes);
                Ok(SavedCopy {
                    destination: destination.to_path_buf(),
                    bytes,
                })
            }
            Err(e) => {
                self.status = format!("Error during save: {}", e);
                tracing::error!("Save to {} failed: {}", destination.display(), e);
                Err(e)
            }
        }
    }
}
