//! Save attempt handlers: warning, save dialog, copy, result dialogs.

use std::path::PathBuf;

use iced::Task;

use extren_core::rename::{SavePlan, SAVE_DIALOG_TITLE};
use extren_core::session::SaveStep;

use super::dialogs::{confirm_mismatch, show_error, show_info};
use crate::app::{App, Message};

impl App {
    /// Start a save attempt from the save button.
    pub fn start_save(&mut self) -> Task<Message> {
        match self.session.begin_save() {
            Err(e) => {
                tracing::warn!("Save requested too early: {}", e);
                self.busy = true;
                show_error(e.to_string())
            }
            Ok(SaveStep::ConfirmMismatch(plan)) => {
                self.busy = true;
                confirm_mismatch(plan)
            }
            Ok(SaveStep::ChooseDestination(plan)) => {
                self.busy = true;
                pick_destination(plan)
            }
        }
    }

    /// Handle the answer to the mismatch warning.
    pub fn handle_warning_answered(&mut self, plan: SavePlan, proceed: bool) -> Task<Message> {
        match self.session.answer_warning(plan, proceed) {
            Some(plan) => pick_destination(plan),
            None => {
                self.busy = false;
                Task::none()
            }
        }
    }

    /// Handle the save dialog result: copy, then report.
    pub fn handle_destination_picked(
        &mut self,
        plan: SavePlan,
        path: Option<PathBuf>,
    ) -> Task<Message> {
        let Some(destination) = self.session.choose_destination(&plan, path) else {
            self.busy = false;
            return Task::none();
        };

        match self.session.complete_save(&plan, &destination) {
            Ok(saved) => show_info(
                "Success",
                format!(
                    "File successfully renamed and saved as:\n{}",
                    saved.destination.display()
                ),
            ),
            Err(e) => show_error(format!("An error occurred during saving:\n{}", e)),
        }
    }
}

/// Open the save dialog seeded from the plan.
fn pick_destination(plan: SavePlan) -> Task<Message> {
    let file_name = plan.suggested_file_name();
    let directory = plan.suggested_directory().map(|d| d.to_path_buf());
    let target = plan.target();

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(SAVE_DIALOG_TITLE)
                .set_file_name(file_name)
                .add_filter(target.filter_label(), &[target.as_str()])
                .add_filter("All files", &["*"]);
            if let Some(dir) = directory {
                dialog = dialog.set_directory(dir);
            }
            let path = dialog.save_file().await.map(|f| f.path().to_path_buf());
            (plan, path)
        },
        |(plan, path)| Message::DestinationPicked(plan, path),
    )
}
