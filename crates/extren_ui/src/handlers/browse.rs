//! Source file selection handlers.

use std::path::PathBuf;

use iced::Task;

use crate::app::{App, Message};

impl App {
    /// Browse for the source file. Any file type can be picked.
    pub fn browse_source(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Select a File")
                    .pick_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::SourcePicked,
        )
    }

    /// Handle the result of the open dialog.
    pub fn handle_source_picked(&mut self, path: Option<PathBuf>) {
        self.session.select_source(path);
    }

    /// Handle a file dropped onto the window. Treated like a dialog pick.
    pub fn handle_file_dropped(&mut self, path: PathBuf) {
        if self.busy {
            tracing::debug!("Ignoring drop while a dialog is open: {}", path.display());
            return;
        }
        if !path.is_file() {
            tracing::debug!("Ignoring drop of non-file: {}", path.display());
            return;
        }
        self.session.select_source(Some(path));
    }
}
