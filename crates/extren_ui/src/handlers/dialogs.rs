//! Native message dialogs, each resolving to a message when dismissed.

use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use extren_core::rename::{SavePlan, WARNING_TITLE};

use crate::app::Message;

/// Blocking error dialog with a single OK button.
pub fn show_error(message: String) -> Task<Message> {
    show_message(MessageLevel::Error, "Error", message)
}

/// Informational dialog with a single OK button.
pub fn show_info(title: &'static str, message: String) -> Task<Message> {
    show_message(MessageLevel::Info, title, message)
}

fn show_message(level: MessageLevel, title: &'static str, message: String) -> Task<Message> {
    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(level)
                .set_title(title)
                .set_description(message)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        },
        |_| Message::DialogClosed,
    )
}

/// Yes/no warning that the rename does not convert the content.
pub fn confirm_mismatch(plan: SavePlan) -> Task<Message> {
    let description = plan.warning_message();
    Task::perform(
        async move {
            let answer = AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title(WARNING_TITLE)
                .set_description(description)
                .set_buttons(MessageButtons::YesNo)
                .show()
                .await;
            (plan, matches!(answer, MessageDialogResult::Yes))
        },
        |(plan, proceed)| Message::WarningAnswered(plan, proceed),
    )
}
