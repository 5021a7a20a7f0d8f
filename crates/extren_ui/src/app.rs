//! Main application module for Extension Renamer.
//!
//! Contains the application state, the message enum, and the
//! update/view/subscription functions wired into iced.

use std::path::PathBuf;

use iced::widget::{button, column, container, pick_list, row, text};
use iced::{event, window, Alignment, Element, Event, Length, Size, Subscription, Task};

use extren_core::config::WindowSettings;
use extren_core::models::TargetExtension;
use extren_core::rename::SavePlan;
use extren_core::session::RenamerSession;

use crate::theme::{colors, font, spacing};
use crate::widgets::{field_row, status_bar};

/// Window title.
pub const TITLE: &str = "File Extension Changer (Rename Only)";

/// All messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Source selection
    BrowseSource,
    SourcePicked(Option<PathBuf>),
    FileDropped(PathBuf),

    // Target selection
    TargetChosen(TargetExtension),

    // Save attempt
    SaveRequested,
    WarningAnswered(SavePlan, bool),
    DestinationPicked(SavePlan, Option<PathBuf>),

    /// A message dialog was acknowledged.
    DialogClosed,
}

/// Main application state.
pub struct App {
    pub session: RenamerSession,
    /// Picker entries, sorted.
    pub choices: Vec<TargetExtension>,
    /// A native dialog is open; actions that would open another are disabled.
    pub busy: bool,
}

/// Run the application until the window is closed.
pub fn run(window: &WindowSettings) -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(TITLE)
        .window_size(Size::new(window.width, window.height))
        .subscription(App::subscription)
        .run()
}

impl App {
    pub(crate) fn new() -> (Self, Task<Message>) {
        let app = Self {
            session: RenamerSession::new(),
            choices: TargetExtension::choices(),
            busy: false,
        };
        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseSource => {
                if self.busy {
                    return Task::none();
                }
                self.busy = true;
                self.browse_source()
            }
            Message::SourcePicked(path) => {
                self.busy = false;
                self.handle_source_picked(path);
                Task::none()
            }
            Message::FileDropped(path) => {
                self.handle_file_dropped(path);
                Task::none()
            }
            Message::TargetChosen(target) => {
                self.session.choose_target(target);
                Task::none()
            }
            Message::SaveRequested => {
                if self.busy {
                    return Task::none();
                }
                self.start_save()
            }
            Message::WarningAnswered(plan, proceed) => self.handle_warning_answered(plan, proceed),
            Message::DestinationPicked(plan, path) => self.handle_destination_picked(plan, path),
            Message::DialogClosed => {
                self.busy = false;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let source_label = match self.session.source() {
            Some(source) => text(source.path().display().to_string()).size(font::NORMAL),
            None => text("No file selected")
                .size(font::NORMAL)
                .color(colors::TEXT_MUTED),
        };
        let source_box = container(source_label)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(container::bordered_box);

        let upload_btn = button(text("Upload File"))
            .on_press_maybe((!self.busy).then_some(Message::BrowseSource));

        let file_row = field_row(
            "Selected File:",
            row![source_box, upload_btn]
                .spacing(spacing::SM)
                .align_y(Alignment::Center),
        );

        let original_row = field_row(
            "Original Ext:",
            text(self.session.original_extension().to_string()).size(font::NORMAL),
        );

        let picker = pick_list(
            self.choices.as_slice(),
            self.session.target(),
            Message::TargetChosen,
        )
        .placeholder("Choose...")
        .width(Length::Fixed(140.0));

        let category = match self.session.target() {
            Some(target) => text(target.category().to_string())
                .size(font::SM)
                .color(colors::TEXT_SECONDARY),
            None => text(""),
        };

        let target_row = field_row(
            "Choose New Ext:",
            row![picker, category]
                .spacing(spacing::SM)
                .align_y(Alignment::Center),
        );

        let can_save = self.session.ready_to_save() && !self.busy;
        let save_btn = button(text("Change Extension & Save As..."))
            .on_press_maybe(can_save.then_some(Message::SaveRequested));

        let form = column![
            file_row,
            original_row,
            target_row,
            container(save_btn).center_x(Length::Fill),
        ]
        .spacing(spacing::MD)
        .padding(spacing::LG);

        column![
            container(form).height(Length::Fill),
            status_bar(self.session.status()),
        ]
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(handle_event)
    }
}

/// Map window events to messages.
fn handle_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new().0
    }

    #[test]
    fn starts_idle_with_all_choices() {
        let app = app();
        assert!(!app.busy);
        assert_eq!(app.choices.len(), 53);
        assert!(!app.session.ready_to_save());
    }

    #[test]
    fn picked_source_clears_busy() {
        let mut app = app();
        app.busy = true;
        let _ = app.update(Message::SourcePicked(Some(PathBuf::from("/d/report.docx"))));

        assert!(!app.busy);
        assert_eq!(app.session.status(), "Selected: report.docx");
    }

    #[test]
    fn choosing_target_enables_save() {
        let mut app = app();
        let _ = app.update(Message::SourcePicked(Some(PathBuf::from("/d/a.txt"))));
        let _ = app.update(Message::TargetChosen(TargetExtension::parse("md").unwrap()));

        assert!(app.session.ready_to_save());
    }

    #[test]
    fn dropped_file_is_selected_through_update() {
        let dir = tempfile::tempdir().unwrap();
        let dropped = dir.path().join("clip.mov");
        std::fs::write(&dropped, b"moov").unwrap();
        let mut app = app();

        let event = Event::Window(window::Event::FileDropped(dropped.clone()));
        let message = handle_event(event, event::Status::Ignored, window::Id::unique())
            .expect("drop should map to a message");
        let _ = app.update(message);

        assert_eq!(app.session.source().unwrap().path(), dropped.as_path());
        assert_eq!(app.session.status(), "Selected: clip.mov");
        assert_eq!(app.session.original_extension().to_string(), "mov");
    }

    #[test]
    fn dropped_file_is_ignored_while_busy() {
        let dir = tempfile::tempdir().unwrap();
        let dropped = dir.path().join("clip.mov");
        std::fs::write(&dropped, b"moov").unwrap();
        let mut app = app();
        app.busy = true;

        let _ = app.update(Message::FileDropped(dropped));

        assert!(app.session.source().is_none());
    }

    #[test]
    fn dialog_closed_clears_busy() {
        let mut app = app();
        app.busy = true;
        let _ = app.update(Message::DialogClosed);
        assert!(!app.busy);
    }

    #[test]
    fn declined_warning_returns_to_idle() {
        let mut app = app();
        let _ = app.update(Message::SourcePicked(Some(PathBuf::from("/d/a.txt"))));
        let _ = app.update(Message::TargetChosen(TargetExtension::parse("pdf").unwrap()));
        let plan = SavePlan::new(
            app.session.source().unwrap().clone(),
            TargetExtension::parse("pdf").unwrap(),
        );
        app.busy = true;

        let _ = app.update(Message::WarningAnswered(plan, false));

        assert!(!app.busy);
        assert_eq!(
            app.session.status(),
            "Save operation cancelled by user due to warning."
        );
    }

    #[test]
    fn cancelled_save_dialog_returns_to_idle() {
        let mut app = app();
        let _ = app.update(Message::SourcePicked(Some(PathBuf::from("/d/a.txt"))));
        let plan = SavePlan::new(
            app.session.source().unwrap().clone(),
            TargetExtension::parse("txt").unwrap(),
        );
        app.busy = true;

        let _ = app.update(Message::DestinationPicked(plan, None));

        assert!(!app.busy);
        assert_eq!(app.session.status(), "Save operation cancelled.");
    }
}
