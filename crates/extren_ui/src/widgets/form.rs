//! Labeled form rows and the bottom status bar.

use iced::widget::{container, row, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::theme::{font, spacing, LABEL_WIDTH};

/// A row with a fixed-width label on the left and `content` filling the rest.
pub fn field_row<'a>(
    label: &'a str,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    row![
        text(label).size(font::NORMAL).width(Length::Fixed(LABEL_WIDTH)),
        content.into(),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

/// Sunken single-line status text across the bottom of the window.
pub fn status_bar(status: &str) -> Element<'_, Message> {
    container(text(status).size(font::SM))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
