//! Theme constants for Extension Renamer.

use iced::Color;

/// Application colors.
pub mod colors {
    use super::Color;

    /// Secondary text (hints, category label)
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);

    /// Muted text (placeholder values such as "No file selected")
    pub const TEXT_MUTED: Color = Color::from_rgb(0.40, 0.40, 0.40);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 12.0;
    /// Normal font size
    pub const NORMAL: f32 = 14.0;
}

/// Width of the label column in the form.
pub const LABEL_WIDTH: f32 = 120.0;
