//! Accessibility preferences.

use serde::{Deserialize, Serialize};

/// Color scheme. Dark is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// The other scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Base text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    #[default]
    Base,
    Lg,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Sm, FontSize::Base, FontSize::Lg];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
        }
    }

    /// Root font size in pixels.
    pub fn pixels(&self) -> u8 {
        match self {
            Self::Sm => 14,
            Self::Base => 16,
            Self::Lg => 18,
        }
    }
}

/// User accessibility preferences.
///
/// Serialized to TOML with the keys `theme`, `fontSize` and `showLibras`.
/// Missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub theme: ColorScheme,
    pub font_size: FontSize,
    /// Show the Libras (Brazilian sign language) interpreter widget.
    pub show_libras: bool,
}
