//! `[theme.color_mode]` configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModeConfig {
    /// Mode used on first visit.
    pub default_mode: ColorMode,

    /// Hide the light/dark toggle.
    pub disable_switch: bool,

    /// Follow the visitor's `prefers-color-scheme` instead of `default_mode`.
    pub respect_prefers_color_scheme: bool,
}
