//! Color schemes.
//!
//! The page has exactly two schemes, light and dark. Which one applies is
//! decided per render pass from the host's dark-mode flag, optionally
//! forced by configuration.

use gpui::{rgb, Hsla};
use serde::{Deserialize, Serialize};

/// Configured theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the system appearance.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ThemeMode {
    /// Resolves the preference against the system dark-mode flag.
    pub fn resolve(&self, system_dark: bool) -> ColorScheme {
        match self {
            ThemeMode::System => ColorScheme::from_dark_mode(system_dark),
            ThemeMode::Light => ColorScheme::Light,
            ThemeMode::Dark => ColorScheme::Dark,
        }
    }

    /// Next mode in the cycle system, light, dark.
    pub fn next(&self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }
}

/// One of the two predefined schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl ColorScheme {
    /// Picks the scheme for a dark-mode flag.
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

/// Theme colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Page background.
    pub background: Hsla,
    /// Content column behind the page items.
    pub surface: Hsla,
    /// Primary text on the surface.
    pub on_surface: Hsla,
    /// Secondary text on the surface.
    pub on_surface_variant: Hsla,
    /// Accent used for buttons and hyperlinks.
    pub primary: Hsla,
    /// Content drawn on top of `primary`.
    pub on_primary: Hsla,
    /// `primary` while a button is hovered.
    pub primary_hover: Hsla,
}

impl ThemeColors {
    /// Light scheme colors.
    pub fn light() -> Self {
        Self {
            background: rgb(0xFFFBFE).into(),
            surface: rgb(0xFFFBFE).into(),
            on_surface: rgb(0x1C1B1F).into(),
            on_surface_variant: rgb(0x49454F).into(),
            primary: rgb(0x6750A4).into(),
            on_primary: rgb(0xFFFFFF).into(),
            primary_hover: rgb(0x7965AF).into(),
        }
    }

    /// Dark scheme colors.
    pub fn dark() -> Self {
        Self {
            background: rgb(0x1C1B1F).into(),
            surface: rgb(0x1C1B1F).into(),
            on_surface: rgb(0xE6E1E5).into(),
            on_surface_variant: rgb(0xCAC4D0).into(),
            primary: rgb(0xD0BCFF).into(),
            on_primary: rgb(0x381E72).into(),
            primary_hover: rgb(0xC1A9F8).into(),
        }
    }
}

/// Resolved theme for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Which scheme this is.
    pub scheme: ColorScheme,
    /// Its colors.
    pub colors: ThemeColors,
}

impl Theme {
    /// Light theme.
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            colors: ThemeColors::light(),
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            colors: ThemeColors::dark(),
        }
    }

    /// Theme for a resolved scheme.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_mode_follows_flag() {
        assert_eq!(ThemeMode::System.resolve(true), ColorScheme::Dark);
        assert_eq!(ThemeMode::System.resolve(false), ColorScheme::Light);
    }

    #[test]
    fn forced_modes_ignore_flag() {
        for flag in [true, false] {
            assert_eq!(ThemeMode::Light.resolve(flag), ColorScheme::Light);
            assert_eq!(ThemeMode::Dark.resolve(flag), ColorScheme::Dark);
        }
    }

    #[test]
    fn mode_cycle_returns_to_start() {
        let mut mode = ThemeMode::System;
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, ThemeMode::System);
        assert_eq!(ThemeMode::System.next(), ThemeMode::Light);
    }

    #[test]
    fn schemes_are_distinct() {
        assert_ne!(ThemeColors::light(), ThemeColors::dark());
        assert_eq!(Theme::dark().scheme, ColorScheme::Dark);
        assert_eq!(Theme::light().scheme, ColorScheme::Light);
        assert_eq!(Theme::for_scheme(ColorScheme::Dark), Theme::dark());
    }

    #[test]
    fn theme_mode_serde() {
        let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(serde_json::to_string(&ThemeMode::System).unwrap(), "\"system\"");
    }
}
