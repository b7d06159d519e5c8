//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! card_border = "#45475a"
//! selection_fg = "#f5c2e7"
//! name_fg = "#89b4fa"
//! avatar_fg = "#1e1e2e"
//! avatar_bg = "#cba6f7"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! modal_border = "#cba6f7"
//! ```
//!
//! # Example
//!
//! ```rust
//! use rolodex::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary card lines).
    pub text_dim: String,

    /// Separator line color.
    pub border: String,
    /// Border of an unselected card.
    pub card_border: String,
    /// Border of the selected card.
    pub selection_fg: String,

    /// Profile name on cards and in the modal.
    pub name_fg: String,
    /// Initials avatar text.
    pub avatar_fg: String,
    /// Initials avatar background.
    pub avatar_bg: String,

    /// Search bar border color (focused).
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Loading and empty-result message color.
    pub empty_state_fg: String,
    /// Fetch and configuration error color.
    pub error_fg: String,

    /// Detail modal frame color.
    pub modal_border: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-in themes.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Theme`] if the file cannot be read or its
    /// content is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            DirectoryError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| DirectoryError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground color escape sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_escape_sequences() {
        assert_eq!(Theme::fg("#cdd6f4"), "\u{1b}[38;2;205;214;244m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_str!("../../themes/catppuccin-latte.toml").as_bytes())
            .unwrap();
        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "catppuccin-latte");
    }

    #[test]
    fn test_from_file_errors() {
        let err = Theme::from_file("/nonexistent/theme.toml").unwrap_err();
        assert!(matches!(err, DirectoryError::Theme(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();
        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DirectoryError::Theme(_)));
    }
}
