//! Color themes for callgrid.
//!
//! Two built-in themes are embedded at compile time and parsed once on
//! first use. The active theme is picked by name from the config; unknown
//! names fall back to the dark theme so a stale config can never break
//! startup.

mod colors;
mod loader;

pub use colors::Theme;

use ratatui::style::Color;
use std::sync::OnceLock;

// Embed theme files at compile time
const THEME_DARK_TOML: &str = include_str!("../themes/dark.toml");
const THEME_LIGHT_TOML: &str = include_str!("../themes/light.toml");

// Static theme instances
static THEME_DARK: OnceLock<Theme> = OnceLock::new();
static THEME_LIGHT: OnceLock<Theme> = OnceLock::new();

/// Hardcoded fallback in case an embedded theme fails to parse.
fn hardcoded_fallback_theme(name: &'static str) -> Theme {
    Theme {
        name,
        bg: Color::Black,
        fg: Color::White,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        disabled: Color::Gray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
    }
}

fn load_embedded_theme(content: &str, name: &'static str) -> Theme {
    match loader::load_theme_from_str(content, name) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!(
                "Failed to parse built-in theme '{}': {}. Using fallback theme.",
                name, e
            );
            hardcoded_fallback_theme(name)
        }
    }
}

fn dark_theme() -> &'static Theme {
    THEME_DARK.get_or_init(|| load_embedded_theme(THEME_DARK_TOML, "dark"))
}

fn light_theme() -> &'static Theme {
    THEME_LIGHT.get_or_init(|| load_embedded_theme(THEME_LIGHT_TOML, "light"))
}

impl Theme {
    /// Get a theme by name, falling back to the dark theme for unknown
    /// names.
    pub fn get_by_name(name: &str) -> &'static Theme {
        match name {
            "dark" => dark_theme(),
            "light" => light_theme(),
            _ => dark_theme(),
        }
    }

    /// Names of all built-in themes.
    pub fn all_theme_names() -> &'static [&'static str] {
        &["dark", "light"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_parse() {
        let dark = Theme::get_by_name("dark");
        assert_eq!(dark.name, "dark");
        // A parse failure would have produced the fallback palette.
        assert_ne!(dark.bg, hardcoded_fallback_theme("dark").bg);

        let light = Theme::get_by_name("light");
        assert_eq!(light.name, "light");
        assert_ne!(light.bg, dark.bg);
    }

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        let theme = Theme::get_by_name("solarized");
        assert_eq!(theme.name, "dark");
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default().name, "dark");
    }
}
