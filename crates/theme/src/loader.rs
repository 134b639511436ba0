//! Theme parsing from TOML.

use anyhow::Result;
use ratatui::style::Color;
use serde::Deserialize;

use crate::Theme;

/// Color representation in TOML: a named color, a `#rrggbb` hex string, or
/// an `{ rgb = [r, g, b] }` triple.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn to_color(&self) -> Color {
        match self {
            TomlColor::Named(name) => parse_named_or_hex(name),
            TomlColor::Rgb { rgb } => Color::Rgb(rgb[0], rgb[1], rgb[2]),
        }
    }
}

fn parse_named_or_hex(name: &str) -> Color {
    if let Some(color) = parse_hex(name) {
        return color;
    }
    match name {
        "Black" => Color::Black,
        "Red" => Color::Red,
        "Green" => Color::Green,
        "Yellow" => Color::Yellow,
        "Blue" => Color::Blue,
        "Magenta" => Color::Magenta,
        "Cyan" => Color::Cyan,
        "Gray" => Color::Gray,
        "DarkGray" => Color::DarkGray,
        "LightRed" => Color::LightRed,
        "LightGreen" => Color::LightGreen,
        "LightYellow" => Color::LightYellow,
        "LightBlue" => Color::LightBlue,
        "LightMagenta" => Color::LightMagenta,
        "LightCyan" => Color::LightCyan,
        "White" => Color::White,
        _ => Color::White,
    }
}

/// Parse `#rrggbb` into an RGB color.
fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// TOML theme colors structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    bg: TomlColor,
    fg: TomlColor,
    accented_bg: TomlColor,
    accented_fg: TomlColor,
    selected_bg: TomlColor,
    selected_fg: TomlColor,
    disabled: TomlColor,
    success: TomlColor,
    warning: TomlColor,
    error: TomlColor,
}

/// TOML theme structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    colors: TomlColors,
}

/// Parse a theme from TOML content with a static name.
pub fn load_theme_from_str(content: &str, name: &'static str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;

    Ok(Theme {
        name,
        bg: toml_theme.colors.bg.to_color(),
        fg: toml_theme.colors.fg.to_color(),
        accented_bg: toml_theme.colors.accented_bg.to_color(),
        accented_fg: toml_theme.colors.accented_fg.to_color(),
        selected_bg: toml_theme.colors.selected_bg.to_color(),
        selected_fg: toml_theme.colors.selected_fg.to_color(),
        disabled: toml_theme.colors.disabled.to_color(),
        success: toml_theme.colors.success.to_color(),
        warning: toml_theme.colors.warning.to_color(),
        error: toml_theme.colors.error.to_color(),
    })
}
