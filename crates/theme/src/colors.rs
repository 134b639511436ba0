//! Theme color definitions.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
///
/// A minimal 10-color palette:
/// - 2 base colors (bg, fg)
/// - 2 accented colors (accented_bg, accented_fg)
/// - 2 selection colors (selected_bg, selected_fg)
/// - 1 disabled color
/// - 3 status colors (success, warning, error)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    // === Base (2 colors) ===
    /// Workspace and content backgrounds
    pub bg: Color,
    /// Main text
    pub fg: Color,

    // === Accented (2 colors) ===
    /// Header, footer, and tab strip background
    pub accented_bg: Color,
    /// Brand mark, focused panel border, active input cursor
    pub accented_fg: Color,

    // === Selection (2 colors) ===
    /// Active tab, hovered drop target, sidebar cursor background
    pub selected_bg: Color,
    /// Active tab and sidebar cursor text
    pub selected_fg: Color,

    // === Disabled (1 color) ===
    /// Unfocused borders, inactive tabs, secondary text, separators
    pub disabled: Color,

    // === Status (3 colors) ===
    /// Running campaigns, healthy resource levels
    pub success: Color,
    /// Paused campaigns, elevated resource levels
    pub warning: Color,
    /// Failed campaigns, critical resource levels, error messages
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        *Self::get_by_name("dark")
    }
}
