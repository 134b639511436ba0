//! Content-view trait rendered inside tabs.
//!
//! Views are decoupled from application state: everything a view needs at
//! render time arrives through `ViewContext`.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use callgrid_theme::Theme;

/// Render context passed to views.
pub struct ViewContext<'a> {
    /// Current theme colors
    pub theme: &'a Theme,
    /// Whether the owning panel is focused
    pub is_focused: bool,
    /// Monotonic tick counter, for views that animate or sample over time
    pub tick: u64,
}

/// Trait for the renderable content behind a tab.
///
/// Implementations live in the view registry keyed by tab id; tab records
/// themselves never hold a view.
pub trait ContentView {
    /// Title shown when the view wants to override the tab label.
    fn title(&self) -> String;

    /// Render the view into its content area.
    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext);

    /// Handle a key event routed to the active view.
    ///
    /// Returns true when the key was consumed (e.g. table scrolling), so the
    /// application skips its own bindings for it.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let _ = key;
        false
    }

    /// Periodic tick for views that sample or animate.
    fn tick(&mut self) {}
}
