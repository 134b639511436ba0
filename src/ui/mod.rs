//! Frame assembly.
//!
//! `render` draws one complete frame from application state. All region
//! rectangles come from `FrameGeometry`, the same structure the mouse
//! handler hit-tests, so painted chrome and clickable chrome can never
//! drift apart.

mod footer;
mod header;
mod launcher;
mod login;
mod overlay;
mod sidebar;
mod workspace;

use ratatui::{style::Style, widgets::Block, Frame};

use callgrid_app::{AppState, Screen};
use callgrid_dnd::DragController;
use callgrid_layout::LayoutState;
use callgrid_menu as menu;
use callgrid_ui::FrameGeometry;
use callgrid_views::ViewRegistry;

/// Render the whole frame: login screen, or the dashboard chrome with
/// the workspace panels and any overlays on top.
pub fn render(
    frame: &mut Frame,
    state: &mut AppState,
    layout: &LayoutState,
    views: &mut ViewRegistry,
    drag: &DragController,
) {
    let area = frame.area();

    // Set application background
    let background = Block::default().style(Style::default().bg(state.theme.bg));
    frame.render_widget(background, area);

    if state.screen == Screen::Login {
        login::render(frame, area, state);
        return;
    }

    let labels: Vec<&str> = menu::main_menu().iter().map(|item| item.label).collect();
    let geometry = FrameGeometry::compute(
        area,
        layout,
        &state.panel_sizes,
        state.sidebar.visible,
        &labels,
    );

    header::render_brand(frame, geometry.chrome.brand, state);
    header::render_menu(frame, geometry.chrome.menu, &geometry.menu_items, state, layout);

    if let Some(sb) = &geometry.sidebar {
        sidebar::render(frame, sb, state);
    }

    workspace::render(frame, &geometry.workspace, state, layout, views);

    footer::render(frame, geometry.chrome.footer, state, drag);

    // Overlays paint last so they sit above the chrome.
    overlay::render(frame, &geometry, state, layout, drag);
    if state.launcher.open {
        launcher::render(frame, &geometry.chrome, state, layout);
    }
}

/// Shorten a label to at most `max` display cells, ellipsized.
pub(crate) fn truncate(label: &str, max: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if label.width() <= max {
        return label.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
