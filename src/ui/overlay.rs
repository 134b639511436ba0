//! Drag feedback: source dimming, drop-target highlight, pointer ghost.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use callgrid_app::AppState;
use callgrid_core::{PanelId, TabId};
use callgrid_dnd::{DragController, DragSource, DropTarget};
use callgrid_layout::LayoutState;
use callgrid_ui::FrameGeometry;

pub fn render(
    frame: &mut Frame,
    geometry: &FrameGeometry,
    state: &AppState,
    layout: &LayoutState,
    drag: &DragController,
) {
    if !drag.is_dragging() {
        return;
    }
    let Some(source) = drag.source() else {
        return;
    };
    let theme = state.theme;

    // Dim the grabbed cell so the ghost reads as "in flight".
    let dimmed = Style::default().fg(theme.disabled).bg(theme.accented_bg);
    match source {
        DragSource::Tab { tab, panel } => {
            if let Some(cell) = tab_cell(geometry, *panel, tab) {
                frame.buffer_mut().set_style(cell, dimmed);
            }
        }
        DragSource::Panel { panel } => {
            if let Some(grab) = grab_cell(geometry, *panel) {
                frame.buffer_mut().set_style(grab, dimmed);
            }
        }
    }

    // Highlight where a release would land.
    let target_style = Style::default()
        .fg(theme.selected_fg)
        .bg(theme.selected_bg)
        .add_modifier(Modifier::BOLD);
    match drag.hover() {
        Some(DropTarget::Tab { tab, panel }) => {
            if let Some(cell) = tab_cell(geometry, *panel, tab) {
                frame.buffer_mut().set_style(cell, target_style);
            }
        }
        Some(DropTarget::PanelArea { panel }) => {
            // The receiving strip lights up; repainting the whole panel
            // would hide the content being dropped onto.
            for geo in &geometry.workspace.panels {
                if geo.panel == *panel {
                    frame.buffer_mut().set_style(geo.strip, target_style);
                }
            }
        }
        None => {}
    }

    // Floating chip under the pointer.
    let Some((x, y)) = drag.pointer() else {
        return;
    };
    let label = match source {
        DragSource::Tab { tab, .. } => layout
            .find_tab(tab)
            .map(|t| t.label.clone())
            .unwrap_or_else(|| tab.to_string()),
        DragSource::Panel { panel } => panel.to_string(),
    };
    let chip = format!(" {} ", label);
    let width = (chip.width() as u16).min(frame.area().width);

    let area = frame.area();
    let chip_area = Rect::new(
        (x + 1).min(area.width.saturating_sub(width)),
        (y + 1).min(area.height.saturating_sub(1)),
        width,
        1,
    );
    frame.render_widget(Clear, chip_area);
    frame.render_widget(
        Paragraph::new(Span::styled(chip, target_style)),
        chip_area,
    );
}

fn tab_cell(geometry: &FrameGeometry, panel: PanelId, tab: &TabId) -> Option<Rect> {
    geometry
        .workspace
        .panels
        .iter()
        .find(|geo| geo.panel == panel)?
        .tabs
        .iter()
        .find(|cell| cell.tab == *tab)
        .map(|cell| cell.area)
}

fn grab_cell(geometry: &FrameGeometry, panel: PanelId) -> Option<Rect> {
    geometry
        .workspace
        .panels
        .iter()
        .find(|geo| geo.panel == panel)
        .map(|geo| geo.grab)
}
