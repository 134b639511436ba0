//! Workspace panels: tab strips, view content, separators.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use callgrid_app::AppState;
use callgrid_core::{SplitDirection, ViewContext};
use callgrid_layout::LayoutState;
use callgrid_ui::{PanelGeometry, WorkspaceGeometry};
use callgrid_views::ViewRegistry;

use super::truncate;

pub fn render(
    frame: &mut Frame,
    workspace: &WorkspaceGeometry,
    state: &AppState,
    layout: &LayoutState,
    views: &mut ViewRegistry,
) {
    let focused = state.focused_panel(layout);

    for panel_geo in &workspace.panels {
        render_panel(frame, panel_geo, state, layout, views, panel_geo.panel == focused);
    }

    // Separators between panels
    let sep_char = match workspace.direction {
        SplitDirection::Horizontal => "│",
        SplitDirection::Vertical => "─",
    };
    let sep_style = Style::default().fg(state.theme.disabled);
    for sep in &workspace.separators {
        let buf = frame.buffer_mut();
        for y in sep.top()..sep.bottom() {
            for x in sep.left()..sep.right() {
                buf[(x, y)].set_symbol(sep_char).set_style(sep_style);
            }
        }
    }
}

fn render_panel(
    frame: &mut Frame,
    geo: &PanelGeometry,
    state: &AppState,
    layout: &LayoutState,
    views: &mut ViewRegistry,
    is_focused: bool,
) {
    let theme = state.theme;
    let Some(panel) = layout.panel(geo.panel) else {
        return;
    };

    // Strip background
    let strip_fill = Paragraph::new("").style(Style::default().bg(theme.accented_bg));
    frame.render_widget(strip_fill, geo.strip);

    // Grab handle; doubles as the focus indicator
    let grab_style = if is_focused {
        Style::default()
            .fg(theme.accented_fg)
            .bg(theme.accented_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.disabled).bg(theme.accented_bg)
    };
    frame.render_widget(Paragraph::new("⠿").style(grab_style), geo.grab);

    // Tab cells
    for tab_rect in &geo.tabs {
        let Some(tab) = layout.find_tab(&tab_rect.tab) else {
            continue;
        };
        let is_active = panel.active_tab() == Some(&tab_rect.tab);

        let cell_style = if is_active && is_focused {
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default()
                .fg(theme.fg)
                .bg(theme.accented_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.disabled).bg(theme.accented_bg)
        };

        let close_width = tab_rect.close.map(|c| c.width).unwrap_or(0);
        let label_area = Rect::new(
            tab_rect.area.x,
            tab_rect.area.y,
            tab_rect.area.width.saturating_sub(close_width),
            tab_rect.area.height,
        );
        let label = truncate(&tab.label, label_area.width.saturating_sub(1) as usize);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ", cell_style),
                Span::styled(label, cell_style),
            ]))
            .style(cell_style),
            label_area,
        );

        if let Some(close) = tab_rect.close {
            frame.render_widget(
                Paragraph::new(Span::styled(" ×", cell_style.fg(theme.disabled))).style(cell_style),
                close,
            );
        }
    }

    // Panel close button, shown only when the workspace is split
    if let Some(close) = geo.close {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[×]",
                Style::default().fg(theme.disabled).bg(theme.accented_bg),
            )),
            close,
        );
    }

    // Content: the active tab's view, or an empty-panel hint
    if geo.content.height == 0 {
        return;
    }
    let active = panel.active_tab().cloned();
    match active.and_then(|id| views.get_mut(&id)) {
        Some(view) => {
            let ctx = ViewContext {
                theme,
                is_focused,
                tick: state.tick,
            };
            view.render(geo.content, frame.buffer_mut(), &ctx);
        }
        None => render_empty_panel(frame, geo.content, state),
    }
}

fn render_empty_panel(frame: &mut Frame, content: Rect, state: &AppState) {
    let dim = Style::default().fg(state.theme.disabled);
    let lines = vec![
        Line::from(Span::styled("No open views", dim)),
        Line::from(""),
        Line::from(Span::styled("Ctrl+O opens the launcher", dim)),
        Line::from(Span::styled("Drop a tab here to move it", dim)),
    ];
    let height = lines.len() as u16;
    let area = Rect::new(
        content.x,
        content.y + content.height.saturating_sub(height) / 2,
        content.width,
        height.min(content.height),
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
