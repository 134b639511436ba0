//! Feature launcher: a dropdown over the workspace listing the catalog.

use ratatui::{
    layout::Rect,
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use callgrid_app::AppState;
use callgrid_core::TabId;
use callgrid_layout::LayoutState;
use callgrid_menu as menu;
use callgrid_ui::ChromeLayout;

pub fn render(frame: &mut Frame, chrome: &ChromeLayout, state: &AppState, layout: &LayoutState) {
    let theme = state.theme;
    let items = menu::main_menu();
    if items.is_empty() {
        return;
    }

    // Calculate dropdown dimensions
    let max_label_len = items.iter().map(|item| item.label.len()).max().unwrap_or(0);
    let width = (max_label_len + 8).min(40) as u16;
    let height = (items.len() + 2) as u16;

    // Anchor under the menu row, clamped to the screen
    let buf_area = frame.area();
    let max_x = buf_area.width.saturating_sub(width);
    let max_y = buf_area.height.saturating_sub(height);
    let x = (chrome.menu.x + 1).min(max_x);
    let y = (chrome.menu.y + 1).min(max_y);
    let area = Rect {
        x,
        y,
        width,
        height,
    };

    let buf = frame.buffer_mut();
    Clear.render(area, buf);

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == state.launcher.selected {
                Style::default()
                    .bg(theme.selected_bg)
                    .fg(theme.selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };

            // Mark features that already have a workspace tab.
            let open_mark = if layout.contains_tab(&TabId::new(item.id)) {
                "●"
            } else {
                " "
            };

            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("{}. ", i + 1),
                    Style::default().fg(theme.accented_fg),
                ),
                Span::styled(item.label, style),
                Span::raw(" "),
                Span::styled(open_mark, Style::default().fg(theme.success)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accented_fg))
            .style(Style::default().bg(theme.accented_bg)),
    );

    list.render(area, buf);
}
