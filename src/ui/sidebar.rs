//! Campaign navigation sidebar: section title, tree viewport, switcher.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use callgrid_app::{AppState, FocusTarget};
use callgrid_menu::{NodeStatus, SidebarSection};
use callgrid_ui::SidebarGeometry;

use super::truncate;

/// Render the sidebar into its precomputed regions.
///
/// The tree viewport is scrolled here so the selection is visible in the
/// frame being painted; the mouse handler adds the same scroll offset
/// when resolving row clicks.
pub fn render(frame: &mut Frame, sb: &SidebarGeometry, state: &mut AppState) {
    let theme = state.theme;
    let focused = state.focus == FocusTarget::Sidebar;

    // Title row
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            state.sidebar.section.title(),
            Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .style(Style::default().bg(theme.accented_bg));
    frame.render_widget(title, sb.title);

    // Tree viewport
    state.sidebar.scroll_to_selection(sb.tree.height as usize);
    let rows = state.sidebar.rows();
    let scroll = state.sidebar.scroll;

    for (offset, row) in rows
        .iter()
        .skip(scroll)
        .take(sb.tree.height as usize)
        .enumerate()
    {
        let index = scroll + offset;
        let row_area = Rect::new(sb.tree.x, sb.tree.y + offset as u16, sb.tree.width, 1);
        let selected = index == state.sidebar.selected;

        let row_style = if selected && focused {
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(theme.fg).bg(theme.accented_bg)
        } else {
            Style::default().fg(theme.fg)
        };

        let marker = if row.node.has_children() {
            let arrow = if state.sidebar.expanded.contains(row.node.id) {
                "▾ "
            } else {
                "▸ "
            };
            Span::styled(arrow, row_style)
        } else {
            let dot_color = match row.node.status {
                Some(NodeStatus::Active) => theme.success,
                Some(NodeStatus::Warning) => theme.warning,
                Some(NodeStatus::Inactive) | None => theme.disabled,
            };
            Span::styled("● ", row_style.fg(dot_color))
        };

        let indent = "  ".repeat(row.depth);
        let available = (sb.tree.width as usize).saturating_sub(1 + indent.width() + 2);
        let label = truncate(row.node.label, available);

        let line = Line::from(vec![
            Span::styled(" ", row_style),
            Span::styled(indent, row_style),
            marker,
            Span::styled(label, row_style),
        ]);
        frame.render_widget(Paragraph::new(line).style(row_style), row_area);
    }

    // Section switcher rows at the bottom
    for (&section, rect) in SidebarSection::all().iter().zip(sb.sections.iter()) {
        let active = section == state.sidebar.section;
        let (marker, style) = if active {
            (
                "▪ ",
                Style::default()
                    .fg(theme.selected_fg)
                    .bg(theme.selected_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "  ",
                Style::default().fg(theme.disabled).bg(theme.accented_bg),
            )
        };

        let line = Line::from(vec![
            Span::styled(" ", style),
            Span::styled(marker, style),
            Span::styled(section.short_label(), style),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), *rect);
    }
}
