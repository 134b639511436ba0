//! Header rows: brand line and the feature menu.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use callgrid_app::AppState;
use callgrid_core::TabId;
use callgrid_layout::LayoutState;
use callgrid_menu as menu;
use callgrid_system_monitor::RamUnit;
use callgrid_theme::Theme;

/// Pick the indicator color for a load level.
/// < 50% - green (success)
/// 50-75% - yellow (warning)
/// > 75% - red (error)
pub fn resource_color(usage: u8, theme: &Theme) -> Color {
    if usage > 75 {
        theme.error
    } else if usage >= 50 {
        theme.warning
    } else {
        theme.success
    }
}

/// Render the brand row: product mark on the left, operator identity,
/// resource indicators, and clock on the right.
pub fn render_brand(frame: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme;

    let mut spans = vec![
        Span::styled(
            " CALLGRID ",
            Style::default()
                .fg(theme.accented_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("NEXUS outbound", Style::default().fg(theme.disabled)),
    ];

    // Operator identity
    let user_text = state
        .user
        .as_deref()
        .map(|user| format!(" {} ", user))
        .unwrap_or_default();

    // Get system resource info
    let cpu_usage = state.system_monitor.cpu_usage();
    let ram_percent = state.system_monitor.ram_usage_percent();
    let (ram_value, ram_unit) = state.system_monitor.format_ram();
    let ram_unit_str = match ram_unit {
        RamUnit::Gigabytes => "GB",
        RamUnit::Megabytes => "MB",
    };

    // CPU indicator with fixed width so the row does not jitter
    let cpu_text = format!("{:<9}", format!("CPU {}%", cpu_usage));
    let cpu_color = resource_color(cpu_usage, theme);

    // RAM indicator
    let ram_text = format!("RAM {}{} ", ram_value, ram_unit_str);
    let ram_color = resource_color(ram_percent, theme);

    // Get current time
    let clock_text = format!(" {} ", Local::now().format("%H:%M"));

    // Calculate how much space is left before the right-aligned block
    let used_width: usize = spans.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(
        used_width + user_text.len() + cpu_text.len() + ram_text.len() + clock_text.len(),
    );

    if remaining > 0 {
        spans.push(Span::raw(" ".repeat(remaining)));
    }

    spans.push(Span::styled(user_text, Style::default().fg(theme.disabled)));
    spans.push(Span::styled(cpu_text, Style::default().fg(cpu_color)));
    spans.push(Span::styled(ram_text, Style::default().fg(ram_color)));
    spans.push(Span::styled(
        clock_text,
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    ));

    let brand = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.accented_bg));
    frame.render_widget(brand, area);
}

/// Render the feature menu row.
///
/// Items are painted inside the exact rects the mouse handler hit-tests;
/// features with an open workspace tab are shown selected.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    item_rects: &[Rect],
    state: &AppState,
    layout: &LayoutState,
) {
    let theme = state.theme;

    let fill = Paragraph::new("").style(Style::default().bg(theme.accented_bg));
    frame.render_widget(fill, area);

    for (item, rect) in menu::main_menu().iter().zip(item_rects) {
        let is_open = layout.contains_tab(&TabId::new(item.id));
        let (base_style, accent_style) = if is_open {
            let base = Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD);
            (base, base)
        } else {
            let base = Style::default().fg(theme.fg).bg(theme.accented_bg);
            let accent = Style::default()
                .fg(theme.accented_fg)
                .bg(theme.accented_bg)
                .add_modifier(Modifier::BOLD);
            (base, accent)
        };

        // Highlight the first letter, matching the launcher ordering
        let mut spans = vec![Span::styled(" ", base_style)];
        if let Some(first_char) = item.label.chars().next() {
            let first = first_char.to_string();
            let rest = &item.label[first.len()..];
            spans.push(Span::styled(first, accent_style));
            if !rest.is_empty() {
                spans.push(Span::styled(rest.to_string(), base_style));
            }
        }
        spans.push(Span::styled(" ", base_style));

        frame.render_widget(Paragraph::new(Line::from(spans)), *rect);
    }
}
