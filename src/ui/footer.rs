//! Status line at the bottom of the frame.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use callgrid_app::AppState;
use callgrid_dnd::DragController;
use callgrid_logger::{self as logger, LogLevel};

/// Render the footer.
///
/// Error messages take the whole line; otherwise the left side shows the
/// most recent status or log line and the right side the workspace shape.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, drag: &DragController) {
    if area.height == 0 {
        return;
    }

    let theme = state.theme;
    let buf = frame.buffer_mut();

    // Fill entire line with background color from theme
    for x in area.left()..area.right() {
        buf[(x, area.top())]
            .set_char(' ')
            .set_style(Style::default().bg(theme.accented_bg));
    }

    let base_style = Style::default().fg(theme.disabled).bg(theme.accented_bg);
    let highlight_style = Style::default()
        .fg(theme.accented_fg)
        .bg(theme.accented_bg)
        .add_modifier(Modifier::BOLD);

    // An error message owns the line until the next status change.
    if let Some((message, true)) = &state.status_message {
        let style = Style::default()
            .fg(theme.error)
            .bg(theme.accented_bg)
            .add_modifier(Modifier::BOLD);
        write_spans(buf, area, &[Span::styled(format!(" {} ", message), style)]);
        return;
    }

    let mut spans: Vec<Span> = Vec::new();
    if drag.is_dragging() {
        spans.push(Span::styled(" Drop on a tab or a panel", highlight_style));
        spans.push(Span::styled(" · Esc cancels", base_style));
    } else if let Some((message, _)) = &state.status_message {
        spans.push(Span::styled(format!(" {}", message), base_style.fg(theme.fg)));
    } else if let Some(entry) = logger::last_entry() {
        let level_color = match entry.level {
            LogLevel::Error => theme.error,
            LogLevel::Warn => theme.warning,
            _ => theme.disabled,
        };
        spans.push(Span::styled(
            format!(" {} ", entry.level.to_str()),
            base_style.fg(level_color),
        ));
        spans.push(Span::styled(entry.message, base_style));
    } else {
        spans.push(Span::styled(" Ctrl+O", highlight_style));
        spans.push(Span::styled(" Launcher ", base_style));
        spans.push(Span::styled(" Ctrl+B", highlight_style));
        spans.push(Span::styled(" Sidebar ", base_style));
        spans.push(Span::styled(" Ctrl+Q", highlight_style));
        spans.push(Span::styled(" Quit", base_style));
    }

    // Workspace shape on the right
    let shape = format!(
        " {}x{} ",
        state.terminal_width, state.terminal_height
    );
    let used_width: usize = spans.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used_width + shape.width());
    if remaining > 0 {
        spans.push(Span::styled(" ".repeat(remaining), base_style));
    }
    spans.push(Span::styled(shape, base_style));

    write_spans(buf, area, &spans);
}

/// Write spans into the footer row, clipping at the right edge.
fn write_spans(buf: &mut ratatui::buffer::Buffer, area: Rect, spans: &[Span]) {
    let y = area.top();
    let mut x = area.left();
    for span in spans {
        for ch in span.content.chars() {
            if x >= area.right() {
                return;
            }
            buf[(x, y)].set_char(ch).set_style(span.style);
            x += 1;
        }
    }
}
