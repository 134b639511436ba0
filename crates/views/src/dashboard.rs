//! Combined operations dashboard.

use callgrid_core::{ContentView, ViewContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::meter;

/// Recent activity feed entries, newest first.
const ACTIVITY: &[(&str, &str)] = &[
    ("11:10", "SK Telecom Mobile Plan Support campaign was modified"),
    ("10:05", "LG U+ Customer Complaints campaign was activated"),
    ("09:30", "KT Churn Prevention performance report was updated"),
    ("09:12", "Campaign group 'Finance Groups' retry policy changed"),
    ("08:47", "Dialer pool restarted after maintenance window"),
    ("08:02", "New Service Outreach dispatch batch queued (1,200 numbers)"),
];

pub struct DashboardView {
    scroll: usize,
}

impl DashboardView {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentView for DashboardView {
    fn title(&self) -> String {
        "Dashboard".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;
        let heading = Style::default()
            .fg(theme.accented_fg)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(theme.disabled);
        let value = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);

        // Calls drift upward over the session so the board reads live.
        let calls_today = 1284 + ctx.tick / 16;
        let connect_rate = 68;

        let mut lines = vec![
            Line::from(Span::styled("Today", heading)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Active campaigns  ", dim),
                Span::styled("7", value),
                Span::styled("      Agents online  ", dim),
                Span::styled("42", value),
            ]),
            Line::from(vec![
                Span::styled("  Calls placed      ", dim),
                Span::styled(format!("{}", calls_today), value),
                Span::styled("   Connect rate  ", dim),
                Span::styled(format!("{}%", connect_rate), value),
            ]),
            Line::from(vec![
                Span::styled("                    ", dim),
                Span::styled(
                    meter(connect_rate, 24),
                    Style::default().fg(theme.success),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("Recent activity", heading)),
            Line::from(""),
        ];

        for (time, message) in ACTIVITY.iter().skip(self.scroll) {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}  ", time), dim),
                Span::styled(*message, Style::default().fg(theme.fg)),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if self.scroll + 1 < ACTIVITY.len() {
                    self.scroll += 1;
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut view = DashboardView::new();
        assert!(!view.handle_key(key(KeyCode::Char('x'))));

        for _ in 0..100 {
            view.handle_key(key(KeyCode::Down));
        }
        assert_eq!(view.scroll, ACTIVITY.len() - 1);

        for _ in 0..100 {
            view.handle_key(key(KeyCode::Up));
        }
        assert_eq!(view.scroll, 0);
    }
}
