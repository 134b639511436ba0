//! Fallback view for tabs with no registered content.

use callgrid_core::{ContentView, ViewContext};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct PlaceholderView {
    label: String,
    tab_id: String,
}

impl PlaceholderView {
    pub fn new(label: impl Into<String>, tab_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tab_id: tab_id.into(),
        }
    }
}

impl ContentView for PlaceholderView {
    fn title(&self) -> String {
        self.label.clone()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let lines = vec![
            Line::from(Span::styled(
                self.label.clone(),
                Style::default().fg(ctx.theme.fg),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("No content registered for '{}'.", self.tab_id),
                Style::default().fg(ctx.theme.disabled),
            )),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
