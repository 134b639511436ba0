//! Per-campaign detail view for tabs opened from the sidebar.

use callgrid_core::{ContentView, ViewContext};
use callgrid_menu::{NodeStatus, SidebarNode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::{meter, status_label, status_style};

pub struct CampaignDetailView {
    node: &'static SidebarNode,
}

impl CampaignDetailView {
    pub fn new(node: &'static SidebarNode) -> Self {
        Self { node }
    }

    /// Stable per-campaign figures derived from the id, so two tabs of
    /// different campaigns show different numbers.
    fn seed(&self) -> u64 {
        self.node
            .id
            .bytes()
            .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
    }
}

impl ContentView for CampaignDetailView {
    fn title(&self) -> String {
        self.node.label.to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;
        let heading = Style::default()
            .fg(theme.accented_fg)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(theme.disabled);
        let value = Style::default().fg(theme.fg);

        let status = self.node.status.unwrap_or(NodeStatus::Inactive);
        let seed = self.seed();
        let attempted = 150 + seed % 400;
        let connected = attempted * (45 + seed % 40) / 100;
        let rate = (connected * 100 / attempted) as u8;

        let lines = vec![
            Line::from(Span::styled(self.node.label, heading)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Status        ", dim),
                Span::styled(status_label(status), status_style(status, theme)),
            ]),
            Line::from(vec![
                Span::styled("  Campaign id   ", dim),
                Span::styled(self.node.id, value),
            ]),
            Line::from(vec![
                Span::styled("  Route         ", dim),
                Span::styled(self.node.path.unwrap_or("-"), value),
            ]),
            Line::from(vec![
                Span::styled("  Dial mode     ", dim),
                Span::styled("progressive", value),
            ]),
            Line::from(vec![
                Span::styled("  Retry policy  ", dim),
                Span::styled("3 attempts, 10m interval", value),
            ]),
            Line::from(""),
            Line::from(Span::styled("Today", heading)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Attempted     ", dim),
                Span::styled(format!("{}", attempted), value),
            ]),
            Line::from(vec![
                Span::styled("  Connected     ", dim),
                Span::styled(format!("{}", connected), value),
            ]),
            Line::from(vec![
                Span::styled("  Connect rate  ", dim),
                Span::styled(meter(rate, 20), Style::default().fg(theme.success)),
                Span::styled(format!(" {}%", rate), value),
            ]),
        ];

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callgrid_menu::find_campaign;

    #[test]
    fn test_title_is_campaign_label() {
        let node = find_campaign("lg-tech-support").unwrap();
        let view = CampaignDetailView::new(node);
        assert_eq!(view.title(), "Technical Support");
    }

    #[test]
    fn test_seed_differs_per_campaign() {
        let a = CampaignDetailView::new(find_campaign("kt-business").unwrap());
        let b = CampaignDetailView::new(find_campaign("kt-retention").unwrap());
        assert_ne!(a.seed(), b.seed());
    }
}
