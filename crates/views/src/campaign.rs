//! Campaign administration views: groups, manager, dispatch history.

use callgrid_core::{ContentView, ViewContext};
use callgrid_menu::{section_tree, NodeKind, NodeStatus, SidebarNode, SidebarSection};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::{status_label, status_style};

// ===== Campaign groups =====

struct GroupRow {
    name: &'static str,
    tenant_group: &'static str,
    campaigns: usize,
    status: NodeStatus,
}

const GROUP_ROWS: &[GroupRow] = &[
    GroupRow {
        name: "Mobile Campaigns",
        tenant_group: "Telecom Groups",
        campaigns: 4,
        status: NodeStatus::Active,
    },
    GroupRow {
        name: "Internet Campaigns",
        tenant_group: "Telecom Groups",
        campaigns: 3,
        status: NodeStatus::Active,
    },
    GroupRow {
        name: "Insurance Campaigns",
        tenant_group: "Finance Groups",
        campaigns: 2,
        status: NodeStatus::Warning,
    },
    GroupRow {
        name: "Loan Campaigns",
        tenant_group: "Finance Groups",
        campaigns: 3,
        status: NodeStatus::Active,
    },
];

pub struct CampaignGroupView {
    selected: usize,
}

impl CampaignGroupView {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Default for CampaignGroupView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentView for CampaignGroupView {
    fn title(&self) -> String {
        "Campaign Groups".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {:<22} {:<16} {:>9}  {}", "Group", "Center", "Campaigns", "Status"),
                Style::default()
                    .fg(theme.disabled)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (idx, row) in GROUP_ROWS.iter().enumerate() {
            let base = if idx == self.selected && ctx.is_focused {
                Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
            } else {
                Style::default().fg(theme.fg)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "  {:<22} {:<16} {:>9}  ",
                        row.name, row.tenant_group, row.campaigns
                    ),
                    base,
                ),
                Span::styled(status_label(row.status), status_style(row.status, theme)),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if self.selected + 1 < GROUP_ROWS.len() {
                    self.selected += 1;
                }
                true
            }
            _ => false,
        }
    }
}

// ===== Campaign manager =====

/// A campaign row with its owning tenant, flattened from the sidebar tree.
struct CampaignRow {
    tenant: &'static str,
    node: &'static SidebarNode,
}

fn campaign_rows() -> Vec<CampaignRow> {
    let mut rows = Vec::new();
    for org in section_tree(SidebarSection::Campaigns) {
        for tenant in &org.children {
            for node in &tenant.children {
                if node.kind == NodeKind::Campaign {
                    rows.push(CampaignRow {
                        tenant: tenant.label,
                        node,
                    });
                }
            }
        }
    }
    rows
}

pub struct CampaignManageView {
    rows: Vec<CampaignRow>,
    selected: usize,
}

impl CampaignManageView {
    pub fn new() -> Self {
        Self {
            rows: campaign_rows(),
            selected: 0,
        }
    }
}

impl Default for CampaignManageView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentView for CampaignManageView {
    fn title(&self) -> String {
        "Campaign Manager".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {:<24} {:<12} {}", "Campaign", "Tenant", "Status"),
                Style::default()
                    .fg(theme.disabled)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (idx, row) in self.rows.iter().enumerate() {
            let status = row.node.status.unwrap_or(NodeStatus::Inactive);
            let base = if idx == self.selected && ctx.is_focused {
                Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
            } else {
                Style::default().fg(theme.fg)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<24} {:<12} ", row.node.label, row.tenant),
                    base,
                ),
                Span::styled(status_label(status), status_style(status, theme)),
            ]));
        }

        if let Some(row) = self.rows.get(self.selected) {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "  route {}   id {}",
                    row.node.path.unwrap_or("-"),
                    row.node.id
                ),
                Style::default().fg(theme.disabled),
            )));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
                true
            }
            KeyCode::Home => {
                self.selected = 0;
                true
            }
            KeyCode::End => {
                self.selected = self.rows.len().saturating_sub(1);
                true
            }
            _ => false,
        }
    }
}

// ===== Dispatch history =====

const HISTORY_ROWS: &[(&str, &str, u32, u32)] = &[
    ("03-08 11:00", "Mobile Plan Support", 320, 224),
    ("03-08 10:00", "Customer Complaints", 180, 97),
    ("03-08 09:00", "Churn Prevention", 260, 151),
    ("03-08 08:00", "New Service Outreach", 410, 287),
    ("03-07 17:00", "Technical Support", 150, 112),
    ("03-07 16:00", "Billing Inquiries", 90, 41),
    ("03-07 15:00", "Business Accounts", 205, 139),
    ("03-07 14:00", "Residential Services", 330, 218),
];

pub struct CampaignHistoryView {
    scroll: usize,
}

impl CampaignHistoryView {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }
}

impl Default for CampaignHistoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentView for CampaignHistoryView {
    fn title(&self) -> String {
        "Campaign History".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "  {:<12} {:<24} {:>8} {:>9} {:>6}",
                    "Window", "Campaign", "Dialed", "Connected", "Rate"
                ),
                Style::default()
                    .fg(theme.disabled)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (window, campaign, dialed, connected) in HISTORY_ROWS.iter().skip(self.scroll) {
            let rate = if *dialed > 0 {
                connected * 100 / dialed
            } else {
                0
            };
            let rate_style = if rate < 50 {
                Style::default().fg(theme.warning)
            } else {
                Style::default().fg(theme.success)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12} {:<24} {:>8} {:>9} ", window, campaign, dialed, connected),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(format!("{:>5}%", rate), rate_style),
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
                if self.scroll + 1 < HISTORY_ROWS.len() {
                    self.scroll += 1;
                }
                true
            }
            _ => false,
        }
    }
}
