//! Live monitoring views: unified board, call status, retry queue.

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

/// Deterministic pulse applied to live figures so the boards move
/// between ticks without a random source.
const WAVE: &[u64] = &[0, 2, 5, 7, 8, 7, 5, 2];

fn pulse(tick: u64, lane: u64) -> u64 {
    WAVE[((tick / 4 + lane) % WAVE.len() as u64) as usize]
}

// ===== Unified monitor =====

const TENANTS: &[(&str, u64, u64)] = &[
    // (tenant, agents on call base, waiting base)
    ("SK Telecom", 14, 6),
    ("LG U+", 9, 3),
    ("KT", 11, 4),
];

pub struct MonitorBoardView;

impl MonitorBoardView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MonitorBoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentView for MonitorBoardView {
    fn title(&self) -> String {
        "Unified Monitor".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "  {:<12} {:>8} {:>9}   {:<20} {}",
                    "Tenant", "On call", "Waiting", "Load", ""
                ),
                Style::default()
                    .fg(theme.disabled)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (lane, (tenant, agents, waiting)) in TENANTS.iter().enumerate() {
            let on_call = agents + pulse(ctx.tick, lane as u64);
            let queued = waiting + pulse(ctx.tick, lane as u64 + 3) / 2;
            let load = ((on_call * 100) / (agents + 8)).min(100) as u8;
            let load_style = if load > 85 {
                Style::default().fg(theme.warning)
            } else {
                Style::default().fg(theme.success)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<12} {:>8} {:>9}   ", tenant, on_call, queued),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(meter(load, 20), load_style),
                Span::styled(format!(" {:>3}%", load), Style::default().fg(theme.fg)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Figures refresh with the application tick.",
            Style::default().fg(theme.disabled),
        )));

        Paragraph::new(lines).render(area, buf);
    }
}

// ===== Outbound call status =====

const CALL_ROWS: &[(&str, &str, &str)] = &[
    ("L-01", "Mobile Plan Support", "010-****-4821"),
    ("L-02", "Mobile Plan Support", "010-****-1097"),
    ("L-03", "Technical Support", "010-****-3350"),
    ("L-04", "Churn Prevention", "010-****-7718"),
    ("L-05", "New Service Outreach", "010-****-0042"),
    ("L-06", "Business Accounts", "010-****-9264"),
];

const CALL_STATES: &[&str] = &["dialing", "ringing", "connected", "wrap-up"];

pub struct CallStatusView {
    scroll: usize,
}

impl CallStatusView {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// State of one line at a given tick; lines walk the state cycle at
    /// different phases.
    fn state_at(tick: u64, lane: u64) -> &'static str {
        CALL_STATES[((tick / 8 + lane) % CALL_STATES.len() as u64) as usize]
    }
}

impl Default for CallStatusView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentView for CallStatusView {
    fn title(&self) -> String {
        "Call Status".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;

        let connected = CALL_ROWS
            .iter()
            .enumerate()
            .filter(|(lane, _)| Self::state_at(ctx.tick, *lane as u64) == "connected")
            .count();

        let mut lines = vec![
            Line::from(vec![
                Span::styled("  Lines ", Style::default().fg(theme.disabled)),
                Span::styled(
                    format!("{}", CALL_ROWS.len()),
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled("   Connected ", Style::default().fg(theme.disabled)),
                Span::styled(
                    format!("{}", connected),
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "  {:<6} {:<24} {:<15} {}",
                    "Line", "Campaign", "Number", "State"
                ),
                Style::default()
                    .fg(theme.disabled)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (lane, (line_id, campaign, number)) in
            CALL_ROWS.iter().enumerate().skip(self.scroll)
        {
            let state = Self::state_at(ctx.tick, lane as u64);
            let state_style = match state {
                "connected" => Style::default().fg(theme.success),
                "wrap-up" => Style::default().fg(theme.accented_fg),
                _ => Style::default().fg(theme.fg),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<6} {:<24} {:<15} ", line_id, campaign, number),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(state, state_style),
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
                if self.scroll + 1 < CALL_ROWS.len() {
                    self.scroll += 1;
                }
                true
            }
            _ => false,
        }
    }
}

// ===== Retry monitor =====

const RETRY_ROWS: &[(&str, &str, u8, u8, u64)] = &[
    // (campaign, last result, attempt, max attempts, base countdown secs)
    ("Billing Inquiries", "no answer", 2, 3, 240),
    ("Customer Complaints", "busy", 1, 3, 120),
    ("Churn Prevention", "no answer", 3, 3, 600),
    ("Insurance Campaigns", "disconnected", 2, 5, 300),
    ("Mobile Plan Support", "busy", 1, 3, 90),
];

pub struct RetryMonitorView;

impl RetryMonitorView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RetryMonitorView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentView for RetryMonitorView {
    fn title(&self) -> String {
        "Retry Monitor".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = vec![
            Line::from(Span::styled(
                format!(
                    "  {:<24} {:<14} {:>8} {:>12}",
                    "Campaign", "Last result", "Attempt", "Next retry"
                ),
                Style::default()
                    .fg(theme.disabled)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        // Tick is 250ms, so four ticks make one wall-clock second.
        let elapsed = ctx.tick / 4;
        for (campaign, result, attempt, max, base) in RETRY_ROWS {
            let remaining = base - (elapsed % base);
            let exhausted = attempt >= max;
            let (next, style) = if exhausted {
                (
                    "exhausted".to_string(),
                    Style::default().fg(theme.error),
                )
            } else {
                (
                    format!("{}m {:02}s", remaining / 60, remaining % 60),
                    Style::default().fg(theme.fg),
                )
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "  {:<24} {:<14} {:>5}/{}  ",
                        campaign, result, attempt, max
                    ),
                    Style::default().fg(theme.fg),
                ),
                Span::styled(format!("{:>12}", next), style),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}
