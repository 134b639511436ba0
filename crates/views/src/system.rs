//! Host resource view backed by the system monitor.

use callgrid_core::{ContentView, ViewContext};
use callgrid_system_monitor::{uptime_seconds, RamUnit, SystemMonitor};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    prelude::Widget,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::util::meter;

/// Sampling cadence in application ticks (ticks are 250ms).
const REFRESH_EVERY: u64 = 4;

pub struct SystemMonitorView {
    monitor: SystemMonitor,
    ticks: u64,
}

impl SystemMonitorView {
    pub fn new() -> Self {
        Self {
            monitor: SystemMonitor::new(),
            ticks: 0,
        }
    }
}

impl Default for SystemMonitorView {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentView for SystemMonitorView {
    fn title(&self) -> String {
        "System Monitor".to_string()
    }

    fn render(&mut self, area: Rect, buf: &mut Buffer, ctx: &ViewContext) {
        let theme = ctx.theme;
        let heading = Style::default()
            .fg(theme.accented_fg)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(theme.disabled);

        let cpu = self.monitor.cpu_usage();
        let ram = self.monitor.ram_usage_percent();
        let (ram_text, ram_unit) = self.monitor.format_ram();
        let ram_unit = match ram_unit {
            RamUnit::Gigabytes => "GB",
            RamUnit::Megabytes => "MB",
        };
        let uptime = uptime_seconds();

        let usage_style = |pct: u8| {
            if pct > 85 {
                Style::default().fg(theme.error)
            } else if pct > 60 {
                Style::default().fg(theme.warning)
            } else {
                Style::default().fg(theme.success)
            }
        };

        let mut lines = vec![
            Line::from(Span::styled("Host", heading)),
            Line::from(""),
            Line::from(vec![
                Span::styled("  CPU  ", dim),
                Span::styled(meter(cpu, 24), usage_style(cpu)),
                Span::styled(format!(" {:>3}%", cpu), Style::default().fg(theme.fg)),
            ]),
            Line::from(vec![
                Span::styled("  RAM  ", dim),
                Span::styled(meter(ram, 24), usage_style(ram)),
                Span::styled(
                    format!(" {:>3}%  ({} {})", ram, ram_text, ram_unit),
                    Style::default().fg(theme.fg),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Uptime  ", dim),
                Span::styled(
                    format!(
                        "{}d {:02}h {:02}m",
                        uptime / 86_400,
                        (uptime % 86_400) / 3_600,
                        (uptime % 3_600) / 60
                    ),
                    Style::default().fg(theme.fg),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("Cores", heading)),
            Line::from(""),
        ];

        for (idx, usage) in self.monitor.per_core_usage().into_iter().enumerate() {
            let pct = usage.round() as u8;
            lines.push(Line::from(vec![
                Span::styled(format!("  core {:<3}", idx), dim),
                Span::styled(meter(pct, 20), usage_style(pct)),
                Span::styled(format!(" {:>3}%", pct), Style::default().fg(theme.fg)),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % REFRESH_EVERY == 0 {
            self.monitor.refresh();
        }
    }
}
