//! Small rendering helpers shared by the views.

use callgrid_core::Theme;
use callgrid_menu::NodeStatus;
use ratatui::style::Style;

/// Render a fixed-width usage meter, e.g. `███░░░░░` for 37%.
pub(crate) fn meter(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    let mut out = String::with_capacity(width);
    for i in 0..width {
        out.push(if i < filled { '█' } else { '░' });
    }
    out
}

pub(crate) fn status_label(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Active => "active",
        NodeStatus::Inactive => "inactive",
        NodeStatus::Warning => "warning",
    }
}

pub(crate) fn status_style(status: NodeStatus, theme: &Theme) -> Style {
    match status {
        NodeStatus::Active => Style::default().fg(theme.success),
        NodeStatus::Inactive => Style::default().fg(theme.disabled),
        NodeStatus::Warning => Style::default().fg(theme.warning),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_bounds() {
        assert_eq!(meter(0, 8), "░░░░░░░░");
        assert_eq!(meter(100, 8), "████████");
        assert_eq!(meter(150, 4), "████");
        assert_eq!(meter(50, 8), "████░░░░");
    }
}
