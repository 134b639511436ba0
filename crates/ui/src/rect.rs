//! Rect helpers for overlays and centered chrome.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Create a centered rectangle with specified width and height within a
/// container. Used by the login card and dropdown overlays.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let horizontal_margin = r.width.saturating_sub(width) / 2;
    let vertical_margin = r.height.saturating_sub(height) / 2;

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_margin),
            Constraint::Length(height),
            Constraint::Length(vertical_margin),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(horizontal_margin),
            Constraint::Length(width),
            Constraint::Length(horizontal_margin),
        ])
        .split(vertical_layout[1])[1]
}

/// Create a rect with margin.
pub fn with_margin(rect: Rect, margin: u16) -> Rect {
    Rect::new(
        rect.x + margin,
        rect.y + margin,
        rect.width.saturating_sub(margin * 2),
        rect.height.saturating_sub(margin * 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(40, 10, outer);
        assert_eq!(inner.x, 30);
        assert_eq!(inner.y, 20);
        assert_eq!(inner.width, 40);
        assert_eq!(inner.height, 10);
    }

    #[test]
    fn test_centered_rect_larger_than_container() {
        let outer = Rect::new(0, 0, 20, 5);
        let inner = centered_rect(40, 10, outer);
        assert!(inner.width <= outer.width);
        assert!(inner.height <= outer.height);
    }

    #[test]
    fn test_with_margin() {
        let rect = Rect::new(10, 10, 100, 50);
        let margined = with_margin(rect, 5);
        assert_eq!(margined.x, 15);
        assert_eq!(margined.y, 15);
        assert_eq!(margined.width, 90);
        assert_eq!(margined.height, 40);
    }
}
