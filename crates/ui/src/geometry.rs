//! Frame geometry: every visible region computed from layout state.
//!
//! Rectangles are computed once per frame and shared by the renderer and
//! the mouse handler. Hit-testing walks the same rects that were painted,
//! so a click can never land on a stale region.

use callgrid_core::{PanelId, SplitDirection, TabId};
use callgrid_layout::{LayoutState, Panel};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

/// Brand row plus menu row.
pub const HEADER_ROWS: u16 = 2;
/// Status line at the bottom.
pub const FOOTER_ROWS: u16 = 1;
/// Sidebar column width when visible.
pub const SIDEBAR_WIDTH: u16 = 28;
/// Tab strip height at the top of each panel.
pub const TAB_STRIP_ROWS: u16 = 1;
/// Panel drag handle at the left edge of the strip.
pub const GRAB_WIDTH: u16 = 2;

/// Width of the close cell inside a tab (" ×").
const TAB_CLOSE_WIDTH: u16 = 2;
/// Width of the panel close button at the strip's right edge.
const PANEL_CLOSE_WIDTH: u16 = 3;
/// Labels longer than this are truncated in the strip.
const MAX_TAB_LABEL_WIDTH: u16 = 20;
/// Narrowest useful tab cell; layout stops once less room remains.
const MIN_TAB_CELL_WIDTH: u16 = 6;

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(Position { x, y })
}

// ===== Chrome =====

/// Top-level frame regions: header rows, sidebar, workspace, footer.
#[derive(Debug, Clone, Copy)]
pub struct ChromeLayout {
    pub brand: Rect,
    pub menu: Rect,
    pub sidebar: Rect,
    pub workspace: Rect,
    pub footer: Rect,
}

impl ChromeLayout {
    pub fn compute(area: Rect, sidebar_visible: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(FOOTER_ROWS),
            ])
            .split(area);

        let sidebar_width = if sidebar_visible { SIDEBAR_WIDTH } else { 0 };
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(rows[2]);

        Self {
            brand: rows[0],
            menu: rows[1],
            sidebar: body[0],
            workspace: body[1],
            footer: rows[3],
        }
    }
}

/// Clickable rects of the header menu items, in catalog order.
///
/// Items that no longer fit the row are omitted; the renderer clips at
/// the same boundary.
pub fn menu_item_rects(menu: Rect, labels: &[&str]) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(labels.len());
    let mut x = menu.x.saturating_add(1);
    for label in labels {
        let width = label.width() as u16 + 2;
        if x + width > menu.right() {
            break;
        }
        rects.push(Rect::new(x, menu.y, width, 1));
        x += width + 1;
    }
    rects
}

// ===== Sidebar =====

/// Sidebar regions: title row, tree viewport, section switcher rows.
#[derive(Debug, Clone, Copy)]
pub struct SidebarGeometry {
    pub area: Rect,
    pub title: Rect,
    pub tree: Rect,
    pub sections: [Rect; 3],
}

impl SidebarGeometry {
    pub fn compute(sidebar: Rect) -> Option<Self> {
        if sidebar.width == 0 || sidebar.height < 5 {
            return None;
        }

        let title = Rect::new(sidebar.x, sidebar.y, sidebar.width, 1);
        let sections_y = sidebar.bottom() - 3;
        let tree = Rect::new(
            sidebar.x,
            sidebar.y + 1,
            sidebar.width,
            sections_y - (sidebar.y + 1),
        );
        let section =
            |i: u16| Rect::new(sidebar.x, sections_y + i, sidebar.width, 1);

        Some(Self {
            area: sidebar,
            title,
            tree,
            sections: [section(0), section(1), section(2)],
        })
    }
}

// ===== Panel sizes =====

/// User-adjusted panel extents along the split axis.
///
/// Purely presentational: the layout state never sees these. `None`
/// means auto-distribution; dragging a separator freezes the affected
/// extents. The vector resets whenever the panel count changes.
#[derive(Debug, Clone)]
pub struct PanelSizes {
    widths: Vec<Option<u16>>,
    min: u16,
}

impl PanelSizes {
    pub fn new(min: u16) -> Self {
        Self {
            widths: Vec::new(),
            min,
        }
    }

    /// Reset to auto-distribution when the panel count changed.
    pub fn sync(&mut self, count: usize) {
        if self.widths.len() != count {
            self.widths = vec![None; count];
        }
    }

    pub fn reset(&mut self) {
        for width in &mut self.widths {
            *width = None;
        }
    }

    /// Concrete extents for `count` panels over `total` cells.
    ///
    /// Fixed extents keep their size, auto extents share the remainder,
    /// and the last panel absorbs rounding so the row always fills
    /// exactly. Stored sizes are ignored when they do not match `count`.
    pub fn extents_for(&self, count: usize, total: u16) -> Vec<u16> {
        if count == 0 {
            return Vec::new();
        }

        let widths: &[Option<u16>] = if self.widths.len() == count {
            &self.widths
        } else {
            &[]
        };

        let fixed_total: u16 = widths.iter().flatten().sum();
        let auto_count = if widths.is_empty() {
            count
        } else {
            widths.iter().filter(|w| w.is_none()).count()
        };
        let auto_width = if auto_count > 0 {
            total.saturating_sub(fixed_total) / auto_count as u16
        } else {
            0
        };

        let mut extents = Vec::with_capacity(count);
        let mut allocated: u16 = 0;
        for idx in 0..count {
            let extent = if idx == count - 1 {
                total.saturating_sub(allocated)
            } else {
                widths
                    .get(idx)
                    .copied()
                    .flatten()
                    .unwrap_or(auto_width)
            };
            allocated = allocated.saturating_add(extent);
            extents.push(extent);
        }
        extents
    }

    /// Drag the boundary between panel `boundary` and `boundary + 1` by
    /// `delta` cells. Both neighbors are clamped to the minimum extent.
    pub fn resize(&mut self, boundary: usize, delta: i32, count: usize, total: u16) {
        if boundary + 1 >= count {
            return;
        }

        // Freeze current extents so untouched panels keep their size.
        let extents = self.extents_for(count, total);
        self.widths = extents.iter().map(|&w| Some(w)).collect();

        let pair = extents[boundary] + extents[boundary + 1];
        if pair < self.min * 2 {
            return;
        }

        let lo = self.min as i32;
        let hi = (pair - self.min) as i32;
        let new_left = (extents[boundary] as i32 + delta).clamp(lo, hi) as u16;
        self.widths[boundary] = Some(new_left);
        self.widths[boundary + 1] = Some(pair - new_left);
    }
}

// ===== Workspace =====

/// One tab cell in a strip.
#[derive(Debug, Clone)]
pub struct TabRect {
    pub tab: TabId,
    pub area: Rect,
    /// Close cell, present for closable tabs that fit.
    pub close: Option<Rect>,
}

/// Regions of a single panel: strip, grab handle, tabs, content.
#[derive(Debug, Clone)]
pub struct PanelGeometry {
    pub panel: PanelId,
    pub area: Rect,
    pub strip: Rect,
    pub grab: Rect,
    pub tabs: Vec<TabRect>,
    /// Panel close button, only when more than one panel is shown.
    pub close: Option<Rect>,
    pub content: Rect,
}

impl PanelGeometry {
    fn compute(panel: &Panel, area: Rect, show_close: bool) -> Self {
        let strip = Rect::new(area.x, area.y, area.width, TAB_STRIP_ROWS.min(area.height));
        let content = Rect::new(
            area.x,
            area.y + strip.height,
            area.width,
            area.height.saturating_sub(strip.height),
        );

        let grab = Rect::new(strip.x, strip.y, GRAB_WIDTH.min(strip.width), strip.height);

        let close = if show_close && strip.width > GRAB_WIDTH + PANEL_CLOSE_WIDTH {
            Some(Rect::new(
                strip.right() - PANEL_CLOSE_WIDTH,
                strip.y,
                PANEL_CLOSE_WIDTH,
                strip.height,
            ))
        } else {
            None
        };

        let tabs_right = close.map(|c| c.x).unwrap_or_else(|| strip.right());
        let mut tabs = Vec::with_capacity(panel.len());
        let mut x = strip.x + grab.width;
        for tab in panel.tabs() {
            let remaining = tabs_right.saturating_sub(x);
            if remaining < MIN_TAB_CELL_WIDTH {
                break;
            }

            let label_width = (tab.label.width() as u16).min(MAX_TAB_LABEL_WIDTH);
            let close_width = if tab.closable { TAB_CLOSE_WIDTH } else { 0 };
            let cell_width = (label_width + 2 + close_width).min(remaining);

            let cell = Rect::new(x, strip.y, cell_width, strip.height);
            let close_cell = if tab.closable && cell_width >= MIN_TAB_CELL_WIDTH {
                Some(Rect::new(
                    cell.right() - TAB_CLOSE_WIDTH,
                    cell.y,
                    TAB_CLOSE_WIDTH,
                    cell.height,
                ))
            } else {
                None
            };

            tabs.push(TabRect {
                tab: tab.id.clone(),
                area: cell,
                close: close_cell,
            });
            x += cell_width;
        }

        Self {
            panel: panel.id(),
            area,
            strip,
            grab,
            tabs,
            close,
            content,
        }
    }
}

/// All panel regions plus the separators between them.
#[derive(Debug, Clone)]
pub struct WorkspaceGeometry {
    pub panels: Vec<PanelGeometry>,
    /// Separator `i` sits between panel `i` and panel `i + 1`.
    pub separators: Vec<Rect>,
    pub direction: SplitDirection,
}

impl WorkspaceGeometry {
    pub fn compute(workspace: Rect, layout: &LayoutState, sizes: &PanelSizes) -> Self {
        let direction = layout.split_direction();
        let count = layout.panels().len();
        let show_close = count > 1;

        let sep_count = count.saturating_sub(1) as u16;
        let total = match direction {
            SplitDirection::Horizontal => workspace.width,
            SplitDirection::Vertical => workspace.height,
        }
        .saturating_sub(sep_count);

        let extents = sizes.extents_for(count, total);

        let mut panels = Vec::with_capacity(count);
        let mut separators = Vec::with_capacity(sep_count as usize);
        let mut pos = match direction {
            SplitDirection::Horizontal => workspace.x,
            SplitDirection::Vertical => workspace.y,
        };

        for (idx, panel) in layout.panels().iter().enumerate() {
            let extent = extents.get(idx).copied().unwrap_or(0);
            let area = match direction {
                SplitDirection::Horizontal => {
                    Rect::new(pos, workspace.y, extent, workspace.height)
                }
                SplitDirection::Vertical => Rect::new(workspace.x, pos, workspace.width, extent),
            };
            panels.push(PanelGeometry::compute(panel, area, show_close));
            pos += extent;

            if idx + 1 < count {
                let sep = match direction {
                    SplitDirection::Horizontal => {
                        Rect::new(pos, workspace.y, 1, workspace.height)
                    }
                    SplitDirection::Vertical => Rect::new(workspace.x, pos, workspace.width, 1),
                };
                separators.push(sep);
                pos += 1;
            }
        }

        Self {
            panels,
            separators,
            direction,
        }
    }
}

// ===== Hit testing =====

/// A resolved click target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Brand,
    /// Index into the header menu catalog.
    MenuItem(usize),
    /// Index into the sidebar section switcher.
    SidebarSection(usize),
    /// Visible tree row, before scroll adjustment.
    SidebarRow(usize),
    /// Boundary between panel `i` and `i + 1`.
    Separator(usize),
    PanelGrab(PanelId),
    Tab { panel: PanelId, tab: TabId },
    TabClose { panel: PanelId, tab: TabId },
    PanelClose(PanelId),
    /// Empty strip area past the last tab.
    TabStrip(PanelId),
    PanelContent(PanelId),
    Footer,
}

/// The full frame, computed once per frame from state.
#[derive(Debug, Clone)]
pub struct FrameGeometry {
    pub chrome: ChromeLayout,
    pub menu_items: Vec<Rect>,
    pub sidebar: Option<SidebarGeometry>,
    pub workspace: WorkspaceGeometry,
}

impl FrameGeometry {
    pub fn compute(
        area: Rect,
        layout: &LayoutState,
        sizes: &PanelSizes,
        sidebar_visible: bool,
        menu_labels: &[&str],
    ) -> Self {
        let chrome = ChromeLayout::compute(area, sidebar_visible);
        Self {
            chrome,
            menu_items: menu_item_rects(chrome.menu, menu_labels),
            sidebar: SidebarGeometry::compute(chrome.sidebar),
            workspace: WorkspaceGeometry::compute(chrome.workspace, layout, sizes),
        }
    }

    /// Resolve a point to the most specific region under it.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        // Separators first: they sit between panel areas and must win
        // over the panels they touch.
        for (idx, sep) in self.workspace.separators.iter().enumerate() {
            if contains(*sep, x, y) {
                return Some(Hit::Separator(idx));
            }
        }

        for panel in &self.workspace.panels {
            if !contains(panel.area, x, y) {
                continue;
            }
            if contains(panel.strip, x, y) {
                if contains(panel.grab, x, y) {
                    return Some(Hit::PanelGrab(panel.panel));
                }
                for tab in &panel.tabs {
                    if let Some(close) = tab.close {
                        if contains(close, x, y) {
                            return Some(Hit::TabClose {
                                panel: panel.panel,
                                tab: tab.tab.clone(),
                            });
                        }
                    }
                    if contains(tab.area, x, y) {
                        return Some(Hit::Tab {
                            panel: panel.panel,
                            tab: tab.tab.clone(),
                        });
                    }
                }
                if let Some(close) = panel.close {
                    if contains(close, x, y) {
                        return Some(Hit::PanelClose(panel.panel));
                    }
                }
                return Some(Hit::TabStrip(panel.panel));
            }
            return Some(Hit::PanelContent(panel.panel));
        }

        for (idx, item) in self.menu_items.iter().enumerate() {
            if contains(*item, x, y) {
                return Some(Hit::MenuItem(idx));
            }
        }

        if let Some(sidebar) = &self.sidebar {
            for (idx, section) in sidebar.sections.iter().enumerate() {
                if contains(*section, x, y) {
                    return Some(Hit::SidebarSection(idx));
                }
            }
            if contains(sidebar.tree, x, y) {
                return Some(Hit::SidebarRow((y - sidebar.tree.y) as usize));
            }
        }

        if contains(self.chrome.brand, x, y) {
            return Some(Hit::Brand);
        }
        if contains(self.chrome.footer, x, y) {
            return Some(Hit::Footer);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callgrid_core::{ScreenCount, Tab};

    fn frame_area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    fn sample_layout() -> LayoutState {
        let mut layout = LayoutState::new();
        layout.set_screen_count(ScreenCount::new(2));
        let first = layout.panels()[0].id();
        let second = layout.panels()[1].id();
        layout.add_tab(Tab::new("dashboard", "Dashboard", "/dashboard").with_panel(first));
        layout.add_tab(Tab::new("call-status", "Call Status", "/call-status").with_panel(first));
        layout.add_tab(
            Tab::new("retry-monitor", "Retry Monitor", "/retry-monitor").with_panel(second),
        );
        layout
    }

    fn sample_geometry(layout: &LayoutState) -> FrameGeometry {
        FrameGeometry::compute(
            frame_area(),
            layout,
            &PanelSizes::new(20),
            true,
            &["Campaign Groups", "Dashboard"],
        )
    }

    #[test]
    fn test_chrome_partitions_the_frame() {
        let chrome = ChromeLayout::compute(frame_area(), true);
        assert_eq!(chrome.brand, Rect::new(0, 0, 120, 1));
        assert_eq!(chrome.menu, Rect::new(0, 1, 120, 1));
        assert_eq!(chrome.sidebar, Rect::new(0, 2, SIDEBAR_WIDTH, 37));
        assert_eq!(chrome.workspace, Rect::new(SIDEBAR_WIDTH, 2, 92, 37));
        assert_eq!(chrome.footer, Rect::new(0, 39, 120, 1));
    }

    #[test]
    fn test_hidden_sidebar_gives_workspace_the_full_width() {
        let chrome = ChromeLayout::compute(frame_area(), false);
        assert_eq!(chrome.sidebar.width, 0);
        assert_eq!(chrome.workspace, Rect::new(0, 2, 120, 37));
    }

    #[test]
    fn test_workspace_panels_fill_exactly_with_separators() {
        let layout = sample_layout();
        let geo = sample_geometry(&layout);

        assert_eq!(geo.workspace.panels.len(), 2);
        assert_eq!(geo.workspace.separators.len(), 1);

        let p0 = geo.workspace.panels[0].area;
        let sep = geo.workspace.separators[0];
        let p1 = geo.workspace.panels[1].area;
        assert_eq!(p0.right(), sep.x);
        assert_eq!(sep.width, 1);
        assert_eq!(sep.x + 1, p1.x);
        assert_eq!(p1.right(), geo.chrome.workspace.right());
    }

    #[test]
    fn test_vertical_split_stacks_panels() {
        let mut layout = sample_layout();
        layout.set_split_direction(SplitDirection::Vertical);
        let geo = sample_geometry(&layout);

        let p0 = geo.workspace.panels[0].area;
        let p1 = geo.workspace.panels[1].area;
        assert_eq!(p0.x, p1.x);
        assert!(p0.y < p1.y);
        assert_eq!(geo.workspace.separators[0].height, 1);
    }

    #[test]
    fn test_tab_cells_line_up_after_the_grab_handle() {
        let layout = sample_layout();
        let geo = sample_geometry(&layout);
        let panel = &geo.workspace.panels[0];

        assert_eq!(panel.grab.width, GRAB_WIDTH);
        assert_eq!(panel.tabs.len(), 2);
        assert_eq!(panel.tabs[0].area.x, panel.strip.x + GRAB_WIDTH);
        assert_eq!(panel.tabs[1].area.x, panel.tabs[0].area.right());

        // "Dashboard" is 9 wide: padding 2 + close 2 = 13.
        assert_eq!(panel.tabs[0].area.width, 13);
        let close = panel.tabs[0].close.unwrap();
        assert_eq!(close.right(), panel.tabs[0].area.right());
    }

    #[test]
    fn test_panel_close_only_when_split() {
        let mut layout = LayoutState::new();
        layout.add_tab(Tab::new("dashboard", "Dashboard", "/dashboard"));
        let single = sample_geometry(&layout);
        assert!(single.workspace.panels[0].close.is_none());

        let split = sample_geometry(&sample_layout());
        assert!(split.workspace.panels[0].close.is_some());
        assert!(split.workspace.panels[1].close.is_some());
    }

    #[test]
    fn test_pinned_tab_has_no_close_cell() {
        let mut layout = LayoutState::new();
        layout.add_tab(Tab::new("dashboard", "Dashboard", "/dashboard").pinned());
        let geo = sample_geometry(&layout);
        assert!(geo.workspace.panels[0].tabs[0].close.is_none());
    }

    #[test]
    fn test_hit_test_resolves_strip_regions() {
        let layout = sample_layout();
        let geo = sample_geometry(&layout);
        let panel = &geo.workspace.panels[0];
        let first = panel.panel;

        let grab = panel.grab;
        assert_eq!(geo.hit_test(grab.x, grab.y), Some(Hit::PanelGrab(first)));

        let tab = &panel.tabs[0];
        assert_eq!(
            geo.hit_test(tab.area.x + 1, tab.area.y),
            Some(Hit::Tab {
                panel: first,
                tab: tab.tab.clone()
            })
        );

        let close = tab.close.unwrap();
        assert_eq!(
            geo.hit_test(close.x + 1, close.y),
            Some(Hit::TabClose {
                panel: first,
                tab: tab.tab.clone()
            })
        );

        let panel_close = panel.close.unwrap();
        assert_eq!(
            geo.hit_test(panel_close.x + 1, panel_close.y),
            Some(Hit::PanelClose(first))
        );

        // Past the last tab but before the close button.
        let last_tab = panel.tabs.last().unwrap();
        assert_eq!(
            geo.hit_test(last_tab.area.right() + 1, panel.strip.y),
            Some(Hit::TabStrip(first))
        );
    }

    #[test]
    fn test_hit_test_resolves_chrome_regions() {
        let layout = sample_layout();
        let geo = sample_geometry(&layout);

        let sep = geo.workspace.separators[0];
        assert_eq!(geo.hit_test(sep.x, sep.y + 5), Some(Hit::Separator(0)));

        let content = geo.workspace.panels[1].content;
        assert_eq!(
            geo.hit_test(content.x + 2, content.y + 2),
            Some(Hit::PanelContent(geo.workspace.panels[1].panel))
        );

        let menu = geo.menu_items[1];
        assert_eq!(geo.hit_test(menu.x, menu.y), Some(Hit::MenuItem(1)));

        let sidebar = geo.sidebar.unwrap();
        assert_eq!(
            geo.hit_test(sidebar.tree.x + 1, sidebar.tree.y + 3),
            Some(Hit::SidebarRow(3))
        );
        assert_eq!(
            geo.hit_test(sidebar.sections[2].x, sidebar.sections[2].y),
            Some(Hit::SidebarSection(2))
        );

        assert_eq!(geo.hit_test(0, 0), Some(Hit::Brand));
        assert_eq!(
            geo.hit_test(5, geo.chrome.footer.y),
            Some(Hit::Footer)
        );
    }

    #[test]
    fn test_menu_items_stop_at_the_row_edge() {
        let narrow = Rect::new(0, 1, 20, 1);
        let rects = menu_item_rects(narrow, &["Campaign Groups", "Campaign Manager"]);
        assert_eq!(rects.len(), 1);
        assert_eq!(rects[0].width, "Campaign Groups".len() as u16 + 2);
    }

    #[test]
    fn test_panel_sizes_default_split_is_even() {
        let sizes = PanelSizes::new(20);
        assert_eq!(sizes.extents_for(3, 91), vec![30, 30, 31]);
        assert_eq!(sizes.extents_for(0, 91), Vec::<u16>::new());
    }

    #[test]
    fn test_panel_sizes_resize_moves_the_boundary() {
        let mut sizes = PanelSizes::new(20);
        sizes.sync(2);
        sizes.resize(0, 10, 2, 90);
        assert_eq!(sizes.extents_for(2, 90), vec![55, 35]);

        // Clamped at the right neighbor's minimum.
        sizes.resize(0, 100, 2, 90);
        assert_eq!(sizes.extents_for(2, 90), vec![70, 20]);

        // And at its own minimum going the other way.
        sizes.resize(0, -200, 2, 90);
        assert_eq!(sizes.extents_for(2, 90), vec![20, 70]);
    }

    #[test]
    fn test_panel_sizes_sync_resets_on_count_change() {
        let mut sizes = PanelSizes::new(20);
        sizes.sync(2);
        sizes.resize(0, 15, 2, 90);
        assert_ne!(sizes.extents_for(2, 90), vec![45, 45]);

        sizes.sync(3);
        assert_eq!(sizes.extents_for(3, 90), vec![30, 30, 30]);
    }
}
