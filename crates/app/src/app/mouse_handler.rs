//! Mouse event handling for the application.
//!
//! Every button event resolves through the frame geometry first; the hit
//! kind decides whether it arms a drag, closes something, moves focus, or
//! starts a separator resize. Nothing here mutates the layout directly
//! during a gesture: drags resolve on release.

use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use callgrid_core::{PanelId, SplitDirection};
use callgrid_dnd::{DragOutcome, DragSource, DropTarget};
use callgrid_menu as menu;
use callgrid_ui::{FrameGeometry, Hit};

use super::{App, ResizeDrag};
use crate::state::{FocusTarget, Screen};

impl App {
    /// Handle mouse event
    pub(super) fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        // The login screen is keyboard-only.
        if self.state.screen != Screen::Dashboard {
            return Ok(());
        }

        let geometry = self.frame_geometry();
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_left_down(&geometry, x, y);
                self.state.needs_redraw = true;
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.on_left_drag(&geometry, x, y);
                self.state.needs_redraw = true;
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.on_left_up(&geometry, x, y);
                self.state.needs_redraw = true;
            }
            MouseEventKind::ScrollUp => self.on_scroll(&geometry, x, y, true),
            MouseEventKind::ScrollDown => self.on_scroll(&geometry, x, y, false),
            _ => {}
        }

        Ok(())
    }

    fn on_left_down(&mut self, geometry: &FrameGeometry, x: u16, y: u16) {
        match geometry.hit_test(x, y) {
            Some(Hit::MenuItem(index)) => {
                if let Some(item) = menu::main_menu().get(index) {
                    self.open_tab(item.to_tab());
                }
            }
            Some(Hit::SidebarSection(index)) => {
                if let Some(&section) = menu::SidebarSection::all().get(index) {
                    self.state.sidebar.set_section(section);
                    self.state.focus = FocusTarget::Sidebar;
                }
            }
            Some(Hit::SidebarRow(row)) => {
                let index = self.state.sidebar.scroll + row;
                if index < self.state.sidebar.rows().len() {
                    self.state.focus = FocusTarget::Sidebar;
                    self.state.sidebar.select_row(index);
                    self.activate_sidebar_row();
                }
            }
            Some(Hit::Tab { panel, tab }) => {
                self.drag.press(DragSource::Tab { tab, panel }, x, y);
            }
            Some(Hit::TabClose { panel, tab }) => self.close_tab(&tab, panel),
            Some(Hit::PanelGrab(panel)) => {
                self.drag.press(DragSource::Panel { panel }, x, y);
            }
            Some(Hit::PanelClose(panel)) => self.close_panel(panel),
            Some(Hit::TabStrip(panel)) | Some(Hit::PanelContent(panel)) => {
                self.state.focus = FocusTarget::Panel(panel);
            }
            Some(Hit::Separator(boundary)) => {
                self.resize = Some(ResizeDrag {
                    boundary,
                    last: Self::axis_position(geometry, x, y),
                });
            }
            Some(Hit::Brand) | Some(Hit::Footer) | None => {}
        }
    }

    fn on_left_drag(&mut self, geometry: &FrameGeometry, x: u16, y: u16) {
        if self.resize.is_some() {
            self.apply_separator_drag(geometry, x, y);
        } else if self.drag.source().is_some() {
            let over = Self::drop_target_at(geometry, x, y);
            self.drag.motion(x, y, over);
        }
    }

    fn on_left_up(&mut self, geometry: &FrameGeometry, x: u16, y: u16) {
        if self.resize.take().is_some() {
            return;
        }

        let over = Self::drop_target_at(geometry, x, y);
        match self.drag.release(over, &self.layout) {
            DragOutcome::Click(DragSource::Tab { tab, panel }) => {
                self.layout.set_active_tab(&tab, panel);
                self.state.focus = FocusTarget::Panel(panel);
            }
            DragOutcome::Click(DragSource::Panel { panel }) => {
                self.state.focus = FocusTarget::Panel(panel);
            }
            DragOutcome::Command(command) => self.apply_command(command),
            DragOutcome::None => {}
        }
    }

    fn on_scroll(&mut self, geometry: &FrameGeometry, x: u16, y: u16, up: bool) {
        match geometry.hit_test(x, y) {
            Some(Hit::SidebarRow(_)) => {
                if up {
                    self.state.sidebar.select_prev();
                } else {
                    self.state.sidebar.select_next();
                }
                self.sync_sidebar_scroll();
                self.state.needs_redraw = true;
            }
            Some(Hit::PanelContent(panel)) => self.scroll_view(panel, up),
            _ => {}
        }
    }

    /// Apply one motion step of a separator drag to the stored extents.
    fn apply_separator_drag(&mut self, geometry: &FrameGeometry, x: u16, y: u16) {
        let Some(resize) = self.resize else {
            return;
        };
        let position = Self::axis_position(geometry, x, y);
        let delta = i32::from(position) - i32::from(resize.last);
        if delta == 0 {
            return;
        }

        let count = self.layout.panels().len();
        let total = Self::panel_total(geometry, count);
        self.state
            .panel_sizes
            .resize(resize.boundary, delta, count, total);
        self.resize = Some(ResizeDrag {
            boundary: resize.boundary,
            last: position,
        });
    }

    /// Wheel scrolling inside a panel turns into arrow keys for the view.
    fn scroll_view(&mut self, panel: PanelId, up: bool) {
        let Some(active) = self
            .layout
            .panel(panel)
            .and_then(|p| p.active_tab())
            .cloned()
        else {
            return;
        };
        if let Some(view) = self.views.get_mut(&active) {
            let code = if up { KeyCode::Up } else { KeyCode::Down };
            if view.handle_key(KeyEvent::new(code, KeyModifiers::NONE)) {
                self.state.needs_redraw = true;
            }
        }
    }

    /// The drop target under the pointer, if any.
    fn drop_target_at(geometry: &FrameGeometry, x: u16, y: u16) -> Option<DropTarget> {
        match geometry.hit_test(x, y)? {
            Hit::Tab { panel, tab } | Hit::TabClose { panel, tab } => {
                Some(DropTarget::Tab { tab, panel })
            }
            Hit::TabStrip(panel)
            | Hit::PanelContent(panel)
            | Hit::PanelGrab(panel)
            | Hit::PanelClose(panel) => Some(DropTarget::PanelArea { panel }),
            _ => None,
        }
    }

    /// Pointer coordinate along the split axis.
    fn axis_position(geometry: &FrameGeometry, x: u16, y: u16) -> u16 {
        match geometry.workspace.direction {
            SplitDirection::Horizontal => x,
            SplitDirection::Vertical => y,
        }
    }

    /// Cells available to panels along the split axis: the workspace
    /// extent minus one cell per separator.
    fn panel_total(geometry: &FrameGeometry, count: usize) -> u16 {
        let extent = match geometry.workspace.direction {
            SplitDirection::Horizontal => geometry.chrome.workspace.width,
            SplitDirection::Vertical => geometry.chrome.workspace.height,
        };
        extent.saturating_sub(count.saturating_sub(1) as u16)
    }
}
