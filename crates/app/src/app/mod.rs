//! Main application module.
//!
//! `App` owns the layout, the view registry, the drag controller, and the
//! event loop. Handlers mutate state; the render callback passed to `run`
//! draws the next frame from it. All layout rearrangements, whether they
//! came from a drag, a click, or a key binding, go through the same
//! `LayoutState` operations, followed by one reconciliation pass.

use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::{backend::Backend, Terminal};

use callgrid_config::defaults;
use callgrid_core::{Event, EventHandler, PanelId, ScreenCount, Tab, TabId};
use callgrid_dnd::{DragController, LayoutCommand};
use callgrid_layout::LayoutState;
use callgrid_logger as logger;
use callgrid_menu as menu;
use callgrid_ui::FrameGeometry;
use callgrid_views::ViewRegistry;

use crate::state::{AppState, FocusTarget, Screen};

mod key_handler;
mod mouse_handler;

/// Event poll interval; one tick is also one animation step.
const TICK_INTERVAL_MS: u64 = 250;

/// A separator drag in progress.
#[derive(Debug, Clone, Copy)]
struct ResizeDrag {
    /// Boundary index between panel `i` and `i + 1`.
    boundary: usize,
    /// Pointer position along the split axis at the last motion.
    last: u16,
}

/// Main application
pub struct App {
    state: AppState,
    layout: LayoutState,
    views: ViewRegistry,
    drag: DragController,
    /// In-flight separator drag; separate from tab/panel dragging.
    resize: Option<ResizeDrag>,
    event_handler: EventHandler,
}

impl App {
    /// Create a new application, loading config and initializing logging.
    pub fn new() -> Self {
        let state = AppState::new();

        // Initialize logger before anything that logs.
        let min_log_level = logger::LogLevel::from_str(&state.config.logging.min_level)
            .ok()
            .unwrap_or(logger::LogLevel::Info);
        logger::init(
            state.config.log_file_path(),
            defaults::MAX_LOG_ENTRIES,
            min_log_level,
        );
        logger::info("Application started");

        Self::with_state(state)
    }

    /// Create an application around prepared state, leaving the global
    /// logger alone. The layout picks up the persisted split direction.
    pub fn with_state(state: AppState) -> Self {
        let mut layout = LayoutState::new();
        if let Ok(direction) = state.config.workspace.split_direction.parse() {
            layout.set_split_direction(direction);
        }

        Self {
            state,
            layout,
            views: ViewRegistry::new(),
            drag: DragController::new(),
            resize: None,
            event_handler: EventHandler::new(Duration::from_millis(TICK_INTERVAL_MS)),
        }
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(
            &mut ratatui::Frame<'_>,
            &mut AppState,
            &LayoutState,
            &mut ViewRegistry,
            &DragController,
        ),
    ) -> Result<()> {
        // Initialize terminal dimensions
        let size = terminal.size()?;
        self.state.update_terminal_size(size.width, size.height);

        while !self.state.should_quit {
            match self.event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key)?;
                    self.state.needs_redraw = true;
                }
                Event::Mouse(mouse) => {
                    // The handler flags a redraw itself; plain pointer
                    // motion must not wake the renderer.
                    self.handle_mouse_event(mouse)?;
                }
                Event::Resize(width, height) => {
                    self.state.update_terminal_size(width, height);
                    // Stored extents belong to the old frame.
                    self.state.panel_sizes.reset();
                    self.state.needs_redraw = true;
                }
                Event::FocusLost => {
                    self.abort_gestures();
                }
                Event::FocusGained => {
                    self.state.needs_redraw = true;
                }
                Event::Tick => {
                    self.on_tick();
                }
            }

            // Render UI only when needed (reduces idle CPU to near-zero)
            if self.state.needs_redraw {
                terminal.draw(|frame| {
                    render_fn(
                        frame,
                        &mut self.state,
                        &self.layout,
                        &mut self.views,
                        &self.drag,
                    );
                })?;
                self.state.needs_redraw = false;
            }
        }

        Ok(())
    }

    fn on_tick(&mut self) {
        self.state.tick = self.state.tick.wrapping_add(1);
        if self.state.screen == Screen::Dashboard {
            self.views.tick_all();
            self.update_system_resources();
            // The clock and the live views advance every tick.
            self.state.needs_redraw = true;
        }
    }

    /// Update system resource monitoring (CPU, RAM)
    /// Respects the configured update interval
    fn update_system_resources(&mut self) {
        let interval =
            Duration::from_millis(self.state.config.logging.resource_monitor_interval);
        if self.state.last_resource_update.elapsed() >= interval {
            self.state.system_monitor.refresh();
            self.state.last_resource_update = Instant::now();
        }
    }

    /// Cancel any in-flight pointer gesture (focus loss, Escape).
    fn abort_gestures(&mut self) {
        if self.drag.source().is_some() || self.resize.is_some() {
            self.drag.cancel();
            self.resize = None;
            self.state.needs_redraw = true;
        }
    }

    /// Leave the login screen for the dashboard.
    fn complete_login(&mut self, user: String) {
        logger::info(format!("Signed in as {}", user));
        self.state.user = Some(user);
        self.state.screen = Screen::Dashboard;
        // Land the operator on the overview feature.
        if let Some(item) = menu::find_item("dashboard") {
            self.open_tab(item.to_tab());
        }
    }

    /// Open a tab, defaulting placement to the focused panel, and move
    /// focus to wherever it actually landed.
    pub fn open_tab(&mut self, tab: Tab) {
        let tab = match tab.panel {
            Some(_) => tab,
            None => {
                let focused = self.state.focused_panel(&self.layout);
                tab.with_panel(focused)
            }
        };
        self.views.ensure(&tab);
        let id = tab.id.clone();
        self.layout.add_tab(tab);
        if let Some(owner) = self.layout.owner_of(&id) {
            self.state.focus = FocusTarget::Panel(owner);
        }
        logger::debug(format!("Opened tab {}", id));
    }

    /// Close a tab if it is closable.
    fn close_tab(&mut self, tab_id: &TabId, panel_id: PanelId) {
        let closable = self
            .layout
            .find_tab(tab_id)
            .map(|tab| tab.closable)
            .unwrap_or(false);
        if !closable {
            return;
        }
        self.layout.remove_tab(tab_id, panel_id);
        self.after_layout_change();
        logger::debug(format!("Closed tab {}", tab_id));
    }

    /// Close the focused panel's active tab.
    fn close_focused_tab(&mut self) {
        let panel_id = self.state.focused_panel(&self.layout);
        let Some(active) = self
            .layout
            .panel(panel_id)
            .and_then(|p| p.active_tab())
            .cloned()
        else {
            return;
        };
        self.close_tab(&active, panel_id);
    }

    /// Close a panel; its tabs merge into the surviving neighbor.
    fn close_panel(&mut self, panel_id: PanelId) {
        self.layout.remove_panel(panel_id);
        self.after_layout_change();
        logger::debug(format!("Closed {}", panel_id));
    }

    /// Resize the workspace to `count` panels.
    fn set_screen_count(&mut self, count: ScreenCount) {
        self.layout.set_screen_count(count);
        self.after_layout_change();
        self.state.set_info(format!("Screens: {}", count));
    }

    /// Flip the split direction and persist it (best effort).
    fn toggle_split_direction(&mut self) {
        let direction = self.layout.split_direction().toggled();
        self.layout.set_split_direction(direction);
        self.state.panel_sizes.reset();
        self.state.config.workspace.split_direction = direction.as_str().to_string();
        if let Err(e) = self.state.config.save() {
            logger::error(format!("Failed to save config: {}", e));
        }
        self.state.set_info(format!("Split direction: {}", direction));
    }

    /// Apply a resolved drag command to the layout.
    fn apply_command(&mut self, command: LayoutCommand) {
        logger::debug(format!("Applying {:?}", command));
        match command {
            LayoutCommand::MoveTab {
                tab,
                source,
                target,
            } => {
                self.layout.move_tab(&tab, source, target);
                // Focus follows the moved tab.
                self.state.focus = FocusTarget::Panel(target);
            }
            LayoutCommand::ReorderTabs { panel, order } => {
                self.layout.reorder_tabs(panel, &order);
            }
            LayoutCommand::ReorderPanels { active, over } => {
                self.layout.reorder_panels(active, over);
            }
        }
        self.after_layout_change();
    }

    /// Reconcile everything derived from the layout after a structural
    /// change: drop views of vanished tabs, resync panel extents, repair
    /// a focus target pointing at a removed panel.
    fn after_layout_change(&mut self) {
        self.views.prune(&self.layout);
        self.state.panel_sizes.sync(self.layout.panels().len());
        if let FocusTarget::Panel(id) = self.state.focus {
            if self.layout.panel(id).is_none() {
                self.state.focus = FocusTarget::Panel(self.state.focused_panel(&self.layout));
            }
        }
    }

    /// Act on the selected sidebar row: branches toggle, campaign leaves
    /// open their detail tab.
    fn activate_sidebar_row(&mut self) {
        let Some(row) = self.state.sidebar.selected_row() else {
            return;
        };
        if row.node.has_children() {
            self.state.sidebar.toggle_expanded(row.node.id);
        } else if let Some(tab) = row.node.campaign_tab() {
            self.open_tab(tab);
        }
    }

    /// Cycle keyboard focus: sidebar first, then each panel in order.
    fn cycle_focus(&mut self, forward: bool) {
        let mut targets: Vec<FocusTarget> = Vec::with_capacity(self.layout.panels().len() + 1);
        if self.state.sidebar.visible {
            targets.push(FocusTarget::Sidebar);
        }
        targets.extend(self.layout.panels().iter().map(|p| FocusTarget::Panel(p.id())));
        if targets.is_empty() {
            return;
        }

        let current = targets
            .iter()
            .position(|t| *t == self.state.focus)
            .unwrap_or(0);
        let len = targets.len() as isize;
        let step = if forward { 1 } else { -1 };
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.state.focus = targets[next];
    }

    /// Activate the previous or next tab in the focused strip.
    fn activate_adjacent_tab(&mut self, panel_id: PanelId, offset: isize) {
        let Some(panel) = self.layout.panel(panel_id) else {
            return;
        };
        let ids = panel.tab_ids();
        if ids.is_empty() {
            return;
        }
        let current = panel
            .active_tab()
            .and_then(|active| panel.position(active))
            .unwrap_or(0);
        let next = (current as isize + offset).rem_euclid(ids.len() as isize) as usize;
        self.layout.set_active_tab(&ids[next], panel_id);
    }

    /// Move the active tab to the neighboring panel (keyboard equivalent
    /// of a cross-panel drag).
    fn move_active_tab(&mut self, panel_id: PanelId, offset: isize) {
        let Some(index) = self.layout.panel_index(panel_id) else {
            return;
        };
        let target_index = index as isize + offset;
        if target_index < 0 || target_index as usize >= self.layout.panels().len() {
            return;
        }
        let target = self.layout.panels()[target_index as usize].id();
        let Some(active) = self
            .layout
            .panel(panel_id)
            .and_then(|p| p.active_tab())
            .cloned()
        else {
            return;
        };
        self.apply_command(LayoutCommand::MoveTab {
            tab: active,
            source: panel_id,
            target,
        });
    }

    /// Reorder the active tab one slot left or right within its strip
    /// (keyboard equivalent of an in-strip drag).
    fn shift_active_tab(&mut self, panel_id: PanelId, offset: isize) {
        let Some(panel) = self.layout.panel(panel_id) else {
            return;
        };
        let Some(active) = panel.active_tab() else {
            return;
        };
        let mut order = panel.tab_ids();
        let Some(from) = order.iter().position(|id| id == active) else {
            return;
        };
        let to = from as isize + offset;
        if to < 0 || to as usize >= order.len() {
            return;
        }
        let id = order.remove(from);
        order.insert(to as usize, id);
        self.layout.reorder_tabs(panel_id, &order);
    }

    /// Geometry of the current frame, rebuilt from state on demand.
    fn frame_geometry(&self) -> FrameGeometry {
        let labels: Vec<&str> = menu::main_menu().iter().map(|item| item.label).collect();
        let area = Rect::new(0, 0, self.state.terminal_width, self.state.terminal_height);
        FrameGeometry::compute(
            area,
            &self.layout,
            &self.state.panel_sizes,
            self.state.sidebar.visible,
            &labels,
        )
    }

    /// Keep the sidebar selection inside its viewport after it moved.
    fn sync_sidebar_scroll(&mut self) {
        if let Some(sidebar) = self.frame_geometry().sidebar {
            self.state
                .sidebar
                .scroll_to_selection(sidebar.tree.height as usize);
        }
    }

    /// Get reference to AppState
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to AppState
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Get reference to the layout
    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// Get reference to the view registry
    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    /// Get mutable reference to the view registry
    pub fn views_mut(&mut self) -> &mut ViewRegistry {
        &mut self.views
    }

    /// Get reference to the drag controller
    pub fn drag(&self) -> &DragController {
        &self.drag
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callgrid_config::Config;
    use callgrid_core::SplitDirection;
    use callgrid_theme::Theme;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    fn app() -> App {
        // The handlers log; point the global logger at a scratch file.
        logger::init(
            std::env::temp_dir().join("callgrid-app-tests.log"),
            10,
            logger::LogLevel::Error,
        );
        let mut state =
            AppState::with_config_and_theme(Config::default(), Theme::get_by_name("dark"));
        state.update_terminal_size(120, 40);
        App::with_state(state)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(app: &mut App, column: u16, row: u16) {
        app.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), column, row))
            .unwrap();
    }

    fn drag_to(app: &mut App, column: u16, row: u16) {
        app.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), column, row))
            .unwrap();
    }

    fn release(app: &mut App, column: u16, row: u16) {
        app.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), column, row))
            .unwrap();
    }

    fn click(app: &mut App, column: u16, row: u16) {
        press(app, column, row);
        release(app, column, row);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn signed_in() -> App {
        let mut app = app();
        type_text(&mut app, "ops@nexdps.io");
        app.handle_key_event(key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "secret");
        app.handle_key_event(key(KeyCode::Enter)).unwrap();
        app
    }

    #[test]
    fn test_login_rejects_empty_credentials() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state().screen, Screen::Login);
        assert!(app.state().login.error.is_some());
        assert!(app.state().user.is_none());
    }

    #[test]
    fn test_login_lands_on_the_dashboard_feature() {
        let app = signed_in();
        assert_eq!(app.state().screen, Screen::Dashboard);
        assert_eq!(app.state().user.as_deref(), Some("ops@nexdps.io"));

        // The overview tab is open, registered, and focused.
        assert!(app.layout().contains_tab(&TabId::new("dashboard")));
        assert_eq!(app.views().len(), 1);
        let first = app.layout().first_panel_id().unwrap();
        assert_eq!(app.state().focus, FocusTarget::Panel(first));
    }

    #[test]
    fn test_mouse_is_ignored_on_the_login_screen() {
        let mut app = app();
        click(&mut app, 10, 1);
        assert_eq!(app.state().screen, Screen::Login);
        assert_eq!(app.layout().tab_count(), 0);
    }

    #[test]
    fn test_menu_click_opens_the_feature_tab() {
        let mut app = signed_in();
        let geometry = app.frame_geometry();

        // Catalog order: index 4 is Call Status.
        let item = geometry.menu_items[4];
        click(&mut app, item.x + 1, item.y);

        assert!(app.layout().contains_tab(&TabId::new("call-status")));
        assert_eq!(app.views().len(), 2);
        let first = app.layout().first_panel_id().unwrap();
        assert_eq!(app.layout().owner_of(&TabId::new("call-status")), Some(first));
    }

    #[test]
    fn test_menu_click_on_open_feature_activates_it() {
        let mut app = signed_in();
        app.open_tab(menu::find_item("call-status").unwrap().to_tab());
        app.open_tab(menu::find_item("dashboard").unwrap().to_tab());

        let geometry = app.frame_geometry();
        let item = geometry.menu_items[4];
        click(&mut app, item.x + 1, item.y);

        // Still two tabs; the click only moved the selection.
        assert_eq!(app.layout().tab_count(), 2);
        let first = app.layout().first_panel_id().unwrap();
        let panel = app.layout().panel(first).unwrap();
        assert_eq!(panel.active_tab(), Some(&TabId::new("call-status")));
    }

    #[test]
    fn test_tab_click_activates_without_moving() {
        let mut app = signed_in();
        app.open_tab(menu::find_item("retry-monitor").unwrap().to_tab());

        let geometry = app.frame_geometry();
        let dashboard = &geometry.workspace.panels[0].tabs[0];
        assert_eq!(dashboard.tab, TabId::new("dashboard"));
        click(&mut app, dashboard.area.x + 1, dashboard.area.y);

        let first = app.layout().first_panel_id().unwrap();
        let panel = app.layout().panel(first).unwrap();
        assert_eq!(panel.active_tab(), Some(&TabId::new("dashboard")));
        assert_eq!(
            panel.tab_ids(),
            vec![TabId::new("dashboard"), TabId::new("retry-monitor")]
        );
    }

    #[test]
    fn test_tab_close_button_removes_tab_and_view() {
        let mut app = signed_in();
        let geometry = app.frame_geometry();
        let close = geometry.workspace.panels[0].tabs[0].close.unwrap();

        press(&mut app, close.x + 1, close.y);

        assert_eq!(app.layout().tab_count(), 0);
        assert!(app.views().is_empty());
    }

    #[test]
    fn test_drag_tab_to_other_panel_moves_it() {
        let mut app = signed_in();
        app.handle_key_event(key_with(KeyCode::Char('2'), KeyModifiers::ALT))
            .unwrap();
        assert_eq!(app.layout().panels().len(), 2);

        let geometry = app.frame_geometry();
        let tab = &geometry.workspace.panels[0].tabs[0];
        let target = geometry.workspace.panels[1].content;
        let second = app.layout().panels()[1].id();

        press(&mut app, tab.area.x + 1, tab.area.y);
        drag_to(&mut app, target.x + 5, target.y + 5);
        release(&mut app, target.x + 5, target.y + 5);

        assert_eq!(
            app.layout().owner_of(&TabId::new("dashboard")),
            Some(second)
        );
        assert_eq!(app.state().focus, FocusTarget::Panel(second));
        // The view survives the move.
        assert_eq!(app.views().len(), 1);
    }

    #[test]
    fn test_drag_tab_onto_neighbor_reorders_strip() {
        let mut app = signed_in();
        app.open_tab(menu::find_item("call-status").unwrap().to_tab());

        let geometry = app.frame_geometry();
        let first_tab = geometry.workspace.panels[0].tabs[0].area;
        let second_tab = geometry.workspace.panels[0].tabs[1].area;

        press(&mut app, first_tab.x + 1, first_tab.y);
        drag_to(&mut app, second_tab.x + 1, second_tab.y);
        release(&mut app, second_tab.x + 1, second_tab.y);

        let first = app.layout().first_panel_id().unwrap();
        assert_eq!(
            app.layout().panel(first).unwrap().tab_ids(),
            vec![TabId::new("call-status"), TabId::new("dashboard")]
        );
    }

    #[test]
    fn test_escape_cancels_a_drag_in_flight() {
        let mut app = signed_in();
        app.handle_key_event(key_with(KeyCode::Char('2'), KeyModifiers::ALT))
            .unwrap();

        let geometry = app.frame_geometry();
        let tab = &geometry.workspace.panels[0].tabs[0];
        let target = geometry.workspace.panels[1].content;

        press(&mut app, tab.area.x + 1, tab.area.y);
        drag_to(&mut app, target.x + 5, target.y + 5);
        assert!(app.drag().is_dragging());

        app.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert!(!app.drag().is_dragging());

        // The stray release no longer moves anything.
        release(&mut app, target.x + 5, target.y + 5);
        let first = app.layout().first_panel_id().unwrap();
        assert_eq!(
            app.layout().owner_of(&TabId::new("dashboard")),
            Some(first)
        );
    }

    #[test]
    fn test_separator_drag_resizes_the_pair() {
        let mut app = signed_in();
        app.handle_key_event(key_with(KeyCode::Char('2'), KeyModifiers::ALT))
            .unwrap();

        let geometry = app.frame_geometry();
        let sep = geometry.workspace.separators[0];
        let before = geometry.workspace.panels[0].area.width;

        press(&mut app, sep.x, sep.y + 5);
        drag_to(&mut app, sep.x + 10, sep.y + 5);
        release(&mut app, sep.x + 10, sep.y + 5);

        let after = app.frame_geometry().workspace.panels[0].area.width;
        assert_eq!(after, before + 10);
    }

    #[test]
    fn test_panel_close_button_merges_tabs_left() {
        let mut app = signed_in();
        app.handle_key_event(key_with(KeyCode::Char('2'), KeyModifiers::ALT))
            .unwrap();

        // Put a second feature into the right panel.
        let second = app.layout().panels()[1].id();
        app.open_tab(
            menu::find_item("retry-monitor")
                .unwrap()
                .to_tab()
                .with_panel(second),
        );

        let geometry = app.frame_geometry();
        let close = geometry.workspace.panels[1].close.unwrap();
        press(&mut app, close.x + 1, close.y);

        assert_eq!(app.layout().panels().len(), 1);
        assert_eq!(app.layout().tab_count(), 2);
        assert_eq!(app.views().len(), 2);
    }

    #[test]
    fn test_screen_shrink_prunes_orphaned_views() {
        let mut app = signed_in();
        app.handle_key_event(key_with(KeyCode::Char('2'), KeyModifiers::ALT))
            .unwrap();
        let second = app.layout().panels()[1].id();
        app.open_tab(
            menu::find_item("system-monitor")
                .unwrap()
                .to_tab()
                .with_panel(second),
        );
        assert_eq!(app.views().len(), 2);

        app.handle_key_event(key_with(KeyCode::Char('1'), KeyModifiers::ALT))
            .unwrap();

        assert_eq!(app.layout().panels().len(), 1);
        assert!(!app.layout().contains_tab(&TabId::new("system-monitor")));
        assert_eq!(app.views().len(), 1);
    }

    #[test]
    fn test_split_toggle_updates_layout_and_config() {
        let mut app = signed_in();
        assert_eq!(app.layout().split_direction(), SplitDirection::Horizontal);

        app.handle_key_event(key_with(KeyCode::Char('s'), KeyModifiers::ALT))
            .unwrap();

        assert_eq!(app.layout().split_direction(), SplitDirection::Vertical);
        assert_eq!(app.state().config.workspace.split_direction, "vertical");
    }

    #[test]
    fn test_sidebar_keyboard_opens_a_campaign_tab() {
        let mut app = signed_in();
        // Tab wraps focus from the sole panel back to the sidebar.
        app.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state().focus, FocusTarget::Sidebar);

        // Root and tenant rows are branches; row 2 is the first leaf.
        app.handle_key_event(key(KeyCode::Down)).unwrap();
        app.handle_key_event(key(KeyCode::Down)).unwrap();
        app.handle_key_event(key(KeyCode::Enter)).unwrap();

        let id = TabId::new("campaign:sk-mobile-support");
        assert!(app.layout().contains_tab(&id));
        assert_eq!(app.views().len(), 2);
        let first = app.layout().first_panel_id().unwrap();
        assert_eq!(app.state().focus, FocusTarget::Panel(first));
    }

    #[test]
    fn test_sidebar_click_toggles_a_branch() {
        let mut app = signed_in();
        let geometry = app.frame_geometry();
        let tree = geometry.sidebar.unwrap().tree;
        let rows_before = app.state().sidebar.rows().len();

        // Row 1 is the first tenant branch.
        press(&mut app, tree.x + 2, tree.y + 1);
        let rows_after = app.state().sidebar.rows().len();
        assert!(rows_after < rows_before);
        assert_eq!(app.state().focus, FocusTarget::Sidebar);

        press(&mut app, tree.x + 2, tree.y + 1);
        assert_eq!(app.state().sidebar.rows().len(), rows_before);
    }

    #[test]
    fn test_sidebar_section_click_switches_sections() {
        let mut app = signed_in();
        let geometry = app.frame_geometry();
        let sections = geometry.sidebar.unwrap().sections;

        press(&mut app, sections[2].x + 1, sections[2].y);
        assert_eq!(app.state().sidebar.section, menu::SidebarSection::Groups);
        assert_eq!(app.state().sidebar.selected, 0);
    }

    #[test]
    fn test_launcher_opens_features_from_the_keyboard() {
        let mut app = signed_in();
        app.handle_key_event(key_with(KeyCode::Char('o'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.state().launcher.open);

        app.handle_key_event(key(KeyCode::Down)).unwrap();
        app.handle_key_event(key(KeyCode::Down)).unwrap();
        app.handle_key_event(key(KeyCode::Enter)).unwrap();

        assert!(!app.state().launcher.open);
        // Catalog index 2 is the Unified Monitor.
        assert!(app.layout().contains_tab(&TabId::new("monitor-board")));
    }

    #[test]
    fn test_keyboard_move_follows_the_tab() {
        let mut app = signed_in();
        app.handle_key_event(key_with(KeyCode::Char('2'), KeyModifiers::ALT))
            .unwrap();
        let first = app.layout().first_panel_id().unwrap();
        let second = app.layout().panels()[1].id();
        app.state_mut().focus = FocusTarget::Panel(first);

        app.handle_key_event(key_with(
            KeyCode::Right,
            KeyModifiers::ALT | KeyModifiers::SHIFT,
        ))
        .unwrap();

        assert_eq!(
            app.layout().owner_of(&TabId::new("dashboard")),
            Some(second)
        );
        assert_eq!(app.state().focus, FocusTarget::Panel(second));
    }

    #[test]
    fn test_keyboard_reorder_shifts_the_active_tab() {
        let mut app = signed_in();
        app.open_tab(menu::find_item("call-status").unwrap().to_tab());
        let first = app.layout().first_panel_id().unwrap();

        app.handle_key_event(key_with(KeyCode::Char('['), KeyModifiers::ALT))
            .unwrap();

        assert_eq!(
            app.layout().panel(first).unwrap().tab_ids(),
            vec![TabId::new("call-status"), TabId::new("dashboard")]
        );
        // Still the active tab after the shift.
        assert_eq!(
            app.layout().panel(first).unwrap().active_tab(),
            Some(&TabId::new("call-status"))
        );
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut app = signed_in();
        app.handle_key_event(key_with(KeyCode::Char('q'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_focus_lost_aborts_gestures() {
        let mut app = signed_in();
        app.open_tab(menu::find_item("call-status").unwrap().to_tab());

        let geometry = app.frame_geometry();
        let tab = &geometry.workspace.panels[0].tabs[0];
        press(&mut app, tab.area.x + 1, tab.area.y);
        drag_to(&mut app, tab.area.x + 8, tab.area.y + 4);
        assert!(app.drag().is_dragging());

        app.abort_gestures();
        assert!(!app.drag().is_dragging());
    }
}
