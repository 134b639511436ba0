//! Application state and types.
//!
//! Everything the renderer reads lives here: the active screen, the login
//! form, sidebar and launcher state, focus, panel sizes, and the ambient
//! pieces (config, theme, system monitor). Layout state is deliberately NOT
//! part of this struct; `App` owns it separately so handlers can borrow the
//! two independently.

use std::collections::HashSet;
use std::time::Instant;

use callgrid_config::Config;
use callgrid_core::PanelId;
use callgrid_layout::LayoutState;
use callgrid_menu::{default_expanded, flatten_visible, section_tree, FlatNode, SidebarSection};
use callgrid_system_monitor::SystemMonitor;
use callgrid_theme::Theme;
use callgrid_ui::{PanelSizes, TextInput};

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// Field focus on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// The sign-in form: two text inputs and a validation message.
#[derive(Debug)]
pub struct LoginForm {
    pub email: TextInput,
    pub password: TextInput,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            focus: LoginField::Email,
            error: None,
        }
    }

    /// The input the cursor is currently in.
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Validate the form. Returns the signed-in identity on success and
    /// records the validation message otherwise. Any non-empty pair is
    /// accepted; there is no credential backend.
    pub fn submit(&mut self) -> Option<String> {
        if self.email.is_empty() {
            self.error = Some("Enter your email address".to_string());
            self.focus = LoginField::Email;
            return None;
        }
        if self.password.is_empty() {
            self.error = Some("Enter your password".to_string());
            self.focus = LoginField::Password;
            return None;
        }
        self.error = None;
        Some(self.email.text().to_string())
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Sidebar navigation state: section, expansion set, selection, scroll.
///
/// The expansion set spans all sections, so switching away and back keeps
/// the operator's collapsed branches collapsed.
#[derive(Debug)]
pub struct SidebarState {
    pub section: SidebarSection,
    pub expanded: HashSet<String>,
    pub selected: usize,
    pub scroll: usize,
    pub visible: bool,
}

impl SidebarState {
    pub fn new() -> Self {
        let mut expanded = HashSet::new();
        for &section in SidebarSection::all() {
            expanded.extend(default_expanded(section));
        }
        Self {
            section: SidebarSection::default(),
            expanded,
            selected: 0,
            scroll: 0,
            visible: true,
        }
    }

    /// Visible tree rows for the current section.
    pub fn rows(&self) -> Vec<FlatNode> {
        flatten_visible(section_tree(self.section), &self.expanded)
    }

    /// The row the selection currently points at.
    pub fn selected_row(&self) -> Option<FlatNode> {
        self.rows().into_iter().nth(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let last = self.rows().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Point the selection at a visible row index, clamped to the tree.
    pub fn select_row(&mut self, index: usize) {
        let last = self.rows().len().saturating_sub(1);
        self.selected = index.min(last);
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
        self.clamp_selection();
    }

    pub fn set_expanded(&mut self, id: &str, expanded: bool) {
        if expanded {
            self.expanded.insert(id.to_string());
        } else {
            self.expanded.remove(id);
        }
        self.clamp_selection();
    }

    /// Switch to a section, resetting selection and scroll.
    pub fn set_section(&mut self, section: SidebarSection) {
        self.section = section;
        self.selected = 0;
        self.scroll = 0;
    }

    pub fn cycle_section(&mut self) {
        self.set_section(self.section.next());
    }

    /// Keep the selected row inside a viewport of `height` rows.
    pub fn scroll_to_selection(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + height {
            self.scroll = self.selected + 1 - height;
        }
    }

    fn clamp_selection(&mut self) {
        let last = self.rows().len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

/// The keyboard feature launcher: a dropdown listing the menu catalog.
#[derive(Debug, Default)]
pub struct LauncherState {
    pub open: bool,
    pub selected: usize,
}

impl LauncherState {
    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            count - 1
        } else {
            self.selected - 1
        };
    }

    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }
}

/// Where keyboard input is routed on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Sidebar,
    Panel(PanelId),
}

/// Global application state
#[derive(Debug)]
pub struct AppState {
    /// Should application quit
    pub should_quit: bool,
    /// Active top-level screen
    pub screen: Screen,
    /// Sign-in form state
    pub login: LoginForm,
    /// Signed-in identity, once past the login screen
    pub user: Option<String>,
    /// Keyboard focus on the dashboard
    pub focus: FocusTarget,
    /// Sidebar tree state
    pub sidebar: SidebarState,
    /// Feature launcher dropdown state
    pub launcher: LauncherState,
    /// User-adjusted panel extents (presentation only, never persisted)
    pub panel_sizes: PanelSizes,
    /// Status message shown in the footer: (text, is_error)
    pub status_message: Option<(String, bool)>,
    /// Current theme
    pub theme: &'static Theme,
    /// Application configuration
    pub config: Config,
    /// System resource monitor (CPU, RAM)
    pub system_monitor: SystemMonitor,
    /// Last time system resources were sampled
    pub last_resource_update: Instant,
    /// Monotonic tick counter driving animations and the clock
    pub tick: u64,
    /// Flag indicating UI needs to be redrawn (for CPU optimization)
    pub needs_redraw: bool,
    /// Terminal width in cells
    pub terminal_width: u16,
    /// Terminal height in cells
    pub terminal_height: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create new application state, loading config from file
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Could not load config: {}. Using defaults.", e);
            Config::default()
        });
        let theme = Theme::get_by_name(&config.general.theme);
        Self::with_config_and_theme(config, theme)
    }

    /// Create new application state with given config and theme
    pub fn with_config_and_theme(config: Config, theme: &'static Theme) -> Self {
        let panel_sizes = PanelSizes::new(config.workspace.min_panel_width);
        Self {
            should_quit: false,
            screen: Screen::Login,
            login: LoginForm::new(),
            user: None,
            focus: FocusTarget::Sidebar,
            sidebar: SidebarState::new(),
            launcher: LauncherState::default(),
            panel_sizes,
            status_message: None,
            theme,
            config,
            system_monitor: SystemMonitor::new(),
            last_resource_update: Instant::now(),
            tick: 0,
            needs_redraw: true, // Initial draw needed
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Set new theme and update config
    pub fn set_theme(&mut self, theme_name: &str) {
        self.theme = Theme::get_by_name(theme_name);
        self.config.general.theme = theme_name.to_string();
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Update terminal dimensions
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
    }

    /// Resolve the focused panel against the current layout.
    ///
    /// A focus target pointing at a removed panel falls back to the first
    /// panel. The sentinel id 0 is never allocated, so on the impossible
    /// empty layout every downstream operation degrades to a no-op.
    pub fn focused_panel(&self, layout: &LayoutState) -> PanelId {
        if let FocusTarget::Panel(id) = self.focus {
            if layout.panel(id).is_some() {
                return id;
            }
        }
        layout.first_panel_id().unwrap_or(PanelId::new(0))
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some((message, true));
    }

    /// Set informational message
    pub fn set_info(&mut self, message: String) {
        self.status_message = Some((message, false));
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
