//! Main keyboard event handling for the application.
//!
//! Dispatches key events to the login form, the launcher, global
//! hotkeys, or whatever owns the keyboard focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use callgrid_core::{PanelId, ScreenCount};
use callgrid_logger as logger;
use callgrid_menu as menu;
use callgrid_ui::TextInput;

use super::App;
use crate::state::{FocusTarget, Screen};

impl App {
    /// Handle keyboard event
    pub(super) fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Log key event for debugging
        logger::debug(format!(
            "Key event: code={:?}, modifiers={:?}",
            key.code, key.modifiers
        ));

        // Clear status message on any key press
        if self.state.status_message.is_some() {
            self.state.clear_status();
        }

        match self.state.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => self.state.quit(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.state.login.next_field();
            }
            KeyCode::Enter => {
                if let Some(user) = self.state.login.submit() {
                    self.complete_login(user);
                }
            }
            KeyCode::Esc => self.state.login.error = None,
            _ => Self::apply_text_key(self.state.login.focused_input_mut(), key),
        }
        Ok(())
    }

    /// Line editing shared by both login inputs.
    fn apply_text_key(input: &mut TextInput, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.insert(c);
            }
            KeyCode::Backspace => {
                input.backspace();
            }
            KeyCode::Delete => {
                input.delete();
            }
            KeyCode::Left => {
                input.move_left();
            }
            KeyCode::Right => {
                input.move_right();
            }
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        // An open launcher swallows everything until it closes.
        if self.state.launcher.open {
            return self.handle_launcher_key(key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
                logger::info("Shutting down");
                self.state.quit();
            }
            KeyCode::Char('o') if ctrl => self.state.launcher.open(),
            KeyCode::Char('b') if ctrl => self.toggle_sidebar(),
            KeyCode::Char(c @ '1'..='5') if alt => {
                self.set_screen_count(ScreenCount::new(c as u8 - b'0'));
            }
            KeyCode::Char('s') if alt => self.toggle_split_direction(),
            KeyCode::Char('w') if ctrl => self.close_focused_tab(),
            KeyCode::Char('x') if alt => {
                let panel = self.state.focused_panel(&self.layout);
                self.close_panel(panel);
            }
            KeyCode::Esc => self.abort_gestures(),
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            _ => self.handle_focused_key(key),
        }
        Ok(())
    }

    fn handle_launcher_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let count = menu::main_menu().len();
        match key.code {
            KeyCode::Esc => self.state.launcher.close(),
            KeyCode::Char('o') if ctrl => self.state.launcher.close(),
            KeyCode::Up => self.state.launcher.select_prev(count),
            KeyCode::Down => self.state.launcher.select_next(count),
            KeyCode::Enter => {
                let item = menu::main_menu().get(self.state.launcher.selected).copied();
                self.state.launcher.close();
                if let Some(item) = item {
                    self.open_tab(item.to_tab());
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Hide or show the sidebar; focus leaves with it.
    fn toggle_sidebar(&mut self) {
        self.state.sidebar.visible = !self.state.sidebar.visible;
        if !self.state.sidebar.visible && self.state.focus == FocusTarget::Sidebar {
            let panel = self.state.focused_panel(&self.layout);
            self.state.focus = FocusTarget::Panel(panel);
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.state.focus {
            FocusTarget::Sidebar => self.handle_sidebar_key(key),
            FocusTarget::Panel(panel) => self.handle_panel_key(panel, key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.state.sidebar.select_prev();
                self.sync_sidebar_scroll();
            }
            KeyCode::Down => {
                self.state.sidebar.select_next();
                self.sync_sidebar_scroll();
            }
            KeyCode::Left => {
                if let Some(row) = self.state.sidebar.selected_row() {
                    if row.node.has_children() {
                        self.state.sidebar.set_expanded(row.node.id, false);
                    }
                }
            }
            KeyCode::Right => {
                if let Some(row) = self.state.sidebar.selected_row() {
                    if row.node.has_children() {
                        self.state.sidebar.set_expanded(row.node.id, true);
                    }
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_sidebar_row(),
            KeyCode::Char('s') => self.state.sidebar.cycle_section(),
            _ => {}
        }
    }

    fn handle_panel_key(&mut self, panel: PanelId, key: KeyEvent) {
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        // Alt+Shift before plain Alt: the arrow arms overlap.
        match key.code {
            KeyCode::Left if alt && shift => self.move_active_tab(panel, -1),
            KeyCode::Right if alt && shift => self.move_active_tab(panel, 1),
            KeyCode::Left if alt => self.activate_adjacent_tab(panel, -1),
            KeyCode::Right if alt => self.activate_adjacent_tab(panel, 1),
            KeyCode::Char('[') if alt => self.shift_active_tab(panel, -1),
            KeyCode::Char(']') if alt => self.shift_active_tab(panel, 1),
            _ => self.forward_to_view(panel, key),
        }
    }

    /// Hand anything unbound to the active view (table scrolling etc).
    fn forward_to_view(&mut self, panel: PanelId, key: KeyEvent) {
        let Some(active) = self
            .layout
            .panel(panel)
            .and_then(|p| p.active_tab())
            .cloned()
        else {
            return;
        };
        if let Some(view) = self.views.get_mut(&active) {
            view.handle_key(key);
        }
    }
}
