//! Terminal event pump.
//!
//! Wraps crossterm polling into a single `Event` stream with a steady tick,
//! so the application loop has exactly one thing to wait on.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Application event.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard press
    Key(KeyEvent),
    /// Mouse press, drag, release, or scroll
    Mouse(MouseEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Periodic tick (clock, sampling, animations)
    Tick,
    /// Terminal window lost focus
    FocusLost,
    /// Terminal window gained focus
    FocusGained,
}

/// Polls the terminal for events, emitting `Tick` when idle.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Block until the next event or the tick interval elapses.
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Terminals speaking the kitty protocol also deliver Release
                // and Repeat; acting on Press alone avoids double handling.
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
                CrosstermEvent::Key(_) => Ok(Event::Tick),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                CrosstermEvent::FocusLost => Ok(Event::FocusLost),
                CrosstermEvent::FocusGained => Ok(Event::FocusGained),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}
