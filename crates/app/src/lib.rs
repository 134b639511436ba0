//! Application shell for callgrid.
//!
//! This crate ties the workspace crates together and provides:
//! - `App` - the main application: event loop, layout, views, gestures
//! - `AppState` - global application state read by the renderer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        callgrid (bin)                           │
//! │  main.rs - entry point, terminal setup, render callback         │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    callgrid-app (this crate)                    │
//! │  App, AppState, keyboard and mouse handlers                     │
//! └─────────────────────────────────────────────────────────────────┘
//!            │              │              │              │
//!            ▼              ▼              ▼              ▼
//!     ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//!     │  layout  │   │   dnd    │   │  views   │   │ ui/menu  │
//!     └──────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```

pub mod app;
pub mod state;

// Re-export main types for convenience
pub use app::App;
pub use state::{
    AppState, FocusTarget, LauncherState, LoginField, LoginForm, Screen, SidebarState,
};
