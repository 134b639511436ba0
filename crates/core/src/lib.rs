//! Core types and traits for callgrid.
//!
//! This crate provides the shared vocabulary of the workspace: tab and panel
//! identities, split-screen configuration, the content-view trait rendered
//! inside tabs, and the terminal event pump. It carries no layout logic and
//! no application state.

pub mod event;
pub mod split;
pub mod tab;
pub mod view;

pub use event::{Event, EventHandler};
pub use split::{ScreenCount, SplitDirection};
pub use tab::{PanelId, Tab, TabId};
pub use view::{ContentView, ViewContext};

// Re-export the theme for convenience
pub use callgrid_theme::Theme;
