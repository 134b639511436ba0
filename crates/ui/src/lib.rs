//! Shared presentation layer for callgrid.
//!
//! The renderer and the mouse handler both need to know where every
//! clickable region lives. `geometry` computes those rectangles from the
//! layout state alone, so painting and hit-testing can never disagree.

mod geometry;
mod input;
mod rect;

pub use geometry::{
    menu_item_rects, ChromeLayout, FrameGeometry, Hit, PanelGeometry, PanelSizes,
    SidebarGeometry, TabRect, WorkspaceGeometry, FOOTER_ROWS, GRAB_WIDTH, HEADER_ROWS,
    SIDEBAR_WIDTH, TAB_STRIP_ROWS,
};
pub use input::TextInput;
pub use rect::{centered_rect, with_margin};
