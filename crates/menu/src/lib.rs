//! Feature catalog and sidebar navigation data for callgrid.
//!
//! The catalog lists every feature that can be opened as a workspace tab
//! from the header menu or the launcher. The sidebar module holds the
//! campaign navigation trees. Both are pure data: turning an entry into
//! renderable content is the view registry's job.

mod catalog;
mod sidebar;

pub use catalog::{find_item, main_menu, MenuItem};
pub use sidebar::{
    default_expanded, find_campaign, flatten_visible, section_tree, FlatNode, NodeKind,
    NodeStatus, SidebarNode, SidebarSection,
};
