//! The feature catalog behind the header menu and the launcher.

use callgrid_core::Tab;

/// One openable feature.
///
/// The id doubles as the tab id, so opening the same feature twice
/// re-activates the existing tab instead of duplicating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
}

impl MenuItem {
    /// Build the workspace tab for this feature.
    pub fn to_tab(&self) -> Tab {
        Tab::new(self.id, self.label, format!("/{}", self.id))
    }
}

const MAIN_MENU: &[MenuItem] = &[
    MenuItem {
        id: "campaign-group",
        label: "Campaign Groups",
    },
    MenuItem {
        id: "campaign-manage",
        label: "Campaign Manager",
    },
    MenuItem {
        id: "monitor-board",
        label: "Unified Monitor",
    },
    MenuItem {
        id: "dashboard",
        label: "Dashboard",
    },
    MenuItem {
        id: "call-status",
        label: "Call Status",
    },
    MenuItem {
        id: "campaign-history",
        label: "Campaign History",
    },
    MenuItem {
        id: "retry-monitor",
        label: "Retry Monitor",
    },
    MenuItem {
        id: "system-monitor",
        label: "System Monitor",
    },
];

/// All features, in header display order.
pub fn main_menu() -> &'static [MenuItem] {
    MAIN_MENU
}

/// Look up a feature by id.
pub fn find_item(id: &str) -> Option<&'static MenuItem> {
    MAIN_MENU.iter().find(|item| item.id == id)
}
