//! Tab and panel identities and the tab record.
//!
//! A tab is pure data: identity, display label, logical route path, and a
//! back-reference to its owning panel. The renderable content behind a tab
//! lives in the view registry, keyed by `TabId`, never inside the record
//! itself, so the record stays cheap to clone and trivial to snapshot.

use std::fmt;

/// Identity of a tab, unique across all panels.
///
/// Feature tabs use the catalog id (`"campaign-manage"`); campaign tabs
/// opened from the sidebar use `"campaign:<leaf-id>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identity of a panel.
///
/// Ids come from a monotonically increasing counter owned by the layout
/// state; they are stable for the life of the panel and never reused or
/// renumbered, so a captured id stays valid across structural changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(u64);

impl PanelId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panel-{}", self.0)
    }
}

/// A unit of openable content: one feature or campaign page.
///
/// `panel` is a placement hint on an open request; once the tab is stored,
/// the layout keeps it pointing at the actual owner. It is a convenience
/// back-reference, not the source of truth for membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
    pub path: String,
    pub closable: bool,
    pub panel: Option<PanelId>,
}

impl Tab {
    /// Create a closable tab with no placement hint.
    pub fn new(id: impl Into<TabId>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: path.into(),
            closable: true,
            panel: None,
        }
    }

    /// Request placement in a specific panel.
    pub fn with_panel(mut self, panel: PanelId) -> Self {
        self.panel = Some(panel);
        self
    }

    /// Mark the tab as not closable by the user.
    pub fn pinned(mut self) -> Self {
        self.closable = false;
        self
    }
}
