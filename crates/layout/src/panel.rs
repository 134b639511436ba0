//! A single panel: ordered tab strip plus active selection.

use callgrid_core::{PanelId, Tab, TabId};

/// One visible region of the workspace.
///
/// Tab order is display order in the tab strip. `active_tab`, when present,
/// always references a member of `tabs`; every mutation here repairs the
/// selection so that can never go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    id: PanelId,
    tabs: Vec<Tab>,
    active_tab: Option<TabId>,
}

impl Panel {
    /// Create an empty panel.
    pub fn new(id: PanelId) -> Self {
        Self {
            id,
            tabs: Vec::new(),
            active_tab: None,
        }
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_tab(&self) -> Option<&TabId> {
        self.active_tab.as_ref()
    }

    /// Get the active tab record, if any.
    pub fn active(&self) -> Option<&Tab> {
        let id = self.active_tab.as_ref()?;
        self.tabs.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, tab_id: &TabId) -> bool {
        self.tabs.iter().any(|t| &t.id == tab_id)
    }

    /// Position of a tab in the strip.
    pub fn position(&self, tab_id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == tab_id)
    }

    pub fn tab(&self, tab_id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| &t.id == tab_id)
    }

    /// Current tab ids, in strip order.
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id.clone()).collect()
    }

    // Mutation is reserved for `LayoutState`, which guards the cross-panel
    // invariants (id uniqueness, back-reference sync).

    pub(crate) fn push_tab(&mut self, tab: Tab) {
        self.tabs.push(tab);
    }

    pub(crate) fn set_active(&mut self, tab_id: Option<TabId>) {
        self.active_tab = tab_id;
    }

    /// Remove a tab and repair the selection: a removed active tab hands the
    /// slot to the new last tab, or clears it when the panel empties.
    pub(crate) fn remove_tab(&mut self, tab_id: &TabId) {
        self.take_tab(tab_id);
    }

    /// Remove a tab and return it, repairing the selection as in
    /// `remove_tab`. Returns `None` when the tab is not here.
    pub(crate) fn take_tab(&mut self, tab_id: &TabId) -> Option<Tab> {
        let pos = self.position(tab_id)?;
        let tab = self.tabs.remove(pos);
        if self.active_tab.as_ref() == Some(tab_id) {
            self.active_tab = self.tabs.last().map(|t| t.id.clone());
        }
        Some(tab)
    }

    /// Rebuild the strip to exactly the tabs named by `new_order`, in that
    /// order. Unknown ids are ignored; tabs omitted from the order are
    /// dropped, and a dropped active selection falls back to the new last
    /// tab.
    pub(crate) fn reorder(&mut self, new_order: &[TabId]) {
        let mut pool = std::mem::take(&mut self.tabs);
        for id in new_order {
            if let Some(pos) = pool.iter().position(|t| &t.id == id) {
                self.tabs.push(pool.remove(pos));
            }
        }
        let stale = self
            .active_tab
            .as_ref()
            .is_some_and(|active| !self.contains(active));
        if stale {
            self.active_tab = self.tabs.last().map(|t| t.id.clone());
        }
    }

    /// Split into the tab list and the active selection.
    pub(crate) fn into_parts(self) -> (Vec<Tab>, Option<TabId>) {
        (self.tabs, self.active_tab)
    }
}
