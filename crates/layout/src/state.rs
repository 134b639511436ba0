//! The layout state: ordered panels, screen configuration, and every
//! transition that rearranges them.

use callgrid_core::{PanelId, ScreenCount, SplitDirection, Tab, TabId};

use crate::Panel;

/// Canonical in-memory layout of the workspace.
///
/// One instance is owned by the application root and passed by reference to
/// whatever needs to read or mutate it; there is no process-wide layout.
///
/// Panel ids come from a monotonic counter and are never reused or
/// renumbered, so ids captured by in-flight gestures stay valid across
/// structural changes. The sequence always holds at least one panel.
#[derive(Debug, Clone)]
pub struct LayoutState {
    panels: Vec<Panel>,
    screen_count: ScreenCount,
    split_direction: SplitDirection,
    next_panel: u64,
}

impl LayoutState {
    /// Create a layout with a single empty panel.
    pub fn new() -> Self {
        let mut state = Self {
            panels: Vec::new(),
            screen_count: ScreenCount::default(),
            split_direction: SplitDirection::default(),
            next_panel: 0,
        };
        let id = state.alloc_panel_id();
        state.panels.push(Panel::new(id));
        state
    }

    fn alloc_panel_id(&mut self) -> PanelId {
        self.next_panel += 1;
        PanelId::new(self.next_panel)
    }

    // ===== Read access =====

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    pub fn panel_index(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id() == id)
    }

    pub fn first_panel_id(&self) -> Option<PanelId> {
        self.panels.first().map(|p| p.id())
    }

    pub fn screen_count(&self) -> ScreenCount {
        self.screen_count
    }

    pub fn is_split(&self) -> bool {
        self.screen_count.is_split()
    }

    pub fn split_direction(&self) -> SplitDirection {
        self.split_direction
    }

    /// Panel currently owning a tab id.
    pub fn owner_of(&self, tab_id: &TabId) -> Option<PanelId> {
        self.panels
            .iter()
            .find(|p| p.contains(tab_id))
            .map(|p| p.id())
    }

    pub fn contains_tab(&self, tab_id: &TabId) -> bool {
        self.owner_of(tab_id).is_some()
    }

    pub fn find_tab(&self, tab_id: &TabId) -> Option<&Tab> {
        self.panels.iter().find_map(|p| p.tab(tab_id))
    }

    /// All tab ids across panels, in panel order then strip order.
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.panels.iter().flat_map(|p| p.tab_ids()).collect()
    }

    pub fn tab_count(&self) -> usize {
        self.panels.iter().map(|p| p.len()).sum()
    }

    fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id() == id)
    }

    // ===== Transitions =====
    //
    // Every operation below is total: malformed references degrade to
    // no-ops, and no code path leaves the state partially mutated.

    /// Resize the panel sequence to exactly `count` panels.
    ///
    /// Surviving panels keep their identity and position; growth appends
    /// fresh empty panels; shrinkage drops trailing panels together with
    /// their tabs.
    pub fn set_screen_count(&mut self, count: ScreenCount) {
        let n = count.as_usize();
        if n < self.panels.len() {
            self.panels.truncate(n);
        } else {
            while self.panels.len() < n {
                let id = self.alloc_panel_id();
                self.panels.push(Panel::new(id));
            }
        }
        self.screen_count = count;
    }

    /// Update the split direction. Panels are untouched.
    pub fn set_split_direction(&mut self, direction: SplitDirection) {
        self.split_direction = direction;
    }

    /// Open a tab.
    ///
    /// An id that already exists anywhere only activates its owning panel's
    /// selection (bring-to-front, never a duplicate insert and never a
    /// relocation). Otherwise the tab lands in its hinted panel, falling
    /// back to the first panel when the hint is unset or stale, and becomes
    /// that panel's active tab with its back-reference normalized.
    pub fn add_tab(&mut self, tab: Tab) {
        if let Some(owner) = self.owner_of(&tab.id) {
            if let Some(panel) = self.panel_mut(owner) {
                panel.set_active(Some(tab.id));
            }
            return;
        }

        if self.panels.is_empty() {
            // Unreachable through the public surface (the sequence never
            // empties), kept as the absorbing branch for a blank state.
            let id = self.alloc_panel_id();
            self.panels.push(Panel::new(id));
        }

        let target = tab
            .panel
            .filter(|id| self.panel_index(*id).is_some())
            .or_else(|| self.first_panel_id());
        let Some(target) = target else { return };

        let mut tab = tab;
        tab.panel = Some(target);
        let active = tab.id.clone();
        if let Some(panel) = self.panel_mut(target) {
            panel.push_tab(tab);
            panel.set_active(Some(active));
        }
    }

    /// Close a tab in the named panel.
    ///
    /// Closing the active tab hands the selection to the new last tab, or
    /// clears it when the panel empties. Unknown panel or tab: no-op.
    pub fn remove_tab(&mut self, tab_id: &TabId, panel_id: PanelId) {
        if let Some(panel) = self.panel_mut(panel_id) {
            panel.remove_tab(tab_id);
        }
    }

    /// Activate a tab in the named panel.
    ///
    /// Validated defensively: a tab id the panel does not contain is a
    /// no-op, so the selection can never point outside the strip.
    pub fn set_active_tab(&mut self, tab_id: &TabId, panel_id: PanelId) {
        let Some(panel) = self.panel_mut(panel_id) else {
            return;
        };
        if panel.contains(tab_id) {
            panel.set_active(Some(tab_id.clone()));
        }
    }

    /// Relocate a tab between panels.
    ///
    /// No-op when source equals target, either panel is unknown, or the tab
    /// is not in the source. If the target somehow already holds the id,
    /// only its selection is set. Otherwise the tab leaves the source (with
    /// the same selection repair as `remove_tab`), is appended to the
    /// target with its back-reference updated, and becomes the target's
    /// active tab.
    pub fn move_tab(&mut self, tab_id: &TabId, source: PanelId, target: PanelId) {
        if source == target {
            return;
        }
        let (Some(src), Some(dst)) = (self.panel_index(source), self.panel_index(target)) else {
            return;
        };

        if self.panels[dst].contains(tab_id) {
            self.panels[dst].set_active(Some(tab_id.clone()));
            return;
        }

        let Some(mut tab) = self.panels[src].take_tab(tab_id) else {
            return;
        };
        tab.panel = Some(target);
        self.panels[dst].push_tab(tab);
        self.panels[dst].set_active(Some(tab_id.clone()));
    }

    /// Rebuild the named panel's strip to exactly `new_order`.
    ///
    /// Filter-then-map: ids not in the panel are ignored, tabs omitted from
    /// the order are dropped, and a dropped active selection falls back to
    /// the new last tab.
    pub fn reorder_tabs(&mut self, panel_id: PanelId, new_order: &[TabId]) {
        if let Some(panel) = self.panel_mut(panel_id) {
            panel.reorder(new_order);
        }
    }

    /// Close a panel.
    ///
    /// Its tabs survive: they are appended to the left neighbor (or the new
    /// first panel when the first one was closed) and the closed panel's
    /// active tab carries the selection over. Closing the sole panel resets
    /// the layout to one fresh empty panel. The screen count is recomputed
    /// from the surviving sequence; ids are never renumbered.
    pub fn remove_panel(&mut self, panel_id: PanelId) {
        let Some(idx) = self.panel_index(panel_id) else {
            return;
        };
        let removed = self.panels.remove(idx);

        if self.panels.is_empty() {
            let id = self.alloc_panel_id();
            self.panels.push(Panel::new(id));
        } else if !removed.is_empty() {
            let receiver_idx = idx.saturating_sub(1);
            let receiver_id = self.panels[receiver_idx].id();
            let (tabs, removed_active) = removed.into_parts();
            for mut tab in tabs {
                tab.panel = Some(receiver_id);
                self.panels[receiver_idx].push_tab(tab);
            }
            if removed_active.is_some() {
                self.panels[receiver_idx].set_active(removed_active);
            }
        }

        self.screen_count = ScreenCount::new(self.panels.len() as u8);
    }

    /// Move panel `active` to panel `over`'s position, preserving the
    /// relative order of everything else. No-op when either id is unknown
    /// or they are equal.
    pub fn reorder_panels(&mut self, active: PanelId, over: PanelId) {
        if active == over {
            return;
        }
        let (Some(from), Some(to)) = (self.panel_index(active), self.panel_index(over)) else {
            return;
        };
        let panel = self.panels.remove(from);
        self.panels.insert(to, panel);
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str) -> Tab {
        Tab::new(id, id.to_uppercase(), format!("/{}", id))
    }

    fn tab_in(id: &str, panel: PanelId) -> Tab {
        tab(id).with_panel(panel)
    }

    /// Shorthand: the id of the panel at a position.
    fn pid(state: &LayoutState, idx: usize) -> PanelId {
        state.panels()[idx].id()
    }

    #[test]
    fn test_new_layout_has_one_empty_panel() {
        let state = LayoutState::new();
        assert_eq!(state.panels().len(), 1);
        assert!(state.panels()[0].is_empty());
        assert_eq!(state.screen_count().get(), 1);
        assert!(!state.is_split());
        assert_eq!(state.split_direction(), SplitDirection::Horizontal);
    }

    #[test]
    fn test_distinct_adds_accumulate() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(3));
        let p2 = pid(&state, 1);

        state.add_tab(tab("a"));
        state.add_tab(tab_in("b", p2));
        state.add_tab(tab("c"));
        state.add_tab(tab_in("d", p2));

        assert_eq!(state.tab_count(), 4);
        assert_eq!(state.panels()[0].tab_ids(), vec!["a".into(), "c".into()]);
        assert_eq!(state.panels()[1].tab_ids(), vec!["b".into(), "d".into()]);
        assert!(state.panels()[2].is_empty());
    }

    #[test]
    fn test_add_tab_is_idempotent_except_selection() {
        let mut state = LayoutState::new();
        state.add_tab(tab("a"));
        state.add_tab(tab("b"));
        assert_eq!(state.panels()[0].active_tab(), Some(&"b".into()));

        let before = state.panels()[0].tab_ids();
        state.add_tab(tab("a"));
        state.add_tab(tab("a"));

        assert_eq!(state.panels()[0].tab_ids(), before);
        assert_eq!(state.tab_count(), 2);
        // The one observable effect: the selection moves each time.
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));
    }

    #[test]
    fn test_add_existing_tab_activates_without_relocating() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(2));
        let (p1, p2) = (pid(&state, 0), pid(&state, 1));

        state.add_tab(tab_in("a", p1));
        state.add_tab(tab_in("b", p1));
        assert_eq!(state.panels()[0].active_tab(), Some(&"b".into()));

        // Re-opening "a" hinted at the other panel must not move it.
        state.add_tab(tab_in("a", p2));
        assert_eq!(state.owner_of(&"a".into()), Some(p1));
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));
        assert!(state.panels()[1].is_empty());
    }

    #[test]
    fn test_add_tab_falls_back_to_first_panel_on_stale_hint() {
        let mut state = LayoutState::new();
        let stale = PanelId::new(999);
        state.add_tab(tab_in("a", stale));

        let first = state.first_panel_id().unwrap();
        assert_eq!(state.owner_of(&"a".into()), Some(first));
        // The back-reference is normalized to the actual owner.
        assert_eq!(state.find_tab(&"a".into()).unwrap().panel, Some(first));
    }

    #[test]
    fn test_remove_then_re_add_restores_active_tab() {
        let mut state = LayoutState::new();
        let p1 = pid(&state, 0);
        state.add_tab(tab("a"));
        let stored = state.find_tab(&"a".into()).unwrap().clone();

        state.remove_tab(&"a".into(), p1);
        assert_eq!(state.tab_count(), 0);
        assert_eq!(state.panels()[0].active_tab(), None);

        state.add_tab(stored);
        assert_eq!(state.panels()[0].tab_ids(), vec!["a".into()]);
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));
    }

    #[test]
    fn test_remove_active_tab_selects_new_last() {
        let mut state = LayoutState::new();
        let p1 = pid(&state, 0);
        state.add_tab(tab("a"));
        state.add_tab(tab("b"));
        state.add_tab(tab("c"));

        state.remove_tab(&"c".into(), p1);
        assert_eq!(state.panels()[0].active_tab(), Some(&"b".into()));

        // Removing a non-active tab leaves the selection alone.
        state.remove_tab(&"a".into(), p1);
        assert_eq!(state.panels()[0].active_tab(), Some(&"b".into()));
    }

    #[test]
    fn test_remove_tab_misses_are_noops() {
        let mut state = LayoutState::new();
        let p1 = pid(&state, 0);
        state.add_tab(tab("a"));
        let snapshot = state.panels().to_vec();

        state.remove_tab(&"ghost".into(), p1);
        state.remove_tab(&"a".into(), PanelId::new(999));
        assert_eq!(state.panels(), &snapshot[..]);
    }

    #[test]
    fn test_set_active_tab_requires_membership() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(2));
        let (p1, p2) = (pid(&state, 0), pid(&state, 1));
        state.add_tab(tab_in("a", p1));
        state.add_tab(tab_in("b", p1));

        state.set_active_tab(&"a".into(), p1);
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));

        // "b" lives in the other panel; activating it here is a no-op.
        state.set_active_tab(&"b".into(), p2);
        assert_eq!(state.panels()[1].active_tab(), None);

        state.set_active_tab(&"ghost".into(), p1);
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));
    }

    #[test]
    fn test_move_tab_round_trip() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(2));
        let (p1, p2) = (pid(&state, 0), pid(&state, 1));
        state.add_tab(tab_in("a", p1));
        state.add_tab(tab_in("b", p1));

        state.move_tab(&"a".into(), p1, p2);
        assert_eq!(state.panels()[0].tab_ids(), vec!["b".into()]);
        assert_eq!(state.panels()[1].tab_ids(), vec!["a".into()]);
        assert_eq!(state.panels()[1].active_tab(), Some(&"a".into()));
        assert_eq!(state.find_tab(&"a".into()).unwrap().panel, Some(p2));

        state.move_tab(&"a".into(), p2, p1);
        assert_eq!(state.panels()[0].tab_ids(), vec!["b".into(), "a".into()]);
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));
        assert!(state.panels()[1].is_empty());
        assert_eq!(state.find_tab(&"a".into()).unwrap().panel, Some(p1));
    }

    #[test]
    fn test_move_tab_misses_are_noops() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(2));
        let (p1, p2) = (pid(&state, 0), pid(&state, 1));
        state.add_tab(tab_in("a", p1));
        let snapshot = state.panels().to_vec();

        state.move_tab(&"a".into(), p1, p1); // self move
        state.move_tab(&"ghost".into(), p1, p2); // unknown tab
        state.move_tab(&"a".into(), p2, p1); // tab not in source
        state.move_tab(&"a".into(), p1, PanelId::new(999)); // unknown target
        state.move_tab(&"a".into(), PanelId::new(999), p2); // unknown source

        assert_eq!(state.panels(), &snapshot[..]);
    }

    #[test]
    fn test_reorder_tabs_full_permutation() {
        let mut state = LayoutState::new();
        let p1 = pid(&state, 0);
        state.add_tab(tab("a"));
        state.add_tab(tab("b"));
        state.add_tab(tab("c"));

        let order: Vec<TabId> = vec!["c".into(), "a".into(), "b".into()];
        state.reorder_tabs(p1, &order);
        assert_eq!(state.panels()[0].tab_ids(), order);
        // A full permutation never disturbs the selection.
        assert_eq!(state.panels()[0].active_tab(), Some(&"c".into()));
    }

    #[test]
    fn test_reorder_tabs_unknown_panel_is_noop() {
        let mut state = LayoutState::new();
        state.add_tab(tab("a"));
        state.reorder_tabs(PanelId::new(999), &["a".into()]);
        assert_eq!(state.panels()[0].tab_ids(), vec![TabId::new("a")]);
    }

    #[test]
    fn test_screen_count_growth_appends_fresh_panels() {
        let mut state = LayoutState::new();
        state.add_tab(tab("a"));
        let p1 = pid(&state, 0);

        state.set_screen_count(ScreenCount::new(3));
        assert_eq!(state.panels().len(), 3);
        assert_eq!(pid(&state, 0), p1);
        assert_eq!(state.panels()[0].tab_ids(), vec![TabId::new("a")]);
        assert!(state.panels()[1].is_empty());
        assert!(state.panels()[2].is_empty());
        assert!(state.is_split());

        // Fresh ids, not reused ones.
        assert_ne!(pid(&state, 1), p1);
        assert_ne!(pid(&state, 2), pid(&state, 1));
    }

    #[test]
    fn test_screen_count_shrink_keeps_leading_panels_only() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(5));
        let p1 = pid(&state, 0);
        let p4 = pid(&state, 3);

        state.add_tab(tab_in("keep", p1));
        state.add_tab(tab_in("gone", p4));

        state.set_screen_count(ScreenCount::new(1));
        assert_eq!(state.panels().len(), 1);
        assert_eq!(pid(&state, 0), p1);
        // Exactly the leading panel's tabs survive truncation.
        assert_eq!(state.tab_ids(), vec![TabId::new("keep")]);
        assert!(!state.contains_tab(&"gone".into()));
    }

    #[test]
    fn test_remove_panel_hands_tabs_to_left_neighbor() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(3));
        let (p1, p2, p3) = (pid(&state, 0), pid(&state, 1), pid(&state, 2));
        state.add_tab(tab_in("a", p1));
        state.add_tab(tab_in("b", p2));
        state.add_tab(tab_in("c", p2));
        state.set_active_tab(&"b".into(), p2);

        state.remove_panel(p2);

        assert_eq!(state.panels().len(), 2);
        assert_eq!(pid(&state, 0), p1);
        assert_eq!(pid(&state, 1), p3);
        assert_eq!(state.screen_count().get(), 2);
        assert_eq!(
            state.panels()[0].tab_ids(),
            vec![TabId::new("a"), TabId::new("b"), TabId::new("c")]
        );
        // The closed panel's selection carries over.
        assert_eq!(state.panels()[0].active_tab(), Some(&"b".into()));
        assert_eq!(state.find_tab(&"b".into()).unwrap().panel, Some(p1));
    }

    #[test]
    fn test_remove_first_panel_hands_tabs_forward() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(2));
        let (p1, p2) = (pid(&state, 0), pid(&state, 1));
        state.add_tab(tab_in("a", p1));
        state.add_tab(tab_in("b", p2));

        state.remove_panel(p1);
        assert_eq!(state.panels().len(), 1);
        assert_eq!(pid(&state, 0), p2);
        assert_eq!(
            state.panels()[0].tab_ids(),
            vec![TabId::new("b"), TabId::new("a")]
        );
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));
    }

    #[test]
    fn test_remove_sole_panel_resets_to_fresh_empty_panel() {
        let mut state = LayoutState::new();
        let p1 = pid(&state, 0);
        state.add_tab(tab("a"));

        state.remove_panel(p1);
        assert_eq!(state.panels().len(), 1);
        assert_ne!(pid(&state, 0), p1);
        assert!(state.panels()[0].is_empty());
        assert_eq!(state.screen_count().get(), 1);
    }

    #[test]
    fn test_remove_panel_unknown_is_noop() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(2));
        let snapshot = state.panels().to_vec();
        state.remove_panel(PanelId::new(999));
        assert_eq!(state.panels(), &snapshot[..]);
        assert_eq!(state.screen_count().get(), 2);
    }

    #[test]
    fn test_panel_ids_are_never_reused() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(3));
        let mut seen: Vec<PanelId> = state.panels().iter().map(|p| p.id()).collect();

        state.set_screen_count(ScreenCount::new(1));
        state.set_screen_count(ScreenCount::new(3));
        for panel in &state.panels()[1..] {
            assert!(!seen.contains(&panel.id()));
            seen.push(panel.id());
        }

        state.remove_panel(pid(&state, 2));
        state.set_screen_count(ScreenCount::new(3));
        assert!(!seen.contains(&pid(&state, 2)));
    }

    #[test]
    fn test_reorder_panels_is_single_element_move() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(4));
        let (p1, p2, p3, p4) = (
            pid(&state, 0),
            pid(&state, 1),
            pid(&state, 2),
            pid(&state, 3),
        );
        state.add_tab(tab_in("a", p1));

        state.reorder_panels(p1, p3);
        let order: Vec<PanelId> = state.panels().iter().map(|p| p.id()).collect();
        assert_eq!(order, vec![p2, p3, p1, p4]);
        // Tabs ride along with their panel.
        assert_eq!(state.panels()[2].tab_ids(), vec![TabId::new("a")]);

        state.reorder_panels(p4, p2);
        let order: Vec<PanelId> = state.panels().iter().map(|p| p.id()).collect();
        assert_eq!(order, vec![p4, p2, p3, p1]);
    }

    #[test]
    fn test_reorder_panels_misses_are_noops() {
        let mut state = LayoutState::new();
        state.set_screen_count(ScreenCount::new(2));
        let p1 = pid(&state, 0);
        let snapshot: Vec<PanelId> = state.panels().iter().map(|p| p.id()).collect();

        state.reorder_panels(p1, p1);
        state.reorder_panels(p1, PanelId::new(999));
        state.reorder_panels(PanelId::new(999), p1);

        let order: Vec<PanelId> = state.panels().iter().map(|p| p.id()).collect();
        assert_eq!(order, snapshot);
    }

    // The end-to-end flow a user actually performs: open a feature, split
    // the screen, drag the tab across, close the split again.
    #[test]
    fn test_open_split_move_close_flow() {
        let mut state = LayoutState::new();
        let p1 = pid(&state, 0);

        state.add_tab(tab_in("a", p1));
        assert_eq!(state.panels()[0].tab_ids(), vec![TabId::new("a")]);
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));

        state.set_screen_count(ScreenCount::new(2));
        let p2 = pid(&state, 1);
        assert_eq!(state.panels()[0].tab_ids(), vec![TabId::new("a")]);
        assert!(state.panels()[1].is_empty());

        state.move_tab(&"a".into(), p1, p2);
        assert!(state.panels()[0].is_empty());
        assert_eq!(state.panels()[0].active_tab(), None);
        assert_eq!(state.panels()[1].tab_ids(), vec![TabId::new("a")]);
        assert_eq!(state.panels()[1].active_tab(), Some(&"a".into()));

        state.remove_panel(p2);
        assert_eq!(state.panels().len(), 1);
        assert_eq!(state.screen_count().get(), 1);
        assert_eq!(state.panels()[0].tab_ids(), vec![TabId::new("a")]);
        assert_eq!(state.panels()[0].active_tab(), Some(&"a".into()));
    }
}
