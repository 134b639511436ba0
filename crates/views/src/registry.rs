//! The view registry: live content instances keyed by tab id.

use callgrid_core::{ContentView, Tab, TabId};
use callgrid_layout::LayoutState;
use std::collections::HashMap;

use crate::{
    CallStatusView, CampaignDetailView, CampaignGroupView, CampaignHistoryView,
    CampaignManageView, DashboardView, MonitorBoardView, PlaceholderView, RetryMonitorView,
    SystemMonitorView,
};

/// Owns every live view. Views are created lazily the first time a tab
/// is opened and dropped when the tab disappears from the layout, so
/// view state (scroll positions, selections, samplers) survives moves
/// and reorders but not a close.
#[derive(Default)]
pub struct ViewRegistry {
    views: HashMap<TabId, Box<dyn ContentView>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    /// Make sure a view exists for the tab, building one on first sight.
    pub fn ensure(&mut self, tab: &Tab) {
        if !self.views.contains_key(&tab.id) {
            self.views.insert(tab.id.clone(), build_view(tab));
        }
    }

    pub fn get_mut(&mut self, id: &TabId) -> Option<&mut (dyn ContentView + '_)> {
        match self.views.get_mut(id) {
            Some(view) => Some(view.as_mut()),
            None => None,
        }
    }

    /// Drop views whose tab no longer exists anywhere in the layout.
    pub fn prune(&mut self, layout: &LayoutState) {
        self.views.retain(|id, _| layout.contains_tab(id));
    }

    /// Forward a tick to every live view.
    pub fn tick_all(&mut self) {
        for view in self.views.values_mut() {
            view.tick();
        }
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

/// Map a tab id to its content.
///
/// Feature ids come from the menu catalog; `campaign:` ids resolve
/// against the sidebar trees. Anything unknown renders a placeholder
/// rather than failing the open.
fn build_view(tab: &Tab) -> Box<dyn ContentView> {
    if let Some(leaf_id) = tab.id.as_str().strip_prefix("campaign:") {
        return match callgrid_menu::find_campaign(leaf_id) {
            Some(node) => Box::new(CampaignDetailView::new(node)),
            None => Box::new(PlaceholderView::new(tab.label.clone(), tab.id.as_str())),
        };
    }

    match tab.id.as_str() {
        "campaign-group" => Box::new(CampaignGroupView::new()),
        "campaign-manage" => Box::new(CampaignManageView::new()),
        "monitor-board" => Box::new(MonitorBoardView::new()),
        "dashboard" => Box::new(DashboardView::new()),
        "call-status" => Box::new(CallStatusView::new()),
        "campaign-history" => Box::new(CampaignHistoryView::new()),
        "retry-monitor" => Box::new(RetryMonitorView::new()),
        "system-monitor" => Box::new(SystemMonitorView::new()),
        _ => Box::new(PlaceholderView::new(tab.label.clone(), tab.id.as_str())),
    }
}
