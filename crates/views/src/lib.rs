//! Content views behind workspace tabs.
//!
//! Every feature in the menu catalog has a view here, plus the campaign
//! detail view for tabs opened from the sidebar. The registry owns the
//! live view instances, keyed by tab id, and reconciles them against the
//! layout after structural changes.

mod campaign;
mod dashboard;
mod detail;
mod monitor;
mod placeholder;
mod registry;
mod system;
mod util;

pub use campaign::{CampaignGroupView, CampaignHistoryView, CampaignManageView};
pub use dashboard::DashboardView;
pub use detail::CampaignDetailView;
pub use monitor::{CallStatusView, MonitorBoardView, RetryMonitorView};
pub use placeholder::PlaceholderView;
pub use registry::ViewRegistry;
pub use system::SystemMonitorView;
