//! Sidebar navigation trees.
//!
//! Three sections, each a tree of organization, tenant, and campaign
//! nodes. Campaign leaves carry an operational status and open as
//! detail tabs in the workspace.

use callgrid_core::Tab;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Node kind within a sidebar tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Organization,
    Tenant,
    Campaign,
}

/// Operational status of a campaign leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Active,
    Inactive,
    Warning,
}

/// One node of a sidebar tree.
#[derive(Debug, Clone)]
pub struct SidebarNode {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: NodeKind,
    pub status: Option<NodeStatus>,
    pub path: Option<&'static str>,
    pub children: Vec<SidebarNode>,
}

impl SidebarNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Build the detail tab for a campaign leaf.
    ///
    /// Returns `None` for organization and tenant nodes, which only
    /// expand and collapse.
    pub fn campaign_tab(&self) -> Option<Tab> {
        if self.kind != NodeKind::Campaign {
            return None;
        }
        let path = self
            .path
            .map(str::to_string)
            .unwrap_or_else(|| format!("/campaign/{}", self.id));
        Some(Tab::new(format!("campaign:{}", self.id), self.label, path))
    }
}

/// Sidebar section, switched by the bottom tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarSection {
    #[default]
    Campaigns,
    Agents,
    Groups,
}

impl SidebarSection {
    pub fn all() -> &'static [SidebarSection] {
        &[
            SidebarSection::Campaigns,
            SidebarSection::Agents,
            SidebarSection::Groups,
        ]
    }

    /// Section title shown in the sidebar header.
    pub fn title(self) -> &'static str {
        match self {
            SidebarSection::Campaigns => "Campaign Management",
            SidebarSection::Agents => "Agent Management",
            SidebarSection::Groups => "Campaign Group Management",
        }
    }

    /// Short label for the section switcher.
    pub fn short_label(self) -> &'static str {
        match self {
            SidebarSection::Campaigns => "Campaigns",
            SidebarSection::Agents => "Agents",
            SidebarSection::Groups => "Groups",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SidebarSection::Campaigns => SidebarSection::Agents,
            SidebarSection::Agents => SidebarSection::Groups,
            SidebarSection::Groups => SidebarSection::Campaigns,
        }
    }
}

// ===== Tree construction =====

fn org(id: &'static str, label: &'static str, children: Vec<SidebarNode>) -> SidebarNode {
    SidebarNode {
        id,
        label,
        kind: NodeKind::Organization,
        status: None,
        path: None,
        children,
    }
}

fn tenant(id: &'static str, label: &'static str, children: Vec<SidebarNode>) -> SidebarNode {
    SidebarNode {
        id,
        label,
        kind: NodeKind::Tenant,
        status: None,
        path: None,
        children,
    }
}

fn campaign(
    id: &'static str,
    label: &'static str,
    status: NodeStatus,
    path: &'static str,
) -> SidebarNode {
    SidebarNode {
        id,
        label,
        kind: NodeKind::Campaign,
        status: Some(status),
        path: Some(path),
        children: Vec::new(),
    }
}

fn campaign_config() -> Vec<SidebarNode> {
    vec![org(
        "nexus-cc",
        "NEXUS Call Center",
        vec![
            tenant(
                "sk-telecom",
                "SK Telecom",
                vec![
                    campaign(
                        "sk-mobile-support",
                        "Mobile Plan Support",
                        NodeStatus::Active,
                        "/campaign/sk-mobile",
                    ),
                    campaign(
                        "sk-internet-support",
                        "Internet Outage Desk",
                        NodeStatus::Active,
                        "/campaign/sk-internet",
                    ),
                    campaign(
                        "sk-bill-inquiry",
                        "Billing Inquiries",
                        NodeStatus::Inactive,
                        "/campaign/sk-bill",
                    ),
                    campaign(
                        "sk-new-services",
                        "New Service Outreach",
                        NodeStatus::Active,
                        "/campaign/sk-new",
                    ),
                ],
            ),
            tenant(
                "lg-uplus",
                "LG U+",
                vec![
                    campaign(
                        "lg-tech-support",
                        "Technical Support",
                        NodeStatus::Active,
                        "/campaign/lg-tech",
                    ),
                    campaign(
                        "lg-customer-complaints",
                        "Customer Complaints",
                        NodeStatus::Warning,
                        "/campaign/lg-complaints",
                    ),
                    campaign(
                        "lg-sales-inquiry",
                        "Sales Inquiries",
                        NodeStatus::Active,
                        "/campaign/lg-sales",
                    ),
                ],
            ),
            tenant(
                "kt",
                "KT",
                vec![
                    campaign(
                        "kt-residential",
                        "Residential Services",
                        NodeStatus::Active,
                        "/campaign/kt-residential",
                    ),
                    campaign(
                        "kt-business",
                        "Business Accounts",
                        NodeStatus::Active,
                        "/campaign/kt-business",
                    ),
                    campaign(
                        "kt-retention",
                        "Churn Prevention",
                        NodeStatus::Warning,
                        "/campaign/kt-retention",
                    ),
                ],
            ),
        ],
    )]
}

fn agent_config() -> Vec<SidebarNode> {
    vec![org(
        "user-management",
        "Agent Management Center",
        vec![
            tenant(
                "active-users",
                "Active Agents",
                vec![
                    campaign(
                        "full-time",
                        "Full-time Agents",
                        NodeStatus::Active,
                        "/users/full-time",
                    ),
                    campaign(
                        "part-time",
                        "Part-time Agents",
                        NodeStatus::Active,
                        "/users/part-time",
                    ),
                ],
            ),
            tenant(
                "user-performance",
                "Agent Performance",
                vec![
                    campaign(
                        "weekly-reports",
                        "Weekly Reports",
                        NodeStatus::Active,
                        "/users/weekly-reports",
                    ),
                    campaign(
                        "monthly-reports",
                        "Monthly Reports",
                        NodeStatus::Active,
                        "/users/monthly-reports",
                    ),
                    campaign(
                        "performance-issues",
                        "Performance Issues",
                        NodeStatus::Warning,
                        "/users/performance-issues",
                    ),
                ],
            ),
        ],
    )]
}

fn group_config() -> Vec<SidebarNode> {
    vec![org(
        "campaign-groups",
        "Campaign Group Center",
        vec![
            tenant(
                "telecom-groups",
                "Telecom Groups",
                vec![
                    campaign(
                        "mobile-group",
                        "Mobile Campaigns",
                        NodeStatus::Active,
                        "/groups/mobile",
                    ),
                    campaign(
                        "internet-group",
                        "Internet Campaigns",
                        NodeStatus::Active,
                        "/groups/internet",
                    ),
                ],
            ),
            tenant(
                "finance-groups",
                "Finance Groups",
                vec![
                    campaign(
                        "insurance-group",
                        "Insurance Campaigns",
                        NodeStatus::Warning,
                        "/groups/insurance",
                    ),
                    campaign(
                        "loan-group",
                        "Loan Campaigns",
                        NodeStatus::Active,
                        "/groups/loan",
                    ),
                ],
            ),
        ],
    )]
}

static CAMPAIGN_TREE: OnceLock<Vec<SidebarNode>> = OnceLock::new();
static AGENT_TREE: OnceLock<Vec<SidebarNode>> = OnceLock::new();
static GROUP_TREE: OnceLock<Vec<SidebarNode>> = OnceLock::new();

/// The navigation tree for a section.
pub fn section_tree(section: SidebarSection) -> &'static [SidebarNode] {
    match section {
        SidebarSection::Campaigns => CAMPAIGN_TREE.get_or_init(campaign_config),
        SidebarSection::Agents => AGENT_TREE.get_or_init(agent_config),
        SidebarSection::Groups => GROUP_TREE.get_or_init(group_config),
    }
}

/// Ids expanded by default: every node that has children.
pub fn default_expanded(section: SidebarSection) -> HashSet<String> {
    fn collect(nodes: &[SidebarNode], out: &mut HashSet<String>) {
        for node in nodes {
            if node.has_children() {
                out.insert(node.id.to_string());
                collect(&node.children, out);
            }
        }
    }

    let mut out = HashSet::new();
    collect(section_tree(section), &mut out);
    out
}

/// Find a campaign leaf by id across all sections.
pub fn find_campaign(id: &str) -> Option<&'static SidebarNode> {
    fn search(nodes: &'static [SidebarNode], id: &str) -> Option<&'static SidebarNode> {
        for node in nodes {
            if node.kind == NodeKind::Campaign && node.id == id {
                return Some(node);
            }
            if let Some(found) = search(&node.children, id) {
                return Some(found);
            }
        }
        None
    }

    SidebarSection::all()
        .iter()
        .find_map(|&section| search(section_tree(section), id))
}

/// A visible tree row after applying the expansion state.
#[derive(Debug, Clone, Copy)]
pub struct FlatNode {
    pub node: &'static SidebarNode,
    pub depth: usize,
}

/// Flatten a tree into display rows, descending only into expanded nodes.
pub fn flatten_visible(
    nodes: &'static [SidebarNode],
    expanded: &HashSet<String>,
) -> Vec<FlatNode> {
    fn walk(
        nodes: &'static [SidebarNode],
        expanded: &HashSet<String>,
        depth: usize,
        out: &mut Vec<FlatNode>,
    ) {
        for node in nodes {
            out.push(FlatNode { node, depth });
            if node.has_children() && expanded.contains(node.id) {
                walk(&node.children, expanded, depth + 1, out);
            }
        }
    }

    let mut out = Vec::new();
    walk(nodes, expanded, 0, &mut out);
    out
}
