//! Navigation forest: sections of nodes rendered by the sidebar.
//!
//! Node keys share one flat namespace across the whole forest because the
//! expansion state is keyed by them. Authoring two nodes with the same key
//! is a data defect; [`NavForest::duplicate_keys`] reports it.

use std::collections::BTreeSet;

use super::matcher::is_active;

/// Target carried by parent nodes that only group children.
pub const PARENT_TARGET: &str = "#!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    New,
    Hot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub kind: BadgeKind,
}

impl Badge {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BadgeKind::New,
        }
    }

    pub fn hot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BadgeKind::Hot,
        }
    }
}

/// Icon identifiers. The sidebar resolves them to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Gauge,
    BarChart,
    Users,
    Cart,
    Bitcoin,
    AppWindow,
    Image,
    Briefcase,
    Newspaper,
    Grid,
    Lock,
    Files,
    Rocket,
    Component,
    Cube,
    Brick,
    Clipboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub key: String,
    pub label: String,
    pub icon: NavIcon,
    pub target: String,
    pub badge: Option<Badge>,
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn leaf(key: &str, label: &str, icon: NavIcon, target: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon,
            target: target.to_string(),
            badge: None,
            children: Vec::new(),
        }
    }

    pub fn parent(key: &str, label: &str, icon: NavIcon, children: Vec<NavNode>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon,
            target: PARENT_TARGET.to_string(),
            badge: None,
            children,
        }
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node or any node below it is active for `current`.
    pub fn has_active_descendant(&self, current: &str) -> bool {
        self.children
            .iter()
            .any(|child| child.matches(current) || child.has_active_descendant(current))
    }

    pub(crate) fn matches(&self, current: &str) -> bool {
        self.target != PARENT_TARGET && is_active(current, &self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavSection {
    GroupLabel(String),
    Items(Vec<NavNode>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavForest {
    pub sections: Vec<NavSection>,
}

impl NavForest {
    pub fn new(sections: Vec<NavSection>) -> Self {
        Self { sections }
    }

    /// The dashboard's sidebar.
    pub fn default_forest() -> Self {
        use NavIcon::*;

        Self::new(vec![
            NavSection::Items(vec![
                NavNode::parent(
                    "dashboards",
                    "Dashboards",
                    Gauge,
                    vec![
                        NavNode::leaf("analytics", "Analytics", BarChart, "/analytics"),
                        NavNode::leaf("crm", "CRM", Users, "/crm"),
                        NavNode::leaf("ecommerce", "Ecommerce", Cart, "/ecommerce"),
                        NavNode::leaf("crypto", "Crypto", Bitcoin, "/crypto"),
                        NavNode::leaf("projects", "Projects", AppWindow, "/projects"),
                        NavNode::leaf("nft", "NFT", Image, "/nft"),
                        NavNode::leaf("job", "Job", Briefcase, "/job"),
                        NavNode::leaf("blog_nav", "Blog", Newspaper, "/blog")
                            .with_badge(Badge::new("New")),
                    ],
                ),
                NavNode::leaf("apps", "Apps", AppWindow, "/apps"),
                NavNode::leaf("layouts", "Layouts", Grid, "/layouts").with_badge(Badge::hot("Hot")),
            ]),
            NavSection::GroupLabel("PAGES".to_string()),
            NavSection::Items(vec![
                NavNode::leaf("authentication", "Authentication", Lock, "/auth"),
                NavNode::leaf("pages_examples", "Pages", Files, "/pages"),
                NavNode::leaf("landing", "Landing", Rocket, "/landing"),
            ]),
            NavSection::GroupLabel("COMPONENTS".to_string()),
            NavSection::Items(vec![
                NavNode::leaf("base_ui", "Base UI", Component, "/base-ui"),
                NavNode::leaf("advance_ui", "Advance UI", Cube, "/advance-ui"),
                NavNode::leaf("widgets", "Widgets", Brick, "/widgets"),
                NavNode::leaf("forms", "Forms", Clipboard, "/forms"),
            ]),
        ])
    }

    /// Top-level nodes of every item section, in render order.
    pub fn top_level(&self) -> impl Iterator<Item = &NavNode> {
        self.sections.iter().flat_map(|section| match section {
            NavSection::Items(items) => items.as_slice(),
            NavSection::GroupLabel(_) => &[][..],
        })
    }

    /// Every node, depth first.
    pub fn nodes(&self) -> Vec<&NavNode> {
        fn walk<'a>(node: &'a NavNode, out: &mut Vec<&'a NavNode>) {
            out.push(node);
            for child in &node.children {
                walk(child, out);
            }
        }

        let mut out = Vec::new();
        for node in self.top_level() {
            walk(node, &mut out);
        }
        out
    }

    pub fn find(&self, key: &str) -> Option<&NavNode> {
        self.nodes().into_iter().find(|node| node.key == key)
    }

    /// Keys that appear more than once, sorted.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for node in self.nodes() {
            if !seen.insert(node.key.as_str()) {
                duplicates.insert(node.key.clone());
            }
        }
        duplicates.into_iter().collect()
    }

    /// Leaves in render order, regardless of expansion.
    pub fn leaves(&self) -> Vec<&NavNode> {
        self.nodes()
            .into_iter()
            .filter(|node| !node.is_parent())
            .collect()
    }

    /// Keys of the parents enclosing `key`, nearest first.
    pub fn ancestors(&self, key: &str) -> Vec<&str> {
        fn descend<'a>(node: &'a NavNode, key: &str, trail: &mut Vec<&'a str>) -> bool {
            if node.key == key {
                return true;
            }
            trail.push(node.key.as_str());
            for child in &node.children {
                if descend(child, key, trail) {
                    return true;
                }
            }
            trail.pop();
            false
        }

        let mut trail = Vec::new();
        for node in self.top_level() {
            if descend(node, key, &mut trail) {
                break;
            }
        }
        trail.reverse();
        trail
    }

    /// Labels from the top level down to the node matching `current`.
    pub fn breadcrumb(&self, current: &str) -> Vec<&str> {
        fn descend<'a>(node: &'a NavNode, current: &str, trail: &mut Vec<&'a str>) -> bool {
            trail.push(node.label.as_str());
            if node.matches(current) && !node.is_parent() {
                return true;
            }
            for child in &node.children {
                if descend(child, current, trail) {
                    return true;
                }
            }
            trail.pop();
            false
        }

        let mut trail = Vec::new();
        for node in self.top_level() {
            if descend(node, current, &mut trail) {
                break;
            }
        }
        trail
    }
}
