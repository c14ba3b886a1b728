//! Flattening the forest into the rows the sidebar shows.

use super::matcher::{classify, highlight, ActiveKind, Highlight};
use super::state::ExpansionState;
use super::tree::{Badge, NavForest, NavIcon, NavNode, NavSection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRow {
    Heading(String),
    Node(NodeRow),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    pub depth: usize,
    pub key: String,
    pub label: String,
    pub icon: NavIcon,
    pub target: String,
    pub badge: Option<Badge>,
    pub is_parent: bool,
    pub expanded: bool,
    pub active: ActiveKind,
    pub highlight: Highlight,
    /// Key of the enclosing parent, if any.
    pub parent_key: Option<String>,
}

impl NavRow {
    pub fn node(&self) -> Option<&NodeRow> {
        match self {
            NavRow::Node(row) => Some(row),
            NavRow::Heading(_) => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, NavRow::Node(_))
    }
}

pub fn visible_rows(forest: &NavForest, state: &ExpansionState, current: &str) -> Vec<NavRow> {
    fn push_node(
        node: &NavNode,
        depth: usize,
        parent_key: Option<&str>,
        state: &ExpansionState,
        current: &str,
        rows: &mut Vec<NavRow>,
    ) {
        let active = classify(current, node);
        let expanded = node.is_parent() && state.is_expanded(&node.key);
        rows.push(NavRow::Node(NodeRow {
            depth,
            key: node.key.clone(),
            label: node.label.clone(),
            icon: node.icon,
            target: node.target.clone(),
            badge: node.badge.clone(),
            is_parent: node.is_parent(),
            expanded,
            active,
            highlight: highlight(node, active),
            parent_key: parent_key.map(str::to_string),
        }));
        if expanded {
            for child in &node.children {
                push_node(child, depth + 1, Some(&node.key), state, current, rows);
            }
        }
    }

    let mut rows = Vec::new();
    for section in &forest.sections {
        match section {
            NavSection::GroupLabel(label) => rows.push(NavRow::Heading(label.clone())),
            NavSection::Items(items) => {
                for node in items {
                    push_node(node, 0, None, state, current, &mut rows);
                }
            }
        }
    }
    rows
}

/// Index of the row for `key`, if visible.
pub fn position_of(rows: &[NavRow], key: &str) -> Option<usize> {
    rows.iter()
        .position(|row| row.node().is_some_and(|node| node.key == key))
}

/// Next selectable row after `from` (or before it when `forward` is false).
/// Stays put at either end.
pub fn step_selectable(rows: &[NavRow], from: usize, forward: bool) -> usize {
    let mut idx = from;
    loop {
        let next = if forward {
            idx + 1
        } else if idx == 0 {
            return from;
        } else {
            idx - 1
        };
        match rows.get(next) {
            Some(row) if row.is_selectable() => return next,
            Some(_) => idx = next,
            None => return from,
        }
    }
}

pub fn first_selectable(rows: &[NavRow]) -> Option<usize> {
    rows.iter().position(NavRow::is_selectable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::state::{builtin_overrides, initialize, toggle};
    use pretty_assertions::assert_eq;

    fn labels(rows: &[NavRow]) -> Vec<String> {
        rows.iter()
            .map(|row| match row {
                NavRow::Heading(text) => format!("# {text}"),
                NavRow::Node(node) => format!("{}{}", "  ".repeat(node.depth), node.label),
            })
            .collect()
    }

    #[test]
    fn test_collapsed_parent_hides_children() {
        let forest = NavForest::default_forest();
        let rows = visible_rows(&forest, &ExpansionState::new(), "/forms");
        let labels = labels(&rows);
        assert_eq!(labels[0], "Dashboards");
        assert_eq!(labels[1], "Apps");
        assert!(!labels.iter().any(|l| l.trim() == "CRM"));
        assert_eq!(labels[3], "# PAGES");
    }

    #[test]
    fn test_expanded_parent_shows_children_indented() {
        let forest = NavForest::default_forest();
        let state = initialize(&forest, &builtin_overrides(), "/crm");
        let rows = visible_rows(&forest, &state, "/crm");
        let labels = labels(&rows);
        assert_eq!(&labels[..3], &["Dashboards", "  Analytics", "  CRM"]);

        let crm = rows[2].node().unwrap();
        assert_eq!(crm.active, ActiveKind::ActiveSelf);
        assert_eq!(crm.highlight, Highlight::Leaf);
        assert_eq!(crm.parent_key.as_deref(), Some("dashboards"));
    }

    #[test]
    fn test_collapsed_parent_still_marks_section() {
        let forest = NavForest::default_forest();
        let state = initialize(&forest, &builtin_overrides(), "/crm");
        let closed = toggle(&state, "dashboards");
        let rows = visible_rows(&forest, &closed, "/crm");
        let parent = rows[0].node().unwrap();
        assert!(!parent.expanded);
        assert_eq!(parent.active, ActiveKind::ActiveDescendant);
        assert_eq!(parent.highlight, Highlight::Section);
    }

    #[test]
    fn test_step_skips_headings() {
        let forest = NavForest::default_forest();
        let rows = visible_rows(&forest, &ExpansionState::new(), "/");
        // Dashboards, Apps, Layouts, # PAGES, Authentication
        assert_eq!(step_selectable(&rows, 2, true), 4);
        assert_eq!(step_selectable(&rows, 4, false), 2);
        assert_eq!(step_selectable(&rows, 0, false), 0);
        let last = rows.len() - 1;
        assert_eq!(step_selectable(&rows, last, true), last);
    }

    #[test]
    fn test_position_of_visible_key_only() {
        let forest = NavForest::default_forest();
        let rows = visible_rows(&forest, &ExpansionState::new(), "/");
        assert_eq!(position_of(&rows, "apps"), Some(1));
        assert_eq!(position_of(&rows, "crm"), None);
        assert_eq!(first_selectable(&rows), Some(0));
    }
}
