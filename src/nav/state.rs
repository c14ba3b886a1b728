//! Expansion state for parent nodes.
//!
//! The state is seeded once from the location the dashboard opens on and
//! afterwards changes only through [`toggle`]. Navigating elsewhere never
//! collapses or opens anything.

use std::collections::BTreeSet;

use serde::Deserialize;

use super::matcher::is_path_prefix;
use super::tree::NavForest;

/// Forces `key` open whenever the current path lies under `prefix`, even if
/// no child target matched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExpandOverride {
    pub prefix: String,
    pub key: String,
}

impl ExpandOverride {
    pub fn new(prefix: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            key: key.into(),
        }
    }

    /// Prefixes must be absolute routes. An empty prefix would match
    /// every location.
    pub fn has_valid_prefix(&self) -> bool {
        self.prefix.starts_with('/')
    }
}

/// Overrides that ship with the dashboard.
pub fn builtin_overrides() -> Vec<ExpandOverride> {
    vec![ExpandOverride::new("/crm", "dashboards")]
}

/// Set of expanded parent keys. A key that is not in the set is collapsed,
/// so two states are equal exactly when the same parents are open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: BTreeSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.open.contains(key)
    }

    pub fn expanded_keys(&self) -> Vec<&str> {
        self.open.iter().map(String::as_str).collect()
    }

    /// Returns a copy with `key` set to `open`.
    pub fn with(&self, key: &str, open: bool) -> Self {
        let mut next = self.clone();
        if open {
            next.open.insert(key.to_string());
        } else {
            next.open.remove(key);
        }
        next
    }
}

/// Seeds the expansion state for `current_path`.
///
/// Every parent with a child whose target path-prefixes `current_path` is
/// opened, then each matching override opens its key.
pub fn initialize(
    forest: &NavForest,
    overrides: &[ExpandOverride],
    current_path: &str,
) -> ExpansionState {
    let mut state = ExpansionState::new();

    for node in forest.nodes() {
        if !node.is_parent() {
            continue;
        }
        let child_matches = node
            .children
            .iter()
            .any(|child| child.matches(current_path));
        if child_matches {
            state.open.insert(node.key.clone());
        }
    }

    for rule in overrides {
        if rule.has_valid_prefix() && is_path_prefix(&rule.prefix, current_path) {
            state.open.insert(rule.key.clone());
        }
    }

    tracing::debug!(
        path = current_path,
        expanded = ?state.expanded_keys(),
        "seeded navigation expansion"
    );
    state
}

/// Flips `key`; an absent key counts as collapsed. The input is left as is.
pub fn toggle(state: &ExpansionState, key: &str) -> ExpansionState {
    let next = state.with(key, !state.is_expanded(key));
    tracing::debug!(key, expanded = next.is_expanded(key), "toggled navigation node");
    next
}

/// Override entries whose key is not a parent node of `forest`.
pub fn dangling_overrides<'a>(
    forest: &NavForest,
    overrides: &'a [ExpandOverride],
) -> Vec<&'a ExpandOverride> {
    overrides
        .iter()
        .filter(|rule| !forest.find(&rule.key).is_some_and(|node| node.is_parent()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::matcher::is_active;
    use crate::nav::tree::{NavIcon, NavNode, NavSection};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn dashboards_forest() -> NavForest {
        NavForest::new(vec![NavSection::Items(vec![NavNode::parent(
            "dashboards",
            "Dashboards",
            NavIcon::Gauge,
            vec![
                NavNode::leaf("analytics", "Analytics", NavIcon::BarChart, "/analytics"),
                NavNode::leaf("crm", "CRM", NavIcon::Users, "/crm"),
                NavNode::leaf("ecommerce", "Ecommerce", NavIcon::Cart, "/ecommerce"),
            ],
        )])])
    }

    fn expanded(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn keys_of(state: &ExpansionState) -> Vec<String> {
        state.expanded_keys().into_iter().map(String::from).collect()
    }

    #[test]
    fn test_dashboards_scenario() {
        let forest = dashboards_forest();
        let state = initialize(&forest, &[], "/crm/overview");
        assert_eq!(keys_of(&state), expanded(&["dashboards"]));

        let closed = toggle(&state, "dashboards");
        assert!(!closed.is_expanded("dashboards"));
        assert!(closed.expanded_keys().is_empty());

        let reopened = toggle(&closed, "dashboards");
        assert_eq!(keys_of(&reopened), expanded(&["dashboards"]));
    }

    #[test]
    fn test_no_match_leaves_everything_collapsed() {
        let forest = NavForest::default_forest();
        let state = initialize(&forest, &[], "/forms");
        assert!(state.expanded_keys().is_empty());
    }

    #[test]
    fn test_segment_boundary_respected_when_seeding() {
        let forest = dashboards_forest();
        let state = initialize(&forest, &[], "/crmfoo");
        assert!(!state.is_expanded("dashboards"));
    }

    #[test]
    fn test_override_opens_parent_without_child_match() {
        let forest = dashboards_forest();
        let overrides = vec![ExpandOverride::new("/reports", "dashboards")];
        let state = initialize(&forest, &overrides, "/reports/weekly");
        assert!(state.is_expanded("dashboards"));

        let untouched = initialize(&forest, &overrides, "/report");
        assert!(!untouched.is_expanded("dashboards"));
    }

    #[test]
    fn test_override_with_empty_or_relative_prefix_is_ignored() {
        let forest = dashboards_forest();
        let overrides = vec![
            ExpandOverride::new("", "dashboards"),
            ExpandOverride::new("reports", "dashboards"),
        ];
        let state = initialize(&forest, &overrides, "/forms");
        assert!(!state.is_expanded("dashboards"));
        let state = initialize(&forest, &overrides, "reports/weekly");
        assert!(!state.is_expanded("dashboards"));
    }

    #[test]
    fn test_builtin_override_for_crm() {
        let forest = NavForest::default_forest();
        let state = initialize(&forest, &builtin_overrides(), "/crm");
        assert!(state.is_expanded("dashboards"));
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let state = ExpansionState::new().with("dashboards", true);
        let before = state.clone();
        let next = toggle(&state, "dashboards");
        assert_eq!(state, before);
        assert_ne!(next, state);
    }

    #[test]
    fn test_toggle_absent_key_opens_it() {
        let next = toggle(&ExpansionState::new(), "apps");
        assert!(next.is_expanded("apps"));
    }

    #[test]
    fn test_double_toggle_of_unseeded_key_restores_state() {
        let forest = NavForest::default_forest();
        let seeded = initialize(&forest, &[], "/crm");
        assert_eq!(toggle(&toggle(&seeded, "x"), "x"), seeded);

        let empty = ExpansionState::new();
        assert_eq!(toggle(&toggle(&empty, "apps"), "apps"), empty);
    }

    #[test]
    fn test_collapsed_equals_absent() {
        let closed = ExpansionState::new().with("apps", true).with("apps", false);
        assert_eq!(closed, ExpansionState::new());
    }

    #[test]
    fn test_dangling_overrides() {
        let forest = NavForest::default_forest();
        let overrides = vec![
            ExpandOverride::new("/crm", "dashboards"),
            ExpandOverride::new("/x", "nope"),
            ExpandOverride::new("/forms", "forms"),
        ];
        let dangling: Vec<&str> = dangling_overrides(&forest, &overrides)
            .into_iter()
            .map(|rule| rule.key.as_str())
            .collect();
        assert_eq!(dangling, vec!["nope", "forms"]);
    }

    fn arb_state() -> impl Strategy<Value = ExpansionState> {
        prop::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..8).prop_map(|open| {
            let mut state = ExpansionState::new();
            for (key, value) in open {
                state = state.with(&key, value);
            }
            state
        })
    }

    proptest! {
        #[test]
        fn prop_toggle_is_involutive(state in arb_state(), key in "[a-z]{1,6}") {
            let twice = toggle(&toggle(&state, &key), &key);
            prop_assert_eq!(twice, state);
        }

        #[test]
        fn prop_toggle_leaves_other_keys(state in arb_state(), key in "[a-z]{1,6}", other in "[a-z]{1,6}") {
            prop_assume!(key != other);
            let next = toggle(&state, &key);
            prop_assert_eq!(next.is_expanded(&other), state.is_expanded(&other));
        }

        #[test]
        fn prop_active_child_opens_parent(path_tail in "(/[a-z0-9]{1,6}){0,3}") {
            let forest = NavForest::default_forest();
            for leaf in forest.leaves() {
                let current = format!("{}{}", leaf.target, path_tail);
                let state = initialize(&forest, &[], &current);
                for parent in forest.nodes().into_iter().filter(|n| n.is_parent()) {
                    if parent.children.iter().any(|c| is_active(&current, &c.target)) {
                        prop_assert!(state.is_expanded(&parent.key));
                    }
                }
            }
        }
    }
}
