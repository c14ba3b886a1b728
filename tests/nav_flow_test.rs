//! Navigation model end to end: seeding, toggling, matching, rows

use crmdash::nav::{
    initialize, is_active, toggle, visible_rows, ActiveKind, ExpandOverride, NavForest, NavIcon,
    NavNode, NavRow, NavSection,
};
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

#[test]
fn test_dashboards_group_seed_and_toggle() {
    let forest = dashboards_forest();
    let seeded = initialize(&forest, &[], "/crm/overview");
    assert_eq!(seeded.expanded_keys(), vec!["dashboards"]);

    let closed = toggle(&seeded, "dashboards");
    assert!(!closed.is_expanded("dashboards"));
    assert_eq!(closed.expanded_keys(), Vec::<&str>::new());

    let reopened = toggle(&closed, "dashboards");
    assert_eq!(reopened, seeded);
}

#[test]
fn test_root_target_matches_only_root() {
    assert!(!is_active("/crm", "/"));
    assert!(is_active("/", "/"));
    assert!(is_active("/crm/123", "/crm"));
    assert!(!is_active("/crmfoo", "/crm"));
}

#[test]
fn test_collapsed_parent_still_reports_active_descendant() {
    let forest = dashboards_forest();
    let state = toggle(&initialize(&forest, &[], "/crm"), "dashboards");
    let rows = visible_rows(&forest, &state, "/crm");

    assert_eq!(rows.len(), 1);
    let NavRow::Node(parent) = &rows[0] else {
        panic!("expected a node row");
    };
    assert_eq!(parent.key, "dashboards");
    assert!(!parent.expanded);
    assert_eq!(parent.active, ActiveKind::ActiveDescendant);
}

#[test]
fn test_override_opens_parent_without_matching_child() {
    let forest = dashboards_forest();
    let rules = [ExpandOverride::new("/reports", "dashboards")];
    assert!(initialize(&forest, &rules, "/reports/q4").is_expanded("dashboards"));
    assert!(!initialize(&forest, &rules, "/reportsx").is_expanded("dashboards"));
    assert!(!initialize(&forest, &[], "/reports/q4").is_expanded("dashboards"));
}

#[test]
fn test_default_forest_seeds_only_dashboards_for_crm() {
    let forest = NavForest::default_forest();
    let state = initialize(&forest, &crmdash::nav::builtin_overrides(), "/crm");
    assert_eq!(state.expanded_keys(), vec!["dashboards"]);
    assert_eq!(forest.breadcrumb("/crm"), vec!["Dashboards", "CRM"]);
}

fn route() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,6}", 0..4).prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #[test]
    fn prop_active_child_opens_parent(current in route()) {
        let forest = NavForest::default_forest();
        let state = initialize(&forest, &[], &current);
        for node in forest.nodes() {
            if node.children.iter().any(|child| is_active(&current, &child.target)) {
                prop_assert!(state.is_expanded(&node.key));
            }
        }
    }

    #[test]
    fn prop_toggle_is_involutive(current in route(), key in "[a-z_]{1,12}") {
        let forest = NavForest::default_forest();
        let state = initialize(&forest, &[], &current);
        let twice = toggle(&toggle(&state, &key), &key);
        prop_assert_eq!(&twice, &state);
        for other in forest.nodes() {
            if other.key != key {
                prop_assert_eq!(twice.is_expanded(&other.key), state.is_expanded(&other.key));
            }
        }
    }

    #[test]
    fn prop_path_matches_itself(path in route()) {
        prop_assert!(is_active(&path, &path));
    }
}
