//! Active-path matching for sidebar highlighting.

use super::tree::NavNode;

/// Root route. It only matches itself, never as a prefix.
pub const ROOT_PATH: &str = "/";

/// True when `current` is `target` or lies below it on a segment boundary.
///
/// `/crm` is active for `/crm/details` but not for `/crmfoo`, and `/` is
/// only active for `/` itself.
pub fn is_active(current: &str, target: &str) -> bool {
    if current == target {
        return true;
    }
    if target == ROOT_PATH || target.is_empty() {
        return false;
    }
    is_path_prefix(target, current)
}

/// `prefix` followed by `/` or end of string. A trailing slash on the
/// prefix counts as the boundary.
pub fn is_path_prefix(prefix: &str, path: &str) -> bool {
    let Some(rest) = path.strip_prefix(prefix) else {
        return false;
    };
    rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveKind {
    Inactive,
    ActiveSelf,
    ActiveDescendant,
}

impl ActiveKind {
    pub fn is_active(self) -> bool {
        self != ActiveKind::Inactive
    }
}

pub fn classify(current: &str, node: &NavNode) -> ActiveKind {
    if node.matches(current) {
        ActiveKind::ActiveSelf
    } else if node.has_active_descendant(current) {
        ActiveKind::ActiveDescendant
    } else {
        ActiveKind::Inactive
    }
}

/// How a row should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    None,
    /// Solid style for the leaf the user is on.
    Leaf,
    /// Muted style for the parent of the current section.
    Section,
}

pub fn highlight(node: &NavNode, kind: ActiveKind) -> Highlight {
    match (node.is_parent(), kind) {
        (_, ActiveKind::Inactive) => Highlight::None,
        (true, _) => Highlight::Section,
        (false, ActiveKind::ActiveSelf) => Highlight::Leaf,
        (false, ActiveKind::ActiveDescendant) => Highlight::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::tree::{NavForest, NavIcon};
    use proptest::prelude::*;

    #[test]
    fn test_exact_match() {
        assert!(is_active("/crm", "/crm"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn test_root_does_not_match_everything() {
        assert!(!is_active("/crm", "/"));
        assert!(!is_active("/analytics/x", "/"));
    }

    #[test]
    fn test_segment_prefix() {
        assert!(is_active("/crm/123", "/crm"));
        assert!(is_active("/crm/a/b", "/crm"));
        assert!(!is_active("/crmfoo", "/crm"));
        assert!(!is_active("/cr", "/crm"));
        assert!(!is_active("/crm", "/crm/123"));
    }

    #[test]
    fn test_unrelated_paths() {
        assert!(!is_active("/analytics", "/crm"));
        assert!(!is_active("", "/crm"));
    }

    #[test]
    fn test_classify_parent_and_leaf() {
        let forest = NavForest::default_forest();
        let dashboards = forest.find("dashboards").unwrap();
        let crm = forest.find("crm").unwrap();
        let forms = forest.find("forms").unwrap();

        assert_eq!(classify("/crm/details", dashboards), ActiveKind::ActiveDescendant);
        assert_eq!(classify("/crm/details", crm), ActiveKind::ActiveSelf);
        assert_eq!(classify("/crm/details", forms), ActiveKind::Inactive);

        assert_eq!(highlight(crm, ActiveKind::ActiveSelf), Highlight::Leaf);
        assert_eq!(highlight(dashboards, ActiveKind::ActiveDescendant), Highlight::Section);
        assert_eq!(highlight(forms, ActiveKind::Inactive), Highlight::None);
    }

    #[test]
    fn test_parent_with_real_target_is_section_when_self_active() {
        let mut parent = crate::nav::tree::NavNode::parent(
            "reports",
            "Reports",
            NavIcon::Files,
            vec![crate::nav::tree::NavNode::leaf("daily", "Daily", NavIcon::Files, "/reports/daily")],
        );
        parent.target = "/reports".to_string();
        assert_eq!(classify("/reports", &parent), ActiveKind::ActiveSelf);
        assert_eq!(highlight(&parent, ActiveKind::ActiveSelf), Highlight::Section);
    }

    proptest! {
        #[test]
        fn prop_path_is_active_for_itself(path in "(/[a-z0-9-]{0,8}){0,4}") {
            prop_assert!(is_active(&path, &path));
        }

        #[test]
        fn prop_root_only_matches_root(path in "/[a-z0-9-]{1,8}(/[a-z0-9-]{0,8}){0,3}") {
            prop_assert!(!is_active(&path, ROOT_PATH));
        }

        #[test]
        fn prop_child_segment_is_active(base in "/[a-z]{1,8}", child in "[a-z0-9]{1,8}") {
            let nested = format!("{base}/{child}");
            let glued = format!("{base}{child}");
            prop_assert!(is_active(&nested, &base));
            prop_assert!(!is_active(&glued, &base));
        }
    }
}
