//! Sidebar navigation model: the node forest, which parents are expanded,
//! and which rows are active for the current location.

pub mod matcher;
pub mod rows;
pub mod state;
pub mod tree;

pub use matcher::{classify, highlight, is_active, ActiveKind, Highlight, ROOT_PATH};
pub use rows::{visible_rows, NavRow, NodeRow};
pub use state::{builtin_overrides, initialize, toggle, ExpandOverride, ExpansionState};
pub use tree::{Badge, BadgeKind, NavForest, NavIcon, NavNode, NavSection, PARENT_TARGET};
