//! UI Modules
//!
//! Each module implements the Module trait and turns key input into an
//! Action the app applies.
//!
//! Modules:
//! - sidebar: Expandable navigation tree with a row cursor
//! - dashboard: CRM dashboard panels (forecast, deals, balance, tasks)

pub mod dashboard;
pub mod sidebar;
