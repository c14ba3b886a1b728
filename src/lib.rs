//! Terminal CRM admin dashboard: an expandable sidebar over a sample CRM
//! page, rendered with ratatui.

pub mod app;
pub mod config;
pub mod core;
pub mod input;
pub mod modules;
pub mod nav;
pub mod theme;
pub mod ui;
