//! Shared context passed to modules

/// Shared context available to all modules
#[derive(Debug, Clone)]
pub struct Context {
    /// Route the dashboard is showing
    pub location: String,

    /// Sidebar and header hidden
    pub fullscreen: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            location: crate::nav::ROOT_PATH.to_string(),
            fullscreen: false,
        }
    }
}

impl Context {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }
}
