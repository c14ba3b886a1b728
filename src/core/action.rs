//! Actions that modules can return to communicate with the app

/// Actions returned by modules and commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Navigate to a route path
    Navigate(String),

    /// Return to the previous location
    Back,

    /// Flip a sidebar parent open or closed
    ToggleNav(String),

    /// Set a sidebar parent open or closed
    SetNav(String, bool),

    /// Pick a dropdown value on the focused dashboard panel
    SetFilter(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    ToggleTheme,
    ToggleFullscreen,
    ToggleHelp,

    /// Request quit
    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
