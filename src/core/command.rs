//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Go(String),
    Back,

    // Sidebar commands
    Toggle(String),
    Expand(String),
    Collapse(String),

    // Dashboard
    Filter(String),

    // Header toggles
    Theme,
    Fullscreen,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

impl Command {
    /// Action the app should apply for this command
    pub fn into_action(self) -> crate::core::Action {
        use crate::core::{Action, NotifyLevel};

        match self {
            Command::Go(path) => Action::Navigate(normalize_route(&path)),
            Command::Back => Action::Back,
            Command::Toggle(key) => Action::ToggleNav(key),
            Command::Expand(key) => Action::SetNav(key, true),
            Command::Collapse(key) => Action::SetNav(key, false),
            Command::Filter(value) => Action::SetFilter(value),
            Command::Theme => Action::ToggleTheme,
            Command::Fullscreen => Action::ToggleFullscreen,
            Command::Help => Action::ToggleHelp,
            Command::Quit => Action::Quit,
            Command::Unknown(s) => Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn),
        }
    }
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "go" | "goto" | "open" => match args {
            Some(path) => Command::Go(path),
            None => Command::Unknown(input.to_string()),
        },
        "back" | "b" => Command::Back,

        // Sidebar
        "toggle" | "t" => match args {
            Some(key) => Command::Toggle(key),
            None => Command::Unknown(input.to_string()),
        },
        "expand" | "open-nav" => match args {
            Some(key) => Command::Expand(key),
            None => Command::Unknown(input.to_string()),
        },
        "collapse" | "close-nav" => match args {
            Some(key) => Command::Collapse(key),
            None => Command::Unknown(input.to_string()),
        },

        // Dashboard
        "filter" | "period" => match args {
            Some(value) => Command::Filter(value.to_lowercase()),
            None => Command::Unknown(input.to_string()),
        },

        // Header
        "theme" | "dark" => Command::Theme,
        "fullscreen" | "fs" => Command::Fullscreen,
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

/// Routes always start with `/`; a trailing slash is dropped except on root.
pub fn normalize_route(path: &str) -> String {
    let trimmed = path.trim();
    let with_root = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    if with_root.len() > 1 {
        with_root.trim_end_matches('/').to_string()
    } else {
        with_root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, NotifyLevel};

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("go /crm"), Command::Go("/crm".to_string()));
        assert_eq!(parse_command("goto  /analytics "), Command::Go("/analytics".to_string()));
        assert_eq!(parse_command("back"), Command::Back);
        assert_eq!(parse_command("go"), Command::Unknown("go".to_string()));
    }

    #[test]
    fn test_parse_sidebar_commands() {
        assert_eq!(
            parse_command("toggle dashboards"),
            Command::Toggle("dashboards".to_string())
        );
        assert_eq!(
            parse_command("expand dashboards"),
            Command::Expand("dashboards".to_string())
        );
        assert_eq!(
            parse_command("COLLAPSE dashboards"),
            Command::Collapse("dashboards".to_string())
        );
    }

    #[test]
    fn test_parse_filter_command() {
        assert_eq!(
            parse_command("filter Yearly"),
            Command::Filter("yearly".to_string())
        );
        assert_eq!(
            parse_command("period monthly").into_action(),
            Action::SetFilter("monthly".to_string())
        );
        assert_eq!(parse_command("filter"), Command::Unknown("filter".to_string()));
    }

    #[test]
    fn test_parse_header_commands() {
        assert_eq!(parse_command("theme"), Command::Theme);
        assert_eq!(parse_command("fs"), Command::Fullscreen);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
        assert_eq!(
            parse_command("notacommand").into_action(),
            Action::Notify("Unknown command: notacommand".to_string(), NotifyLevel::Warn)
        );
    }

    #[test]
    fn test_go_normalizes_route() {
        assert_eq!(
            parse_command("go crm/").into_action(),
            Action::Navigate("/crm".to_string())
        );
        assert_eq!(normalize_route("/"), "/");
        assert_eq!(normalize_route(""), "/");
    }
}
