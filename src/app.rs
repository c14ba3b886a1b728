use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::{normalize_route, parse_command, Action, Command, Context, NotifyLevel};
use crate::modules::dashboard::{Dashboard, DashboardData};
use crate::modules::sidebar::Sidebar;
use crate::nav::{is_active, ExpandOverride, NavForest, ROOT_PATH};
use crate::theme::{Palette, ThemeVariant};

/// Route of the CRM dashboard page.
pub const CRM_PATH: &str = "/crm";

pub const PROFILE_MENU: [&str; 3] = ["Profile", "Settings", "Log out"];

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

/// Header popups. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Help,
    Notifications,
    Profile { selected: usize },
}

#[derive(Debug)]
pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    /// Locations left behind by `navigate`, most recent last
    history: Vec<String>,
    pub sidebar: Sidebar,
    pub dashboard: Dashboard,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub search: String,
    pub theme: ThemeVariant,
    pub sidebar_hidden: bool,
    pub sidebar_width: u16,
    pub popup: Option<Popup>,
    pub brand: String,
    pub user_name: String,
    pub user_role: String,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    pending_title: Option<String>,
}

impl App {
    pub fn new(config: &Config, data: DashboardData) -> Self {
        Self::with_forest(config, NavForest::default_forest(), &config.overrides(), data)
    }

    pub fn with_forest(
        config: &Config,
        forest: NavForest,
        overrides: &[ExpandOverride],
        data: DashboardData,
    ) -> Self {
        let location = normalize_route(&config.initial_path);
        let mut app = Self {
            ctx: Context::new(location.clone()),
            history: Vec::new(),
            sidebar: Sidebar::new(forest, overrides, &location),
            dashboard: Dashboard::new(data),
            focus: Focus::Sidebar,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            search: String::new(),
            theme: config.theme,
            sidebar_hidden: false,
            sidebar_width: config.sidebar_width,
            popup: None,
            brand: config.brand.clone(),
            user_name: config.user_name.clone(),
            user_role: config.user_role.clone(),
            status: None,
            should_quit: false,
            pending_title: None,
        };
        app.pending_title = Some(app.window_title());
        app
    }

    pub fn location(&self) -> &str {
        &self.ctx.location
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Moves to `path`. Sidebar expansion is left exactly as it was.
    pub fn navigate(&mut self, path: &str) {
        let path = normalize_route(path);
        if path == self.ctx.location {
            return;
        }
        let previous = std::mem::replace(&mut self.ctx.location, path);
        tracing::debug!(from = %previous, to = %self.ctx.location, "navigate");
        self.history.push(previous);
        self.pending_title = Some(self.window_title());
    }

    pub fn go_back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        tracing::debug!(from = %self.ctx.location, to = %previous, "navigate back");
        self.ctx.location = previous;
        self.pending_title = Some(self.window_title());
        true
    }

    /// Whether the current location renders the CRM dashboard page.
    pub fn on_dashboard(&self) -> bool {
        self.location() == ROOT_PATH || is_active(self.location(), CRM_PATH)
    }

    /// Labels from the sidebar down to the current page.
    pub fn breadcrumb(&self) -> Vec<String> {
        let path = if self.location() == ROOT_PATH {
            CRM_PATH
        } else {
            self.location()
        };
        self.sidebar
            .forest()
            .breadcrumb(path)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn page_title(&self) -> String {
        if self.on_dashboard() {
            return "CRM Dashboard".to_string();
        }
        self.breadcrumb()
            .last()
            .cloned()
            .unwrap_or_else(|| "Page not found".to_string())
    }

    pub fn window_title(&self) -> String {
        format!("{} | {}", self.page_title(), self.brand)
    }

    /// Title change the terminal has not been told about yet.
    pub fn take_title_request(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    pub fn fullscreen(&self) -> bool {
        self.ctx.fullscreen
    }

    pub fn sidebar_visible(&self) -> bool {
        !self.ctx.fullscreen && !self.sidebar_hidden
    }

    pub fn header_visible(&self) -> bool {
        !self.ctx.fullscreen
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_hidden = !self.sidebar_hidden;
        self.clamp_focus();
    }

    fn clamp_focus(&mut self) {
        if !self.sidebar_visible() {
            self.focus = Focus::Content;
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn toggle_popup(&mut self, popup: Popup) {
        let same = matches!(
            (self.popup, popup),
            (Some(Popup::Help), Popup::Help)
                | (Some(Popup::Notifications), Popup::Notifications)
                | (Some(Popup::Profile { .. }), Popup::Profile { .. })
        );
        self.popup = if same { None } else { Some(popup) };
    }

    pub fn move_profile_selection(&mut self, forward: bool) {
        if let Some(Popup::Profile { selected }) = self.popup.as_mut() {
            *selected = if forward {
                (*selected + 1).min(PROFILE_MENU.len() - 1)
            } else {
                selected.saturating_sub(1)
            };
        }
    }

    /// Profile entries are placeholders; choosing one only reports it.
    pub fn choose_profile_entry(&mut self) {
        if let Some(Popup::Profile { selected }) = self.popup {
            let entry = PROFILE_MENU.get(selected).copied().unwrap_or_default();
            self.popup = None;
            self.set_status(format!("{entry} is not available"), StatusLevel::Info);
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }
        let cmd = parse_command(&input);
        let action = self.execute_command(&cmd);
        self.apply_action(action);
        self.command.last = Some(input);
        self.exit_command();
    }

    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search;
        self.search.clear();
    }

    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search.clear();
    }

    /// Jumps to the first leaf whose label contains the search term.
    pub fn apply_search(&mut self) {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            self.exit_search();
            return;
        }
        let target = self
            .sidebar
            .forest()
            .leaves()
            .into_iter()
            .find(|leaf| leaf.label.to_lowercase().contains(&term))
            .map(|leaf| leaf.target.clone());
        match target {
            Some(target) => self.navigate(&target),
            None => self.set_status(format!("No page matches \"{}\"", self.search.trim()), StatusLevel::Warn),
        }
        self.exit_search();
    }
}

impl App {
    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        cmd.clone().into_action()
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(path) => self.navigate(&path),
            Action::Back => {
                if !self.go_back() {
                    self.set_status("No previous page", StatusLevel::Warn);
                }
            }
            Action::ToggleNav(key) => {
                if !self.sidebar.toggle(&key) {
                    self.set_status(format!("Not an expandable item: {key}"), StatusLevel::Warn);
                }
            }
            Action::SetNav(key, open) => {
                if !self.sidebar.set_expanded(&key, open) {
                    self.set_status(format!("Not an expandable item: {key}"), StatusLevel::Warn);
                }
            }
            Action::SetFilter(value) => {
                let result = self.dashboard.set_filter(&value);
                self.apply_action(result);
            }
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.set_status(format!("{} mode", self.theme.name()), StatusLevel::Info);
            }
            Action::ToggleFullscreen => {
                self.ctx.fullscreen = !self.ctx.fullscreen;
                self.clamp_focus();
            }
            Action::ToggleHelp => self.toggle_popup(Popup::Help),
            Action::Quit => self.should_quit = true,
        }
    }
}
