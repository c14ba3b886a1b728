//! CRM dashboard page - widget state and key handling

pub mod data;
pub mod select;
pub mod tasks;

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel};

pub use data::DashboardData;
pub use select::Select;
pub use tasks::{Task, TaskList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPanel {
    Forecast,
    DealType,
    Balance,
    Deals,
    Tasks,
}

impl DashboardPanel {
    pub const ALL: [DashboardPanel; 5] = [
        DashboardPanel::Forecast,
        DashboardPanel::DealType,
        DashboardPanel::Balance,
        DashboardPanel::Deals,
        DashboardPanel::Tasks,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardPanel::Forecast => "Sales Forecast",
            DashboardPanel::DealType => "Deal Type",
            DashboardPanel::Balance => "Balance Overview",
            DashboardPanel::Deals => "Deals Status",
            DashboardPanel::Tasks => "My Tasks",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub data: DashboardData,
    pub active_panel: DashboardPanel,
    pub forecast_period: Select,
    pub deal_type_period: Select,
    pub balance_period: Select,
    pub deals_range: Select,
    pub tasks: TaskList,
}

impl Dashboard {
    pub fn new(data: DashboardData) -> Self {
        let tasks = TaskList::new(data.tasks.clone());
        Self {
            data,
            active_panel: DashboardPanel::Forecast,
            forecast_period: Select::new(
                &[
                    ("nov_2021", "Nov 2021"),
                    ("oct_2021", "Oct 2021"),
                    ("year_2021", "Year 2021"),
                ],
                "nov_2021",
            ),
            deal_type_period: Select::new(
                &[
                    ("monthly", "Monthly"),
                    ("quarterly", "Quarterly"),
                    ("yearly", "Yearly"),
                ],
                "monthly",
            ),
            balance_period: Select::new(
                &[("current_year", "Current Year"), ("last_year", "Last Year")],
                "current_year",
            ),
            deals_range: Select::new(
                &[
                    ("nov_dec_2021", "02 Nov 2021 to 31 Dec 2021"),
                    ("oct_2021", "October 2021"),
                    ("all_time", "All Time"),
                ],
                "nov_dec_2021",
            ),
            tasks,
        }
    }

    pub fn next_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Forecast => DashboardPanel::DealType,
            DashboardPanel::DealType => DashboardPanel::Balance,
            DashboardPanel::Balance => DashboardPanel::Deals,
            DashboardPanel::Deals => DashboardPanel::Tasks,
            DashboardPanel::Tasks => DashboardPanel::Forecast,
        };
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = match self.active_panel {
            DashboardPanel::Forecast => DashboardPanel::Tasks,
            DashboardPanel::DealType => DashboardPanel::Forecast,
            DashboardPanel::Balance => DashboardPanel::DealType,
            DashboardPanel::Deals => DashboardPanel::Balance,
            DashboardPanel::Tasks => DashboardPanel::Deals,
        };
    }

    /// Dropdown belonging to the focused panel.
    pub fn active_select(&mut self) -> Option<&mut Select> {
        match self.active_panel {
            DashboardPanel::Forecast => Some(&mut self.forecast_period),
            DashboardPanel::DealType => Some(&mut self.deal_type_period),
            DashboardPanel::Balance => Some(&mut self.balance_period),
            DashboardPanel::Deals => Some(&mut self.deals_range),
            DashboardPanel::Tasks => None,
        }
    }

    /// Selects `value` in the focused panel's dropdown.
    pub fn set_filter(&mut self, value: &str) -> Action {
        let panel = self.active_panel.title();
        let Some(select) = self.active_select() else {
            return Action::Notify(format!("{panel} has no filter"), NotifyLevel::Warn);
        };
        if select.set(value) {
            tracing::debug!(panel, value, "set dashboard filter");
            Action::Notify(format!("{panel}: {}", select.label()), NotifyLevel::Info)
        } else {
            let known: Vec<&str> = select.options().iter().map(|option| option.value).collect();
            Action::Notify(
                format!("Unknown {panel} filter: {value} (try {})", known.join(", ")),
                NotifyLevel::Warn,
            )
        }
    }

    fn cycle_select(&mut self, forward: bool) -> Action {
        let panel = self.active_panel.title();
        match self.active_select() {
            Some(select) => {
                select.cycle(forward);
                tracing::debug!(panel, value = select.value(), "changed dashboard filter");
                Action::Notify(format!("{panel}: {}", select.label()), NotifyLevel::Info)
            }
            None => Action::None,
        }
    }
}

impl Module for Dashboard {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &Context) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.next_panel();
                Action::None
            }
            KeyCode::BackTab => {
                self.prev_panel();
                Action::None
            }
            KeyCode::Char(']') => self.cycle_select(true),
            KeyCode::Char('[') => self.cycle_select(false),
            KeyCode::Char('j') | KeyCode::Down if self.active_panel == DashboardPanel::Tasks => {
                self.tasks.select_next();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up if self.active_panel == DashboardPanel::Tasks => {
                self.tasks.select_prev();
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter if self.active_panel == DashboardPanel::Tasks => {
                self.tasks.toggle_selected();
                Action::None
            }
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_panel_cycle_round_trip() {
        let mut dashboard = Dashboard::new(DashboardData::sample());
        for _ in 0..DashboardPanel::ALL.len() {
            dashboard.next_panel();
        }
        assert_eq!(dashboard.active_panel, DashboardPanel::Forecast);
        dashboard.prev_panel();
        assert_eq!(dashboard.active_panel, DashboardPanel::Tasks);
    }

    #[test]
    fn test_brackets_cycle_focused_select() {
        let mut dashboard = Dashboard::new(DashboardData::sample());
        let ctx = Context::default();
        dashboard.handle_key(press(KeyCode::Char(']')), &ctx);
        assert_eq!(dashboard.forecast_period.value(), "oct_2021");
        assert_eq!(dashboard.deal_type_period.value(), "monthly");

        dashboard.handle_key(press(KeyCode::Tab), &ctx);
        dashboard.handle_key(press(KeyCode::Char('[')), &ctx);
        assert_eq!(dashboard.deal_type_period.value(), "yearly");
    }

    #[test]
    fn test_set_filter_targets_focused_panel() {
        let mut dashboard = Dashboard::new(DashboardData::sample());
        dashboard.active_panel = DashboardPanel::Balance;
        assert_eq!(
            dashboard.set_filter("last_year"),
            Action::Notify("Balance Overview: Last Year".to_string(), NotifyLevel::Info)
        );
        assert_eq!(dashboard.balance_period.value(), "last_year");

        dashboard.active_panel = DashboardPanel::Tasks;
        assert!(matches!(
            dashboard.set_filter("last_year"),
            Action::Notify(_, NotifyLevel::Warn)
        ));
    }

    #[test]
    fn test_space_toggles_task_only_in_tasks_panel() {
        let mut dashboard = Dashboard::new(DashboardData::sample());
        let ctx = Context::default();
        let before = dashboard.tasks.completed_count();

        dashboard.handle_key(press(KeyCode::Char(' ')), &ctx);
        assert_eq!(dashboard.tasks.completed_count(), before);

        dashboard.active_panel = DashboardPanel::Tasks;
        dashboard.handle_key(press(KeyCode::Char('j')), &ctx);
        dashboard.handle_key(press(KeyCode::Char(' ')), &ctx);
        // task 2 starts completed
        assert_eq!(dashboard.tasks.completed_count(), before - 1);
        assert_eq!(dashboard.tasks.remaining_label(), "8 of 10 remaining");
    }
}
