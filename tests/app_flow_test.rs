//! App-level flows driven through key events

use crmdash::app::{App, Focus, InputMode};
use crmdash::config::Config;
use crmdash::input::handle_key;
use crmdash::modules::dashboard::{DashboardData, DashboardPanel};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_at(path: &str) -> App {
    let config = Config {
        initial_path: path.to_string(),
        ..Config::default()
    };
    App::new(&config, DashboardData::sample())
}

fn type_command(app: &mut App, command: &str) {
    handle_key(app, press(KeyCode::Char(':')));
    for ch in command.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
    handle_key(app, press(KeyCode::Enter));
}

#[test]
fn test_navigating_away_keeps_group_open() {
    let mut app = app_at("/crm");
    assert!(app.sidebar.expansion().is_expanded("dashboards"));

    type_command(&mut app, "go /forms");
    assert_eq!(app.location(), "/forms");
    assert!(app.sidebar.expansion().is_expanded("dashboards"));

    type_command(&mut app, "collapse dashboards");
    type_command(&mut app, "go /crm");
    assert!(!app.sidebar.expansion().is_expanded("dashboards"));
}

#[test]
fn test_tasks_toggle_updates_remaining_label() {
    let mut app = app_at("/crm");
    // start from a list with four completed tasks
    for id in ["1", "2", "5", "8"] {
        let task = app.dashboard.tasks.tasks().iter().find(|t| t.id == id).cloned();
        if task.is_some_and(|t| !t.completed) {
            app.dashboard.tasks.toggle(id);
        }
    }
    assert_eq!(app.dashboard.tasks.completed_count(), 4);

    app.focus = Focus::Content;
    app.dashboard.active_panel = DashboardPanel::Tasks;
    handle_key(&mut app, press(KeyCode::Char('j')));
    handle_key(&mut app, press(KeyCode::Char('j')));
    handle_key(&mut app, press(KeyCode::Char(' ')));

    assert_eq!(app.dashboard.tasks.completed_count(), 5);
    assert_eq!(app.dashboard.tasks.remaining_label(), "5 of 10 remaining");
    assert!(app.dashboard.tasks.tasks()[2].completed);
}

#[test]
fn test_search_then_back() {
    let mut app = app_at("/crm");
    handle_key(&mut app, press(KeyCode::Char('/')));
    assert_eq!(app.input_mode, InputMode::Search);
    for ch in "blog".chars() {
        handle_key(&mut app, press(KeyCode::Char(ch)));
    }
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.location(), "/blog");
    assert_eq!(app.page_title(), "Blog");

    handle_key(&mut app, press(KeyCode::Char('b')));
    assert_eq!(app.location(), "/crm");
}

#[test]
fn test_quit_from_command_line() {
    let mut app = app_at("/crm");
    type_command(&mut app, "quit");
    assert!(app.should_quit);
}

fn nav_key() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        Just(KeyCode::Char('j')),
        Just(KeyCode::Char('k')),
        Just(KeyCode::Enter),
        Just(KeyCode::Char('b')),
    ]
}

proptest! {
    /// Moving the cursor, opening leaves and going back never changes which
    /// groups are open, as long as no parent row is activated.
    #[test]
    fn prop_leaf_navigation_keeps_expansion(keys in prop::collection::vec(nav_key(), 0..40)) {
        let mut app = app_at("/crm");
        let before = app.sidebar.expansion().clone();
        for code in keys {
            let on_parent = app.sidebar.cursor_key() == Some("dashboards");
            if code == KeyCode::Enter && on_parent {
                continue;
            }
            handle_key(&mut app, press(code));
        }
        prop_assert_eq!(app.sidebar.expansion(), &before);
    }
}
