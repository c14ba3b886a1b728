//! Key and mouse dispatch for the main loop.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus, InputMode, Popup};
use crate::core::{Action, Module};
use crate::modules::dashboard::DashboardPanel;
use crate::ui;
use crate::ui::layout::{rect_contains, rect_inner, UiAreas};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if let Some(popup) = app.popup {
        handle_popup(app, key, popup);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
    }
}

fn handle_popup(app: &mut App, key: KeyEvent, popup: Popup) {
    match (popup, key.code) {
        (_, KeyCode::Esc) => app.popup = None,
        (Popup::Help, KeyCode::Char('?') | KeyCode::Char('q')) => app.popup = None,
        (Popup::Notifications, KeyCode::Char('n')) => app.popup = None,
        (Popup::Profile { .. }, KeyCode::Char('u')) => app.popup = None,
        (Popup::Profile { .. }, KeyCode::Char('j') | KeyCode::Down) => {
            app.move_profile_selection(true)
        }
        (Popup::Profile { .. }, KeyCode::Char('k') | KeyCode::Up) => {
            app.move_profile_selection(false)
        }
        (Popup::Profile { .. }, KeyCode::Enter) => app.choose_profile_entry(),
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.apply_action(Action::ToggleHelp),
        KeyCode::Char(':') => app.enter_command(),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('n') => app.toggle_popup(Popup::Notifications),
        KeyCode::Char('u') => app.toggle_popup(Popup::Profile { selected: 0 }),
        KeyCode::Char('d') => app.apply_action(Action::ToggleTheme),
        KeyCode::Char('F') => app.apply_action(Action::ToggleFullscreen),
        KeyCode::Char('m') => app.toggle_sidebar(),
        KeyCode::Char('b') | KeyCode::Backspace => app.apply_action(Action::Back),
        KeyCode::Tab => cycle_focus(app, true),
        KeyCode::BackTab => cycle_focus(app, false),
        _ => dispatch_to_focused(app, key),
    }
}

fn dispatch_to_focused(app: &mut App, key: KeyEvent) {
    let action = match app.focus {
        Focus::Sidebar if app.sidebar_visible() => app.sidebar.handle_key(key, &app.ctx),
        Focus::Content if app.on_dashboard() => app.dashboard.handle_key(key, &app.ctx),
        _ => Action::None,
    };
    app.apply_action(action);
}

/// Tab walks sidebar, then each dashboard panel, then back to the sidebar.
fn cycle_focus(app: &mut App, forward: bool) {
    let sidebar = app.sidebar_visible();
    let dashboard = app.on_dashboard();
    let first = if forward {
        DashboardPanel::Forecast
    } else {
        DashboardPanel::Tasks
    };
    let last = if forward {
        DashboardPanel::Tasks
    } else {
        DashboardPanel::Forecast
    };

    match app.focus {
        Focus::Sidebar => {
            app.focus = Focus::Content;
            if dashboard {
                app.dashboard.active_panel = first;
            }
        }
        Focus::Content if dashboard => {
            if app.dashboard.active_panel == last && sidebar {
                app.focus = Focus::Sidebar;
            } else {
                let action = app.dashboard.handle_key(tab_key(forward), &app.ctx);
                app.apply_action(action);
            }
        }
        Focus::Content => {
            if sidebar {
                app.focus = Focus::Sidebar;
            }
        }
    }
}

fn tab_key(forward: bool) -> KeyEvent {
    let code = if forward {
        KeyCode::Tab
    } else {
        KeyCode::BackTab
    };
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_search(),
        KeyCode::Enter => app.apply_search(),
        KeyCode::Backspace => {
            app.search.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.search.push(ch);
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.popup.is_some() || app.input_mode != InputMode::Normal {
        return;
    }
    let areas = ui::layout::areas_for(app, size);
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, areas, col, row),
        MouseEventKind::ScrollUp => handle_scroll(app, areas, col, row, true),
        MouseEventKind::ScrollDown => handle_scroll(app, areas, col, row, false),
        _ => {}
    }
}

fn handle_scroll(app: &mut App, areas: UiAreas, col: u16, row: u16, up: bool) {
    if rect_contains(areas.sidebar, col, row) {
        app.focus = Focus::Sidebar;
        let location = app.ctx.location.clone();
        app.sidebar.move_cursor(&location, !up);
        return;
    }
    if rect_contains(areas.main, col, row) && app.on_dashboard() {
        let dashboard = ui::layout::dashboard_areas(areas.main);
        if dashboard.panel_at(col, row) == Some(DashboardPanel::Tasks) {
            app.focus = Focus::Content;
            app.dashboard.active_panel = DashboardPanel::Tasks;
            if up {
                app.dashboard.tasks.select_prev();
            } else {
                app.dashboard.tasks.select_next();
            }
        }
    }
}

fn handle_click(app: &mut App, areas: UiAreas, col: u16, row: u16) {
    if rect_contains(areas.sidebar, col, row) {
        let inner = rect_inner(areas.sidebar);
        if !rect_contains(inner, col, row) {
            return;
        }
        app.focus = Focus::Sidebar;
        let location = app.ctx.location.clone();
        let rows = app.sidebar.rows(&location);
        let cursor = app.sidebar.cursor_index(&rows).unwrap_or(0);
        let offset = ui::layout::scroll_offset(cursor, usize::from(inner.height));
        let action = app
            .sidebar
            .click(&location, offset + usize::from(row - inner.y));
        app.apply_action(action);
        return;
    }

    if rect_contains(areas.main, col, row) {
        app.focus = Focus::Content;
        if !app.on_dashboard() {
            return;
        }
        let dashboard = ui::layout::dashboard_areas(areas.main);
        let Some(panel) = dashboard.panel_at(col, row) else {
            return;
        };
        app.dashboard.active_panel = panel;
        if panel == DashboardPanel::Tasks {
            let selected = app.dashboard.tasks.selected;
            let clicked = ui::layout::task_index_at(dashboard.tasks, row, selected)
                .filter(|idx| *idx < app.dashboard.tasks.len());
            if let Some(idx) = clicked {
                app.dashboard.tasks.selected = idx;
                app.dashboard.tasks.toggle_selected();
            }
        }
    }
}
