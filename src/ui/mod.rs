use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub mod dashboard;
pub mod layout;
pub mod sidebar;
pub mod widgets;

use crate::app::{App, Focus, InputMode, Popup, StatusLevel, PROFILE_MENU};
use crate::theme::Palette;

use self::layout::centered_rect;

pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.palette();
    let size = f.size();
    f.render_widget(Block::default().style(palette.base), size);

    let areas = layout::areas_for(app, size);

    if app.header_visible() {
        draw_header(f, areas.header, app, &palette);
    }
    if app.sidebar_visible() {
        sidebar::draw_sidebar(f, areas.sidebar, app);
    }
    if app.on_dashboard() {
        dashboard::draw_dashboard(f, areas.main, app);
    } else {
        draw_placeholder(f, areas.main, app, &palette);
    }
    draw_status_line(f, areas.status_line, app, &palette);
    draw_command_line(f, areas.command_line, app, &palette);

    match app.popup {
        Some(Popup::Help) => draw_help_popup(f, size, &palette),
        Some(Popup::Notifications) => draw_notifications_popup(f, size, app, &palette),
        Some(Popup::Profile { selected }) => draw_profile_popup(f, size, app, selected, &palette),
        None => {}
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let search = if app.input_mode == InputMode::Search {
        Span::raw(format!("{}▏", app.search))
    } else {
        Span::styled("Search... (/)", palette.text_muted)
    };
    let left = Line::from(vec![
        Span::styled("☰ ", palette.title),
        Span::styled("⌕ ", palette.text_muted),
        search,
    ]);

    let theme_icon = if app.theme.is_dark() { "☾" } else { "☀" };
    let fullscreen_icon = if app.fullscreen() { "⤡" } else { "⤢" };
    let unread = app.dashboard.data.unread_notifications;
    let right = Line::from(vec![
        Span::styled(fullscreen_icon, palette.text_muted),
        Span::raw("  "),
        Span::styled(theme_icon, palette.text_muted),
        Span::raw("  "),
        Span::raw("🔔"),
        Span::styled(format!(" {unread} "), palette.badge_hot),
        Span::raw("  "),
        Span::styled(app.user_name.as_str(), palette.title),
        Span::raw(" "),
        Span::styled(app.user_role.as_str(), palette.text_muted),
    ]);

    let block = || {
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.border)
            .style(palette.header)
    };
    f.render_widget(Paragraph::new(left).block(block()), chunks[0]);
    f.render_widget(
        Paragraph::new(right)
            .block(block())
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn draw_placeholder(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let crumbs = app.breadcrumb();
    let lines = vec![
        Line::from(Span::styled(app.page_title().to_uppercase(), palette.title)),
        Line::from(Span::styled(
            if crumbs.is_empty() {
                app.location().to_string()
            } else {
                crumbs.join(" > ")
            },
            palette.text_muted,
        )),
        Line::from(""),
        Line::from("This page has no content yet."),
        Line::from(Span::styled(
            "Press b to go back or pick another page from the sidebar.",
            palette.text_muted,
        )),
    ];
    let border_style = if app.focus == Focus::Content {
        palette.border_focused
    } else {
        palette.border
    };
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focus = match app.focus {
        Focus::Sidebar => "Sidebar",
        Focus::Content if app.on_dashboard() => app.dashboard.active_panel.title(),
        Focus::Content => "Page",
    };
    let line = Line::from(vec![
        Span::styled("Page ", palette.text_muted),
        Span::raw(format!("{}  ", app.page_title())),
        Span::styled("Path ", palette.text_muted),
        Span::raw(format!("{}  ", app.location())),
        Span::styled("Focus ", palette.text_muted),
        Span::raw(format!("{focus}  ")),
        Span::styled("Theme ", palette.text_muted),
        Span::raw(app.theme.name()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("go", "Open a route, e.g. go /analytics"),
        ("back", "Return to the previous page"),
        ("toggle", "Open/close a sidebar group"),
        ("expand", "Open a sidebar group"),
        ("collapse", "Close a sidebar group"),
        ("filter", "Set the focused panel's filter, e.g. filter yearly"),
        ("theme", "Switch light/dark mode"),
        ("fullscreen", "Hide sidebar and header"),
        ("help", "Show key bindings"),
        ("quit", "Exit"),
    ];

    commands
        .into_iter()
        .find(|(cmd, _)| cmd.starts_with(&input))
        .map(|(_, desc)| desc)
}

fn action_hints(app: &App, palette: &Palette) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.focus {
        Focus::Sidebar => &[
            ("j/k", "move"),
            ("Enter", "open"),
            ("h/l", "collapse/expand"),
            ("Tab", "content"),
        ],
        Focus::Content => &[
            ("Tab", "next panel"),
            ("[/]", "filter"),
            ("Space", "toggle task"),
            ("b", "back"),
        ],
    };
    let mut spans = Vec::new();
    for (key, label) in hints.iter().chain(&[(":", "command"), ("?", "help")]) {
        spans.push(Span::styled(key.to_string(), palette.info));
        spans.push(Span::styled(format!(" {label}  "), palette.text_muted));
    }
    Line::from(spans)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input).unwrap_or("go | back | toggle | theme | help");
            Line::from(vec![
                Span::styled(": ", palette.warning),
                Span::raw(app.command.input.as_str()),
                Span::styled(format!("  {hint}"), palette.text_muted),
            ])
        }
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", palette.warning),
            Span::raw(app.search.as_str()),
            Span::styled("  (Enter=open Esc=cancel)", palette.text_muted),
        ]),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let style = match level {
                    StatusLevel::Info => palette.positive,
                    StatusLevel::Warn => palette.warning,
                    StatusLevel::Error => palette.negative,
                };
                Line::from(vec![
                    Span::styled("msg: ", palette.text_muted),
                    Span::styled(text, style),
                ])
            } else {
                action_hints(app, palette)
            }
        }
    };

    f.render_widget(Paragraph::new(content), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(Span::styled("Sidebar", palette.title)),
        Line::from("  j / k      Move cursor"),
        Line::from("  Enter      Open page / toggle group"),
        Line::from("  h / l      Collapse / expand"),
        Line::from(""),
        Line::from(Span::styled("Dashboard", palette.title)),
        Line::from("  Tab        Next panel (last panel returns to sidebar)"),
        Line::from("  [ / ]      Cycle the panel's filter"),
        Line::from("  j / k      Move in My Tasks"),
        Line::from("  Space      Toggle task"),
        Line::from(""),
        Line::from(Span::styled("Header", palette.title)),
        Line::from("  /          Search pages"),
        Line::from("  n          Notifications"),
        Line::from("  u          Profile menu"),
        Line::from("  d          Dark mode"),
        Line::from("  F          Fullscreen"),
        Line::from("  m          Show/hide sidebar"),
        Line::from("  b          Back"),
        Line::from("  :          Command line"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from("Mouse: click rows and tasks, scroll the sidebar"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(palette.base)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn draw_notifications_popup(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let popup_area = centered_rect(50, 40, area);
    f.render_widget(Clear, popup_area);

    let data = &app.dashboard.data;
    let items: Vec<ListItem> = data
        .notifications
        .iter()
        .map(|note| {
            ListItem::new(Line::from(vec![
                Span::raw(note.title),
                Span::styled(format!("  {}", note.age), palette.text_muted),
            ]))
        })
        .collect();
    let title = Line::from(vec![
        Span::styled(" Notifications ", palette.title),
        Span::styled(format!(" {} New ", data.unread_notifications), palette.badge_hot),
    ]);
    let list = List::new(items)
        .style(palette.base)
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, popup_area);
}

fn draw_profile_popup(f: &mut Frame, area: Rect, app: &App, selected: usize, palette: &Palette) {
    let popup_area = centered_rect(36, 30, area);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(Span::styled(format!("Welcome {}!", app.user_name), palette.title)),
        Line::from(""),
    ];
    for (idx, entry) in PROFILE_MENU.iter().enumerate() {
        let line = if idx == selected {
            Line::from(Span::styled(
                format!("> {entry}"),
                palette.title.add_modifier(Modifier::REVERSED),
            ))
        } else {
            Line::from(format!("  {entry}"))
        };
        lines.push(line);
    }
    let paragraph = Paragraph::new(Text::from(lines))
        .style(palette.base)
        .block(Block::default().title("Profile").borders(Borders::ALL));
    f.render_widget(paragraph, popup_area);
}
