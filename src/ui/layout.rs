use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::App;
use crate::modules::dashboard::DashboardPanel;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

/// Hidden chrome collapses to a zero-sized rect.
pub fn areas(size: Rect, sidebar_width: u16, show_sidebar: bool, show_header: bool) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if show_header { 3 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(if show_sidebar { sidebar_width } else { 0 }),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    let footer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(vertical[2]);

    UiAreas {
        size,
        header: vertical[0],
        sidebar: main_chunks[0],
        main: main_chunks[1],
        status_line: footer_chunks[0],
        command_line: footer_chunks[1],
    }
}

pub fn areas_for(app: &App, size: Rect) -> UiAreas {
    areas(
        size,
        app.sidebar_width,
        app.sidebar_visible(),
        app.header_visible(),
    )
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub title: Rect,
    pub stats: Rect,
    pub forecast: Rect,
    pub deal_type: Rect,
    pub balance: Rect,
    pub deals: Rect,
    pub tasks: Rect,
}

impl DashboardAreas {
    pub fn panel(&self, panel: DashboardPanel) -> Rect {
        match panel {
            DashboardPanel::Forecast => self.forecast,
            DashboardPanel::DealType => self.deal_type,
            DashboardPanel::Balance => self.balance,
            DashboardPanel::Deals => self.deals,
            DashboardPanel::Tasks => self.tasks,
        }
    }

    pub fn panel_at(&self, col: u16, row: u16) -> Option<DashboardPanel> {
        DashboardPanel::ALL
            .into_iter()
            .find(|panel| rect_contains(self.panel(*panel), col, row))
    }
}

pub fn dashboard_areas(main: Rect) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Percentage(45),
            Constraint::Min(8),
        ])
        .split(main);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[2]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[3]);

    DashboardAreas {
        title: rows[0],
        stats: rows[1],
        forecast: charts[0],
        deal_type: charts[1],
        balance: charts[2],
        deals: lower[0],
        tasks: lower[1],
    }
}

/// First visible row so that `cursor` stays on screen.
pub fn scroll_offset(cursor: usize, height: usize) -> usize {
    let height = height.max(1);
    if cursor >= height {
        cursor.saturating_sub(height.saturating_sub(1))
    } else {
        0
    }
}

/// Rows available to the task list: the panel minus its border and the
/// remaining-count summary line.
pub fn task_list_area(tasks: Rect) -> Rect {
    let inner = rect_inner(tasks);
    Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    }
}

/// Task under `row` in the tasks panel, scrolled so `selected` is visible.
pub fn task_index_at(tasks: Rect, row: u16, selected: usize) -> Option<usize> {
    let list = task_list_area(tasks);
    if row < list.y || row >= list.y.saturating_add(list.height) {
        return None;
    }
    let offset = scroll_offset(selected, usize::from(list.height));
    Some(offset + usize::from(row - list.y))
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Area inside a one-cell border.
pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
