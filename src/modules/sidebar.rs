//! Sidebar module - expandable navigation with a row cursor

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel};
use crate::nav::rows::{first_selectable, position_of, step_selectable};
use crate::nav::{self, ExpandOverride, ExpansionState, NavForest, NavRow};

#[derive(Debug, Clone)]
pub struct Sidebar {
    forest: NavForest,
    expansion: ExpansionState,
    /// Key of the row under the cursor
    cursor: Option<String>,
}

impl Sidebar {
    /// Seeds expansion from `location`. This is the only time the location
    /// influences which parents are open.
    pub fn new(forest: NavForest, overrides: &[ExpandOverride], location: &str) -> Self {
        let expansion = nav::initialize(&forest, overrides, location);
        let mut sidebar = Self {
            forest,
            expansion,
            cursor: None,
        };
        sidebar.cursor = sidebar.initial_cursor(location);
        sidebar
    }

    fn initial_cursor(&self, location: &str) -> Option<String> {
        let rows = self.rows(location);
        let active = rows.iter().filter_map(NavRow::node).find(|row| {
            row.highlight == nav::Highlight::Leaf
        });
        active
            .or_else(|| first_selectable(&rows).and_then(|idx| rows[idx].node()))
            .map(|row| row.key.clone())
    }

    pub fn forest(&self) -> &NavForest {
        &self.forest
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn rows(&self, location: &str) -> Vec<NavRow> {
        nav::visible_rows(&self.forest, &self.expansion, location)
    }

    pub fn cursor_key(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Row index of the cursor. When a collapse hides the cursor's row, the
    /// nearest visible enclosing parent stands in for it.
    pub fn cursor_index(&self, rows: &[NavRow]) -> Option<usize> {
        let Some(key) = self.cursor.as_deref() else {
            return first_selectable(rows);
        };
        position_of(rows, key)
            .or_else(|| {
                self.forest
                    .ancestors(key)
                    .into_iter()
                    .rev()
                    .find_map(|parent| position_of(rows, parent))
            })
            .or_else(|| first_selectable(rows))
    }

    pub fn move_cursor(&mut self, location: &str, forward: bool) {
        let rows = self.rows(location);
        let Some(current) = self.cursor_index(&rows) else {
            return;
        };
        let next = step_selectable(&rows, current, forward);
        self.cursor = rows[next].node().map(|row| row.key.clone());
    }

    pub fn toggle(&mut self, key: &str) -> bool {
        if !self.is_parent(key) {
            return false;
        }
        self.expansion = nav::toggle(&self.expansion, key);
        true
    }

    pub fn set_expanded(&mut self, key: &str, open: bool) -> bool {
        if !self.is_parent(key) {
            return false;
        }
        if self.expansion.is_expanded(key) != open {
            self.expansion = nav::toggle(&self.expansion, key);
        }
        true
    }

    fn is_parent(&self, key: &str) -> bool {
        self.forest.find(key).is_some_and(|node| node.is_parent())
    }

    /// Parent under the cursor toggles, leaf navigates.
    pub fn activate(&mut self, location: &str) -> Action {
        let rows = self.rows(location);
        let Some(row) = self.cursor_index(&rows).and_then(|idx| rows[idx].node()) else {
            return Action::None;
        };
        if row.is_parent {
            Action::ToggleNav(row.key.clone())
        } else {
            Action::Navigate(row.target.clone())
        }
    }

    /// Mouse click on the `index`-th visible row.
    pub fn click(&mut self, location: &str, index: usize) -> Action {
        let rows = self.rows(location);
        match rows.get(index).and_then(NavRow::node) {
            Some(row) => {
                self.cursor = Some(row.key.clone());
                self.activate(location)
            }
            None => Action::None,
        }
    }

    /// Left: close an open parent, or jump from a child to its parent.
    fn collapse_or_ascend(&mut self, location: &str) -> Action {
        let rows = self.rows(location);
        let Some(row) = self.cursor_index(&rows).and_then(|idx| rows[idx].node()) else {
            return Action::None;
        };
        if row.is_parent && row.expanded {
            return Action::SetNav(row.key.clone(), false);
        }
        if let Some(parent) = row.parent_key.clone() {
            self.cursor = Some(parent);
        }
        Action::None
    }

    fn expand_under_cursor(&mut self, location: &str) -> Action {
        let rows = self.rows(location);
        match self.cursor_index(&rows).and_then(|idx| rows[idx].node()) {
            Some(row) if row.is_parent && !row.expanded => Action::SetNav(row.key.clone(), true),
            Some(row) if !row.is_parent => {
                Action::Notify(format!("{} has no sub-items", row.label), NotifyLevel::Info)
            }
            _ => Action::None,
        }
    }
}

impl Module for Sidebar {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let location = ctx.location.as_str();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor(location, true);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor(location, false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(location),
            KeyCode::Char('h') | KeyCode::Left => self.collapse_or_ascend(location),
            KeyCode::Char('l') | KeyCode::Right => self.expand_under_cursor(location),
            _ => Action::None,
        }
    }
}
