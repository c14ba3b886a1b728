//! Task checklist state.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub due: NaiveDate,
    pub completed: bool,
}

impl Task {
    pub fn new(id: &str, description: &str, due: NaiveDate, completed: bool) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            due,
            completed,
        }
    }

    /// Due date as shown in the widget, e.g. `15 Sep, 2021`.
    pub fn due_label(&self) -> String {
        self.due.format("%d %b, %Y").to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    pub selected: usize,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks, selected: 0 }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    pub fn remaining_label(&self) -> String {
        format!("{} of {} remaining", self.remaining_count(), self.tasks.len())
    }

    /// Flips completion for `id`. Returns false when no task has that id.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        tracing::debug!(task = id, completed = task.completed, "toggled task");
        true
    }

    pub fn toggle_selected(&mut self) -> bool {
        let Some(id) = self.tasks.get(self.selected).map(|task| task.id.clone()) else {
            return false;
        };
        self.toggle(&id)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.tasks.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
