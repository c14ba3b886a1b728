//! Dropdown value state used by the dashboard cards.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct Select {
    options: Vec<SelectOption>,
    index: usize,
}

impl Select {
    pub fn new(options: &[(&'static str, &'static str)], initial: &str) -> Self {
        let options: Vec<SelectOption> = options
            .iter()
            .map(|&(value, label)| SelectOption { value, label })
            .collect();
        let index = options
            .iter()
            .position(|option| option.value == initial)
            .unwrap_or(0);
        Self { options, index }
    }

    pub fn value(&self) -> &str {
        self.options.get(self.index).map_or("", |option| option.value)
    }

    pub fn label(&self) -> &str {
        self.options.get(self.index).map_or("", |option| option.label)
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn cycle(&mut self, forward: bool) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
    }

    /// Selects `value`; unknown values are ignored.
    pub fn set(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }
}
