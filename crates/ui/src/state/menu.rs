/// Options in the quit confirmation popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuitChoice {
    Yes,
    #[default]
    Cancel,
}

impl QuitChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuitChoice::Yes => "Yes",
            QuitChoice::Cancel => "Cancel",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            QuitChoice::Yes => QuitChoice::Cancel,
            QuitChoice::Cancel => QuitChoice::Yes,
        }
    }
}

/// Quit confirmation popup state
#[derive(Debug, Clone, Copy, Default)]
pub struct QuitMenu {
    open: bool,
    pub selected: QuitChoice,
}

impl QuitMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open or close the popup; opening always preselects Cancel
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected = QuitChoice::Cancel;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.toggled();
    }
}
