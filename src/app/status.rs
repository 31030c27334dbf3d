use std::path::Path;

pub const READY_STATUS: &str = "Ready. Ctrl+N adds a field, Ctrl+S saves the form.";

/// The single user-facing message surface; every operation reports its
/// outcome here and nowhere else.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn report(&mut self, err: impl std::fmt::Display) {
        self.message = err.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn saved(&mut self, title: &str, path: &Path) {
        self.message = format!("Saved \"{title}\" to {}", path.display());
    }

    pub fn loaded(&mut self, title: &str) {
        self.message = format!("Loaded \"{title}\"");
    }

    pub fn reading(&mut self, path: &str) {
        self.message = format!("Reading {path}…");
    }

    pub fn submitted(&mut self, total: usize) {
        self.message = format!("Submission recorded ({total} total)");
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved changes. Press Ctrl+Q again to quit without saving.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
