//! The login selected in the user list, handed to the profile view.

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;

/// Holds the login the user picked from the list, if any.
///
/// The value is owned by whoever drives navigation and passed explicitly to the
/// views that need it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectedLogin {
    login: Option<String>,
}

impl SelectedLogin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `login`, replacing any previous selection. Blank input clears the
    /// selection instead.
    pub fn select(&mut self, login: &str) {
        let login = login.trim();
        self.login = if login.is_empty() {
            None
        } else {
            Some(login.to_string())
        };
    }

    pub fn get(&self) -> Option<&str> {
        self.login.as_deref()
    }

    pub fn clear(&mut self) {
        self.login = None;
    }

    /// Removes and returns the current selection.
    pub fn take(&mut self) -> Option<String> {
        self.login.take()
    }
}
