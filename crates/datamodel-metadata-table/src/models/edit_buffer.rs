//! Controlled text buffer with blur-commit semantics

/// Text being edited in a single-line input.
///
/// The buffer follows an externally-owned value until the user types into
/// it. A blur hands back the edited text for commit; the owner either
/// persists it or resets the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    value: String,
    /// Last value received from the owner
    source: String,
    dirty: bool,
    focused: bool,
}

impl EditBuffer {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            source: value.clone(),
            value,
            dirty: false,
            focused: false,
        }
    }

    /// Text currently displayed
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether input arrived since the last commit or reset
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Replace the displayed text with user input
    pub fn input(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.dirty = true;
    }

    /// Lose focus. Returns the text to commit if the user edited it.
    pub fn blur(&mut self) -> Option<String> {
        self.focused = false;
        if self.dirty {
            self.dirty = false;
            Some(self.value.clone())
        } else {
            None
        }
    }

    /// Discard any edit and display `value`
    pub fn reset(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.source = self.value.clone();
        self.dirty = false;
    }

    /// Follow a new owner value unless the user is mid-edit
    pub fn sync(&mut self, value: &str) {
        if self.source == value {
            return;
        }
        self.source = value.to_string();
        if !self.focused && !self.dirty {
            self.value = value.to_string();
        }
    }
}
