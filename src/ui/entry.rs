//! Single-line text entry with a placeholder.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    /// Empty and unfocused; the placeholder is shown in the muted colour.
    Placeholder,
    /// Focused, or holding typed text.
    Editing,
}

#[derive(Debug, Clone)]
pub struct EntryField {
    placeholder: String,
    text: String,
    state: EntryState,
}

impl EntryField {
    pub fn new(placeholder: &str) -> Self {
        EntryField {
            placeholder: placeholder.to_string(),
            text: String::new(),
            state: EntryState::Placeholder,
        }
    }

    /// Clears the placeholder and starts editing.
    pub fn focus_in(&mut self) {
        if self.state == EntryState::Placeholder {
            self.state = EntryState::Editing;
            self.text.clear();
        }
    }

    /// Restores the placeholder when nothing was typed.
    pub fn focus_out(&mut self) {
        if self.text.is_empty() {
            self.state = EntryState::Placeholder;
        }
    }

    pub fn insert(&mut self, c: char) {
        if self.state == EntryState::Editing {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.state == EntryState::Editing {
            self.text.pop();
        }
    }

    /// Takes the typed text and clears the field.
    ///
    /// Whitespace-only input yields `None` and leaves the field as it was.
    pub fn submit(&mut self) -> Option<String> {
        if self.state != EntryState::Editing || self.text.trim().is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }

    pub fn is_placeholder(&self) -> bool {
        self.state == EntryState::Placeholder
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// What the widget shows: the placeholder or the typed text.
    pub fn display_text(&self) -> &str {
        match self.state {
            EntryState::Placeholder => &self.placeholder,
            EntryState::Editing => &self.text,
        }
    }
}
