//! Text field descriptors and editing

/// A single edit to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Newline,
    Backspace,
    Clear,
}

/// Static description of an editable text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub is_multiline: bool,
    /// Hard cap on length in characters
    pub max_chars: Option<usize>,
}

impl FieldSpec {
    pub const fn single_line(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            is_multiline: false,
            max_chars: None,
        }
    }

    pub const fn multiline(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            is_multiline: true,
            max_chars: None,
        }
    }

    pub const fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Apply an edit to `current`, returning the new value if it changed
    pub fn apply(&self, current: &str, edit: TextEdit) -> Option<String> {
        let mut value = current.to_string();
        match edit {
            TextEdit::Insert(c) => {
                if self.is_full(current) {
                    return None;
                }
                value.push(c);
            }
            TextEdit::Newline => {
                if !self.is_multiline || self.is_full(current) {
                    return None;
                }
                value.push('\n');
            }
            TextEdit::Backspace => {
                value.pop()?;
            }
            TextEdit::Clear => {
                if value.is_empty() {
                    return None;
                }
                value.clear();
            }
        }
        Some(value)
    }

    fn is_full(&self, current: &str) -> bool {
        self.max_chars
            .is_some_and(|max| current.chars().count() >= max)
    }
}
