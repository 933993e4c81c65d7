//! Step panels
//!
//! Each panel keeps its own view state (focus, cursors, loading flags) and
//! turns key presses into field updates on the wizard. Panels never move
//! the step cursor; work they cannot do themselves is handed back to the
//! app as a [`PanelRequest`].

mod basics;
mod describe;
mod preview;
mod title;

pub use basics::{
    BasicsFocus, BasicsPanel, CATEGORY_COLUMNS, LISTING_FEE_NOTICE, LOCATION_FIELD, OFFERING_FIELD,
};
pub use describe::{section_spec, DescribeFocus, DescribePanel, PHOTO_INPUT_FIELD};
pub use preview::{listing_text, truncate_chars, PreviewPanel};
pub use title::{TitleFocus, TitlePanel, RECOMMENDED_TITLE_CHARS, TITLE_FIELD};

use crate::state::TextEdit;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Work a panel asks the app to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRequest {
    None,
    GenerateDraft,
    /// Comma-separated photo paths to attach
    AddPhotos(String),
    CopyPreview,
}

/// Map a key press to a text edit
pub(crate) fn text_edit(key: &KeyEvent) -> Option<TextEdit> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(TextEdit::Clear),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(TextEdit::Insert(c)),
        KeyCode::Enter => Some(TextEdit::Newline),
        KeyCode::Backspace => Some(TextEdit::Backspace),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn typed(text: &str) -> Vec<KeyEvent> {
        text.chars().map(|c| key(KeyCode::Char(c))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;

    #[test]
    fn test_text_edit_mapping() {
        assert_eq!(text_edit(&key(KeyCode::Char('a'))), Some(TextEdit::Insert('a')));
        assert_eq!(text_edit(&key(KeyCode::Enter)), Some(TextEdit::Newline));
        assert_eq!(text_edit(&key(KeyCode::Backspace)), Some(TextEdit::Backspace));
        assert_eq!(text_edit(&ctrl('u')), Some(TextEdit::Clear));
        assert_eq!(text_edit(&ctrl('n')), None);
        assert_eq!(text_edit(&key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_shifted_chars_are_inserted() {
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(text_edit(&shifted), Some(TextEdit::Insert('A')));
    }
}
