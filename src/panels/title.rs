//! Title step: assisted suggestions plus a free-text title

use super::{text_edit, PanelRequest};
use crate::services::TitleSuggestion;
use crate::state::{FieldSpec, FieldUpdate, WizardController};
use crossterm::event::{KeyCode, KeyEvent};

/// Titles longer than this get a visibility warning
pub const RECOMMENDED_TITLE_CHARS: usize = 80;
/// Hard cap on title input
pub const MAX_TITLE_CHARS: usize = 100;

pub const TITLE_FIELD: FieldSpec = FieldSpec::single_line(
    "Or write your own title",
    "e.g., House Cleaning in Downtown Montreal – Weekly or One-Time",
)
.with_max_chars(MAX_TITLE_CHARS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleFocus {
    #[default]
    Suggestions,
    Input,
}

#[derive(Debug)]
pub struct TitlePanel {
    pub suggestions: Vec<TitleSuggestion>,
    pub loading: bool,
    pub cursor: usize,
    pub focus: TitleFocus,
}

impl Default for TitlePanel {
    fn default() -> Self {
        Self {
            suggestions: Vec::new(),
            loading: true,
            cursor: 0,
            focus: TitleFocus::default(),
        }
    }
}

impl TitlePanel {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Suggestions are being refetched
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.suggestions.clear();
        self.cursor = 0;
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<TitleSuggestion>) {
        self.suggestions = suggestions;
        self.loading = false;
        self.cursor = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent, wizard: &mut WizardController) -> PanelRequest {
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.focus = match self.focus {
                TitleFocus::Suggestions => TitleFocus::Input,
                TitleFocus::Input => TitleFocus::Suggestions,
            };
            return PanelRequest::None;
        }

        match self.focus {
            TitleFocus::Suggestions => self.handle_suggestion_key(key, wizard),
            TitleFocus::Input => {
                if let Some(edit) = text_edit(&key) {
                    if let Some(value) = TITLE_FIELD.apply(&wizard.form().title, edit) {
                        edit_title(wizard, value);
                    }
                }
            }
        }
        PanelRequest::None
    }

    fn handle_suggestion_key(&mut self, key: KeyEvent, wizard: &mut WizardController) {
        if self.loading || self.suggestions.is_empty() {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(self.suggestions.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(suggestion) = self.suggestions.get(self.cursor) {
                    select_suggestion(wizard, &suggestion.title);
                }
            }
            _ => {}
        }
    }
}

/// Use a suggestion as the title
pub fn select_suggestion(wizard: &mut WizardController, title: &str) {
    wizard.update_field(FieldUpdate::SelectedSuggestion(Some(title.to_string())));
    wizard.update_field(FieldUpdate::Title(title.to_string()));
}

/// Replace the title, dropping the suggestion link once they diverge
pub fn edit_title(wizard: &mut WizardController, title: String) {
    let diverged = wizard
        .form()
        .selected_suggestion
        .as_ref()
        .is_some_and(|s| *s != title);
    wizard.update_field(FieldUpdate::Title(title));
    if diverged {
        wizard.update_field(FieldUpdate::SelectedSuggestion(None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::test_keys::*;
    use crate::services::suggestions_for;
    use crate::state::ServiceCategory;

    fn ready_panel() -> TitlePanel {
        let mut panel = TitlePanel::default();
        panel.set_suggestions(suggestions_for(Some(ServiceCategory::Household)));
        panel
    }

    fn wizard() -> WizardController {
        WizardController::new("Montreal, QC")
    }

    #[test]
    fn test_starts_loading() {
        let panel = TitlePanel::default();
        assert!(panel.loading);
        assert!(panel.suggestions.is_empty());
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut panel = TitlePanel::default();
        let mut w = wizard();
        panel.handle_key(key(KeyCode::Enter), &mut w);
        assert!(w.form().title.is_empty());
    }

    #[test]
    fn test_select_suggestion_sets_title_and_link() {
        let mut panel = ready_panel();
        let mut w = wizard();
        panel.handle_key(key(KeyCode::Down), &mut w);
        panel.handle_key(key(KeyCode::Enter), &mut w);

        let expected = "Deep Clean & Sanitization Services – Eco-Friendly Products";
        assert_eq!(w.form().title, expected);
        assert_eq!(w.form().selected_suggestion.as_deref(), Some(expected));
    }

    #[test]
    fn test_editing_clears_selected_suggestion() {
        let mut panel = ready_panel();
        let mut w = wizard();
        panel.handle_key(key(KeyCode::Enter), &mut w);
        assert!(w.form().selected_suggestion.is_some());

        panel.handle_key(key(KeyCode::Tab), &mut w);
        panel.handle_key(key(KeyCode::Char('!')), &mut w);

        assert!(w.form().title.ends_with('!'));
        assert!(w.form().selected_suggestion.is_none());
    }

    #[test]
    fn test_edit_back_to_same_text_keeps_link() {
        let mut w = wizard();
        select_suggestion(&mut w, "Same");
        edit_title(&mut w, "Same".to_string());
        assert_eq!(w.form().selected_suggestion.as_deref(), Some("Same"));
    }

    #[test]
    fn test_title_input_is_capped() {
        let mut panel = ready_panel();
        let mut w = wizard();
        panel.focus = TitleFocus::Input;
        for k in typed(&"x".repeat(MAX_TITLE_CHARS + 5)) {
            panel.handle_key(k, &mut w);
        }
        assert_eq!(w.form().title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_start_loading_clears_list() {
        let mut panel = ready_panel();
        panel.cursor = 2;
        panel.start_loading();
        assert!(panel.loading);
        assert!(panel.suggestions.is_empty());
        assert_eq!(panel.cursor, 0);
    }
}
