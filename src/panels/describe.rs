//! Describe step: structured sections, draft generation, photos

use super::{text_edit, PanelRequest};
use crate::state::{DescriptionField, FieldSpec, FieldUpdate, TextEdit, WizardController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const PHOTO_INPUT_FIELD: FieldSpec =
    FieldSpec::single_line("Add photos (paths, comma-separated)", "~/Pictures/kitchen.jpg");

/// Field descriptor for a description section
pub fn section_spec(field: DescriptionField) -> FieldSpec {
    match field {
        DescriptionField::WhatsIncluded => FieldSpec::multiline(
            "What's included",
            "List the tasks, materials and extras that come with the service",
        ),
        DescriptionField::Pricing => FieldSpec::multiline(
            "Pricing",
            "e.g., $30/hour, or $120 for a standard 3-bedroom home",
        ),
        DescriptionField::Availability => {
            FieldSpec::multiline("Availability", "e.g., Weekdays 9am-5pm, weekends on request")
        }
        DescriptionField::Experience => FieldSpec::multiline(
            "Experience & qualifications",
            "Years of experience, certifications, insurance",
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescribeFocus {
    Section(DescriptionField),
    PhotoInput,
    PhotoList,
}

impl Default for DescribeFocus {
    fn default() -> Self {
        Self::Section(DescriptionField::WhatsIncluded)
    }
}

impl DescribeFocus {
    const ORDER: [DescribeFocus; 6] = [
        Self::Section(DescriptionField::WhatsIncluded),
        Self::Section(DescriptionField::Pricing),
        Self::Section(DescriptionField::Availability),
        Self::Section(DescriptionField::Experience),
        Self::PhotoInput,
        Self::PhotoList,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Default)]
pub struct DescribePanel {
    pub focus: DescribeFocus,
    /// Pending text of the photo path input
    pub photo_input: String,
    /// Highlighted entry in the photo list
    pub photo_cursor: usize,
    /// A draft request is in flight
    pub generating: bool,
}

impl DescribePanel {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn handle_key(&mut self, key: KeyEvent, wizard: &mut WizardController) -> PanelRequest {
        if key.code == KeyCode::Char('g') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if self.generating {
                return PanelRequest::None;
            }
            return PanelRequest::GenerateDraft;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return PanelRequest::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return PanelRequest::None;
            }
            _ => {}
        }

        match self.focus {
            DescribeFocus::Section(field) => {
                if let Some(edit) = text_edit(&key) {
                    let spec = section_spec(field);
                    if let Some(value) = spec.apply(wizard.form().description(field), edit) {
                        wizard.update_field(FieldUpdate::Description(field, value));
                    }
                }
                PanelRequest::None
            }
            DescribeFocus::PhotoInput => self.handle_photo_input_key(key),
            DescribeFocus::PhotoList => {
                self.handle_photo_list_key(key, wizard);
                PanelRequest::None
            }
        }
    }

    fn handle_photo_input_key(&mut self, key: KeyEvent) -> PanelRequest {
        if key.code == KeyCode::Enter {
            if self.photo_input.trim().is_empty() {
                return PanelRequest::None;
            }
            return PanelRequest::AddPhotos(std::mem::take(&mut self.photo_input));
        }
        if let Some(edit) = text_edit(&key) {
            if edit == TextEdit::Newline {
                return PanelRequest::None;
            }
            if let Some(value) = PHOTO_INPUT_FIELD.apply(&self.photo_input, edit) {
                self.photo_input = value;
            }
        }
        PanelRequest::None
    }

    fn handle_photo_list_key(&mut self, key: KeyEvent, wizard: &mut WizardController) {
        let count = wizard.form().photos.len();
        if count == 0 {
            return;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.photo_cursor = self.photo_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.photo_cursor = (self.photo_cursor + 1).min(count - 1);
            }
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                let id = wizard.form().photos.photos().get(self.photo_cursor).map(|p| p.id);
                if let Some(id) = id {
                    wizard.remove_photo(id);
                    self.clamp_photo_cursor(count - 1);
                }
            }
            _ => {}
        }
    }

    pub fn clamp_photo_cursor(&mut self, count: usize) {
        self.photo_cursor = self.photo_cursor.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::test_keys::*;
    use crate::state::PhotoFile;
    use std::path::PathBuf;

    fn wizard() -> WizardController {
        WizardController::new("Montreal, QC")
    }

    fn photo(name: &str) -> PhotoFile {
        PhotoFile {
            name: name.to_string(),
            path: PathBuf::from(name),
            size_bytes: 1,
        }
    }

    #[test]
    fn test_typing_fills_focused_section() {
        let mut panel = DescribePanel::default();
        let mut w = wizard();
        for k in typed("all in") {
            panel.handle_key(k, &mut w);
        }
        panel.handle_key(key(KeyCode::Enter), &mut w);
        panel.handle_key(key(KeyCode::Tab), &mut w);
        for k in typed("$5") {
            panel.handle_key(k, &mut w);
        }
        assert_eq!(w.form().whats_included, "all in\n");
        assert_eq!(w.form().pricing, "$5");
    }

    #[test]
    fn test_ctrl_g_requests_draft_unless_generating() {
        let mut panel = DescribePanel::default();
        let mut w = wizard();
        assert_eq!(panel.handle_key(ctrl('g'), &mut w), PanelRequest::GenerateDraft);
        panel.generating = true;
        assert_eq!(panel.handle_key(ctrl('g'), &mut w), PanelRequest::None);
    }

    #[test]
    fn test_photo_input_submits_on_enter() {
        let mut panel = DescribePanel {
            focus: DescribeFocus::PhotoInput,
            ..Default::default()
        };
        let mut w = wizard();
        assert_eq!(panel.handle_key(key(KeyCode::Enter), &mut w), PanelRequest::None);
        for k in typed("a.jpg") {
            panel.handle_key(k, &mut w);
        }
        assert_eq!(
            panel.handle_key(key(KeyCode::Enter), &mut w),
            PanelRequest::AddPhotos("a.jpg".to_string())
        );
        assert!(panel.photo_input.is_empty());
    }

    #[test]
    fn test_delete_removes_highlighted_photo() {
        let mut panel = DescribePanel {
            focus: DescribeFocus::PhotoList,
            ..Default::default()
        };
        let mut w = wizard();
        let ids = w.add_photos(vec![photo("a"), photo("b"), photo("c")]);

        panel.handle_key(key(KeyCode::Down), &mut w);
        panel.handle_key(key(KeyCode::Delete), &mut w);
        let remaining: Vec<_> = w.form().photos.photos().iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2]]);

        panel.handle_key(key(KeyCode::Down), &mut w);
        panel.handle_key(key(KeyCode::Delete), &mut w);
        assert_eq!(panel.photo_cursor, 0);
        assert_eq!(w.form().photos.len(), 1);
    }

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(DescribeFocus::PhotoList.next(), DescribeFocus::default());
        assert_eq!(DescribeFocus::default().prev(), DescribeFocus::PhotoList);
    }
}
