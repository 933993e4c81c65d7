//! Basics step: category grid, then intent, offering and location

use super::{text_edit, PanelRequest};
use crate::state::{FieldSpec, FieldUpdate, ServiceCategory, ServiceIntent, WizardController};
use crossterm::event::{KeyCode, KeyEvent};

/// Columns in the category grid
pub const CATEGORY_COLUMNS: usize = 3;

pub const LISTING_FEE_NOTICE: &str = "Cost: A fee of $5 per published listing applies.";

pub const OFFERING_FIELD: FieldSpec = FieldSpec::multiline(
    "Briefly describe what you're offering",
    "e.g., Professional house cleaning service with eco-friendly products.",
);

pub const LOCATION_FIELD: FieldSpec = FieldSpec::single_line("Location", "City, province");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasicsFocus {
    #[default]
    Intent,
    Offering,
    Location,
    ChangeCategory,
}

impl BasicsFocus {
    fn next(self) -> Self {
        match self {
            Self::Intent => Self::Offering,
            Self::Offering => Self::Location,
            Self::Location => Self::ChangeCategory,
            Self::ChangeCategory => Self::Intent,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Intent => Self::ChangeCategory,
            Self::Offering => Self::Intent,
            Self::Location => Self::Offering,
            Self::ChangeCategory => Self::Location,
        }
    }
}

#[derive(Debug, Default)]
pub struct BasicsPanel {
    /// Highlighted card in the category grid
    pub grid_cursor: usize,
    /// Set once the transition after picking a category has run
    pub show_form: bool,
    pub focus: BasicsFocus,
}

impl BasicsPanel {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the basics form (rather than the grid) is on screen
    pub fn form_visible(&self, wizard: &WizardController) -> bool {
        self.show_form && wizard.form().service_category.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent, wizard: &mut WizardController) -> PanelRequest {
        if self.form_visible(wizard) {
            self.handle_form_key(key, wizard);
        } else {
            self.handle_grid_key(key, wizard);
        }
        PanelRequest::None
    }

    fn handle_grid_key(&mut self, key: KeyEvent, wizard: &mut WizardController) {
        let count = ServiceCategory::ALL.len();
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.grid_cursor = (self.grid_cursor + 1).min(count - 1);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.grid_cursor = self.grid_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.grid_cursor + CATEGORY_COLUMNS < count {
                    self.grid_cursor += CATEGORY_COLUMNS;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.grid_cursor = self.grid_cursor.saturating_sub(CATEGORY_COLUMNS);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let category = ServiceCategory::ALL[self.grid_cursor];
                wizard.update_field(FieldUpdate::Category(Some(category)));
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, wizard: &mut WizardController) {
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            BasicsFocus::Intent => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    wizard.update_field(FieldUpdate::Intent(Some(ServiceIntent::Offering)));
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    wizard.update_field(FieldUpdate::Intent(Some(ServiceIntent::Seeking)));
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let next = wizard
                        .form()
                        .service_intent
                        .map(|i| i.toggle())
                        .unwrap_or(ServiceIntent::Offering);
                    wizard.update_field(FieldUpdate::Intent(Some(next)));
                }
                _ => {}
            },
            BasicsFocus::Offering => {
                if let Some(edit) = text_edit(&key) {
                    if let Some(value) = OFFERING_FIELD.apply(&wizard.form().service_offering, edit)
                    {
                        wizard.update_field(FieldUpdate::Offering(value));
                    }
                }
            }
            BasicsFocus::Location => {
                if let Some(edit) = text_edit(&key) {
                    if let Some(value) = LOCATION_FIELD.apply(&wizard.form().service_location, edit)
                    {
                        wizard.update_field(FieldUpdate::Location(value));
                    }
                }
            }
            BasicsFocus::ChangeCategory => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.change_category(wizard);
                }
            }
        }
    }

    /// Back to the grid, clearing everything chosen for the old category
    pub fn change_category(&mut self, wizard: &mut WizardController) {
        self.show_form = false;
        self.focus = BasicsFocus::default();
        wizard.update_field(FieldUpdate::Category(None));
        wizard.update_field(FieldUpdate::Intent(None));
        wizard.update_field(FieldUpdate::Offering(String::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::test_keys::*;

    fn wizard() -> WizardController {
        WizardController::new("Montreal, QC")
    }

    #[test]
    fn test_grid_navigation_clamps() {
        let mut panel = BasicsPanel::default();
        let mut w = wizard();
        panel.handle_key(key(KeyCode::Up), &mut w);
        assert_eq!(panel.grid_cursor, 0);
        panel.handle_key(key(KeyCode::Down), &mut w);
        assert_eq!(panel.grid_cursor, 3);
        for _ in 0..20 {
            panel.handle_key(key(KeyCode::Right), &mut w);
        }
        assert_eq!(panel.grid_cursor, 11);
        panel.handle_key(key(KeyCode::Down), &mut w);
        assert_eq!(panel.grid_cursor, 11);
    }

    #[test]
    fn test_enter_selects_category() {
        let mut panel = BasicsPanel::default();
        let mut w = wizard();
        panel.grid_cursor = 6;
        panel.handle_key(key(KeyCode::Enter), &mut w);
        assert_eq!(w.form().service_category, Some(ServiceCategory::Household));
        // The form appears only after the transition completes
        assert!(!panel.form_visible(&w));
    }

    #[test]
    fn test_form_fills_basics() {
        let mut panel = BasicsPanel::default();
        let mut w = wizard();
        panel.handle_key(key(KeyCode::Enter), &mut w);
        panel.show_form = true;

        panel.handle_key(key(KeyCode::Enter), &mut w);
        assert_eq!(w.form().service_intent, Some(ServiceIntent::Offering));
        panel.handle_key(key(KeyCode::Down), &mut w);
        assert_eq!(w.form().service_intent, Some(ServiceIntent::Seeking));

        panel.handle_key(key(KeyCode::Tab), &mut w);
        for k in typed("house cleaning") {
            panel.handle_key(k, &mut w);
        }
        assert_eq!(w.form().service_offering, "house cleaning");
        assert!(w.can_advance());
    }

    #[test]
    fn test_change_category_clears_basics() {
        let mut panel = BasicsPanel::default();
        let mut w = wizard();
        panel.handle_key(key(KeyCode::Enter), &mut w);
        panel.show_form = true;
        panel.handle_key(key(KeyCode::Enter), &mut w);
        panel.handle_key(key(KeyCode::Tab), &mut w);
        panel.handle_key(key(KeyCode::Char('x')), &mut w);
        panel.handle_key(key(KeyCode::Tab), &mut w);
        panel.handle_key(key(KeyCode::Tab), &mut w);
        assert_eq!(panel.focus, BasicsFocus::ChangeCategory);

        panel.handle_key(key(KeyCode::Enter), &mut w);

        assert!(!panel.show_form);
        assert!(w.form().service_category.is_none());
        assert!(w.form().service_intent.is_none());
        assert!(w.form().service_offering.is_empty());
    }

    #[test]
    fn test_location_is_editable() {
        let mut panel = BasicsPanel {
            show_form: true,
            focus: BasicsFocus::Location,
            ..Default::default()
        };
        let mut w = wizard();
        w.update_field(FieldUpdate::Category(Some(ServiceCategory::Cycle)));

        panel.handle_key(ctrl('u'), &mut w);
        for k in typed("Laval") {
            panel.handle_key(k, &mut w);
        }
        // Single-line field ignores Enter
        panel.handle_key(key(KeyCode::Enter), &mut w);
        assert_eq!(w.form().service_location, "Laval");
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        assert_eq!(BasicsFocus::ChangeCategory.next(), BasicsFocus::Intent);
        assert_eq!(BasicsFocus::Intent.prev(), BasicsFocus::ChangeCategory);
    }
}
