//! Preview step: building animation, listing preview, publish

use super::PanelRequest;
use crate::state::{FormData, PulseAnimation, WizardController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct PreviewPanel {
    /// The "building your preview" screen is showing
    pub building: bool,
    pub animation: PulseAnimation,
    pub scroll: u16,
}

impl PreviewPanel {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn start_building(&mut self) {
        self.building = true;
        self.scroll = 0;
        self.animation = PulseAnimation::new();
    }

    pub fn finish_building(&mut self) {
        self.building = false;
    }

    pub fn handle_key(&mut self, key: KeyEvent, _wizard: &mut WizardController) -> PanelRequest {
        if self.building {
            return PanelRequest::None;
        }
        match key.code {
            KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PanelRequest::CopyPreview
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                PanelRequest::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                PanelRequest::None
            }
            _ => PanelRequest::None,
        }
    }
}

/// Shorten to `max` characters, marking the cut with an ellipsis
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max).collect();
        format!("{kept}...")
    }
}

/// Plain-text rendition of the listing, as copied to the clipboard
pub fn listing_text(form: &FormData) -> String {
    let mut out = String::new();
    let title = if form.title.trim().is_empty() {
        "Your listing title will appear here"
    } else {
        form.title.as_str()
    };
    out.push_str(title);
    out.push('\n');

    let category = form
        .service_category
        .map(|c| c.title())
        .unwrap_or("Service");
    out.push_str(&format!("{category} · {}\n", form.service_location));

    let sections = [
        ("Pricing", &form.pricing),
        ("Availability", &form.availability),
        ("What's included", &form.whats_included),
        ("Experience", &form.experience),
    ];
    for (label, value) in sections {
        if !value.trim().is_empty() {
            out.push_str(&format!("\n{label}:\n{}\n", value.trim_end()));
        }
    }

    if !form.photos.is_empty() {
        let names: Vec<&str> = form.photos.photos().iter().map(|p| p.name.as_str()).collect();
        out.push_str(&format!("\nPhotos ({}): {}\n", names.len(), names.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::test_keys::*;
    use crate::state::{FieldUpdate, ServiceCategory};

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly", 7), "exactly");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("éééé", 2), "éé...");
    }

    #[test]
    fn test_listing_text_placeholder_title() {
        let form = FormData::new("Montreal, QC");
        let text = listing_text(&form);
        assert!(text.starts_with("Your listing title will appear here\n"));
        assert!(text.contains("Service · Montreal, QC"));
        assert!(!text.contains("Pricing:"));
    }

    #[test]
    fn test_listing_text_includes_filled_sections() {
        let mut w = WizardController::new("Montreal, QC");
        w.update_field(FieldUpdate::Category(Some(ServiceCategory::Legal)));
        w.update_field(FieldUpdate::Title("Paralegal help".to_string()));
        w.update_field(FieldUpdate::Description(
            crate::state::DescriptionField::Pricing,
            "$60/h".to_string(),
        ));

        let text = listing_text(w.form());
        assert!(text.starts_with("Paralegal help\nLegal · Montreal, QC\n"));
        assert!(text.contains("\nPricing:\n$60/h\n"));
        assert!(!text.contains("Availability:"));
    }

    #[test]
    fn test_keys_ignored_while_building() {
        let mut panel = PreviewPanel::default();
        let mut w = WizardController::new("Montreal, QC");
        panel.start_building();
        assert_eq!(panel.handle_key(ctrl('y'), &mut w), PanelRequest::None);
        panel.finish_building();
        assert_eq!(panel.handle_key(ctrl('y'), &mut w), PanelRequest::CopyPreview);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut panel = PreviewPanel::default();
        let mut w = WizardController::new("Montreal, QC");
        panel.handle_key(key(KeyCode::Up), &mut w);
        assert_eq!(panel.scroll, 0);
        panel.handle_key(key(KeyCode::Down), &mut w);
        assert_eq!(panel.scroll, 1);
    }
}
