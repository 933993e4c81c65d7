//! The listing record shared by every wizard step

use super::category::{ServiceCategory, ServiceIntent};
use super::photos::PhotoStore;
use serde::{Deserialize, Serialize};

/// The four structured description sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionField {
    WhatsIncluded,
    Pricing,
    Availability,
    Experience,
}

impl DescriptionField {
    pub const ALL: [DescriptionField; 4] = [
        Self::WhatsIncluded,
        Self::Pricing,
        Self::Availability,
        Self::Experience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::WhatsIncluded => "What's included",
            Self::Pricing => "Pricing",
            Self::Availability => "Availability",
            Self::Experience => "Experience & qualifications",
        }
    }
}

/// Snapshot of the description sections as written by draft generation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub whats_included: String,
    pub pricing: String,
    pub availability: String,
    pub experience: String,
}

impl GeneratedContent {
    pub fn get(&self, field: DescriptionField) -> &str {
        match field {
            DescriptionField::WhatsIncluded => &self.whats_included,
            DescriptionField::Pricing => &self.pricing,
            DescriptionField::Availability => &self.availability,
            DescriptionField::Experience => &self.experience,
        }
    }
}

/// A single-field merge into [`FormData`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Category(Option<ServiceCategory>),
    Location(String),
    Intent(Option<ServiceIntent>),
    Offering(String),
    Title(String),
    SelectedSuggestion(Option<String>),
    Description(DescriptionField, String),
}

impl FieldUpdate {
    /// Whether the update touches a field tracked against the draft snapshot
    pub fn is_tracked(&self) -> bool {
        matches!(self, FieldUpdate::Description(..))
    }
}

/// Listing form state for one wizard session
#[derive(Debug, PartialEq, Eq)]
pub struct FormData {
    pub service_category: Option<ServiceCategory>,
    pub service_location: String,
    pub service_intent: Option<ServiceIntent>,
    pub service_offering: String,
    pub title: String,
    pub selected_suggestion: Option<String>,
    pub whats_included: String,
    pub pricing: String,
    pub availability: String,
    pub experience: String,
    pub generated_content: Option<GeneratedContent>,
    pub has_modified_content: bool,
    pub photos: PhotoStore,
}

impl FormData {
    /// Empty form with the location defaulted
    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            service_category: None,
            service_location: default_location.into(),
            service_intent: None,
            service_offering: String::new(),
            title: String::new(),
            selected_suggestion: None,
            whats_included: String::new(),
            pricing: String::new(),
            availability: String::new(),
            experience: String::new(),
            generated_content: None,
            has_modified_content: false,
            photos: PhotoStore::default(),
        }
    }

    /// Merge one field; no validation
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Category(v) => self.service_category = v,
            FieldUpdate::Location(v) => self.service_location = v,
            FieldUpdate::Intent(v) => self.service_intent = v,
            FieldUpdate::Offering(v) => self.service_offering = v,
            FieldUpdate::Title(v) => self.title = v,
            FieldUpdate::SelectedSuggestion(v) => self.selected_suggestion = v,
            FieldUpdate::Description(field, v) => *self.description_mut(field) = v,
        }
    }

    pub fn description(&self, field: DescriptionField) -> &str {
        match field {
            DescriptionField::WhatsIncluded => &self.whats_included,
            DescriptionField::Pricing => &self.pricing,
            DescriptionField::Availability => &self.availability,
            DescriptionField::Experience => &self.experience,
        }
    }

    fn description_mut(&mut self, field: DescriptionField) -> &mut String {
        match field {
            DescriptionField::WhatsIncluded => &mut self.whats_included,
            DescriptionField::Pricing => &mut self.pricing,
            DescriptionField::Availability => &mut self.availability,
            DescriptionField::Experience => &mut self.experience,
        }
    }

    /// Write a draft into the description sections and snapshot it
    pub fn apply_draft(&mut self, draft: GeneratedContent) {
        for field in DescriptionField::ALL {
            *self.description_mut(field) = draft.get(field).to_string();
        }
        self.generated_content = Some(draft);
        self.has_modified_content = false;
    }

    /// True when any description section differs from the snapshot.
    /// Without a snapshot there is nothing to diverge from.
    pub fn differs_from_generated(&self) -> bool {
        match &self.generated_content {
            None => true,
            Some(snapshot) => DescriptionField::ALL
                .iter()
                .any(|&f| self.description(f) != snapshot.get(f)),
        }
    }

    /// Re-derive `has_modified_content` from the snapshot
    pub fn refresh_modified(&mut self) {
        if self.generated_content.is_some() {
            self.has_modified_content = self.differs_from_generated();
        }
    }

    /// Number of description sections with non-blank content
    pub fn completed_sections(&self) -> usize {
        DescriptionField::ALL
            .iter()
            .filter(|&&f| !self.description(f).trim().is_empty())
            .count()
    }

    /// Whether a generated draft is still waiting to be personalised
    pub fn needs_personalisation(&self) -> bool {
        self.generated_content.is_some() && !self.has_modified_content
    }
}
