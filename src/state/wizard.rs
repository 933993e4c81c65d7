//! Wizard step controller
//!
//! Owns the step cursor, the listing form, and the gating rules that decide
//! when the user may move forward. Everything here is synchronous and
//! infallible; operations that are not allowed are no-ops that return
//! `false`.

use super::form_data::{FieldUpdate, FormData, GeneratedContent};
use super::photos::PhotoFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Basics,
    Title,
    Describe,
    Preview,
}

impl Step {
    pub const ALL: [Step; 4] = [Self::Basics, Self::Title, Self::Describe, Self::Preview];

    pub fn index(&self) -> usize {
        match self {
            Self::Basics => 0,
            Self::Title => 1,
            Self::Describe => 2,
            Self::Preview => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Title => "Create",
            Self::Describe => "Describe",
            Self::Preview => "Preview",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Basics => "Service type & intent",
            Self::Title => "Assisted title creation",
            Self::Describe => "Structured description",
            Self::Preview => "Review & publish",
        }
    }
}

/// Index of the terminal step
pub const LAST_STEP: usize = Step::ALL.len() - 1;

/// Session state of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Editing(Step),
    Submitted,
}

/// Change notification sent to listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    FieldChanged(FieldUpdate),
    DraftApplied,
    PhotosAdded(Vec<Uuid>),
    PhotoRemoved(Uuid),
    StepChanged { from: Step, to: Step },
    Submitted,
    Restarted,
}

/// Snapshot of a listing at publish time
#[derive(Debug, Clone, Serialize)]
pub struct PublishedListing {
    pub category: Option<&'static str>,
    pub location: String,
    pub intent: Option<super::category::ServiceIntent>,
    pub offering: String,
    pub title: String,
    pub whats_included: String,
    pub pricing: String,
    pub availability: String,
    pub experience: String,
    pub photos: Vec<String>,
    pub published_at: DateTime<Utc>,
}

type Listener = Box<dyn FnMut(&WizardEvent) + Send>;

/// Gating predicate: may the user move forward from `step`?
pub fn can_advance(step: Step, form: &FormData) -> bool {
    match step {
        Step::Basics => {
            form.service_category.is_some()
                && form.service_intent.is_some()
                && !form.service_offering.trim().is_empty()
        }
        Step::Title => !form.title.trim().is_empty(),
        Step::Describe => {
            let has_content =
                !form.whats_included.trim().is_empty() && !form.pricing.trim().is_empty();
            if form.generated_content.is_some() {
                has_content && form.has_modified_content
            } else {
                has_content
            }
        }
        Step::Preview => true,
    }
}

pub struct WizardController {
    form: FormData,
    cursor: usize,
    submitted_at: Option<DateTime<Utc>>,
    default_location: String,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for WizardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardController")
            .field("form", &self.form)
            .field("cursor", &self.cursor)
            .field("submitted_at", &self.submitted_at)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl WizardController {
    pub fn new(default_location: impl Into<String>) -> Self {
        let default_location = default_location.into();
        Self {
            form: FormData::new(default_location.clone()),
            cursor: 0,
            submitted_at: None,
            default_location,
            listeners: Vec::new(),
        }
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&WizardEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: WizardEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_step(&self) -> Step {
        Step::ALL[self.cursor]
    }

    pub fn state(&self) -> WizardState {
        if self.submitted_at.is_some() {
            WizardState::Submitted
        } else {
            WizardState::Editing(self.current_step())
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    pub fn is_last_step(&self) -> bool {
        self.cursor == LAST_STEP
    }

    /// Gating for the current step
    pub fn can_advance(&self) -> bool {
        can_advance(self.current_step(), &self.form)
    }

    /// Merge one field into the form. Ignored once submitted.
    pub fn update_field(&mut self, update: FieldUpdate) {
        if self.is_submitted() {
            return;
        }
        let tracked = update.is_tracked();
        self.form.apply(update.clone());
        if tracked {
            self.form.refresh_modified();
        }
        self.notify(WizardEvent::FieldChanged(update));
    }

    /// Write a generated draft and take a fresh snapshot
    pub fn apply_draft(&mut self, draft: GeneratedContent) {
        if self.is_submitted() {
            return;
        }
        self.form.apply_draft(draft);
        tracing::info!("draft applied, waiting for personalisation");
        self.notify(WizardEvent::DraftApplied);
    }

    pub fn add_photos(&mut self, files: Vec<PhotoFile>) -> Vec<Uuid> {
        if self.is_submitted() || files.is_empty() {
            return Vec::new();
        }
        let ids = self.form.photos.add(files);
        self.notify(WizardEvent::PhotosAdded(ids.clone()));
        ids
    }

    pub fn remove_photo(&mut self, id: Uuid) -> bool {
        if self.is_submitted() {
            return false;
        }
        if self.form.photos.remove(id).is_none() {
            return false;
        }
        self.notify(WizardEvent::PhotoRemoved(id));
        true
    }

    fn move_to(&mut self, index: usize) {
        let from = self.current_step();
        self.cursor = index;
        let to = self.current_step();
        tracing::debug!(?from, ?to, "step changed");
        self.notify(WizardEvent::StepChanged { from, to });
    }

    /// Advance one step if the current step's gate is open
    pub fn go_next(&mut self) -> bool {
        if self.is_submitted() || self.cursor >= LAST_STEP || !self.can_advance() {
            return false;
        }
        self.move_to(self.cursor + 1);
        true
    }

    /// Retreat one step; always allowed above the first step
    pub fn go_back(&mut self) -> bool {
        if self.is_submitted() || self.cursor == 0 {
            return false;
        }
        self.move_to(self.cursor - 1);
        true
    }

    /// Jump to an earlier step
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.is_submitted() || index >= self.cursor {
            return false;
        }
        self.move_to(index);
        true
    }

    /// Publish the listing. Only valid on the last step.
    pub fn submit(&mut self) -> Option<PublishedListing> {
        if self.is_submitted() || !self.is_last_step() {
            return None;
        }
        let now = Utc::now();
        self.submitted_at = Some(now);
        let listing = self.published_listing(now);
        self.notify(WizardEvent::Submitted);
        Some(listing)
    }

    fn published_listing(&self, published_at: DateTime<Utc>) -> PublishedListing {
        let form = &self.form;
        PublishedListing {
            category: form.service_category.map(|c| c.id()),
            location: form.service_location.clone(),
            intent: form.service_intent,
            offering: form.service_offering.clone(),
            title: form.title.clone(),
            whats_included: form.whats_included.clone(),
            pricing: form.pricing.clone(),
            availability: form.availability.clone(),
            experience: form.experience.clone(),
            photos: form.photos.photos().iter().map(|p| p.name.clone()).collect(),
            published_at,
        }
    }

    /// Start a fresh session
    pub fn restart(&mut self) {
        self.form.photos.clear();
        self.form = FormData::new(self.default_location.clone());
        self.cursor = 0;
        self.submitted_at = None;
        self.notify(WizardEvent::Restarted);
    }
}
