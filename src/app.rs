//! Application state and core logic

use crate::config::WizardConfig;
use crate::error::WizardError;
use crate::panels::{
    listing_text, BasicsPanel, DescribePanel, PanelRequest, PreviewPanel, TitlePanel,
};
use crate::services::{CannedAssistant, ListingAssistant, TitleSuggestion};
use crate::state::{
    Completed, FieldUpdate, FormData, GeneratedContent, PhotoFile, ServiceCategory, Step,
    TaskKind, TaskScheduler, WizardController, WizardEvent,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Result of a background task
#[derive(Debug)]
pub enum TaskOutput {
    CategoryShown,
    Suggestions(Vec<TitleSuggestion>),
    Draft(GeneratedContent),
    PreviewReady,
}

/// Main application struct
pub struct App {
    pub wizard: WizardController,
    pub basics: BasicsPanel,
    pub title: TitlePanel,
    pub describe: DescribePanel,
    pub preview: PreviewPanel,
    pub config: WizardConfig,
    /// One-line feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    errors: VecDeque<String>,
    assistant: Arc<dyn ListingAssistant>,
    tasks: TaskScheduler<TaskOutput>,
    task_rx: UnboundedReceiver<Completed<TaskOutput>>,
    wizard_rx: UnboundedReceiver<WizardEvent>,
    quit: bool,
}

impl App {
    /// Create an app backed by the canned assistant. Must run inside a
    /// tokio runtime.
    pub fn new(config: WizardConfig) -> Self {
        let assistant = CannedAssistant::new(config.suggestion_delay(), config.draft_delay());
        Self::with_assistant(config, Arc::new(assistant))
    }

    pub fn with_assistant(config: WizardConfig, assistant: Arc<dyn ListingAssistant>) -> Self {
        let (task_tx, task_rx) = mpsc::unbounded_channel();
        let (event_tx, wizard_rx) = mpsc::unbounded_channel();

        let mut wizard = WizardController::new(config.default_location.clone());
        wizard.subscribe(move |event| {
            // The receiver lives as long as the app
            let _ = event_tx.send(event.clone());
        });

        let mut app = Self {
            wizard,
            basics: BasicsPanel::default(),
            title: TitlePanel::default(),
            describe: DescribePanel::default(),
            preview: PreviewPanel::default(),
            config,
            status_message: None,
            errors: VecDeque::new(),
            assistant,
            tasks: TaskScheduler::new(task_tx),
            task_rx,
            wizard_rx,
            quit: false,
        };
        app.request_suggestions(None);
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Errors waiting behind the one on screen
    pub fn queued_errors(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.tasks.is_pending(kind)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        // Error dialog is modal
        if !self.errors.is_empty() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_error();
            }
            return;
        }

        self.status_message = None;

        if self.wizard.is_submitted() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                self.wizard.restart();
            }
        } else if !self.handle_navigation_key(key) {
            let request = match self.wizard.current_step() {
                Step::Basics => self.basics.handle_key(key, &mut self.wizard),
                Step::Title => self.title.handle_key(key, &mut self.wizard),
                Step::Describe => self.describe.handle_key(key, &mut self.wizard),
                Step::Preview => self.preview.handle_key(key, &mut self.wizard),
            };
            self.handle_request(request);
        }

        self.process_events();
    }

    /// Step navigation and publishing. Returns true if the key was consumed.
    fn handle_navigation_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::PageDown => self.next_step(),
            KeyCode::Char('n') if ctrl => self.next_step(),
            KeyCode::PageUp => {
                self.wizard.go_back();
            }
            KeyCode::Char('b') if ctrl => {
                self.wizard.go_back();
            }
            KeyCode::F(n) if (1..=4).contains(&n) => {
                self.wizard.jump_to(usize::from(n - 1));
            }
            KeyCode::Char('s') if ctrl => self.publish(),
            _ => return false,
        }
        true
    }

    fn next_step(&mut self) {
        if self.wizard.is_last_step() {
            self.status_message = Some("Press Ctrl+S to publish your listing".to_string());
            return;
        }
        if !self.wizard.go_next() {
            let step = self.wizard.current_step();
            self.status_message = Some(blocked_reason(step, self.wizard.form()).to_string());
        }
    }

    fn publish(&mut self) {
        if !self.wizard.is_last_step() {
            return;
        }
        if self.preview.building {
            self.status_message = Some("Your preview is still being built".to_string());
            return;
        }
        if let Some(listing) = self.wizard.submit() {
            match serde_json::to_string(&listing) {
                Ok(json) => tracing::info!(listing = %json, "listing published"),
                Err(err) => tracing::warn!("Could not serialise published listing: {err}"),
            }
        }
    }

    fn handle_request(&mut self, request: PanelRequest) {
        match request {
            PanelRequest::None => {}
            PanelRequest::GenerateDraft => self.generate_draft(),
            PanelRequest::AddPhotos(input) => self.add_photos(input),
            PanelRequest::CopyPreview => match self.copy_preview() {
                Ok(()) => {
                    self.status_message = Some("Preview copied to clipboard".to_string());
                }
                Err(err) => {
                    tracing::warn!("Copy failed: {err}");
                    self.push_error(err.to_string());
                }
            },
        }
    }

    fn generate_draft(&mut self) {
        let category = self.wizard.form().service_category;
        let assistant = Arc::clone(&self.assistant);
        self.describe.generating = true;
        self.status_message = Some("Generating draft...".to_string());
        self.tasks.schedule(TaskKind::DraftGeneration, async move {
            TaskOutput::Draft(assistant.generate_draft(category).await)
        });
    }

    fn add_photos(&mut self, input: String) {
        match PhotoFile::parse_list(&input) {
            Ok(files) if files.is_empty() => {
                self.status_message = Some("No photo paths given".to_string());
            }
            Ok(files) => {
                let count = self.wizard.add_photos(files).len();
                self.status_message = Some(match count {
                    1 => "Added 1 photo".to_string(),
                    n => format!("Added {n} photos"),
                });
            }
            Err(err) => {
                tracing::warn!("Photo selection rejected: {err}");
                // Keep the input so the user can fix the bad path
                self.describe.photo_input = input;
                self.push_error(err.to_string());
            }
        }
    }

    fn copy_preview(&self) -> Result<(), WizardError> {
        let text = listing_text(self.wizard.form());
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    fn request_suggestions(&mut self, category: Option<ServiceCategory>) {
        let assistant = Arc::clone(&self.assistant);
        self.title.start_loading();
        self.tasks.schedule(TaskKind::TitleSuggestions, async move {
            TaskOutput::Suggestions(assistant.suggest_titles(category).await)
        });
    }

    /// Apply wizard notifications and finished tasks until both queues are empty
    pub fn process_events(&mut self) {
        loop {
            let mut progressed = false;
            while let Ok(event) = self.wizard_rx.try_recv() {
                self.on_wizard_event(event);
                progressed = true;
            }
            while let Ok(done) = self.task_rx.try_recv() {
                self.on_task_completed(done);
                progressed = true;
            }
            if !progressed {
                break;
            }
        }
    }

    fn on_wizard_event(&mut self, event: WizardEvent) {
        match event {
            WizardEvent::FieldChanged(FieldUpdate::Category(category)) => {
                self.tasks.cancel(TaskKind::CategoryTransition);
                self.basics.show_form = false;
                if let Some(category) = category {
                    tracing::info!(category = category.id(), "category selected");
                    self.tasks.schedule_after(
                        TaskKind::CategoryTransition,
                        self.config.category_transition(),
                        TaskOutput::CategoryShown,
                    );
                }
                self.request_suggestions(category);
            }
            WizardEvent::FieldChanged(_) => {}
            WizardEvent::DraftApplied => {
                self.status_message =
                    Some("Draft ready. Personalise it before continuing".to_string());
            }
            WizardEvent::PhotosAdded(ids) => {
                tracing::debug!(count = ids.len(), "photos added");
            }
            WizardEvent::PhotoRemoved(id) => {
                let photos = &self.wizard.form().photos;
                tracing::debug!(%id, live_previews = photos.live_previews(), "photo removed");
                let count = photos.len();
                self.describe.clamp_photo_cursor(count);
            }
            WizardEvent::StepChanged { from, to } => {
                if from == Step::Describe {
                    self.tasks.cancel(TaskKind::DraftGeneration);
                    self.describe.generating = false;
                }
                if from == Step::Preview {
                    self.tasks.cancel(TaskKind::PreviewBuild);
                    self.preview.finish_building();
                }
                if to == Step::Preview {
                    self.preview.start_building();
                    self.tasks.schedule_after(
                        TaskKind::PreviewBuild,
                        self.config.preview_build(),
                        TaskOutput::PreviewReady,
                    );
                }
            }
            WizardEvent::Submitted => {
                self.tasks.cancel_all();
            }
            WizardEvent::Restarted => {
                tracing::info!("starting a new listing");
                self.tasks.cancel_all();
                self.basics.reset();
                self.title.reset();
                self.describe.reset();
                self.preview.reset();
                self.request_suggestions(None);
            }
        }
    }

    fn on_task_completed(&mut self, done: Completed<TaskOutput>) {
        if !self.tasks.accept(done.ticket) {
            return;
        }
        match done.output {
            TaskOutput::CategoryShown => {
                self.basics.show_form = true;
            }
            TaskOutput::Suggestions(suggestions) => {
                tracing::debug!(count = suggestions.len(), "title suggestions loaded");
                self.title.set_suggestions(suggestions);
            }
            TaskOutput::Draft(draft) => {
                self.describe.generating = false;
                self.wizard.apply_draft(draft);
            }
            TaskOutput::PreviewReady => {
                self.preview.finish_building();
            }
        }
    }
}

/// What is missing before the user may leave `step`
pub fn blocked_reason(step: Step, form: &FormData) -> &'static str {
    match step {
        Step::Basics => "Pick a category, choose offering or seeking, and describe your service",
        Step::Title => "Add a title to continue",
        Step::Describe if form.needs_personalisation() => {
            "Personalise the generated draft before continuing"
        }
        Step::Describe => "Fill in what's included and pricing to continue",
        Step::Preview => "",
    }
}
