//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod steps;

use crate::app::App;
use crate::state::{Step, WizardState};
use components::render_error_dialog;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.wizard.state() {
        WizardState::Submitted => {
            let content = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area)[0];
            steps::success::draw(frame, content, app);
        }
        WizardState::Editing(step) => {
            let wizard_layout = layout::create_layout(area);
            layout::draw_header(frame, wizard_layout.header, app);
            layout::draw_progress(frame, wizard_layout.progress, app);

            match step {
                Step::Basics => steps::basics::draw(frame, wizard_layout.content, app),
                Step::Title => steps::title::draw(frame, wizard_layout.content, app),
                Step::Describe => steps::describe::draw(frame, wizard_layout.content, app),
                Step::Preview => steps::preview::draw(frame, wizard_layout.content, app),
            }

            layout::draw_footer(frame, wizard_layout.footer, app);
        }
    }

    layout::draw_status_bar(frame, app);

    if let Some(error) = app.current_error() {
        render_error_dialog(frame, error, app.queued_errors());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WizardConfig;
    use crate::services::{default_draft, suggestions_for, MockListingAssistant};
    use crate::state::{DescriptionField, FieldUpdate, ServiceCategory, ServiceIntent};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App {
        let mut mock = MockListingAssistant::new();
        mock.expect_suggest_titles().returning(suggestions_for);
        mock.expect_generate_draft().returning(default_draft);
        App::with_assistant(WizardConfig::default(), Arc::new(mock))
    }

    async fn settle(app: &mut App) {
        tokio::time::sleep(Duration::from_secs(2)).await;
        app.process_events();
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 60)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fill_to_describe(app: &mut App) {
        let w = &mut app.wizard;
        w.update_field(FieldUpdate::Category(Some(ServiceCategory::Household)));
        w.update_field(FieldUpdate::Intent(Some(ServiceIntent::Offering)));
        w.update_field(FieldUpdate::Offering("house cleaning".to_string()));
        w.go_next();
        w.update_field(FieldUpdate::Title("Spotless homes".to_string()));
        w.go_next();
        app.process_events();
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_grid() {
        let app = app();
        let screen = render(&app);
        assert!(screen.contains("Post A Service"));
        assert!(screen.contains("What type of service are you posting?"));
        assert!(screen.contains("Household"));
        assert!(screen.contains("$5 per published listing"));
        assert!(screen.contains("Next →"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_basics_form_after_transition() {
        let mut app = app();
        app.wizard
            .update_field(FieldUpdate::Category(Some(ServiceCategory::Legal)));
        app.process_events();
        settle(&mut app).await;

        let screen = render(&app);
        assert!(screen.contains("Are you offering or seeking?"));
        assert!(screen.contains("Change category"));
        assert!(screen.contains("Montreal, QC"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_title_step_lists_suggestions() {
        let mut app = app();
        fill_to_describe(&mut app);
        app.wizard.go_back();
        app.process_events();
        settle(&mut app).await;

        let screen = render(&app);
        assert!(screen.contains("Suggested titles"));
        assert!(screen.contains("Deep Clean & Sanitization"));
        assert!(screen.contains("(14/100)"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_describe_warns_about_unedited_draft() {
        let mut app = app();
        fill_to_describe(&mut app);
        app.wizard
            .apply_draft(default_draft(Some(ServiceCategory::Household)));
        app.process_events();

        let screen = render(&app);
        assert!(screen.contains("4 of 4 sections completed"));
        assert!(screen.contains("Regenerate draft"));
        assert!(screen.contains("Edit the generated draft"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_builds_then_shows_card() {
        let mut app = app();
        fill_to_describe(&mut app);
        app.wizard.update_field(FieldUpdate::Description(
            DescriptionField::WhatsIncluded,
            "• Kitchen\n• Bathrooms".to_string(),
        ));
        app.wizard.update_field(FieldUpdate::Description(
            DescriptionField::Pricing,
            "$40/h".to_string(),
        ));
        app.wizard.go_next();
        app.process_events();

        assert!(render(&app).contains("Building your preview"));

        settle(&mut app).await;
        let screen = render(&app);
        assert!(screen.contains("Listing preview"));
        assert!(screen.contains("Spotless homes"));
        assert!(screen.contains("Listing quality"));
        assert!(screen.contains("Publish Listing"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_screen() {
        let mut app = app();
        fill_to_describe(&mut app);
        app.wizard.update_field(FieldUpdate::Description(
            DescriptionField::WhatsIncluded,
            "All rooms".to_string(),
        ));
        app.wizard.update_field(FieldUpdate::Description(
            DescriptionField::Pricing,
            "$40/h".to_string(),
        ));
        app.wizard.go_next();
        app.wizard.submit();
        app.process_events();

        let screen = render(&app);
        assert!(screen.contains("Your service has been posted!"));
        assert!(screen.contains("Post Another Service"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_dialog_overlay() {
        let mut app = app();
        app.push_error("Photo not found: /tmp/x.jpg");
        app.push_error("second");

        let screen = render(&app);
        assert!(screen.contains("Photo not found: /tmp/x.jpg"));
        assert!(screen.contains("(1 more)"));
    }
}
