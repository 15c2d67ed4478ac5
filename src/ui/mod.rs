mod budget_slider;
mod form_view;
mod layout;
mod status_bar;
mod submit_button;
mod thank_you;
mod theme;

use crate::app::state::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::Instant;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    render_at(frame, state, Instant::now());
}

pub fn render_at(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.config.show_headers, state.config.ui.form_width);

    if let Some(header) = app_layout.header {
        render_header(frame, header, state);
    }

    let (scene, fading) = state.presentation(now);
    match scene {
        Scene::Form => form_view::render(frame, app_layout.body, state),
        Scene::ThankYou => thank_you::render(frame, app_layout.body, state),
    }
    if fading {
        frame.buffer_mut().set_style(app_layout.body, Theme::fading());
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(Span::styled(state.t("contact", "title"), Theme::heading())),
        Line::from(Span::styled(state.t("contact", "subtitle"), Theme::placeholder())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Phase;
    use crate::config::AppConfig;
    use crate::i18n::Lang;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn draw(state: &AppState, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| render_at(f, state, now)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn settled(state: &AppState) -> Instant {
        state.transition_started.unwrap() + Duration::from_secs(5)
    }

    #[test]
    fn test_labels_show_only_with_content() {
        let mut state = AppState::new(AppConfig::default());
        let screen = draw(&state, settled(&state));
        assert!(screen.contains("Your name"));
        assert!(!screen.contains(" Name "));
        assert!(screen.contains("Your company"));
        assert!(!screen.contains(" Company "));
        assert!(screen.contains("What is your project about?"));
        assert!(!screen.contains(" Project "));
        assert!(screen.contains("Move the slider to set your budget"));

        state.form.name.set_text("Anna");
        state.form.company.set_text("Ölmühle");
        state.form.about.set_text("A new shop");
        state.form.budget.to_max();
        let screen = draw(&state, settled(&state));
        assert!(screen.contains(" Name "));
        assert!(screen.contains("Anna"));
        assert!(!screen.contains("Your name"));
        assert!(screen.contains(" Company "));
        assert!(!screen.contains("Your company"));
        assert!(screen.contains(" Project "));
        assert!(screen.contains("A new shop"));
        assert!(!screen.contains("What is your project about?"));
        assert!(screen.contains(" Budget "));
        assert!(screen.contains("100000+ €"));
        assert!(screen.contains("min 4000€"));
    }

    #[test]
    fn test_contact_error_line() {
        let mut state = AppState::new(AppConfig::default());
        state.form.contact_error = true;
        let screen = draw(&state, settled(&state));
        assert!(screen.contains("Please enter a valid email address"));

        state.form.contact_error = false;
        let screen = draw(&state, settled(&state));
        assert!(!screen.contains("Please enter a valid email address"));
    }

    #[test]
    fn test_thank_you_replaces_form() {
        let mut state = AppState::new(AppConfig::default());
        state.form.phase = Phase::Submitted;
        let screen = draw(&state, settled(&state));
        assert!(screen.contains("Thank you!"));
        assert!(screen.contains("http://localhost:3000/work"));
        assert!(!screen.contains("Your name"));
    }

    #[test]
    fn test_form_stays_during_fade_out() {
        let mut state = AppState::new(AppConfig::default());
        state.form.phase = Phase::Submitted;
        let start = state.transition_started.unwrap();
        let screen = draw(&state, start + Duration::from_millis(100));
        assert!(screen.contains("Your name"));
        assert!(!screen.contains("Thank you!"));
    }

    #[test]
    fn test_headers_and_language() {
        let mut config = AppConfig::default();
        config.language = Lang::De;
        let state = AppState::new(config);
        let screen = draw(&state, settled(&state));
        assert!(screen.contains("Sie haben ein Projekt?"));
        assert!(screen.contains("Senden"));

        let mut config = AppConfig::default();
        config.show_headers = false;
        let state = AppState::new(config);
        let screen = draw(&state, settled(&state));
        assert!(!screen.contains("Got a project in mind?"));
    }
}
