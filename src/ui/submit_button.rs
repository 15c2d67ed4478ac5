use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const CHECK: &str = "✔";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusField::Send;
    let style = if focused {
        Theme::button_focused()
    } else {
        Theme::button()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .style(style);

    let content = match &state.form.phase {
        Phase::Valid | Phase::Submitted => Span::styled(CHECK, Theme::button_check()),
        _ => Span::raw(button_text(state)),
    };
    let paragraph = Paragraph::new(Line::from(content))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// What the send button shows in the current phase.
pub fn button_text(state: &AppState) -> String {
    match &state.form.phase {
        Phase::Idle => state.t("form", "send_button").to_string(),
        Phase::Loading => {
            let frame = (state.tick_count % SPINNER.len() as u64) as usize;
            SPINNER[frame].to_string()
        }
        Phase::Valid | Phase::Submitted => CHECK.to_string(),
        Phase::Failed(_) => state.t("form", "retry_button").to_string(),
    }
}
