use crate::app::state::*;
use crate::form::budget::BUDGET_MIN;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

const TRACK: &str = "━";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let budget = &state.form.budget;
    let focused = state.focus == FocusField::Budget;

    let mut block = Block::default()
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
        .padding(Padding::horizontal(1));
    if budget.touched() {
        block = block
            .title(format!(" {} ", state.t("form", "budget_label")))
            .title_style(Theme::label());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = match budget.display_value() {
        Some(text) => Span::styled(text, Theme::budget_value()),
        None => Span::styled(state.t("form", "budget_placeholder"), Theme::budget_placeholder()),
    };
    let hint = Span::styled(
        format!("{} {}€", state.t("form", "budget_min"), BUDGET_MIN),
        Theme::placeholder(),
    );

    let lines = vec![
        Line::from(value),
        slider_line(inner.width, budget.percentage()),
        Line::from(hint),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Two-colour track split at the filled percentage.
fn slider_line(width: u16, percentage: f64) -> Line<'static> {
    let (filled, rest) = split_track(width, percentage);
    Line::from(vec![
        Span::styled(TRACK.repeat(usize::from(filled)), Theme::slider_filled()),
        Span::styled(TRACK.repeat(usize::from(rest)), Theme::slider_track()),
    ])
}

/// Cells of a `width`-wide track that are filled at `percentage`.
pub fn split_track(width: u16, percentage: f64) -> (u16, u16) {
    let share = percentage.clamp(0.0, 100.0) / 100.0;
    let filled = ((f64::from(width) * share).round() as u16).min(width);
    (filled, width - filled)
}
