use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .padding(Padding::uniform(1));

    let href = format!(
        "{}{}",
        state.config.endpoint.origin.trim_end_matches('/'),
        state.t("thankyou", "link")
    );
    let lines = vec![
        Line::from(Span::styled(state.t("thankyou", "title"), Theme::title())),
        Line::default(),
        Line::from(Span::styled(state.t("thankyou", "paragraph"), Theme::input_text())),
        Line::default(),
        Line::from(vec![
            Span::styled(state.t("thankyou", "link_text"), Theme::link()),
            Span::styled(" → ", Theme::placeholder()),
            Span::styled(href, Theme::placeholder()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}
