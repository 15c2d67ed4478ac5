use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let style = if state.status_message.is_some() {
        Theme::status_error()
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), style));

    // Focus indicator, hidden once the form is gone
    let focus_name = if state.form.phase == Phase::Submitted {
        ""
    } else {
        state.focus.name()
    };
    let indicator = if focus_name.is_empty() {
        String::new()
    } else {
        format!(" [{}] ", focus_name)
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + indicator.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        indicator,
        Style::default().fg(Theme::ACCENT).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    frame.render_widget(Paragraph::new(line), area);
}
