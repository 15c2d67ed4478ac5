use crate::app::state::*;
use crate::form::field::{wrap_lines, TextField};
use crate::ui::theme::Theme;
use crate::ui::{budget_slider, submit_button};
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Borders plus one column of padding on each side.
const FIELD_CHROME: u16 = 4;

struct FieldView<'a> {
    field: &'a TextField,
    label: &'a str,
    placeholder: &'a str,
    focused: bool,
    error: bool,
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let inner_width = area.width.saturating_sub(FIELD_CHROME);
    let about_height = about_rows(&form.about, inner_width, state.config.ui.about_max_rows) + 2;
    let error_height = if form.contact_error { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Name
            Constraint::Length(3),            // Company
            Constraint::Length(3),            // Contact
            Constraint::Length(error_height), // Contact error
            Constraint::Length(about_height), // About
            Constraint::Length(5),            // Budget
            Constraint::Length(3),            // Send button
            Constraint::Min(0),
        ])
        .split(area);

    let text_fields = [
        (FocusField::Name, "name_label", "name_placeholder", chunks[0]),
        (FocusField::Company, "company_label", "company_placeholder", chunks[1]),
        (FocusField::Contact, "contact_label", "contact_placeholder", chunks[2]),
        (FocusField::About, "about_label", "about_placeholder", chunks[4]),
    ];
    for (focus, label, placeholder, rect) in text_fields {
        let Some(field) = form.field(focus) else {
            continue;
        };
        let view = FieldView {
            field,
            label: state.t("form", label),
            placeholder: state.t("form", placeholder),
            focused: state.focus == focus,
            error: focus == FocusField::Contact && form.contact_error,
        };
        render_text_field(frame, rect, &view);
    }

    if form.contact_error {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {}", state.t("form", "contact_error")),
            Theme::error_text(),
        )));
        frame.render_widget(error, chunks[3]);
    }

    budget_slider::render(frame, chunks[5], state);
    submit_button::render(frame, chunks[6], state);
}

/// Rows the project description takes: its wrapped content, at least one
/// row when empty, at most `max_rows` after which it scrolls.
pub fn about_rows(about: &TextField, width: u16, max_rows: u16) -> u16 {
    about.rows(width).clamp(1, max_rows.max(1))
}

fn render_text_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let (border_style, border_type) = if view.error {
        (Theme::border_error(), Theme::border_type())
    } else if view.focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));
    // The label only appears once the field has content; until then the
    // placeholder says what belongs here.
    if !view.field.is_empty() {
        block = block
            .title(format!(" {} ", view.label))
            .title_style(Theme::label());
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if view.field.is_empty() {
        let placeholder = Paragraph::new(Span::styled(view.placeholder, Theme::placeholder()));
        frame.render_widget(placeholder, inner);
    } else {
        let (_, cursor_row) = view.field.cursor_position(inner.width);
        let scroll = cursor_row.saturating_sub(inner.height - 1);
        let lines: Vec<Line> = wrap_lines(&view.field.text, inner.width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Theme::input_text())))
            .collect();
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
    }

    if view.focused {
        let (col, row) = view.field.cursor_position(inner.width);
        let row = row.min(inner.height - 1);
        frame.set_cursor_position((inner.x + col, inner.y + row));
    }
}
