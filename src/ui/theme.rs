use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    /// Muted grey for placeholders and hints.
    pub const MUTED: Color = Color::Rgb(0x8a, 0x8d, 0x92);
    pub const TRACK: Color = Color::Rgb(0xca, 0xd2, 0xd9);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    /// Field label, shown once the field has content.
    pub fn label() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn error_text() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn budget_value() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn budget_placeholder() -> Style {
        Style::default().fg(Self::MUTED).add_modifier(Modifier::ITALIC)
    }

    pub fn slider_filled() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn slider_track() -> Style {
        Style::default().fg(Self::TRACK)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White).bg(Color::Black)
    }

    pub fn button_focused() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_check() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn link() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::LightRed).bg(Color::DarkGray)
    }

    /// Overlay used while a panel fades in or out.
    pub fn fading() -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }
}
