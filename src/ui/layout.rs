use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Option<Rect>,
    pub body: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, show_headers: bool, form_width: u16) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = centered_column(main_chunks[0], form_width);
    let status_bar = main_chunks[1];

    if !show_headers {
        return AppLayout {
            header: None,
            body: content,
            status_bar,
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + subtitle + gap
            Constraint::Min(3),    // Form or thank-you panel
        ])
        .split(content);

    AppLayout {
        header: Some(chunks[0]),
        body: chunks[1],
        status_bar,
    }
}

/// Horizontally center a column of at most `width` cells.
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_is_centered() {
        let col = centered_column(Rect::new(0, 0, 100, 20), 60);
        assert_eq!(col, Rect::new(20, 0, 60, 20));

        let narrow = centered_column(Rect::new(0, 0, 40, 20), 60);
        assert_eq!(narrow, Rect::new(0, 0, 40, 20));
    }

    #[test]
    fn test_header_is_optional() {
        let area = Rect::new(0, 0, 80, 30);
        let with = compute_layout(area, true, 72);
        assert_eq!(with.header.map(|h| h.height), Some(3));
        assert_eq!(with.status_bar.y, 29);

        let without = compute_layout(area, false, 72);
        assert!(without.header.is_none());
        assert_eq!(without.body.height, 29);
    }
}
