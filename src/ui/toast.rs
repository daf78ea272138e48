use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::types::{Severity, Toast};

/// Icon and colour for a toast severity
fn severity_style(severity: Severity) -> (&'static str, Color) {
    match severity {
        Severity::Success => ("✓ ", Color::Green),
        Severity::Error => ("✗ ", Color::Red),
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, toast: &Toast) {
    // Calculate toast dimensions - allow for longer messages
    let max_width = (area.width as usize).min(80); // Max 80 chars wide
    let toast_width = (toast.message.width() + 6).min(max_width) as u16;
    let toast_height = 3u16.min(area.height);

    // Top right corner, below the header
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width + 1),
        y: area.y + 1u16.min(area.height.saturating_sub(toast_height)),
        width: toast_width,
        height: toast_height,
    };

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = severity_style(toast.severity);

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(toast.message.as_str(), Style::default()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    #[test]
    fn test_error_toast_renders_message() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let toast = Toast {
            message: "Falha ao excluir foto".to_string(),
            severity: Severity::Error,
            shown_at: Instant::now(),
        };

        terminal
            .draw(|f| render_toast(f, f.area(), &toast))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Falha ao excluir foto"));
        assert!(text.contains('✗'));
    }

    #[test]
    fn test_severity_colours() {
        assert_eq!(severity_style(Severity::Success).1, Color::Green);
        assert_eq!(severity_style(Severity::Error).1, Color::Red);
    }
}
