use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic;

/// Build the header spans: title, photo count, API address
fn build_header_spans(photo_count: usize, api_url: &str) -> Vec<Span<'static>> {
    let count_text = match photo_count {
        1 => "1 foto".to_string(),
        n => format!("{} fotos", n),
    };

    vec![
        Span::styled(
            "📷 Galeria",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(count_text, Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled(api_url.to_string(), Style::default().fg(Color::DarkGray)),
    ]
}

/// Render the header row at the top of the screen, with the upload control
/// at its right end
pub fn render_header(f: &mut Frame, area: Rect, photo_count: usize, api_url: &str) {
    let header = Paragraph::new(Line::from(build_header_spans(photo_count, api_url)));
    f.render_widget(header, area);

    let button = Paragraph::new(Span::styled(
        logic::layout::UPLOAD_BUTTON_LABEL,
        Style::default().fg(Color::Black).bg(Color::Green),
    ));
    f.render_widget(button, logic::layout::upload_button_rect(area));
}
