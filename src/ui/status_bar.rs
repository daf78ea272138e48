use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic::grid::PhotoCard;
use crate::model::types::FetchStatus;

/// Build the status text: last refresh outcome plus the selected photo
fn build_status_line(status: &FetchStatus, selected: Option<&PhotoCard>) -> String {
    let mut parts = Vec::new();

    match status {
        FetchStatus::Idle => {}
        FetchStatus::Loading => parts.push("Carregando...".to_string()),
        FetchStatus::Loaded { count, at } => {
            parts.push(format!("Fotos: {} · {}", count, at.format("%H:%M:%S")));
        }
        FetchStatus::Failed { kind, at } => {
            parts.push(format!("Erro: {} · {}", kind.label(), at.format("%H:%M:%S")));
        }
    }

    if let Some(card) = selected {
        parts.push(format!("Selecionada: {}", card.name));
    }

    parts.join(" | ")
}

/// Render the bottom status line
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    status: &FetchStatus,
    selected: Option<&PhotoCard>,
) {
    let status_line = build_status_line(status, selected);
    let is_error = matches!(status, FetchStatus::Failed { .. });

    // Colour the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label_color = if is_error && idx == 0 {
                Color::Red
            } else {
                Color::Yellow
            };
            spans.push(Span::styled(
                part[..=colon_pos].to_string(),
                Style::default().fg(label_color),
            ));
            spans.push(Span::raw(part[colon_pos + 1..].to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Gray));
    f.render_widget(status_bar, area);
}
