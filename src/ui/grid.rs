use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_image::{protocol::StatefulProtocol, StatefulImage};
use unicode_width::UnicodeWidthChar;

use crate::logic;
use crate::logic::grid::{GridContent, PhotoCard, EMPTY_GRID_MESSAGE};
use crate::logic::image::ImageSource;
use crate::model::{types::CardImageState, GalleryModel};

const DELETE_LABEL: &str = "[ Excluir ]";

/// Render the photo grid, or the empty-collection placeholder
pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    gallery: &GalleryModel,
    image_state_map: &mut HashMap<String, StatefulProtocol>,
) {
    let cards = match &gallery.grid {
        GridContent::Empty => {
            render_empty(f, area);
            return;
        }
        GridContent::Cards(cards) => cards,
    };

    for (index, rect) in logic::layout::card_rects(area, cards.len(), gallery.selected) {
        let card = &cards[index];
        let is_selected = gallery.selected == Some(index);
        let image_state = gallery.card_image(&card.photo_id);
        render_card(
            f,
            rect,
            card,
            is_selected,
            image_state,
            image_state_map.get_mut(&card.photo_id),
        );
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y, area.width, 1u16.min(area.height));

    let placeholder = Paragraph::new(Span::styled(
        EMPTY_GRID_MESSAGE,
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center);

    f.render_widget(placeholder, line_area);
}

fn render_card(
    f: &mut Frame,
    rect: Rect,
    card: &PhotoCard,
    is_selected: bool,
    image_state: CardImageState,
    protocol: Option<&mut StatefulProtocol>,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(
        Block::default().borders(Borders::ALL).border_style(border_style),
        rect,
    );

    let image_area = logic::layout::image_rect(rect);
    match (image_state, protocol) {
        (CardImageState::Ready(_), Some(protocol)) => {
            f.render_stateful_widget(StatefulImage::default(), image_area, protocol);
        }
        (state, _) => render_image_status(f, image_area, state),
    }

    let name_area = logic::layout::name_rect(rect);
    let name = Paragraph::new(Span::styled(
        truncate_to_width(&card.name, name_area.width as usize),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(name, name_area);

    let button_area = logic::layout::delete_button_rect(rect);
    let button_style = if is_selected {
        Style::default().fg(Color::White).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };
    let button = Paragraph::new(Line::from(Span::styled(DELETE_LABEL, button_style)))
        .alignment(Alignment::Center);
    f.render_widget(button, button_area);
}

fn render_image_status(f: &mut Frame, area: Rect, state: CardImageState) {
    let text = match state {
        CardImageState::Disabled => "🖼",
        CardImageState::Loading(ImageSource::Remote) => "Carregando...",
        CardImageState::Loading(ImageSource::Placeholder) | CardImageState::Ready(_) => "...",
        CardImageState::Unavailable => "Imagem indisponível",
    };

    let y = area.y + area.height / 2;
    let line_area = Rect::new(area.x, y, area.width, 1u16.min(area.height));
    f.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        line_area,
    );
}

/// Cut `text` to at most `max_width` display cells, marking the cut with '…'
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
