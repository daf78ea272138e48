//! Layout calculation logic
//!
//! Pure functions for screen areas, the card grid geometry, and mouse hit
//! testing. Rendering and the mouse handler both go through these, so a
//! click always lands on the same rectangle that was drawn.

use ratatui::layout::Rect;

/// Width of one photo card in terminal cells (including borders)
pub const CARD_WIDTH: u16 = 28;

/// Height of one photo card in terminal cells (including borders)
pub const CARD_HEIGHT: u16 = 14;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 12;

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header_area: Rect,
    pub grid_area: Rect,
    pub legend_area: Rect,
    pub status_area: Rect,
}

/// Split the terminal into header, grid, legend and status rows
pub fn calculate_layout(area: Rect) -> ScreenLayout {
    let header_height = area.height.min(1);
    let status_height = area.height.saturating_sub(header_height).min(1);
    let legend_height = area
        .height
        .saturating_sub(header_height + status_height)
        .min(1);
    let grid_height = area
        .height
        .saturating_sub(header_height + status_height + legend_height);

    let header_area = Rect::new(area.x, area.y, area.width, header_height);
    let grid_area = Rect::new(area.x, area.y + header_height, area.width, grid_height);
    let legend_area = Rect::new(area.x, grid_area.y + grid_height, area.width, legend_height);
    let status_area = Rect::new(
        area.x,
        legend_area.y + legend_height,
        area.width,
        status_height,
    );

    ScreenLayout {
        header_area,
        grid_area,
        legend_area,
        status_area,
    }
}

/// Number of card columns that fit in `width` (always at least one)
///
/// # Examples
/// ```
/// use photogrid::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(10), 1);
/// assert_eq!(grid_columns(56), 2);
/// assert_eq!(grid_columns(83), 2);
/// assert_eq!(grid_columns(84), 3);
/// ```
pub fn grid_columns(width: u16) -> usize {
    ((width / CARD_WIDTH) as usize).max(1)
}

/// Number of card rows fully visible in `height` (always at least one)
pub fn visible_rows(height: u16) -> usize {
    ((height / CARD_HEIGHT) as usize).max(1)
}

/// First grid row to draw so that the selected card stays on screen
pub fn first_visible_row(selected: Option<usize>, columns: usize, rows_visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    let selected_row = selected / columns.max(1);
    selected_row.saturating_sub(rows_visible.saturating_sub(1))
}

/// Rectangles of the cards currently on screen, paired with their index
pub fn card_rects(area: Rect, count: usize, selected: Option<usize>) -> Vec<(usize, Rect)> {
    if count == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let columns = grid_columns(area.width);
    let rows_visible = visible_rows(area.height);
    let first_row = first_visible_row(selected, columns, rows_visible);

    let card_width = CARD_WIDTH.min(area.width);
    let card_height = CARD_HEIGHT.min(area.height);

    let mut rects = Vec::new();
    for row in 0..rows_visible {
        for col in 0..columns {
            let index = (first_row + row) * columns + col;
            if index >= count {
                return rects;
            }
            let rect = Rect::new(
                area.x + col as u16 * CARD_WIDTH,
                area.y + row as u16 * CARD_HEIGHT,
                card_width,
                card_height,
            );
            rects.push((index, rect));
        }
    }
    rects
}

/// Row of a card holding the delete control (just above the bottom border)
pub fn delete_button_rect(card: Rect) -> Rect {
    Rect::new(
        card.x + 1,
        card.y + card.height.saturating_sub(2),
        card.width.saturating_sub(2),
        1,
    )
}

/// Row of a card holding the display name
pub fn name_rect(card: Rect) -> Rect {
    Rect::new(
        card.x + 1,
        card.y + card.height.saturating_sub(3),
        card.width.saturating_sub(2),
        1,
    )
}

/// Area of a card the image is drawn into
pub fn image_rect(card: Rect) -> Rect {
    Rect::new(
        card.x + 1,
        card.y + 1,
        card.width.saturating_sub(2),
        card.height.saturating_sub(5),
    )
}

/// Which part of a card a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    DeleteControl,
    Body,
}

/// Resolve a click at (`column`, `row`) to a card on screen
pub fn card_at(
    area: Rect,
    count: usize,
    selected: Option<usize>,
    column: u16,
    row: u16,
) -> Option<(usize, CardHit)> {
    card_rects(area, count, selected)
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(index, rect)| {
            if contains(delete_button_rect(rect), column, row) {
                (index, CardHit::DeleteControl)
            } else {
                (index, CardHit::Body)
            }
        })
}

/// Content rectangle of the upload modal, centred in `area`
pub fn upload_modal_rect(area: Rect) -> Rect {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

/// Close control drawn on the modal's top border
pub const MODAL_CLOSE_LABEL: &str = "[x]";

/// Upload control drawn at the right end of the header row
pub const UPLOAD_BUTTON_LABEL: &str = "[ + Enviar ]";

/// Close control of the upload modal: top border row, just left of the
/// top-right corner
pub fn modal_close_rect(area: Rect) -> Rect {
    let modal = upload_modal_rect(area);
    let width = (MODAL_CLOSE_LABEL.len() as u16).min(modal.width.saturating_sub(2));
    Rect::new(
        modal.x + modal.width.saturating_sub(width + 2),
        modal.y,
        width,
        1u16.min(modal.height),
    )
}

/// Upload control, right-aligned in the header row
pub fn upload_button_rect(header: Rect) -> Rect {
    let width = (UPLOAD_BUTTON_LABEL.len() as u16).min(header.width);
    Rect::new(
        header.x + header.width - width,
        header.y,
        width,
        1u16.min(header.height),
    )
}

/// Whether a click at (`column`, `row`) falls on the modal's background,
/// i.e. outside its content rectangle
pub fn is_modal_background_click(area: Rect, column: u16, row: u16) -> bool {
    !contains(upload_modal_rect(area), column, row)
}

/// Point-in-rectangle test (right and bottom edges exclusive)
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
