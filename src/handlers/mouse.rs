//! Mouse Input Handler
//!
//! Left clicks only. With the modal open, a click on its close control or on
//! the background (outside the modal content) closes it. Otherwise the header
//! upload control opens the modal, a click on a card selects it, and a click
//! on its delete control runs the card's action.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::logic;
use crate::logic::layout::CardHit;
use crate::App;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let screen = app.model.ui.screen_area;

    if app.model.ui.is_modal_open() {
        let on_close =
            logic::layout::contains(logic::layout::modal_close_rect(screen), mouse.column, mouse.row);
        if on_close || logic::layout::is_modal_background_click(screen, mouse.column, mouse.row) {
            app.close_upload_modal();
        }
        return;
    }

    let layout = logic::layout::calculate_layout(screen);
    if logic::layout::contains(
        logic::layout::upload_button_rect(layout.header_area),
        mouse.column,
        mouse.row,
    ) {
        app.open_upload_modal();
        return;
    }

    let grid_area = layout.grid_area;
    let gallery = &app.model.gallery;
    let Some((index, hit)) = logic::layout::card_at(
        grid_area,
        gallery.grid.len(),
        gallery.selected,
        mouse.column,
        mouse.row,
    ) else {
        return;
    };

    app.model.gallery.selected = Some(index);

    if hit == CardHit::DeleteControl {
        if let Some(card) = app.model.gallery.cards().get(index) {
            let action = card.action.clone();
            app.perform(action);
        }
    }
}
