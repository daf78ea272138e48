//! Keyboard Input Handler
//!
//! Handles all keyboard input. While the upload modal is open every key goes
//! to the form; otherwise keys drive the grid.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic;
use crate::logic::navigation::Direction;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows terminals also report releases
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.model.ui.is_modal_open() {
        handle_modal_key(app, key);
    } else {
        handle_grid_key(app, key);
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_upload_modal(),
        KeyCode::Enter => app.submit_upload(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.model.ui.upload_form.focus_next();
        }
        KeyCode::Backspace => {
            app.model.ui.upload_form.focused_value_mut().pop();
        }
        KeyCode::Char(c) => {
            app.model.ui.upload_form.focused_value_mut().push(c);
        }
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;

    let direction = match key.code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('h') if vim => Some(Direction::Left),
        KeyCode::Char('l') if vim => Some(Direction::Right),
        KeyCode::Char('k') if vim => Some(Direction::Up),
        KeyCode::Char('j') if vim => Some(Direction::Down),
        _ => None,
    };

    if let Some(direction) = direction {
        move_grid_selection(app, direction);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('a') => app.open_upload_modal(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('d') | KeyCode::Delete => {
            // The card carries its own action; no lookup by id afterwards
            if let Some(card) = app.model.gallery.selected_card() {
                let action = card.action.clone();
                app.perform(action);
            }
        }
        _ => {}
    }
}

fn move_grid_selection(app: &mut App, direction: Direction) {
    let grid_area = logic::layout::calculate_layout(app.model.ui.screen_area).grid_area;
    let columns = logic::layout::grid_columns(grid_area.width);

    let gallery = &mut app.model.gallery;
    gallery.selected =
        logic::navigation::move_selection(gallery.selected, gallery.grid.len(), columns, direction);
}
