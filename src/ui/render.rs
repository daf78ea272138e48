use crate::logic;
use crate::App;
use ratatui::Frame;

use super::{grid, header, legend, status_bar, toast, upload_modal};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Mouse hit testing resolves clicks against the last drawn frame
    app.model.ui.screen_area = size;

    let layout_info = logic::layout::calculate_layout(size);

    header::render_header(
        f,
        layout_info.header_area,
        app.model.gallery.grid.len(),
        app.base_url(),
    );

    grid::render_grid(
        f,
        layout_info.grid_area,
        &app.model.gallery,
        &mut app.image_state_map,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.vim_mode,
        app.model.ui.is_modal_open(),
        app.model.gallery.selected_card().is_some(),
    );

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &app.model.gallery.fetch_status,
        app.model.gallery.selected_card(),
    );

    if app.model.ui.is_modal_open() {
        upload_modal::render_upload_modal(f, &app.model.ui.upload_form);
    }

    // Toast goes last so it stays above the modal
    if let Some(message) = app.model.ui.notifier.current() {
        toast::render_toast(f, size, message);
    }
}
