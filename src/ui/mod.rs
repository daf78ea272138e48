// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the top row (title, photo count, API address)
// - grid: Renders the photo cards or the empty-collection message
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status line (last refresh, selection)
// - upload_modal: Renders the upload form
// - toast: Renders toast notifications (brief pop-up messages)

pub mod grid;
pub mod header;
pub mod legend;
pub mod render;
pub mod status_bar;
pub mod toast;
pub mod upload_modal;

// Re-export main render function for convenience
pub use render::render;
