//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the upload modal, the toast, and visual state.

use std::time::Duration;

use ratatui::layout::Rect;

use super::notifier::Notifier;
use super::types::{ModalState, UploadForm};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    // ============================================
    // UPLOAD MODAL
    // ============================================
    /// Upload modal visibility
    pub modal: ModalState,

    /// Upload form contents (kept while the modal is closed)
    pub upload_form: UploadForm,

    // ============================================
    // NOTIFICATIONS
    // ============================================
    pub notifier: Notifier,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Terminal area of the last drawn frame (for mouse hit testing)
    pub screen_area: Rect,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool, toast_duration: Duration) -> Self {
        Self {
            vim_mode,
            modal: ModalState::Closed,
            upload_form: UploadForm::new(),
            notifier: Notifier::new(toast_duration),
            screen_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    /// Closed → Open
    pub fn open_upload_modal(&mut self) {
        self.modal = ModalState::Open;
    }

    /// Open → Closed (form contents are kept)
    pub fn close_upload_modal(&mut self) {
        self.modal = ModalState::Closed;
    }
}
