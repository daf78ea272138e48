//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **GalleryModel**: the grid snapshot and refresh-cycle bookkeeping
//! - **UiModel**: upload modal, form, toast, preferences
//!
//! Key principles:
//! - Clone + Debug: Can snapshot state in tests
//! - No services: All I/O lives in the App and its background services
//! - Pure accessors: Helper methods are side-effect free

pub mod gallery;
pub mod notifier;
pub mod types;
pub mod ui;

use std::time::Duration;

pub use gallery::GalleryModel;
pub use notifier::Notifier;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Photos on screen and refresh state
    pub gallery: GalleryModel,

    /// UI preferences and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool, toast_duration: Duration) -> Self {
        Self {
            gallery: GalleryModel::new(),
            ui: UiModel::new(vim_mode, toast_duration),
        }
    }

    /// Show toast message
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.ui.notifier.notify(message, severity);
    }

    /// Check if the upload modal is showing
    pub fn has_modal(&self) -> bool {
        self.ui.is_modal_open()
    }
}
