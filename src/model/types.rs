//! Shared types for the Model
//!
//! These types are used across multiple sub-models and represent
//! fundamental domain concepts.

use std::time::Instant;

use crate::logic::errors::ErrorType;
use crate::logic::image::ImageSource;

/// Visibility of the upload modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// Field of the upload form that receives typed text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    FilePath,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::FilePath,
            FormField::FilePath => FormField::Name,
        }
    }
}

/// Upload form contents
///
/// Lives outside `ModalState` so that closing the modal keeps what the user
/// typed; only a successful upload resets it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadForm {
    pub name: String,
    pub file_path: String,
    pub focused: FormField,
}

impl UploadForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            file_path: String::new(),
            focused: FormField::Name,
        }
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Name => &mut self.name,
            FormField::FilePath => &mut self.file_path,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.file_path.is_empty()
    }
}

impl Default for UploadForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity of a toast notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A visible toast message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

/// Outcome of the most recent applied list request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet
    Idle,
    Loading,
    Loaded { count: usize, at: chrono::DateTime<chrono::Local> },
    Failed { kind: ErrorType, at: chrono::DateTime<chrono::Local> },
}

/// Loading state of one card's image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardImageState {
    /// Images are disabled (no graphics protocol)
    Disabled,
    Loading(ImageSource),
    Ready(ImageSource),
    /// Remote and placeholder both failed, or no placeholder configured
    Unavailable,
}
