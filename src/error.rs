//! Typed errors for the gallery API layer.
//!
//! Each variant corresponds to one kind of failed operation. The detail
//! keeps the classified cause (for the status bar) and the raw message
//! (for the debug log).

use std::fmt;

use thiserror::Error;

use crate::logic::errors::{classify_error, format_error_message, ErrorType};

/// Classified cause of a failed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub kind: ErrorType,
    pub message: String,
}

impl ErrorDetail {
    pub fn new(kind: ErrorType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&anyhow::Error> for ErrorDetail {
    fn from(error: &anyhow::Error) -> Self {
        Self {
            kind: classify_error(error),
            message: format_error_message(error),
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind.label())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GalleryError {
    /// Listing photos failed (transport error, non-2xx, or bad body)
    #[error("failed to fetch photos: {0}")]
    Fetch(ErrorDetail),

    #[error("failed to upload photo: {0}")]
    Upload(ErrorDetail),

    #[error("failed to delete photo: {0}")]
    Delete(ErrorDetail),

    /// A single card's image could not be fetched or decoded
    #[error("failed to load image: {0}")]
    ImageLoad(ErrorDetail),
}

impl GalleryError {
    pub fn detail(&self) -> &ErrorDetail {
        match self {
            GalleryError::Fetch(detail)
            | GalleryError::Upload(detail)
            | GalleryError::Delete(detail)
            | GalleryError::ImageLoad(detail) => detail,
        }
    }

    pub fn kind(&self) -> ErrorType {
        self.detail().kind
    }
}
