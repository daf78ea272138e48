//! External Services
//!
//! This module contains services that run off the UI loop:
//! - api: HTTP request queue service
//! - images: card image decoding

pub mod api;
pub mod images;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse};
pub use images::ImageUpdate;
