//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - api: API responses from the background service
//! - keyboard: User keyboard input
//! - mouse: User mouse clicks
//!
//! Handlers take &mut App and dispatch into its controller methods.

pub mod api;
pub mod keyboard;
pub mod mouse;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
pub use mouse::handle_mouse;
