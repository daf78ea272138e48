//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Error classification and user-facing labels
//! - file: File type detection, MIME types and path expansion
//! - grid: Building photo cards (and their actions) from a list snapshot
//! - image: Image source fallback and downscale sizing
//! - layout: Screen areas, grid geometry and mouse hit testing
//! - navigation: Grid selection movement

pub mod errors;
pub mod file;
pub mod grid;
pub mod image;
pub mod layout;
pub mod navigation;
