//! Photo gallery TUI library
//!
//! Exposes modules for testing

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::App;
