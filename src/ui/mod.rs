//! User Interface module
//!
//! Terminal UI using ratatui: map, message log and status sidebar.

pub mod app;

pub use app::App;
