//! Studio dashboard TUI
//!
//! Sidebar navigation across the six views, a Ctrl+K search overlay that
//! jumps to the matching view, and per-view status and text filters.

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use terminal::run;
