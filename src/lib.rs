//! ACE workspace library
//!
//! A terminal canvas for laying out flight-simulator instrument panels.
//! Re-exports the workspace crates so the binary and integration tests have
//! one import root.

pub use ace_app as app;
pub use ace_core as core;
pub use ace_host as host;
pub use ace_tui as tui;

// Re-export main entry point
pub use ace_tui::run_with_project;
