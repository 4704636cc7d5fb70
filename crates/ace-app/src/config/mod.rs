//! Configuration file parsing for the ACE workspace
//!
//! Supports:
//! - `.ace/config.toml` - Canvas and UI settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
