//! ace-app - Application state and orchestration for the ACE workspace
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! workspace canvas: the stores, viewport, drag coordinator and context menu
//! that make up the model, the `update()` function, the actions that run host
//! loads in the background, and the Engine that ties them together.

pub mod actions;
pub mod config;
pub mod context_menu;
pub mod drag;
pub mod engine;
pub mod file_dialog;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod layout;
pub mod load_status;
pub mod message;
pub mod process;
pub mod project_form;
pub mod project_store;
pub mod signals;
pub mod simvar_store;
pub mod state;
pub mod viewport;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::{InputKey, PointerButton, PointerEvent, PointerKind};
pub use load_status::LoadStatus;
pub use message::Message;
pub use state::{AppPhase, AppState, MenuTab, Notice, NoticeLevel};
