//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `workspace`: Mount/teardown and host load results
//! - `canvas`: Drag, pan, zoom and element placement
//! - `menu`: Context menu handlers
//! - `settings`: Side menu, project settings panel and file dialog
//! - `keys`: Key event handlers for each input mode
//! - `pointer`: Mouse hit-testing and routing

pub(crate) mod canvas;
pub(crate) mod keys;
pub(crate) mod menu;
pub(crate) mod pointer;
pub(crate) mod settings;
pub(crate) mod update;
pub(crate) mod workspace;


use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Issue `load_simvars` and `load_instruments` as two independent tasks
    LoadWorkspace {
        /// Mount the results belong to
        mount_id: u64,
        /// Active project when the loads were issued
        issued_for: Option<String>,
    },

    /// Abort outstanding load tasks
    CancelLoads,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
