//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Project Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No ACE project found in: {path}")]
    NoProject { path: PathBuf },

    #[error("Invalid project file {path}: {message}")]
    ProjectParse { path: PathBuf, message: String },

    #[error("Invalid project: {message}")]
    ProjectInvalid { message: String },

    #[error("Duplicate element uuid in project: {uuid}")]
    DuplicateElement { uuid: String },

    // ─────────────────────────────────────────────────────────────
    // Host Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Host request '{command}' failed: {message}")]
    Host { command: String, message: String },

    #[error("Invalid instrument config {path}: {message}")]
    InstrumentConfig { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn no_project(path: impl Into<PathBuf>) -> Self {
        Self::NoProject { path: path.into() }
    }

    pub fn project_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ProjectParse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn project_invalid(message: impl Into<String>) -> Self {
        Self::ProjectInvalid {
            message: message.into(),
        }
    }

    pub fn duplicate_element(uuid: impl ToString) -> Self {
        Self::DuplicateElement {
            uuid: uuid.to_string(),
        }
    }

    pub fn host(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Host {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn instrument_config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InstrumentConfig {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Errors the workspace reports and keeps running after
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Host { .. } | Error::InstrumentConfig { .. } | Error::DuplicateElement { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
