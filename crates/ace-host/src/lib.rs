//! # ace-host - Host Process Boundary
//!
//! The workspace treats the process that owns the simulator data as an opaque
//! request/response collaborator. This crate defines that boundary and ships a
//! reference implementation backed by a project directory.
//!
//! Depends on [`ace_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Host Requests
//! - [`HostService`] / [`LocalHostService`] - `load_simvars` and `load_instruments`
//! - [`ProjectHost`] - Serves both requests from files inside an [`ace_core::AceProject`]
//!
//! ### Projects
//! - [`open_project()`] - Read and validate `ace.toml` from a directory
//! - [`is_ace_project()`] - Check whether a directory contains a project file
//!
//! ### File Dialogs
//! - [`OpenDialogOptions`], [`DialogFilter`] - What the dialog may return
//! - [`DialogSelection`] - A single path or several paths

pub mod dialog;
pub mod project;
pub mod project_host;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use dialog::{DialogFilter, DialogSelection, OpenDialogOptions};
pub use project::{is_ace_project, open_project, PROJECT_FILE};
pub use project_host::{ProjectHost, INSTRUMENT_CONFIG_FILE, SIMVARS_FILE};
pub use service::{HostService, LocalHostService};
