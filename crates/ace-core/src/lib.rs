//! # ace-core - Core Domain Types
//!
//! Foundation crate for the ACE workspace. Provides the project/element model,
//! the instrument catalog entries, simulation variables, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, uuid).
//!
//! ## Public API
//!
//! ### Project Model (`project`)
//! - [`Element`] - A placed element with identity, size and position
//! - [`AceConfig`] - Named project configuration with path bindings and elements
//! - [`AceProject`] - A project configuration bound to its directory
//!
//! ### Instruments (`instrument`)
//! - [`InstrumentConfig`] - Catalog entry describing a placeable instrument type
//!
//! ### SimVars (`simvar`)
//! - [`SimVar`], [`SimVarKey`], [`SimVarType`], [`SimVarValue`], [`SimVarMap`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ace_core::prelude::*;
//! ```

pub mod error;
pub mod instrument;
pub mod logging;
pub mod prelude;
pub mod project;
pub mod simvar;

pub use error::{Error, Result, ResultExt};
pub use instrument::{Dimensions, InstrumentConfig};
pub use project::{AceConfig, AceProject, Element, ElementKind, ProjectPaths};
pub use simvar::{SimVar, SimVarKey, SimVarMap, SimVarType, SimVarValue};
