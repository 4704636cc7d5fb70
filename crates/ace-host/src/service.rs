//! Requests the workspace issues to its host process

use ace_core::{InstrumentConfig, Result, SimVarMap};

/// The host process as seen from the workspace.
///
/// Both requests are independent and may complete in any order. Neither is
/// retried by the caller.
#[trait_variant::make(HostService: Send)]
pub trait LocalHostService {
    /// Load the SimVars declared by the active project
    async fn load_simvars(&self) -> Result<SimVarMap>;

    /// Load the catalog of instruments available for placement
    async fn load_instruments(&self) -> Result<Vec<InstrumentConfig>>;
}
