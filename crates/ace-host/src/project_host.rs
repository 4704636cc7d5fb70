//! Host requests served from the files of a project directory

use std::path::Path;

use ace_core::prelude::*;
use ace_core::{AceProject, InstrumentConfig, SimVarMap};

use crate::service::HostService;

/// SimVar declarations, relative to the project directory
pub const SIMVARS_FILE: &str = "simvars.json";

/// Per-instrument config file inside each instrument directory
pub const INSTRUMENT_CONFIG_FILE: &str = "config.json";

/// Answers host requests from the files of an opened project.
///
/// - `simvars.json` at the project root holds a [`SimVarMap`]; a missing file
///   means the project declares no SimVars.
/// - every directory under `paths.instruments` that contains a `config.json`
///   contributes one [`InstrumentConfig`].
#[derive(Debug, Clone)]
pub struct ProjectHost {
    project: AceProject,
}

impl ProjectHost {
    pub fn new(project: AceProject) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &AceProject {
        &self.project
    }
}

impl HostService for ProjectHost {
    async fn load_simvars(&self) -> Result<SimVarMap> {
        let path = self.project.path.join(SIMVARS_FILE);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No {} in project, starting with no SimVars", SIMVARS_FILE);
                return Ok(SimVarMap::new());
            }
            Err(e) => return Err(Error::host("load_simvars", e.to_string())),
        };

        let map: SimVarMap = serde_json::from_str(&content)
            .map_err(|e| Error::host("load_simvars", format!("{}: {}", path.display(), e)))?;

        debug!("Read {} SimVar(s) from {}", map.len(), path.display());
        Ok(map)
    }

    async fn load_instruments(&self) -> Result<Vec<InstrumentConfig>> {
        let dir = self.project.instruments_dir();
        let mut entries = tokio::fs::read_dir(&dir).await.map_err(|e| {
            Error::host(
                "load_instruments",
                format!("cannot read {}: {}", dir.display(), e),
            )
        })?;

        let mut instruments = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::host("load_instruments", e.to_string()))?
        {
            let config_path = entry.path().join(INSTRUMENT_CONFIG_FILE);
            if !config_path.is_file() {
                continue;
            }
            match read_instrument_config(&config_path).await {
                Ok(config) => instruments.push(config),
                // One broken instrument should not hide the rest of the catalog
                Err(e) => warn!("Skipping instrument: {}", e),
            }
        }

        instruments.sort_by(|a, b| a.index.cmp(&b.index));
        debug!(
            "Found {} instrument(s) under {}",
            instruments.len(),
            dir.display()
        );
        Ok(instruments)
    }
}

async fn read_instrument_config(path: &Path) -> Result<InstrumentConfig> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Reading {}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| Error::instrument_config(path, e.to_string()))
}
