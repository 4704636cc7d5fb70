//! Test utilities for host types
//!
//! Provides a scriptable [`FakeHost`] and helpers for building projects,
//! instruments and SimVars in tests.

use std::path::Path;
use std::time::Duration;

use ace_core::{
    AceConfig, AceProject, Dimensions, Element, ElementKind, Error, InstrumentConfig,
    ProjectPaths, Result, SimVar, SimVarMap, SimVarType, SimVarValue,
};
use uuid::Uuid;

use crate::project_host::INSTRUMENT_CONFIG_FILE;
use crate::service::HostService;

/// Host double with canned responses and optional per-request delays.
///
/// Failures are stored as strings so the fake stays `Clone`.
#[derive(Debug, Clone)]
pub struct FakeHost {
    pub simvars: std::result::Result<SimVarMap, String>,
    pub instruments: std::result::Result<Vec<InstrumentConfig>, String>,
    pub simvars_delay: Duration,
    pub instruments_delay: Duration,
}

impl FakeHost {
    pub fn new(simvars: SimVarMap, instruments: Vec<InstrumentConfig>) -> Self {
        Self {
            simvars: Ok(simvars),
            instruments: Ok(instruments),
            simvars_delay: Duration::ZERO,
            instruments_delay: Duration::ZERO,
        }
    }

    pub fn failing_simvars(mut self, reason: &str) -> Self {
        self.simvars = Err(reason.to_string());
        self
    }

    pub fn failing_instruments(mut self, reason: &str) -> Self {
        self.instruments = Err(reason.to_string());
        self
    }

    pub fn with_delays(mut self, simvars: Duration, instruments: Duration) -> Self {
        self.simvars_delay = simvars;
        self.instruments_delay = instruments;
        self
    }
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new(SimVarMap::new(), Vec::new())
    }
}

impl HostService for FakeHost {
    async fn load_simvars(&self) -> Result<SimVarMap> {
        if !self.simvars_delay.is_zero() {
            tokio::time::sleep(self.simvars_delay).await;
        }
        self.simvars
            .clone()
            .map_err(|reason| Error::host("load_simvars", reason))
    }

    async fn load_instruments(&self) -> Result<Vec<InstrumentConfig>> {
        if !self.instruments_delay.is_zero() {
            tokio::time::sleep(self.instruments_delay).await;
        }
        self.instruments
            .clone()
            .map_err(|reason| Error::host("load_instruments", reason))
    }
}

/// Creates a numeric SimVar
pub fn test_simvar(kind: SimVarType, name: &str, index: u32) -> SimVar {
    SimVar {
        kind,
        name: name.to_string(),
        index,
        unit: "number".to_string(),
        value: SimVarValue::Number(0.0),
        pinned: None,
    }
}

/// Builds a [`SimVarMap`] keyed the way the host keys it
pub fn simvar_map(vars: Vec<SimVar>) -> SimVarMap {
    vars.into_iter().map(|v| (v.key().to_string(), v)).collect()
}

/// Creates a catalog entry
pub fn test_instrument(index: &str, width: f64, height: f64) -> InstrumentConfig {
    InstrumentConfig {
        index: index.to_string(),
        is_interactive: false,
        name: index.to_string(),
        dimensions: Dimensions { width, height },
    }
}

/// Creates an instrument element at a surface position
pub fn test_element(name: &str, x: f64, y: f64) -> Element {
    Element {
        uuid: Uuid::new_v4(),
        name: name.to_string(),
        element: ElementKind::Instrument,
        width: 100.0,
        height: 100.0,
        x,
        y,
    }
}

/// Creates an empty project rooted at `path` with conventional path bindings
pub fn test_project_at(path: &Path) -> AceProject {
    AceProject::new(
        path,
        AceConfig {
            name: "Test Project".to_string(),
            paths: ProjectPaths {
                instruments: "instruments".into(),
                bundles: "bundles".into(),
                html_ui: "html_ui".into(),
            },
            elements: Vec::new(),
        },
    )
}

/// Creates a project holding the given elements
pub fn test_project(name: &str, elements: Vec<Element>) -> AceProject {
    let mut project = test_project_at(Path::new("/projects/test"));
    project.config.name = name.to_string();
    project.config.elements = elements;
    project
}

/// Writes `<dir>/<index>/config.json` for an instrument
pub fn write_instrument(dir: &Path, index: &str, name: &str, width: f64, height: f64) {
    let instrument_dir = dir.join(index);
    std::fs::create_dir_all(&instrument_dir).expect("create instrument dir");
    let config = InstrumentConfig {
        index: index.to_string(),
        is_interactive: false,
        name: name.to_string(),
        dimensions: Dimensions { width, height },
    };
    let json = serde_json::to_string_pretty(&config).expect("serialize instrument");
    std::fs::write(instrument_dir.join(INSTRUMENT_CONFIG_FILE), json).expect("write config");
}
