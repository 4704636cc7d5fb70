//! Simulation variables exposed by the flight-simulator host

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// SimVar namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum SimVarType {
    /// Aircraft variable
    A,
    /// Environment variable
    E,
    /// Local variable
    L,
}

impl SimVarType {
    pub fn label(&self) -> &'static str {
        match self {
            SimVarType::A => "Aircraft",
            SimVarType::E => "Environment",
            SimVarType::L => "Local",
        }
    }
}

impl fmt::Display for SimVarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            SimVarType::A => "A",
            SimVarType::E => "E",
            SimVarType::L => "L",
        };
        f.write_str(c)
    }
}

/// SimVar value: the host reports either a number or a string
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SimVarValue {
    Number(f64),
    Text(String),
}

impl Default for SimVarValue {
    fn default() -> Self {
        SimVarValue::Number(0.0)
    }
}

impl fmt::Display for SimVarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimVarValue::Number(n) => write!(f, "{n}"),
            SimVarValue::Text(s) => f.write_str(s),
        }
    }
}

/// A simulation variable
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimVar {
    #[serde(rename = "type")]
    pub kind: SimVarType,
    pub name: String,
    pub index: u32,
    pub unit: String,
    #[serde(default)]
    pub value: SimVarValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl SimVar {
    pub fn key(&self) -> SimVarKey {
        SimVarKey {
            kind: self.kind,
            name: self.name.clone(),
            index: self.index,
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.unwrap_or(false)
    }
}

/// Composite identity of a SimVar: `type:name:index`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimVarKey {
    pub kind: SimVarType,
    pub name: String,
    pub index: u32,
}

impl fmt::Display for SimVarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.name, self.index)
    }
}

impl FromStr for SimVarKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::host("load_simvars", format!("invalid SimVar key '{s}'"));

        let mut parts = s.splitn(2, ':');
        let kind = match parts.next() {
            Some("A") => SimVarType::A,
            Some("E") => SimVarType::E,
            Some("L") => SimVarType::L,
            _ => return Err(invalid()),
        };
        let rest = parts.next().ok_or_else(invalid)?;
        // Names may contain ':' themselves, the index is always last
        let (name, index) = rest.rsplit_once(':').ok_or_else(invalid)?;
        if name.is_empty() {
            return Err(invalid());
        }
        let index = index.parse().map_err(|_| invalid())?;

        Ok(SimVarKey {
            kind,
            name: name.to_string(),
            index,
        })
    }
}

/// SimVars as delivered by the host, keyed by their string key
pub type SimVarMap = BTreeMap<String, SimVar>;
