//! SimVar store
//!
//! Holds the SimVars declared by the host, keyed by [`SimVarKey`]. Loads
//! replace the catalogue but never change a pin the user already set.

use std::collections::BTreeMap;

use ace_core::prelude::*;
use ace_core::{SimVar, SimVarKey, SimVarMap};

use crate::load_status::LoadStatus;

#[derive(Debug, Default)]
pub struct SimVarStore {
    vars: BTreeMap<SimVarKey, SimVar>,
    pub status: LoadStatus,
}

impl SimVarStore {
    /// Replace the catalogue with a host map.
    ///
    /// The host picks its own map keys; entries are keyed by the SimVar's
    /// type, name and index. Pins of SimVars that were already known are
    /// kept. Returns the number of SimVars now held.
    pub fn initialize(&mut self, map: SimVarMap) -> usize {
        let mut vars = BTreeMap::new();

        for (host_key, mut simvar) in map {
            let key = simvar.key();
            if host_key != key.to_string() {
                trace!("SimVar {} arrived under host key {:?}", key, host_key);
            }
            if let Some(existing) = self.vars.get(&key) {
                simvar.pinned = existing.pinned;
            }
            vars.insert(key, simvar);
        }

        self.vars = vars;
        self.status = LoadStatus::Loaded;
        self.vars.len()
    }

    /// Flip the pin of one SimVar, returning the new state
    pub fn toggle_pin(&mut self, key: &SimVarKey) -> Option<bool> {
        let simvar = self.vars.get_mut(key)?;
        let pinned = !simvar.is_pinned();
        simvar.pinned = Some(pinned);
        Some(pinned)
    }

    pub fn get(&self, key: &SimVarKey) -> Option<&SimVar> {
        self.vars.get(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// SimVars in key order
    pub fn iter(&self) -> impl Iterator<Item = (&SimVarKey, &SimVar)> {
        self.vars.iter()
    }

    /// Key of the SimVar at a list position
    pub fn key_at(&self, position: usize) -> Option<&SimVarKey> {
        self.vars.keys().nth(position)
    }

    pub fn pinned(&self) -> impl Iterator<Item = &SimVar> {
        self.vars.values().filter(|v| v.is_pinned())
    }
}
