//! Workspace lifecycle: host loads issued on mount and their results

use ace_core::prelude::*;
use ace_core::{InstrumentConfig, SimVarMap};

use crate::load_status::LoadStatus;
use crate::state::{AppState, NoticeLevel};

use super::{UpdateAction, UpdateResult};

const NO_PROJECT: &str = "no project";

/// Issue both host loads for a fresh mount
pub fn handle_mount(state: &mut AppState) -> UpdateResult {
    state.mount_id += 1;
    state.simvars.status = LoadStatus::Loading;
    state.project.instruments_status = LoadStatus::Loading;

    let issued_for = state.project.name().map(str::to_string);
    debug!(
        "Mounting workspace for [{}] (mount {})",
        issued_for.as_deref().unwrap_or(NO_PROJECT),
        state.mount_id
    );

    UpdateResult::action(UpdateAction::LoadWorkspace {
        mount_id: state.mount_id,
        issued_for,
    })
}

/// Abandon outstanding loads and any gesture in progress
pub fn handle_unmount(state: &mut AppState) -> UpdateResult {
    state.mount_id += 1;
    state.drag.cancel();
    state.pan_anchor = None;

    if state.simvars.status.is_loading() {
        state.simvars.status = LoadStatus::Idle;
    }
    if state.project.instruments_status.is_loading() {
        state.project.instruments_status = LoadStatus::Idle;
    }

    debug!("Workspace torn down");
    UpdateResult::action(UpdateAction::CancelLoads)
}

pub fn handle_simvars_loaded(
    state: &mut AppState,
    mount_id: u64,
    issued_for: Option<String>,
    simvars: SimVarMap,
) -> UpdateResult {
    if is_stale(state, mount_id, "SimVars") {
        return UpdateResult::none();
    }

    let count = state.simvars.initialize(simvars);
    let tag = log_tag(state, issued_for.as_deref(), "SimVars");
    info!("[{}] Loaded SimVars from project configuration", tag);
    debug!("{} SimVar(s) available", count);

    UpdateResult::none()
}

pub fn handle_simvars_failed(
    state: &mut AppState,
    mount_id: u64,
    issued_for: Option<String>,
    error: String,
) -> UpdateResult {
    if is_stale(state, mount_id, "SimVars") {
        return UpdateResult::none();
    }

    let tag = log_tag(state, issued_for.as_deref(), "SimVars");
    warn!("[{}] Failed to load SimVars: {}", tag, error);
    state.notify(NoticeLevel::Error, format!("Failed to load SimVars: {}", error));
    state.simvars.status = LoadStatus::Failed(error);

    UpdateResult::none()
}

pub fn handle_instruments_loaded(
    state: &mut AppState,
    mount_id: u64,
    issued_for: Option<String>,
    instruments: Vec<InstrumentConfig>,
) -> UpdateResult {
    if is_stale(state, mount_id, "Instruments") {
        return UpdateResult::none();
    }

    let count = state.project.set_instruments(instruments);
    let tag = log_tag(state, issued_for.as_deref(), "Instruments");
    info!("[{}] Loaded available instruments", tag);
    debug!("{} instrument(s) in catalog", count);

    UpdateResult::none()
}

pub fn handle_instruments_failed(
    state: &mut AppState,
    mount_id: u64,
    issued_for: Option<String>,
    error: String,
) -> UpdateResult {
    if is_stale(state, mount_id, "Instruments") {
        return UpdateResult::none();
    }

    let tag = log_tag(state, issued_for.as_deref(), "Instruments");
    warn!("[{}] Failed to load instruments: {}", tag, error);
    state.notify(
        NoticeLevel::Error,
        format!("Failed to load instruments: {}", error),
    );
    state.project.instruments_status = LoadStatus::Failed(error);

    UpdateResult::none()
}

fn is_stale(state: &AppState, mount_id: u64, what: &str) -> bool {
    if mount_id != state.mount_id {
        debug!(
            "Ignoring {} from mount {} (current mount {})",
            what, mount_id, state.mount_id
        );
        return true;
    }
    false
}

/// Project name to tag a completion log line with: the project active now.
fn log_tag(state: &AppState, issued_for: Option<&str>, what: &str) -> String {
    let current = state.project.name();
    if issued_for != current {
        debug!(
            "{} were requested for [{}] but [{}] is active now",
            what,
            issued_for.unwrap_or(NO_PROJECT),
            current.unwrap_or(NO_PROJECT)
        );
    }
    current.unwrap_or(NO_PROJECT).to_string()
}
