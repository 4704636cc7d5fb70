//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use ace_core::prelude::*;
use ace_host::HostService;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Handles of the host loads issued by the current mount
#[derive(Debug, Default)]
pub struct LoadTasks {
    handles: Vec<JoinHandle<()>>,
}

impl LoadTasks {
    pub fn track(&mut self, handle: JoinHandle<()>) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    /// Abort every task still running. Returns how many were aborted.
    pub fn abort_all(&mut self) -> usize {
        let mut aborted = 0;
        for handle in self.handles.drain(..) {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        aborted
    }

    pub fn running(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

/// Execute an action by spawning background tasks
pub fn handle_action<H>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    host: &Arc<H>,
    tasks: &mut LoadTasks,
) where
    H: HostService + Sync + 'static,
{
    match action {
        UpdateAction::LoadWorkspace {
            mount_id,
            issued_for,
        } => {
            // A remount supersedes loads the previous mount still has running
            let superseded = tasks.abort_all();
            if superseded > 0 {
                debug!("Aborted {} load(s) from an earlier mount", superseded);
            }

            // Independent and unordered: neither waits for the other
            tasks.track(spawn_simvars_load(
                host.clone(),
                msg_tx.clone(),
                mount_id,
                issued_for.clone(),
            ));
            tasks.track(spawn_instruments_load(
                host.clone(),
                msg_tx,
                mount_id,
                issued_for,
            ));
        }

        UpdateAction::CancelLoads => {
            let aborted = tasks.abort_all();
            if aborted > 0 {
                debug!("Aborted {} outstanding load(s)", aborted);
            }
        }
    }
}

fn spawn_simvars_load<H>(
    host: Arc<H>,
    msg_tx: mpsc::Sender<Message>,
    mount_id: u64,
    issued_for: Option<String>,
) -> JoinHandle<()>
where
    H: HostService + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match host.load_simvars().await {
            Ok(simvars) => Message::SimVarsLoaded {
                mount_id,
                issued_for,
                simvars,
            },
            Err(e) => {
                log_load_failure("simvars", &e);
                Message::SimVarsLoadFailed {
                    mount_id,
                    issued_for,
                    error: e.to_string(),
                }
            }
        };
        if msg_tx.send(msg).await.is_err() {
            trace!("SimVars result dropped, engine is gone");
        }
    })
}

fn spawn_instruments_load<H>(
    host: Arc<H>,
    msg_tx: mpsc::Sender<Message>,
    mount_id: u64,
    issued_for: Option<String>,
) -> JoinHandle<()>
where
    H: HostService + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match host.load_instruments().await {
            Ok(instruments) => Message::InstrumentsLoaded {
                mount_id,
                issued_for,
                instruments,
            },
            Err(e) => {
                log_load_failure("instruments", &e);
                Message::InstrumentsLoadFailed {
                    mount_id,
                    issued_for,
                    error: e.to_string(),
                }
            }
        };
        if msg_tx.send(msg).await.is_err() {
            trace!("Instrument result dropped, engine is gone");
        }
    })
}

/// Host failures are reported by the result handler; anything else is unexpected
fn log_load_failure(what: &str, e: &Error) {
    if !e.is_recoverable() {
        error!("Loading {} hit an unexpected error: {:?}", what, e);
    }
}
