//! Engine - orchestration state shared by the runner and tests
//!
//! Owns the application state, the message channel, the host, the load
//! tasks of the current mount and the shutdown signal.

use std::sync::Arc;

use ace_core::prelude::*;
use ace_core::AceProject;
use ace_host::HostService;
use tokio::sync::{mpsc, watch};

use crate::actions::LoadTasks;
use crate::config::{self, Settings};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Channel capacity for background results
const MESSAGE_CAPACITY: usize = 256;

pub struct Engine<H> {
    /// Application state (the TEA model)
    pub state: AppState,

    /// Sender handed to background tasks
    pub msg_tx: mpsc::Sender<Message>,

    pub msg_rx: mpsc::Receiver<Message>,

    pub host: Arc<H>,

    load_tasks: LoadTasks,

    pub shutdown_tx: watch::Sender<bool>,

    pub shutdown_rx: watch::Receiver<bool>,

    pub settings: Settings,
}

impl<H> Engine<H>
where
    H: HostService + Sync + 'static,
{
    /// Create an engine for a project, reading `.ace/config.toml`
    pub fn new(project: AceProject, host: H) -> Self {
        let settings = config::load_settings(&project.path);
        let engine = Self::with_settings(project, host, settings);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        engine
    }

    /// Create an engine with explicit settings and no signal handler
    pub fn with_settings(project: AceProject, host: H, settings: Settings) -> Self {
        let state = AppState::new(Some(project), settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            state,
            msg_tx,
            msg_rx,
            host: Arc::new(host),
            load_tasks: LoadTasks::default(),
            shutdown_tx,
            shutdown_rx,
            settings,
        }
    }

    /// Show the workspace: issues the host loads
    pub fn mount(&mut self) {
        self.process_message(Message::Mount);
    }

    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.host,
            &mut self.load_tasks,
        );
    }

    /// Process every message already queued. Returns how many were handled.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next background message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Loads still running for the current mount
    pub fn pending_loads(&self) -> usize {
        self.load_tasks.running()
    }

    /// Tear down: abort outstanding loads and signal background tasks
    pub fn shutdown(&mut self) {
        self.process_message(Message::Unmount);
        let _ = self.shutdown_tx.send(true);
        info!("Workspace engine stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_core::SimVarType;
    use ace_host::test_utils::{simvar_map, test_instrument, test_project, test_simvar, FakeHost};
    use std::time::Duration;

    fn engine(host: FakeHost) -> Engine<FakeHost> {
        Engine::with_settings(test_project("A320", vec![]), host, Settings::default())
    }

    #[tokio::test]
    async fn test_mount_populates_both_stores() {
        let mut engine = engine(FakeHost::new(
            simvar_map(vec![test_simvar(SimVarType::A, "ENG_RPM", 1)]),
            vec![test_instrument("PFD", 768.0, 768.0)],
        ));

        engine.mount();
        assert!(engine.process_next().await);
        assert!(engine.process_next().await);

        assert_eq!(engine.state.simvars.len(), 1);
        assert_eq!(engine.state.project.instruments().len(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_aborts_pending_loads() {
        let mut engine = engine(
            FakeHost::default().with_delays(Duration::from_secs(30), Duration::from_secs(30)),
        );

        engine.mount();
        assert_eq!(engine.pending_loads(), 2);

        engine.shutdown();
        assert_eq!(engine.pending_loads(), 0);
        assert!(*engine.shutdown_receiver().borrow());
    }

    #[tokio::test]
    async fn test_late_result_after_remount_is_ignored() {
        let mut engine = engine(FakeHost::default());
        engine.mount();
        let stale = engine.state.mount_id;
        engine.shutdown();
        engine.mount();
        engine.drain_pending_messages();

        engine.process_message(Message::SimVarsLoaded {
            mount_id: stale,
            issued_for: Some("A320".to_string()),
            simvars: simvar_map(vec![test_simvar(SimVarType::A, "ENG_RPM", 1)]),
        });
        assert!(engine.state.simvars.is_empty());
    }
}
