//! Message processing
//!
//! Runs a message through the TEA update loop, following up chained
//! messages and dispatching actions.

use std::sync::Arc;

use ace_host::HostService;
use tokio::sync::mpsc;

use crate::actions::{handle_action, LoadTasks};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<H>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    host: &Arc<H>,
    tasks: &mut LoadTasks,
) where
    H: HostService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), host, tasks);
        }

        msg = result.message;
    }
}
