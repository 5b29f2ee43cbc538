//! Session setup and initialization

use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_workers;
use crate::workers::BotCommand;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Command sender for start/stop actions
    pub command_sender: mpsc::Sender<BotCommand>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
    /// The backend being polled
    pub environment: Environment,
}

/// Sets up a dashboard session.
///
/// Starts the poller and commander workers and returns the channels the
/// UI (or headless loop) needs to talk to them.
pub fn setup_session(environment: Environment) -> SessionData {
    let (event_receiver, command_sender, join_handles, shutdown_sender) =
        start_workers(environment.clone());

    SessionData {
        event_receiver,
        command_sender,
        join_handles,
        shutdown_sender,
        environment,
    }
}
