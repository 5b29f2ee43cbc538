//! Runtime wiring for the polling and command workers

use crate::backend::{BackendClient, BotBackend};
use crate::consts::cli_consts::{COMMAND_QUEUE_SIZE, EVENT_QUEUE_SIZE};
use crate::environment::Environment;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::{BotCommand, Commander, Poller};
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the poller and commander workers against the given backend.
///
/// Both workers stop when the returned shutdown sender fires. Each worker
/// owns its own client so there is no shared mutable state.
pub fn start_workers(
    environment: Environment,
) -> (
    mpsc::Receiver<Event>,
    mpsc::Sender<BotCommand>,
    Vec<JoinHandle<()>>,
    broadcast::Sender<()>,
) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (command_sender, command_receiver) = mpsc::channel::<BotCommand>(COMMAND_QUEUE_SIZE);
    let (shutdown_sender, _) = broadcast::channel(1);

    let poller_backend: Box<dyn BotBackend> = Box::new(BackendClient::new(environment.clone()));
    let commander_backend: Box<dyn BotBackend> = Box::new(BackendClient::new(environment));

    let poller = Poller::new(poller_backend, EventSender::new(event_sender.clone()));
    let commander = Commander::new(
        commander_backend,
        EventSender::new(event_sender),
        command_receiver,
    );

    let join_handles = vec![
        tokio::spawn(poller.run(shutdown_sender.subscribe())),
        tokio::spawn(commander.run(shutdown_sender.subscribe())),
    ];

    (
        event_receiver,
        command_sender,
        join_handles,
        shutdown_sender,
    )
}
