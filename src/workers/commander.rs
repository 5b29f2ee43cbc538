//! Start/stop command worker
//!
//! Receives commands from the UI, posts them to the backend, and
//! re-fetches status afterwards so the displayed state always reflects
//! the last confirmed server response. There is no optimistic update:
//! even a failed command is followed by a status re-fetch.

use super::core::EventSender;
use crate::backend::BotBackend;
use crate::events::{EventType, Sample, Worker};
use crate::logging::LogLevel;
use tokio::sync::{broadcast, mpsc};

/// A user action on the bot process.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BotCommand {
    Start,
    Stop,
}

impl BotCommand {
    fn verb(&self) -> &'static str {
        match self {
            BotCommand::Start => "start",
            BotCommand::Stop => "stop",
        }
    }
}

pub struct Commander {
    backend: Box<dyn BotBackend>,
    event_sender: EventSender,
    command_receiver: mpsc::Receiver<BotCommand>,
}

impl Commander {
    pub fn new(
        backend: Box<dyn BotBackend>,
        event_sender: EventSender,
        command_receiver: mpsc::Receiver<BotCommand>,
    ) -> Self {
        Self {
            backend,
            event_sender,
            command_receiver,
        }
    }

    /// Runs the command loop until the shutdown signal arrives.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        loop {
            tokio::select! {
                command = self.command_receiver.recv() => {
                    match command {
                        Some(command) => self.handle_command(command).await,
                        None => break,
                    }
                }
                _ = shutdown.recv() => break,
            }
        }
    }

    pub async fn handle_command(&self, command: BotCommand) {
        let result = match command {
            BotCommand::Start => self.backend.start_bot().await,
            BotCommand::Stop => self.backend.stop_bot().await,
        };

        match result {
            Ok(()) => {
                self.event_sender
                    .send_commander_event(
                        format!("Sent {} command", command.verb()),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_commander_event(
                        format!("Failed to send {} command: {}", command.verb(), e),
                        EventType::Error,
                        LogLevel::Error,
                    )
                    .await;
            }
        }

        // Status re-fetch happens regardless of the command outcome.
        self.refresh_status().await;
    }

    async fn refresh_status(&self) {
        match self.backend.status().await {
            Ok(status) => {
                let msg = if status.running {
                    "Bot status: running".to_string()
                } else {
                    "Bot status: stopped".to_string()
                };
                // Confirmations after a command are always worth showing.
                self.event_sender
                    .send_sample(Worker::Commander, msg, Sample::Status(status), LogLevel::Info)
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_commander_event(
                        format!("Failed to confirm status: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBotBackend;
    use crate::backend::error::BackendError;
    use crate::backend::types::BotStatus;
    use crate::events::Event;

    fn event_channel() -> (EventSender, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(32);
        (EventSender::new(tx), rx)
    }

    fn commander(backend: MockBotBackend) -> (Commander, mpsc::Receiver<Event>) {
        let (sender, receiver) = event_channel();
        let (_command_tx, command_rx) = mpsc::channel(8);
        (
            Commander::new(Box::new(backend), sender, command_rx),
            receiver,
        )
    }

    #[tokio::test]
    async fn start_command_posts_then_confirms_status() {
        let mut backend = MockBotBackend::new();
        backend.expect_start_bot().times(1).returning(|| Ok(()));
        backend
            .expect_status()
            .times(1)
            .returning(|| Ok(BotStatus { running: true }));

        let (commander, mut receiver) = commander(backend);
        commander.handle_command(BotCommand::Start).await;

        let events: Vec<Event> = std::iter::from_fn(|| receiver.try_recv().ok()).collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EventType::Success);
        assert!(matches!(
            events[1].sample,
            Some(Sample::Status(BotStatus { running: true }))
        ));
    }

    #[tokio::test]
    async fn failed_command_still_refetches_status() {
        let mut backend = MockBotBackend::new();
        backend.expect_stop_bot().times(1).returning(|| {
            Err(BackendError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        backend
            .expect_status()
            .times(1)
            .returning(|| Ok(BotStatus { running: true }));

        let (commander, mut receiver) = commander(backend);
        commander.handle_command(BotCommand::Stop).await;

        let events: Vec<Event> = std::iter::from_fn(|| receiver.try_recv().ok()).collect();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EventType::Error);
        // The displayed state stays truthful: still running.
        assert!(matches!(
            events[1].sample,
            Some(Sample::Status(BotStatus { running: true }))
        ));
    }
}
