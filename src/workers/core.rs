//! Core worker utilities

use crate::events::{Event, EventType, Sample, Worker};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    pub async fn send_poller_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::poller_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_commander_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::commander_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_sample(
        &self,
        worker: Worker,
        message: String,
        sample: Sample,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::sample(worker, message, sample, log_level))
            .await;
    }
}
