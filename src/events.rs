//! Event System
//!
//! Types and implementations for worker events carried to the UI.

use crate::backend::types::{BotStatus, ChartData};
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Worker that polls status, logs, and chart data from the backend.
    Poller,
    /// Worker that sends start/stop commands to the backend.
    Commander,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Polled payload attached to a worker event.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// Fresh `/status` response.
    Status(BotStatus),
    /// Fresh `/logs` response, replacing the previous buffer.
    Logs(Vec<String>),
    /// Fresh `/chart-data` response.
    Chart(ChartData),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Optional payload for data-carrying events.
    pub sample: Option<Sample>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            sample: None,
        }
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Poller, msg, event_type, log_level)
    }

    pub fn commander_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Commander, msg, event_type, log_level)
    }

    /// A successful fetch, carrying the decoded payload. Routine
    /// refreshes go out at debug level; state changes worth surfacing
    /// (a flipped running flag, a command confirmation) at info.
    pub fn sample(worker: Worker, msg: String, sample: Sample, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type: EventType::Success,
            log_level,
            sample: Some(sample),
        }
    }

    pub fn should_display(&self) -> bool {
        // Errors are always shown; routine refreshes only at debug level.
        if self.event_type == EventType::Error {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
