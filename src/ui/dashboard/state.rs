//! Dashboard state management
//!
//! Owns the last-known server truth: running flag, log buffer, and chart
//! series. All three are replaced wholesale from polled samples, never
//! mutated locally.

use crate::backend::types::ChartData;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as WorkerEvent;

use std::collections::VecDeque;
use std::time::Instant;

/// Health of the connection to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No response received yet.
    Unknown,
    /// Last fetch succeeded.
    Connected,
    /// A fetch failed; displayed data may be stale since this instant.
    Degraded { since: Instant },
}

#[derive(Debug)]
pub struct DashboardState {
    /// The backend this dashboard is connected to.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Whether the bot process is running, per the last confirmed
    /// server response.
    pub running: bool,
    /// Newline-joined bot log text, fully replaced each fetch.
    pub log_text: String,
    /// Aligned price/timestamp series for the chart.
    pub chart: ChartData,
    /// Connection health, drives the stale-data indicator.
    pub connection: ConnectionState,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Worker events for the activity panel
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Animation tick counter
    pub tick: usize,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            environment,
            start_time,
            running: false,
            log_text: String::new(),
            chart: ChartData::default(),
            connection: ConnectionState::Unknown,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            with_background_color,
        }
    }

    /// The start action is available only while the bot is stopped.
    pub fn can_start(&self) -> bool {
        !self.running
    }

    /// The stop action is available only while the bot is running.
    pub fn can_stop(&self) -> bool {
        self.running
    }

    /// Status line text for the header.
    pub fn status_text(&self) -> &'static str {
        if self.running { "Running" } else { "Stopped" }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
