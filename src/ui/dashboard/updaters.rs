//! Dashboard state update logic
//!
//! Applies worker events to the dashboard state once per frame.

use super::state::{ConnectionState, DashboardState};

use crate::events::{Event as WorkerEvent, EventType, Sample};
use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with new tick and queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            // Add to activity logs for display
            self.add_to_activity_log(event.clone());

            // Process the event for state updates
            self.process_event(&event);
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        if let Some(sample) = &event.sample {
            self.apply_sample(sample);
            self.connection = ConnectionState::Connected;
            return;
        }

        // A failed fetch leaves last-known values untouched; only the
        // connection indicator changes. The next tick retries. The
        // `since` instant marks the start of the outage, so consecutive
        // failures keep the original timestamp.
        if event.event_type == EventType::Error
            && !matches!(self.connection, ConnectionState::Degraded { .. })
        {
            self.connection = ConnectionState::Degraded {
                since: Instant::now(),
            };
        }
    }

    /// Apply a polled payload. Each sample replaces its state slot
    /// wholesale.
    fn apply_sample(&mut self, sample: &Sample) {
        match sample {
            Sample::Status(status) => {
                self.running = status.running;
            }
            Sample::Logs(lines) => {
                self.log_text = lines.join("\n");
            }
            Sample::Chart(data) => {
                // Alignment is enforced again at the point of application,
                // in case a sample reached us without passing the poller.
                self.chart = data.clone().into_aligned();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::{BotStatus, ChartData};
    use crate::environment::Environment;
    use crate::events::{Event, Worker};
    use crate::logging::LogLevel;
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local, Instant::now(), false)
    }

    fn status_event(running: bool) -> Event {
        Event::sample(
            Worker::Poller,
            "Status refreshed".to_string(),
            Sample::Status(BotStatus { running }),
            LogLevel::Info,
        )
    }

    #[test]
    fn status_sample_applies_server_boolean_exactly() {
        let mut state = state();

        state.add_event(status_event(true));
        state.update();
        assert!(state.running);
        assert_eq!(state.status_text(), "Running");
        assert!(!state.can_start());
        assert!(state.can_stop());

        state.add_event(status_event(false));
        state.update();
        assert!(!state.running);
        assert_eq!(state.status_text(), "Stopped");
        assert!(state.can_start());
        assert!(!state.can_stop());
    }

    #[test]
    fn logs_sample_replaces_buffer_with_joined_text() {
        let mut state = state();
        state.add_event(Event::sample(
            Worker::Poller,
            "Fetched 3 log lines".to_string(),
            Sample::Logs(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
            LogLevel::Debug,
        ));
        state.update();
        assert_eq!(state.log_text, "a\nb\nc");

        // The next fetch replaces, it does not append.
        state.add_event(Event::sample(
            Worker::Poller,
            "Fetched 1 log line".to_string(),
            Sample::Logs(vec!["d".to_string()]),
            LogLevel::Debug,
        ));
        state.update();
        assert_eq!(state.log_text, "d");
    }

    #[test]
    fn chart_sample_is_applied_aligned() {
        let mut state = state();
        state.add_event(Event::sample(
            Worker::Poller,
            "Fetched chart".to_string(),
            Sample::Chart(ChartData {
                prices: vec![10.0, 11.0],
                timestamps: vec!["t1".to_string(), "t2".to_string()],
            }),
            LogLevel::Debug,
        ));
        state.update();
        assert_eq!(state.chart.prices, vec![10.0, 11.0]);
        assert_eq!(state.chart.timestamps, vec!["t1", "t2"]);
        assert_eq!(state.chart.prices.len(), state.chart.timestamps.len());
    }

    #[test]
    fn ragged_chart_sample_is_truncated_on_apply() {
        let mut state = state();
        state.add_event(Event::sample(
            Worker::Poller,
            "Fetched chart".to_string(),
            Sample::Chart(ChartData {
                prices: vec![1.0, 2.0, 3.0],
                timestamps: vec!["t1".to_string()],
            }),
            LogLevel::Debug,
        ));
        state.update();
        assert_eq!(state.chart.prices.len(), state.chart.timestamps.len());
        assert_eq!(state.chart.len(), 1);
    }

    #[test]
    fn error_event_retains_last_known_values() {
        let mut state = state();
        state.add_event(status_event(true));
        state.add_event(Event::sample(
            Worker::Poller,
            "Fetched 1 log line".to_string(),
            Sample::Logs(vec!["line".to_string()]),
            LogLevel::Debug,
        ));
        state.update();

        state.add_event(Event::poller_with_level(
            "Failed to fetch logs: timeout".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();

        assert!(state.running);
        assert_eq!(state.log_text, "line");
        assert!(matches!(
            state.connection,
            ConnectionState::Degraded { .. }
        ));
    }

    #[test]
    fn repeated_errors_keep_the_original_outage_start() {
        let mut state = state();
        state.add_event(Event::poller_with_level(
            "Failed to fetch status: unreachable".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();
        let ConnectionState::Degraded { since: first } = state.connection else {
            panic!("expected degraded connection");
        };

        state.add_event(Event::poller_with_level(
            "Failed to fetch logs: unreachable".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();
        let ConnectionState::Degraded { since: second } = state.connection else {
            panic!("expected degraded connection");
        };
        assert_eq!(first, second);
    }

    #[test]
    fn successful_sample_clears_degraded_connection() {
        let mut state = state();
        state.add_event(Event::poller_with_level(
            "Failed to fetch status: unreachable".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();
        assert!(matches!(
            state.connection,
            ConnectionState::Degraded { .. }
        ));

        state.add_event(status_event(false));
        state.update();
        assert_eq!(state.connection, ConnectionState::Connected);
    }

    #[test]
    fn start_confirmed_by_poll_flips_status() {
        // Scenario: user clicks start, backend accepts, subsequent status
        // poll reports running.
        let mut state = state();
        assert!(state.can_start());

        state.add_event(Event::commander_with_level(
            "Sent start command".to_string(),
            EventType::Success,
            LogLevel::Info,
        ));
        state.update();
        // No optimistic flip before confirmation.
        assert!(!state.running);

        state.add_event(status_event(true));
        state.update();
        assert!(state.running);
        assert_eq!(state.status_text(), "Running");
    }
}
