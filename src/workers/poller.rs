//! Backend polling loop
//!
//! Refreshes status, logs, and chart data on a fixed interval. Each fetch
//! is isolated: a failure emits an error event and the remaining fetches
//! in the cycle still run, so the UI keeps its last-known values and
//! retries on the next tick.

use super::core::EventSender;
use crate::backend::BotBackend;
use crate::consts::cli_consts::poll_interval;
use crate::events::{EventType, Sample, Worker};
use crate::logging::LogLevel;
use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

pub struct Poller {
    backend: Box<dyn BotBackend>,
    event_sender: EventSender,
    /// Last running flag seen, so status flips can be surfaced at a
    /// higher log level than routine confirmations.
    last_running: Option<bool>,
}

impl Poller {
    pub fn new(backend: Box<dyn BotBackend>, event_sender: EventSender) -> Self {
        Self {
            backend,
            event_sender,
            last_running: None,
        }
    }

    /// Runs the polling loop until the shutdown signal arrives.
    ///
    /// Status is fetched once up front so the first render is not
    /// stale-empty for a whole interval. Fetches within a cycle run
    /// sequentially, so a slow response can only delay the next tick,
    /// never get applied after a newer one.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        self.fetch_status().await;

        let mut interval = tokio::time::interval(poll_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; consume it so the next
        // cycle lands a full interval after the initial status fetch.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.poll_cycle().await;
                }
                _ = shutdown.recv() => break,
            }
        }
    }

    /// One full refresh: logs, chart data, status.
    pub async fn poll_cycle(&mut self) {
        self.event_sender
            .send_poller_event(
                "Refreshing bot state...".to_string(),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;
        self.fetch_logs().await;
        self.fetch_chart().await;
        self.fetch_status().await;
    }

    async fn fetch_status(&mut self) {
        match self.backend.status().await {
            Ok(status) => {
                let msg = if status.running {
                    "Bot status: running".to_string()
                } else {
                    "Bot status: stopped".to_string()
                };
                // A flipped flag is news; an unchanged one is routine.
                let log_level = if self.last_running == Some(status.running) {
                    LogLevel::Debug
                } else {
                    LogLevel::Info
                };
                self.last_running = Some(status.running);
                self.event_sender
                    .send_sample(Worker::Poller, msg, Sample::Status(status), log_level)
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_poller_event(
                        format!("Failed to fetch status: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }

    async fn fetch_logs(&self) {
        match self.backend.logs().await {
            Ok(logs) => {
                let msg = format!("Fetched {} log lines", logs.len());
                self.event_sender
                    .send_sample(Worker::Poller, msg, Sample::Logs(logs), LogLevel::Debug)
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_poller_event(
                        format!("Failed to fetch logs: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }

    async fn fetch_chart(&self) {
        match self.backend.chart_data().await {
            Ok(data) => {
                let data = data.into_aligned();
                let msg = format!("Fetched {} chart points", data.len());
                self.event_sender
                    .send_sample(Worker::Poller, msg, Sample::Chart(data), LogLevel::Debug)
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_poller_event(
                        format!("Failed to fetch chart data: {}", e),
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
    use crate::backend::types::{BotStatus, ChartData};
    use crate::events::Event;
    use tokio::sync::mpsc;

    fn event_channel() -> (EventSender, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(32);
        (EventSender::new(tx), rx)
    }

    fn http_error() -> BackendError {
        BackendError::Http {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    #[tokio::test]
    async fn poll_cycle_emits_all_three_samples() {
        let mut backend = MockBotBackend::new();
        backend
            .expect_logs()
            .times(1)
            .returning(|| Ok(vec!["a".to_string(), "b".to_string()]));
        backend.expect_chart_data().times(1).returning(|| {
            Ok(ChartData {
                prices: vec![10.0, 11.0],
                timestamps: vec!["t1".to_string(), "t2".to_string()],
            })
        });
        backend
            .expect_status()
            .times(1)
            .returning(|| Ok(BotStatus { running: true }));

        let (sender, mut receiver) = event_channel();
        let mut poller = Poller::new(Box::new(backend), sender);
        poller.poll_cycle().await;

        let samples: Vec<Sample> = std::iter::from_fn(|| receiver.try_recv().ok())
            .filter_map(|event| event.sample)
            .collect();
        assert_eq!(samples.len(), 3);
        assert!(matches!(samples[0], Sample::Logs(_)));
        assert!(matches!(samples[1], Sample::Chart(_)));
        assert!(matches!(
            samples[2],
            Sample::Status(BotStatus { running: true })
        ));
    }

    #[tokio::test]
    async fn failed_logs_fetch_does_not_block_chart_and_status() {
        let mut backend = MockBotBackend::new();
        backend
            .expect_logs()
            .times(1)
            .returning(|| Err(http_error()));
        backend
            .expect_chart_data()
            .times(1)
            .returning(|| Ok(ChartData::default()));
        backend
            .expect_status()
            .times(1)
            .returning(|| Ok(BotStatus { running: false }));

        let (sender, mut receiver) = event_channel();
        let mut poller = Poller::new(Box::new(backend), sender);
        poller.poll_cycle().await;

        let events: Vec<Event> = std::iter::from_fn(|| receiver.try_recv().ok())
            .filter(|event| event.event_type != EventType::Refresh)
            .collect();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event_type, EventType::Error);
        assert!(matches!(events[1].sample, Some(Sample::Chart(_))));
        assert!(matches!(events[2].sample, Some(Sample::Status(_))));
    }

    #[tokio::test]
    async fn ragged_chart_data_is_aligned_before_emitting() {
        let mut backend = MockBotBackend::new();
        backend.expect_logs().returning(|| Ok(Vec::new()));
        backend.expect_chart_data().returning(|| {
            Ok(ChartData {
                prices: vec![1.0, 2.0, 3.0],
                timestamps: vec!["t1".to_string(), "t2".to_string()],
            })
        });
        backend
            .expect_status()
            .returning(|| Ok(BotStatus { running: false }));

        let (sender, mut receiver) = event_channel();
        let mut poller = Poller::new(Box::new(backend), sender);
        poller.poll_cycle().await;

        let events: Vec<Event> = std::iter::from_fn(|| receiver.try_recv().ok()).collect();
        let chart = events
            .iter()
            .find_map(|e| match &e.sample {
                Some(Sample::Chart(data)) => Some(data.clone()),
                _ => None,
            })
            .expect("chart sample expected");
        assert_eq!(chart.prices.len(), chart.timestamps.len());
        assert_eq!(chart.len(), 2);
    }

    #[tokio::test]
    async fn status_flips_surface_at_info_level() {
        let mut backend = MockBotBackend::new();
        let mut running = [true, true, false].into_iter();
        backend
            .expect_status()
            .times(3)
            .returning(move || Ok(BotStatus {
                running: running.next().unwrap(),
            }));

        let (sender, mut receiver) = event_channel();
        let mut poller = Poller::new(Box::new(backend), sender);
        poller.fetch_status().await;
        poller.fetch_status().await;
        poller.fetch_status().await;

        let levels: Vec<LogLevel> = std::iter::from_fn(|| receiver.try_recv().ok())
            .map(|event| event.log_level)
            .collect();
        // First sighting and the flip are news; the repeat is routine.
        assert_eq!(levels, vec![LogLevel::Info, LogLevel::Debug, LogLevel::Info]);
    }

    #[tokio::test]
    async fn shutdown_stops_polling() {
        let mut backend = MockBotBackend::new();
        // Only the initial status fetch may happen; no further calls after
        // the shutdown signal.
        backend
            .expect_status()
            .times(1)
            .returning(|| Ok(BotStatus { running: false }));
        backend.expect_logs().times(0);
        backend.expect_chart_data().times(0);

        let (sender, _receiver) = event_channel();
        let poller = Poller::new(Box::new(backend), sender);

        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let handle = tokio::spawn(poller.run(shutdown_rx));
        // Give the initial fetch a chance to run, then shut down well
        // before the first 2-second tick.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        let _ = shutdown_tx.send(());
        handle.await.unwrap();
    }
}
