pub mod cli_consts {
    //! Dashboard configuration constants.

    use std::time::Duration;

    /// Interval between poll cycles (logs, chart data, status).
    pub const POLL_INTERVAL_MS: u64 = 2_000;

    /// The maximum number of events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between the workers and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Command buffer size between the UI and the commander worker.
    pub const COMMAND_QUEUE_SIZE: usize = 8;

    /// Connect timeout for backend requests.
    pub const CONNECT_TIMEOUT_SECS: u64 = 5;

    /// Total request timeout for backend requests.
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;

    pub const fn poll_interval() -> Duration {
        Duration::from_millis(POLL_INTERVAL_MS)
    }

    pub const fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_TIMEOUT_SECS)
    }

    pub const fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
