use crate::backend::error::BackendError;
use crate::backend::types::{BotStatus, ChartData};

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// The HTTP contract with the bot backend.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BotBackend: Send + Sync {
    /// Fetch whether the bot process is currently running.
    async fn status(&self) -> Result<BotStatus, BackendError>;

    /// Fetch the full log buffer, oldest line first.
    async fn logs(&self) -> Result<Vec<String>, BackendError>;

    /// Fetch the price series for the chart.
    async fn chart_data(&self) -> Result<ChartData, BackendError>;

    /// Ask the backend to launch the bot. The response body is ignored.
    async fn start_bot(&self) -> Result<(), BackendError>;

    /// Ask the backend to stop the bot. The response body is ignored.
    async fn stop_bot(&self) -> Result<(), BackendError>;
}
