//! Bot Backend Client
//!
//! A client for the trading-bot backend, covering status, log, and
//! chart-data retrieval plus start/stop commands.

use crate::backend::BotBackend;
use crate::backend::error::BackendError;
use crate::backend::types::{BotStatus, ChartData, LogsResponse};
use crate::consts::cli_consts::{connect_timeout, request_timeout};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("botdash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    environment: Environment,
}

impl BackendClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(connect_timeout())
                .timeout(request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, BackendError> {
        if !response.status().is_success() {
            return Err(BackendError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        let decoded = serde_json::from_slice(&response_bytes)?;
        Ok(decoded)
    }

    /// POST with an empty body. The response body is ignored, only the
    /// status code matters.
    async fn post_request_no_response(&self, endpoint: &str) -> Result<(), BackendError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl BotBackend for BackendClient {
    async fn status(&self) -> Result<BotStatus, BackendError> {
        self.get_request("/status").await
    }

    async fn logs(&self) -> Result<Vec<String>, BackendError> {
        let response: LogsResponse = self.get_request("/logs").await?;
        Ok(response.logs)
    }

    async fn chart_data(&self) -> Result<ChartData, BackendError> {
        self.get_request("/chart-data").await
    }

    async fn start_bot(&self) -> Result<(), BackendError> {
        self.post_request_no_response("/start").await
    }

    async fn stop_bot(&self) -> Result<(), BackendError> {
        self.post_request_no_response("/stop").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_base_and_endpoint() {
        let client = BackendClient::new(Environment::from_base_url("http://127.0.0.1:8000/"));
        assert_eq!(client.build_url("/status"), "http://127.0.0.1:8000/status");
        assert_eq!(client.build_url("logs"), "http://127.0.0.1:8000/logs");
    }
}
