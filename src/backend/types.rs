//! Wire types for the bot backend API.

use serde::Deserialize;

/// Response shape of `GET /status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BotStatus {
    pub running: bool,
}

/// Response shape of `GET /logs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<String>,
}

/// Response shape of `GET /chart-data`.
///
/// The two series are index-aligned: `timestamps[i]` labels `prices[i]`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartData {
    pub prices: Vec<f64>,
    pub timestamps: Vec<String>,
}

impl ChartData {
    /// Truncates both series to the shorter length so they stay
    /// index-aligned even if the producer sends ragged data.
    pub fn into_aligned(mut self) -> Self {
        let len = self.prices.len().min(self.timestamps.len());
        self.prices.truncate(len);
        self.timestamps.truncate(len);
        self
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_deserializes_running_flag() {
        let status: BotStatus = serde_json::from_str(r#"{"running": true}"#).unwrap();
        assert!(status.running);
        let status: BotStatus = serde_json::from_str(r#"{"running": false}"#).unwrap();
        assert!(!status.running);
    }

    #[test]
    fn logs_deserialize_in_order() {
        let resp: LogsResponse = serde_json::from_str(r#"{"logs": ["a", "b", "c"]}"#).unwrap();
        assert_eq!(resp.logs, vec!["a", "b", "c"]);
        assert_eq!(resp.logs.join("\n"), "a\nb\nc");
    }

    #[test]
    fn chart_data_deserializes_aligned_series() {
        let data: ChartData =
            serde_json::from_str(r#"{"prices": [10, 11], "timestamps": ["t1", "t2"]}"#).unwrap();
        assert_eq!(data.prices, vec![10.0, 11.0]);
        assert_eq!(data.timestamps, vec!["t1", "t2"]);
    }

    #[test]
    fn into_aligned_truncates_ragged_series() {
        let data = ChartData {
            prices: vec![1.0, 2.0, 3.0],
            timestamps: vec!["t1".to_string(), "t2".to_string()],
        };
        let aligned = data.into_aligned();
        assert_eq!(aligned.prices.len(), aligned.timestamps.len());
        assert_eq!(aligned.len(), 2);
    }

    #[test]
    fn into_aligned_keeps_matching_series() {
        let data = ChartData {
            prices: vec![1.0, 2.0],
            timestamps: vec!["t1".to_string(), "t2".to_string()],
        };
        assert_eq!(data.clone().into_aligned(), data);
    }
}
