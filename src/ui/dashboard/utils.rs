//! Dashboard utility functions

use crate::events::Worker;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::Commander => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM:SS from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..8) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("ConnectTimeout") {
        return "Connection timeout - retrying next tick".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("TimedOut") {
        return "Request timed out - retrying next tick".to_string();
    }
    if msg.contains("Reqwest error") {
        return "Network error - retrying next tick".to_string();
    }
    msg.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_drops_year() {
        assert_eq!(
            format_compact_timestamp("2026-08-30 14:05:59"),
            "08-30 14:05:59"
        );
    }

    #[test]
    fn compact_timestamp_falls_back_on_garbage() {
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn reqwest_errors_are_cleaned() {
        assert_eq!(
            clean_http_error_message("Reqwest error: error sending request (ConnectTimeout)"),
            "Connection timeout - retrying next tick"
        );
        assert_eq!(
            clean_http_error_message("Failed to fetch logs"),
            "Failed to fetch logs"
        );
    }
}
