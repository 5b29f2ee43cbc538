//! Dashboard price chart component
//!
//! Plots the polled price series as a line chart. The x axis is the point
//! index; labels come from the timestamp series, which is index-aligned
//! with the prices.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

pub fn render_chart(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("PRICE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if state.chart.is_empty() {
        let placeholder = Paragraph::new(vec![Line::from("Waiting for chart data...")])
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let points: Vec<(f64, f64)> = state
        .chart
        .prices
        .iter()
        .enumerate()
        .map(|(i, price)| (i as f64, *price))
        .collect();

    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let (y_min, y_max) = y_bounds(&state.chart.prices);

    let x_labels = x_axis_labels(&state.chart.timestamps);
    let y_labels = vec![
        Span::raw(format!("{:.2}", y_min)),
        Span::raw(format!("{:.2}", (y_min + y_max) / 2.0)),
        Span::raw(format!("{:.2}", y_max)),
    ];

    let dataset = Dataset::default()
        .name("Price")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightCyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(x_labels)
                .bounds([0.0, x_max]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .labels(y_labels)
                .bounds([y_min, y_max]),
        );

    f.render_widget(chart, area);
}

/// Pad the price range by 5% so the line doesn't hug the borders. A flat
/// series still gets a non-zero range.
fn y_bounds(prices: &[f64]) -> (f64, f64) {
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let padding = ((max - min) * 0.05).max(0.5);
    (min - padding, max + padding)
}

/// First, middle, and last timestamps as x-axis labels.
fn x_axis_labels(timestamps: &[String]) -> Vec<Span<'_>> {
    match timestamps.len() {
        0 => Vec::new(),
        1 => vec![Span::raw(timestamps[0].as_str())],
        2 => vec![
            Span::raw(timestamps[0].as_str()),
            Span::raw(timestamps[1].as_str()),
        ],
        n => vec![
            Span::raw(timestamps[0].as_str()),
            Span::raw(timestamps[n / 2].as_str()),
            Span::raw(timestamps[n - 1].as_str()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_bounds_pad_the_price_range() {
        let (min, max) = y_bounds(&[10.0, 20.0]);
        assert!(min < 10.0);
        assert!(max > 20.0);
    }

    #[test]
    fn y_bounds_handle_flat_series() {
        let (min, max) = y_bounds(&[42.0, 42.0]);
        assert!(min < max);
    }

    #[test]
    fn labels_pick_first_middle_last() {
        let timestamps: Vec<String> = (0..5).map(|i| format!("t{}", i)).collect();
        let labels = x_axis_labels(&timestamps);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].content, "t0");
        assert_eq!(labels[1].content, "t2");
        assert_eq!(labels[2].content, "t4");
    }

    #[test]
    fn labels_for_two_points_keep_both() {
        let timestamps = vec!["t1".to_string(), "t2".to_string()];
        let labels = x_axis_labels(&timestamps);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].content, "t1");
        assert_eq!(labels[1].content, "t2");
    }
}
