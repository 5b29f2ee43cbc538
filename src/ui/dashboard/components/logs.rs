//! Bot log panel component
//!
//! Renders the newline-joined log buffer fetched from the backend,
//! tailing the most recent lines that fit the panel.

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding
    let max_lines = (area.height.saturating_sub(3)) as usize;
    let line_count = if max_lines > 0 { max_lines } else { 1 };

    let log_lines: Vec<Line> = if state.log_text.is_empty() {
        vec![Line::from("No bot logs yet")]
    } else {
        let lines: Vec<&str> = state.log_text.lines().collect();
        lines
            .iter()
            .rev()
            .take(line_count)
            .rev()
            .map(|line| Line::from(line.to_string()))
            .collect()
    };

    let logs_block = Block::default()
        .title("BOT LOGS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));

    let log_widget = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::LightGreen))
        .block(logs_block)
        .wrap(Wrap { trim: false });

    f.render_widget(log_widget, area);
}
