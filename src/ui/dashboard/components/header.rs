//! Dashboard header component
//!
//! Renders the title and the bot status line

use super::super::state::{ConnectionState, DashboardState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and status line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("TRADING BOT DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let status_color = if state.running {
        Color::LightGreen
    } else {
        Color::LightRed
    };
    let mut spans = vec![
        Span::raw("Status: "),
        Span::styled(
            state.status_text(),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    match state.connection {
        ConnectionState::Degraded { since } => {
            spans.push(Span::styled(
                format!("  (stale data - {}s)", since.elapsed().as_secs()),
                Style::default().fg(Color::LightYellow),
            ));
        }
        ConnectionState::Unknown => {
            spans.push(Span::styled(
                "  (connecting...)",
                Style::default().fg(Color::DarkGray),
            ));
        }
        ConnectionState::Connected => {}
    }

    spans.push(Span::styled(
        format!("  |  Backend: {}", state.environment),
        Style::default().fg(Color::LightBlue),
    ));

    let uptime = state.start_time.elapsed();
    let uptime_text = if uptime.as_secs() >= 3600 {
        format!(
            "  |  Uptime: {}h {}m {}s",
            uptime.as_secs() / 3600,
            (uptime.as_secs() % 3600) / 60,
            uptime.as_secs() % 60
        )
    } else {
        format!(
            "  |  Uptime: {}m {}s",
            uptime.as_secs() / 60,
            uptime.as_secs() % 60
        )
    };
    spans.push(Span::styled(
        uptime_text,
        Style::default().fg(Color::LightCyan),
    ));

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
