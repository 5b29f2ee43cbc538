//! Dashboard footer component
//!
//! Renders key hints; the unavailable start/stop action is dimmed.

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let dimmed = Style::default().fg(Color::DarkGray);

    let start_style = if state.can_start() { active } else { dimmed };
    let stop_style = if state.can_stop() { active } else { dimmed };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[S] Start Bot", start_style),
        Span::styled(" | ", dimmed),
        Span::styled("[X] Stop Bot", stop_style),
        Span::styled(" | ", dimmed),
        Span::styled("[Q] Quit", active),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Thick),
    );
    f.render_widget(footer, area);
}
