//! Topic banner with the generated description and arena background.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme;
use crate::state::BattleView;

pub fn render(frame: &mut Frame, area: Rect, view: &BattleView) {
    let description = if view.description.is_empty() {
        Span::styled("Summoning the arena...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(view.description.as_str(), Style::default().fg(Color::Gray))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                view.topic.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", view.difficulty.label()),
                Style::default().fg(theme::difficulty_color(view.difficulty)),
            ),
        ]),
        Line::from(description),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(format!(" Arena: {} ", view.assets.background)),
    );

    frame.render_widget(paragraph, area);
}
