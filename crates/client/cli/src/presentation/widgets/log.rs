//! Current narration line and scrolling battle log.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::BattleView;

pub fn render_narration(frame: &mut Frame, area: Rect, view: &BattleView) {
    let paragraph = Paragraph::new(Span::styled(
        view.narration.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

/// Shows the newest lines that fit, oldest at the top.
pub fn render_history(frame: &mut Frame, area: Rect, view: &BattleView) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = view.log.len().saturating_sub(visible);

    let lines: Vec<Line> = view
        .log
        .iter()
        .skip(skip)
        .map(|entry| {
            let style = if entry.starts_with("---") {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(entry.as_str(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Battle Log "),
    );

    frame.render_widget(paragraph, area);
}
