//! Title screen with difficulty selection.

use battle_core::Difficulty;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::presentation::theme;
use crate::state::TitleState;

pub fn render(frame: &mut Frame, area: Rect, title: &TitleState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Menu
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_banner(frame, chunks[0]);
    render_menu(frame, chunks[1], title.difficulty);
    render_footer(frame, chunks[2]);
}

/// Banner only, used behind the topic modal before the first battle.
pub fn render_backdrop(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);
    render_banner(frame, chunks[0]);
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled("POCKET MONSTERS", theme::title_style())]),
        Line::from(vec![Span::styled(
            "Topic Battles",
            Style::default().fg(Color::Gray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(banner, area);
}

fn render_menu(frame: &mut Frame, area: Rect, selected: Difficulty) {
    let mut options = vec![Span::raw("  ")];
    for difficulty in Difficulty::iter() {
        let label = format!(" {} ", difficulty.label());
        let style = if difficulty == selected {
            Style::default()
                .fg(Color::Black)
                .bg(theme::difficulty_color(difficulty))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        options.push(Span::styled(label, style));
        options.push(Span::raw("  "));
    }

    let menu = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "▶ 1 vs AI",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Difficulty",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(options),
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("Enemy damage x{:.1}", selected.multiplier()),
            Style::default().fg(Color::DarkGray),
        )]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" New Battle ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(menu, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("←/→", theme::key_style()),
            Span::styled(" Difficulty  ", theme::hint_style()),
            Span::styled("Enter", theme::key_style()),
            Span::styled(" Start  ", theme::hint_style()),
            Span::styled("q/Esc", theme::key_style()),
            Span::styled(" Quit", theme::hint_style()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(footer, area);
}
