//! Topic entry overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::theme;
use crate::state::TopicModal;

pub fn render(frame: &mut Frame, area: Rect, modal: &TopicModal) {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::key_style()),
            Span::styled(
                modal.input.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    if modal.loading {
        lines.push(Line::from(Span::styled(
            "Generating topic from web content...",
            Style::default().fg(Color::Cyan),
        )));
    } else if let Some(error) = &modal.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", theme::key_style()),
        Span::styled(" Start battle  ", theme::hint_style()),
        Span::styled("Ctrl+R", theme::key_style()),
        Span::styled(" Random topic  ", theme::hint_style()),
        Span::styled("Ctrl+W", theme::key_style()),
        Span::styled(" Scrape web  ", theme::hint_style()),
        Span::styled("Esc", theme::key_style()),
        Span::styled(" Cancel", theme::hint_style()),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Choose a Battle Topic ")
                .title_alignment(Alignment::Center),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
