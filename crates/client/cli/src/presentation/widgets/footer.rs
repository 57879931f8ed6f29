//! Key hints for the battle screen.

use battle_core::{Phase, Side};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme;
use crate::state::BattleView;

pub fn render(frame: &mut Frame, area: Rect, view: &BattleView) {
    let mut spans = Vec::new();

    match (view.phase, view.winner) {
        (Phase::Finished, Some(winner)) => {
            let (text, color) = match winner {
                Side::Player => ("You win! ", Color::Green),
                Side::Enemy => ("You lost. ", Color::Red),
            };
            spans.push(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }
        (Phase::Choosing, _) => {
            spans.push(Span::styled("1-4", theme::key_style()));
            spans.push(Span::styled(" Attack  ", theme::hint_style()));
            spans.push(Span::styled("↑/↓ Enter", theme::key_style()));
            spans.push(Span::styled(" Select  ", theme::hint_style()));
        }
        _ => {}
    }

    spans.push(Span::styled("n", theme::key_style()));
    spans.push(Span::styled(" New topic  ", theme::hint_style()));
    spans.push(Span::styled("q", theme::key_style()));
    spans.push(Span::styled(" Quit", theme::hint_style()));

    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(spans)]).alignment(Alignment::Center),
        area,
    );
}
