//! Move list with element accents and damage hints.

use battle_core::{UNSCALED_PERCENT, damage_bounds};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::presentation::theme;
use crate::state::BattleView;

pub fn render(frame: &mut Frame, area: Rect, view: &BattleView) {
    let enabled = view.can_choose();

    let items: Vec<ListItem> = view
        .player
        .moves
        .iter()
        .enumerate()
        .map(|(index, mv)| {
            let (low, high) = damage_bounds(mv.power, UNSCALED_PERCENT);
            let accent = if enabled {
                theme::element_color(mv.element)
            } else {
                Color::DarkGray
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", index + 1), theme::key_style()),
                Span::styled(
                    format!("{} ", theme::element_icon(mv.element)),
                    Style::default().fg(accent),
                ),
                Span::styled(
                    mv.name.as_str(),
                    Style::default().fg(if enabled { Color::White } else { Color::DarkGray }),
                ),
                Span::styled(
                    format!("  {} · {}-{} dmg", mv.element, low, high),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let title = if enabled {
        " Moves "
    } else {
        " Moves (waiting) "
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if enabled {
        state.select(Some(view.selected_move));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
