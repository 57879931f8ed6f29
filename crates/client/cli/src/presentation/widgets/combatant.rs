//! Name plate, health bar, and attack marker for each combatant.

use battle_core::{Phase, Side};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::presentation::theme;
use crate::state::{BattleView, CombatantView};

pub fn render_player(frame: &mut Frame, area: Rect, view: &BattleView) {
    render_side(
        frame,
        area,
        view,
        Side::Player,
        &view.player,
        &view.assets.player_sprite,
    );
}

pub fn render_enemy(frame: &mut Frame, area: Rect, view: &BattleView) {
    render_side(
        frame,
        area,
        view,
        Side::Enemy,
        &view.enemy,
        &view.assets.enemy_sprite,
    );
}

fn render_side(
    frame: &mut Frame,
    area: Rect,
    view: &BattleView,
    side: Side,
    combatant: &CombatantView,
    sprite: &str,
) {
    let attacking = matches!(
        (view.phase, side),
        (Phase::PlayerAttacking, Side::Player) | (Phase::EnemyAttacking, Side::Enemy)
    );
    let border = if view.winner == Some(side) {
        Color::Yellow
    } else if attacking {
        Color::White
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(match side {
            Side::Player => " You ",
            Side::Enemy => " Foe ",
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name and level
            Constraint::Length(1), // Health bar
            Constraint::Length(1), // Sprite
            Constraint::Min(0),    // Attack marker
        ])
        .split(inner);

    let name = Line::from(vec![
        Span::styled(
            combatant.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  Lv{}", combatant.level),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(name), rows[0]);

    let percent = combatant.health_percent();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::health_color(percent)))
        .percent(percent.min(100) as u16)
        .label(format!("HP {}/100", combatant.health));
    frame.render_widget(gauge, rows[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(sprite, Style::default().fg(Color::DarkGray))),
        rows[2],
    );

    // The marker sits on the side that was hit.
    let hit_by = view
        .last_attack
        .filter(|(attacker, _)| *attacker != side && view.phase != Phase::Choosing);
    if let Some((_, element)) = hit_by {
        let marker = Span::styled(
            format!("{} {}", theme::element_icon(element), element),
            Style::default()
                .fg(theme::element_color(element))
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Paragraph::new(marker), rows[3]);
    }
}
