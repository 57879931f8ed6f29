//! UI rendering entry point composing all widgets per screen.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::widgets;
use crate::state::{BattleView, Screen};

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub screen: &'a Screen,
    pub battle: Option<&'a BattleView>,
}

/// Render the current screen.
///
/// The topic modal is an overlay: it draws on top of the running battle when
/// one exists, or on top of a blank title backdrop before the first battle.
pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    match ctx.screen {
        Screen::Title(title) => widgets::title::render(frame, frame.area(), title),
        Screen::TopicModal(modal) => {
            match ctx.battle {
                Some(view) => render_battle(frame, view),
                None => widgets::title::render_backdrop(frame, frame.area()),
            }
            let area = centered_rect(60, 40, frame.area());
            widgets::topic_modal::render(frame, area, modal);
        }
        Screen::Battle => {
            if let Some(view) = ctx.battle {
                render_battle(frame, view);
            }
        }
    }
}

fn render_battle(frame: &mut Frame, view: &BattleView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Topic header
            Constraint::Length(6), // Combatants
            Constraint::Length(3), // Narration
            Constraint::Min(6),    // Moves + log
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], view);

    let sides = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    widgets::combatant::render_player(frame, sides[0], view);
    widgets::combatant::render_enemy(frame, sides[1], view);

    widgets::log::render_narration(frame, chunks[2], view);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[3]);
    widgets::moves::render(frame, body[0], view);
    widgets::log::render_history(frame, body[1], view);

    widgets::footer::render(frame, chunks[4], view);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
