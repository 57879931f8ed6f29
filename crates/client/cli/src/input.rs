//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Commands available on the title screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleCommand {
    PreviousDifficulty,
    NextDifficulty,
    Start,
    Quit,
    None,
}

/// Commands available while the topic modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalCommand {
    Insert(char),
    Backspace,
    Submit,
    RandomTopic,
    WebTopic,
    Cancel,
    None,
}

/// Commands available on the battle screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleCommand {
    /// Use the move in the given slot (0-based).
    UseMove(usize),
    CursorUp,
    CursorDown,
    UseSelected,
    NewTopic,
    Quit,
    None,
}

pub fn title_command(key: KeyEvent) -> TitleCommand {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            TitleCommand::PreviousDifficulty
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            TitleCommand::NextDifficulty
        }
        KeyCode::Enter | KeyCode::Char(' ') => TitleCommand::Start,
        KeyCode::Esc | KeyCode::Char('q') => TitleCommand::Quit,
        _ => TitleCommand::None,
    }
}

/// Text entry takes every printable key, so suggestions live on Ctrl chords.
pub fn modal_command(key: KeyEvent) -> ModalCommand {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') if ctrl => ModalCommand::RandomTopic,
        KeyCode::Char('w') if ctrl => ModalCommand::WebTopic,
        KeyCode::Char(_) if ctrl => ModalCommand::None,
        KeyCode::Char(ch) => ModalCommand::Insert(ch),
        KeyCode::Backspace => ModalCommand::Backspace,
        KeyCode::Enter => ModalCommand::Submit,
        KeyCode::Esc => ModalCommand::Cancel,
        _ => ModalCommand::None,
    }
}

pub fn battle_command(key: KeyEvent) -> BattleCommand {
    match key.code {
        KeyCode::Char(ch @ '1'..='4') => BattleCommand::UseMove(ch as usize - '1' as usize),
        KeyCode::Up | KeyCode::Char('k') => BattleCommand::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => BattleCommand::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => BattleCommand::UseSelected,
        KeyCode::Char('t') | KeyCode::Char('n') => BattleCommand::NewTopic,
        KeyCode::Esc | KeyCode::Char('q') => BattleCommand::Quit,
        _ => BattleCommand::None,
    }
}
