//! Application state: which screen is up and what the battle looks like.

use battle_content::Roster;
use battle_core::{
    BattleConfig, BattleEvent, BattleSnapshot, CombatantSpec, Difficulty, ElementType, Move,
    Phase, Side,
};
use runtime::{BattleAssets, SessionEvent};
use strum::IntoEnumIterator;

/// Top-level screen determining input handling and UI layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Title(TitleState),
    TopicModal(TopicModal),
    Battle,
}

/// Title screen with difficulty selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleState {
    pub difficulty: Difficulty,
}

impl TitleState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn previous(&mut self) {
        self.difficulty = difficulty_cycle(self.difficulty, -1);
    }

    pub fn next(&mut self) {
        self.difficulty = difficulty_cycle(self.difficulty, 1);
    }
}

/// Free-text topic entry shown before every battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicModal {
    pub input: String,
    pub error: Option<String>,
    /// Set while a topic is being fetched from the web.
    pub loading: bool,
}

impl TopicModal {
    pub const EMPTY_TOPIC_ERROR: &'static str = "Please enter a topic";

    pub fn insert(&mut self, ch: char) {
        self.input.push(ch);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Replaces the input with a suggested topic.
    pub fn suggest(&mut self, topic: impl Into<String>) {
        self.input = topic.into();
        self.error = None;
        self.loading = false;
    }

    /// Returns the trimmed topic, or records an error when it is blank.
    pub fn submit(&mut self) -> Option<String> {
        let topic = self.input.trim();
        if topic.is_empty() {
            self.error = Some(Self::EMPTY_TOPIC_ERROR.to_owned());
            return None;
        }
        Some(topic.to_owned())
    }
}

/// Display data for one side of the battle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantView {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub moves: Vec<Move>,
}

impl CombatantView {
    fn new(spec: &CombatantSpec, health: u32) -> Self {
        Self {
            name: spec.name.clone(),
            level: spec.level,
            health,
            moves: spec.moves.clone(),
        }
    }

    pub fn health_percent(&self) -> u32 {
        self.health * 100 / BattleConfig::MAX_HEALTH
    }
}

/// Presentation copy of the battle, kept in sync by runtime events.
#[derive(Clone, Debug)]
pub struct BattleView {
    pub topic: String,
    pub description: String,
    pub assets: BattleAssets,
    pub difficulty: Difficulty,
    pub player: CombatantView,
    pub enemy: CombatantView,
    pub phase: Phase,
    pub winner: Option<Side>,
    pub narration: String,
    /// Every narration line of the session, oldest first.
    pub log: Vec<String>,
    pub epoch: u64,
    pub selected_move: usize,
    /// Side and element of the most recent attack, for the effect marker.
    pub last_attack: Option<(Side, ElementType)>,
}

impl BattleView {
    pub fn new(
        roster: &Roster,
        difficulty: Difficulty,
        topic: impl Into<String>,
        snapshot: &BattleSnapshot,
    ) -> Self {
        Self {
            topic: topic.into(),
            description: String::new(),
            assets: BattleAssets::default(),
            difficulty,
            player: CombatantView::new(&roster.player, snapshot.player_health),
            enemy: CombatantView::new(&roster.enemy, snapshot.enemy_health),
            phase: snapshot.phase,
            winner: snapshot.winner,
            narration: snapshot.narration.clone(),
            log: vec![snapshot.narration.clone()],
            epoch: snapshot.epoch,
            selected_move: 0,
            last_attack: None,
        }
    }

    /// Applies a runtime event. Returns `false` when the event was stale and ignored.
    pub fn apply(&mut self, event: &SessionEvent) -> bool {
        if event.is_stale(self.epoch) {
            return false;
        }

        match &event.event {
            BattleEvent::BattleReset { topic, epoch } => {
                self.epoch = *epoch;
                self.topic.clone_from(topic);
                self.player.health = BattleConfig::MAX_HEALTH;
                self.enemy.health = BattleConfig::MAX_HEALTH;
                self.winner = None;
                self.phase = Phase::Choosing;
                self.last_attack = None;
                self.log.push(format!("--- New battle: {} ---", topic));
            }
            BattleEvent::PhaseChanged { to, .. } => self.phase = *to,
            BattleEvent::MoveAnnounced { side, element, .. } => {
                self.last_attack = Some((*side, *element));
            }
            BattleEvent::Narration(text) => {
                self.narration.clone_from(text);
                self.log.push(text.clone());
            }
            BattleEvent::DamageDealt {
                target,
                health_after,
                ..
            } => match target {
                Side::Player => self.player.health = *health_after,
                Side::Enemy => self.enemy.health = *health_after,
            },
            BattleEvent::Fainted { .. } => {}
            BattleEvent::BattleEnded { winner } => self.winner = Some(*winner),
        }

        true
    }

    /// Overwrites battle fields from a snapshot, e.g. after missed events.
    pub fn sync(&mut self, snapshot: &BattleSnapshot) {
        self.epoch = snapshot.epoch;
        self.phase = snapshot.phase;
        self.winner = snapshot.winner;
        self.player.health = snapshot.player_health;
        self.enemy.health = snapshot.enemy_health;
        self.narration.clone_from(&snapshot.narration);
    }

    pub fn can_choose(&self) -> bool {
        self.phase == Phase::Choosing
    }

    pub fn select_previous(&mut self) {
        self.selected_move = self.selected_move.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_move + 1 < self.player.moves.len() {
            self.selected_move += 1;
        }
    }
}

/// Steps through difficulties in declaration order, wrapping around.
fn difficulty_cycle(current: Difficulty, step: isize) -> Difficulty {
    let all: Vec<Difficulty> = Difficulty::iter().collect();
    let index = all.iter().position(|d| *d == current).unwrap_or_default();
    let next = (index as isize + step).rem_euclid(all.len() as isize) as usize;
    all[next]
}
