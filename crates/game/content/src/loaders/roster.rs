//! Roster loader.
//!
//! Loads the player and enemy monster definitions from a RON file.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::Roster;

/// Loader for battle rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `(player: CombatantSpec, enemy: CombatantSpec)`
    ///
    /// Both combatants are validated, so a roster that loads here always
    /// converts into combatants.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let roster: Roster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for spec in [&roster.player, &roster.enemy] {
            battle_core::Combatant::try_from(spec.clone()).map_err(|e| {
                anyhow::anyhow!("Invalid combatant '{}' in roster: {}", spec.name, e)
            })?;
        }

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::ElementType;

    const SMALL: &str = r#"(
        player: (name: "Pikachu", level: 3, moves: [(name: "Thunder Shock", type: electric, power: 12)]),
        enemy: (name: "Geodude", level: 4, moves: [(name: "Rock Throw", type: rock, power: 14)]),
    )"#;

    #[test]
    fn parses_roster() {
        let roster = RosterLoader::parse(SMALL).unwrap();
        assert_eq!(roster.player.name, "Pikachu");
        assert_eq!(roster.player.moves[0].element, ElementType::Electric);
        assert_eq!(roster.enemy.moves[0].power, 14);
    }

    #[test]
    fn element_names_ignore_case() {
        let capitalized = SMALL.replace("electric", "Electric").replace("rock", "ROCK");
        let roster = RosterLoader::parse(&capitalized).unwrap();
        assert_eq!(roster.player.moves[0].element, ElementType::Electric);
        assert_eq!(roster.enemy.moves[0].element, ElementType::Rock);
    }

    #[test]
    fn rejects_unknown_element() {
        let bad = SMALL.replace("rock", "lava");
        let err = RosterLoader::parse(&bad).unwrap_err();
        assert!(err.to_string().contains("Failed to parse roster RON"));
    }

    #[test]
    fn rejects_empty_move_list() {
        let bad = r#"(
            player: (name: "Ditto", level: 1, moves: []),
            enemy: (name: "Geodude", level: 4, moves: [(name: "Rock Throw", type: rock, power: 14)]),
        )"#;
        let err = RosterLoader::parse(bad).unwrap_err();
        assert!(err.to_string().contains("Ditto"));
    }
}
