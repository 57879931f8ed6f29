//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BattleConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::Difficulty;

    #[test]
    fn parses_difficulty_and_seed() {
        let config = ConfigLoader::parse("difficulty = \"hard\"\nseed = 42\n").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn difficulty_ignores_case() {
        let config = ConfigLoader::parse("difficulty = \"Hard\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);

        let config = ConfigLoader::parse("difficulty = \"EASY\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let err = ConfigLoader::parse("difficulty = \"nightmare\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));
    }
}
