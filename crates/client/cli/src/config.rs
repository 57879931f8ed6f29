//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use battle_content::{ConfigLoader, Roster, RosterLoader};
use battle_core::{BattleConfig, Difficulty};
use runtime::RuntimeConfig;

/// Configuration required to bootstrap a battle session and the UI.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Overrides the difficulty from the config file.
    pub difficulty: Option<Difficulty>,
    /// Overrides the seed from the config file.
    pub seed: Option<u64>,
    pub pacing: Duration,
    pub event_buffer: usize,
    pub provider_timeout: Duration,
    pub roster_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            difficulty: None,
            seed: None,
            pacing: runtime.pacing,
            event_buffer: runtime.event_buffer_size,
            provider_timeout: Duration::from_secs(5),
            roster_path: None,
            config_path: None,
            session_id: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `BATTLE_DIFFICULTY` (`easy` / `medium` / `hard`)
    /// - `BATTLE_SEED`
    /// - `BATTLE_PACING_MS`
    /// - `BATTLE_EVENT_BUFFER`
    /// - `BATTLE_PROVIDER_TIMEOUT_MS`
    /// - `BATTLE_ROSTER_PATH` (RON)
    /// - `BATTLE_CONFIG_PATH` (TOML)
    /// - `BATTLE_SESSION_ID`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.difficulty = read_env::<Difficulty>("BATTLE_DIFFICULTY");
        config.seed = read_env::<u64>("BATTLE_SEED");

        if let Some(ms) = read_env::<u64>("BATTLE_PACING_MS") {
            config.pacing = Duration::from_millis(ms);
        }

        if let Some(capacity) = read_env::<usize>("BATTLE_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }

        if let Some(ms) = read_env::<u64>("BATTLE_PROVIDER_TIMEOUT_MS") {
            config.provider_timeout = Duration::from_millis(ms.max(1));
        }

        config.roster_path = read_env::<PathBuf>("BATTLE_ROSTER_PATH");
        config.config_path = read_env::<PathBuf>("BATTLE_CONFIG_PATH");
        config.session_id = env::var("BATTLE_SESSION_ID").ok().filter(|id| !id.is_empty());

        config
    }

    /// Loads the battle config and roster, falling back to built-in defaults
    /// when no file is configured. Environment overrides win over file values.
    pub fn load_content(&self) -> Result<Content> {
        let file_config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load BATTLE_CONFIG_PATH={}", path.display()))?,
            None => BattleConfig::default(),
        };

        let roster = match &self.roster_path {
            Some(path) => RosterLoader::load(path)
                .with_context(|| format!("Failed to load BATTLE_ROSTER_PATH={}", path.display()))?,
            None => Roster::builtin(),
        };

        Ok(Content {
            battle: self.apply_overrides(file_config),
            roster,
        })
    }

    fn apply_overrides(&self, mut battle: BattleConfig) -> BattleConfig {
        if let Some(difficulty) = self.difficulty {
            battle.difficulty = difficulty;
        }
        if let Some(seed) = self.seed {
            battle.seed = Some(seed);
        }
        battle
    }

    /// Runtime settings for a session at the difficulty picked on the title screen.
    pub fn runtime_config(&self, battle: &BattleConfig, difficulty: Difficulty) -> RuntimeConfig {
        RuntimeConfig {
            battle: BattleConfig {
                difficulty,
                ..battle.clone()
            },
            pacing: self.pacing,
            event_buffer_size: self.event_buffer,
            ..RuntimeConfig::default()
        }
    }
}

/// Content resolved once at startup.
#[derive(Clone, Debug)]
pub struct Content {
    pub battle: BattleConfig,
    pub roster: Roster,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
