//! Runtime configuration, read from an optional TOML file.

use crate::debounce::DEFAULT_DEBOUNCE;
use crate::error::Result;
use crate::loader::{DEFAULT_DATA_LOCATION, DEFAULT_FETCH_TIMEOUT, DatasetLoader, Source};
use crate::navigation::{DEFAULT_PLAYER_PAGE, DEFAULT_SEASON, DEFAULT_TEAM_PAGE, Navigator};
use crate::search::{MAX_PLAYER_SUGGESTIONS, MAX_TEAM_SUGGESTIONS, SuggestLimits};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Every field has a default, so an empty file (or no file) is a valid config.
///
/// ```toml
/// data = "https://stats.example.com/search_data.json"
/// season = "2026"
/// debounce_ms = 200
/// fetch_timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// URL or file path of the search data document.
    pub data: String,
    pub season: String,
    pub player_page: String,
    pub team_page: String,
    pub debounce_ms: u64,
    pub fetch_timeout_secs: u64,
    pub max_players: usize,
    pub max_teams: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA_LOCATION.to_string(),
            season: DEFAULT_SEASON.to_string(),
            player_page: DEFAULT_PLAYER_PAGE.to_string(),
            team_page: DEFAULT_TEAM_PAGE.to_string(),
            debounce_ms: u64::try_from(DEFAULT_DEBOUNCE.as_millis()).unwrap_or(200),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
            max_players: MAX_PLAYER_SUGGESTIONS,
            max_teams: MAX_TEAM_SUGGESTIONS,
        }
    }
}

impl Config {
    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Failed to parse config TOML")?;
        if config.debounce_ms == 0 {
            tracing::warn!("debounce_ms is 0; every keystroke will be evaluated");
        }
        Ok(config)
    }

    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Configured caps, never above the defaults: the config can only lower them.
    pub fn limits(&self) -> SuggestLimits {
        SuggestLimits {
            players: self.max_players.min(MAX_PLAYER_SUGGESTIONS),
            teams: self.max_teams.min(MAX_TEAM_SUGGESTIONS),
        }
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(&self.season, &self.player_page, &self.team_page)
    }

    pub fn loader(&self) -> DatasetLoader<Source> {
        DatasetLoader::with_timeout(Source::from_location(&self.data), self.fetch_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, Player, Team};
    use crate::search::{Query, suggest_with_limits};

    #[test]
    fn empty_file_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.debounce(), Duration::from_millis(200));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
        assert_eq!(config.limits(), SuggestLimits::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let config = Config::from_toml_str(
            r#"
            data = "https://stats.example.com/search_data.json"
            season = "2025"
            max_players = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.season, "2025");
        assert_eq!(config.limits().players, 3);
        assert_eq!(config.limits().teams, MAX_TEAM_SUGGESTIONS);
        assert!(matches!(config.loader().source(), Source::Http(_)));
    }

    #[test]
    fn limits_cannot_exceed_default_caps() {
        let config = Config::from_toml_str("max_players = 20\nmax_teams = 50").unwrap();
        assert_eq!(config.limits(), SuggestLimits::default());

        let players = (0..12)
            .map(|i| Player::new(format!("bb-{i}"), format!("Carter {i}")))
            .collect();
        let teams = (0..7).map(|i| Team::new(format!("Harbor {i}"))).collect();
        let dataset = Dataset::new(players, teams);
        let found = suggest_with_limits(&Query::new("ar"), &dataset, config.limits());
        assert_eq!(found.players.len(), MAX_PLAYER_SUGGESTIONS);
        assert_eq!(found.teams.len(), MAX_TEAM_SUGGESTIONS);

        let config = Config::from_toml_str("max_players = 3\nmax_teams = 0").unwrap();
        assert_eq!(config.limits(), SuggestLimits { players: 3, teams: 0 });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("rosterdex.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
