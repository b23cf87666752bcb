//! Players, teams, and the immutable dataset they are loaded into.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Number of sample entries included in [`DatasetStats`].
const STATS_SAMPLE_LEN: usize = 5;

/// A player entry. Identity is `id`, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A team entry. Identity is `name`, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Wire shape of the search data resource.
///
/// Both lists default to empty when absent; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchDocument {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// The loaded collection of players and teams.
///
/// Built once and never mutated afterwards; callers share it as `Arc<Dataset>`
/// and pass `&Dataset` into the search functions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    players: Vec<Player>,
    teams: Vec<Team>,
    loaded: bool,
}

impl Dataset {
    /// The value used before a successful load, and after a failed one.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a loaded dataset from a parsed document.
    ///
    /// Entries keep their document order. Case-insensitive duplicate identities
    /// are kept (the first one wins exact resolution) and reported once.
    pub fn from_document(document: SearchDocument) -> Self {
        let dataset = Self {
            players: document.players,
            teams: document.teams,
            loaded: true,
        };
        dataset.warn_duplicates();
        dataset
    }

    /// Shorthand for building a loaded dataset in code.
    pub fn new(players: Vec<Player>, teams: Vec<Team>) -> Self {
        Self::from_document(SearchDocument { players, teams })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Whether the dataset came from a successful load.
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn player_ids(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn team_names(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.name.as_str()).collect()
    }

    /// Snapshot of the dataset for diagnostics.
    pub fn stats(&self) -> DatasetStats<'_> {
        DatasetStats {
            loaded: self.loaded,
            player_count: self.players.len(),
            team_count: self.teams.len(),
            sample_players: &self.players[..self.players.len().min(STATS_SAMPLE_LEN)],
            sample_teams: &self.teams[..self.teams.len().min(STATS_SAMPLE_LEN)],
            player_ids: self.player_ids(),
        }
    }

    /// Emit the statistics dump at debug level.
    pub fn log_stats(&self) {
        let stats = self.stats();
        let status = if stats.loaded { "Loaded" } else { "Not Loaded" };
        tracing::debug!(
            status,
            players = stats.player_count,
            teams = stats.team_count,
            "Search data status"
        );
        tracing::debug!("Sample players: {:?}", stats.sample_players);
        tracing::debug!("Sample teams: {:?}", stats.sample_teams);
        tracing::debug!("All player IDs: {:?}", stats.player_ids);
    }

    fn warn_duplicates(&self) {
        let mut seen = AHashSet::with_capacity(self.players.len());
        let dup_players = self
            .players
            .iter()
            .filter(|p| !seen.insert(p.id.to_lowercase()))
            .count();

        let mut seen = AHashSet::with_capacity(self.teams.len());
        let dup_teams = self
            .teams
            .iter()
            .filter(|t| !seen.insert(t.name.to_lowercase()))
            .count();

        if dup_players > 0 || dup_teams > 0 {
            tracing::warn!(
                duplicate_players = dup_players,
                duplicate_teams = dup_teams,
                "Search data contains duplicate identities; first entry wins exact matches"
            );
        }
    }
}

/// Diagnostic view over a [`Dataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetStats<'a> {
    pub loaded: bool,
    pub player_count: usize,
    pub team_count: usize,
    pub sample_players: &'a [Player],
    pub sample_teams: &'a [Team],
    pub player_ids: Vec<&'a str>,
}

impl std::fmt::Display for DatasetStats<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Search Data Status: {}",
            if self.loaded { "Loaded" } else { "Not Loaded" }
        )?;
        writeln!(f, "Total Players: {}", self.player_count)?;
        writeln!(f, "Total Teams: {}", self.team_count)?;

        let players: Vec<_> = self
            .sample_players
            .iter()
            .map(|p| format!("{} ({})", p.name, p.id))
            .collect();
        writeln!(f, "Sample Players: {}", players.join(", "))?;

        let teams: Vec<_> = self.sample_teams.iter().map(|t| t.name.as_str()).collect();
        writeln!(f, "Sample Teams: {}", teams.join(", "))?;
        write!(f, "All Player IDs: {}", self.player_ids.join(", "))
    }
}
