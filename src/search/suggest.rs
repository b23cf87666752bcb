//! Fuzzy (substring) suggestions.

use super::Query;
use crate::model::{Dataset, Player, Team};
use crate::navigation::Destination;

/// Default cap on player suggestions.
pub const MAX_PLAYER_SUGGESTIONS: usize = 8;

/// Default cap on team suggestions.
pub const MAX_TEAM_SUGGESTIONS: usize = 5;

/// Per-kind caps applied to a suggestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestLimits {
    pub players: usize,
    pub teams: usize,
}

impl Default for SuggestLimits {
    fn default() -> Self {
        Self {
            players: MAX_PLAYER_SUGGESTIONS,
            teams: MAX_TEAM_SUGGESTIONS,
        }
    }
}

/// One row of the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion<'a> {
    Player(&'a Player),
    Team(&'a Team),
}

impl<'a> Suggestion<'a> {
    /// Display text of the row.
    pub fn label(&self) -> &'a str {
        match *self {
            Self::Player(p) => &p.name,
            Self::Team(t) => &t.name,
        }
    }

    /// Kind tag shown next to the label.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Player(_) => "Player",
            Self::Team(_) => "Team",
        }
    }

    /// Where selecting this row navigates to.
    pub fn destination(&self) -> Destination {
        match self {
            Self::Player(p) => Destination::player(&p.id),
            Self::Team(t) => Destination::team(&t.name),
        }
    }
}

/// Capped matches for one query, in dataset order.
///
/// Both lists empty is the "no results" outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions<'a> {
    pub players: Vec<&'a Player>,
    pub teams: Vec<&'a Team>,
}

impl<'a> Suggestions<'a> {
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.teams.is_empty()
    }

    /// Total number of rows, players and teams together.
    pub fn len(&self) -> usize {
        self.players.len() + self.teams.len()
    }

    /// Row at `index` in display order (players first, then teams).
    pub fn get(&self, index: usize) -> Option<Suggestion<'a>> {
        match index.checked_sub(self.players.len()) {
            None => self.players.get(index).copied().map(Suggestion::Player),
            Some(team_index) => self.teams.get(team_index).copied().map(Suggestion::Team),
        }
    }

    /// Rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = Suggestion<'a>> + '_ {
        self.players
            .iter()
            .copied()
            .map(Suggestion::Player)
            .chain(self.teams.iter().copied().map(Suggestion::Team))
    }
}

/// Suggest players and teams containing `query`, with the default caps.
pub fn suggest<'a>(query: &Query, dataset: &'a Dataset) -> Suggestions<'a> {
    suggest_with_limits(query, dataset, SuggestLimits::default())
}

/// Suggest players and teams containing `query`.
///
/// A player matches when the query is a substring of its name or its id, a team
/// when it is a substring of its name. Comparison is case-insensitive. Matches
/// keep dataset order and are truncated to `limits`; nothing is re-ranked.
pub fn suggest_with_limits<'a>(
    query: &Query,
    dataset: &'a Dataset,
    limits: SuggestLimits,
) -> Suggestions<'a> {
    let needle = query.as_str();

    let players = dataset
        .players()
        .iter()
        .filter(|p| contains_folded(&p.name, needle) || contains_folded(&p.id, needle))
        .take(limits.players)
        .collect();

    let teams = dataset
        .teams()
        .iter()
        .filter(|t| contains_folded(&t.name, needle))
        .take(limits.teams)
        .collect();

    Suggestions { players, teams }
}

/// `needle` must already be lower-cased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
