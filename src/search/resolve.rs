//! Exact-match resolution for direct submission.

use super::Query;
use crate::model::{Dataset, Player, Team};
use crate::navigation::Destination;

/// First player whose name or id equals `query`, ignoring case.
pub fn resolve_player<'a>(query: &Query, dataset: &'a Dataset) -> Option<&'a Player> {
    let needle = query.as_str();
    dataset
        .players()
        .iter()
        .find(|p| p.name.to_lowercase() == needle || p.id.to_lowercase() == needle)
}

/// First team whose name equals `query`, ignoring case.
pub fn resolve_team<'a>(query: &Query, dataset: &'a Dataset) -> Option<&'a Team> {
    let needle = query.as_str();
    dataset
        .teams()
        .iter()
        .find(|t| t.name.to_lowercase() == needle)
}

/// Resolve a submitted query: an exact player match wins over an exact team match.
pub fn resolve(query: &Query, dataset: &Dataset) -> Option<Destination> {
    if query.is_empty() {
        return None;
    }

    if let Some(player) = resolve_player(query, dataset) {
        return Some(Destination::player(&player.id));
    }

    resolve_team(query, dataset).map(|team| Destination::team(&team.name))
}
