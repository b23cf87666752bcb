//! Incremental search over the loaded dataset.
//!
//! Everything here is a pure function of a [`Query`] and a `&Dataset`: fuzzy
//! suggestions for the dropdown, and exact resolution for direct submission.

mod query;
mod resolve;
mod suggest;

pub use query::{MIN_QUERY_LEN, Query};
pub use resolve::{resolve, resolve_player, resolve_team};
pub use suggest::{
    MAX_PLAYER_SUGGESTIONS, MAX_TEAM_SUGGESTIONS, SuggestLimits, Suggestion, Suggestions, suggest,
    suggest_with_limits,
};
