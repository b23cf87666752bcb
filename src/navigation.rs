//! Detail-page destinations and their URLs.

use serde::Serialize;

/// Default season carried on every detail-page URL.
pub const DEFAULT_SEASON: &str = "2026";
pub const DEFAULT_PLAYER_PAGE: &str = "player_dashboard.html";
pub const DEFAULT_TEAM_PAGE: &str = "team_dashboard.html";

/// What a selection or submission navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Destination {
    Player { id: String },
    Team { name: String },
}

impl Destination {
    pub fn player(id: impl Into<String>) -> Self {
        Self::Player { id: id.into() }
    }

    pub fn team(name: impl Into<String>) -> Self {
        Self::Team { name: name.into() }
    }
}

/// Builds detail-page URLs from the two page templates and a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    season: String,
    player_page: String,
    team_page: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_SEASON, DEFAULT_PLAYER_PAGE, DEFAULT_TEAM_PAGE)
    }
}

impl Navigator {
    pub fn new(
        season: impl Into<String>,
        player_page: impl Into<String>,
        team_page: impl Into<String>,
    ) -> Self {
        Self {
            season: season.into(),
            player_page: player_page.into(),
            team_page: team_page.into(),
        }
    }

    pub fn season(&self) -> &str {
        &self.season
    }

    /// URL of the page for `destination`, with the identifier percent-encoded.
    pub fn url(&self, destination: &Destination) -> String {
        let (page, key, value) = match destination {
            Destination::Player { id } => (&self.player_page, "player", id),
            Destination::Team { name } => (&self.team_page, "team", name),
        };
        format!(
            "{}?season={}&{}={}",
            page,
            urlencoding::encode(&self.season),
            key,
            urlencoding::encode(value)
        )
    }
}
