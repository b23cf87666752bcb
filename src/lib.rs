//! Incremental player and team search suggestions.
//!
//! The [`DatasetLoader`] fetches the roster once; [`search`] turns a query into
//! capped suggestions or an exact [`Destination`]; [`SearchSession`] drives the
//! dropdown's keyboard and mouse interactions on top of both.

pub mod cli;
pub mod config;
pub mod console;
pub mod debounce;
pub mod error;
pub mod loader;
pub mod model;
pub mod navigation;
pub mod render;
pub mod search;
pub mod session;
pub mod tracing;

pub use config::Config;
pub use debounce::Debouncer;
pub use error::LoadError;
pub use loader::{DataSource, DatasetLoader, FileSource, HttpSource, Source};
pub use model::{Dataset, DatasetStats, Player, SearchDocument, Team};
pub use navigation::{Destination, Navigator};
pub use search::{Query, Suggestion, Suggestions, resolve, resolve_player, resolve_team, suggest};
pub use session::{Effect, Key, Phase, SearchSession};
