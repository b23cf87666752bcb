use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rosterdex")]
#[command(about = "Search suggestions over a player and team roster", long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// URL or file path of the search data document
    #[arg(short, long, global = true)]
    pub data: Option<String>,

    /// Season carried on detail-page URLs
    #[arg(short, long, global = true)]
    pub season: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the suggestion list for a query
    Suggest {
        query: String,
        /// Print the HTML fragment instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// Resolve a query as a direct search: navigate on an exact match, else suggest
    Go { query: String },
    /// Print dataset statistics
    Stats,
    /// Drive a search session from stdin
    Interactive,
}
