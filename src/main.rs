use anyhow::Context;
use clap::Parser;
use rosterdex::cli::{Cli, Commands};
use rosterdex::console::{Console, HELP};
use rosterdex::render::{render_html, render_text};
use rosterdex::{Config, Query, resolve, search};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    rosterdex::tracing::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(data) = cli.data {
        config.data = data;
    }
    if let Some(season) = cli.season {
        config.season = season;
    }

    let dataset = config.loader().load().await;
    dataset.log_stats();
    let navigator = config.navigator();

    match cli.command {
        Commands::Suggest { query, html } => {
            let query = Query::new(&query);
            if !query.is_searchable() {
                tracing::debug!("Query {:?} is too short to search", query.as_str());
                return Ok(());
            }
            let found = search::suggest_with_limits(&query, &dataset, config.limits());
            if html {
                println!("{}", render_html(&found, None));
            } else {
                println!("{}", render_text(&found, None));
            }
        }
        Commands::Go { query } => {
            let query = Query::new(&query);
            if let Some(destination) = resolve(&query, &dataset) {
                println!("{}", navigator.url(&destination));
            } else if query.is_searchable() {
                let found = search::suggest_with_limits(&query, &dataset, config.limits());
                println!("{}", render_text(&found, None));
            }
        }
        Commands::Stats => {
            println!("{}", dataset.stats());
        }
        Commands::Interactive => {
            eprintln!("{HELP}");
            let console = Console::new(
                &dataset,
                config.limits(),
                config.debounce(),
                navigator,
                tokio::io::stdout(),
            );
            console
                .run(BufReader::new(tokio::io::stdin()))
                .await
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}
