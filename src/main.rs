//! Goal Bingo - Unified CLI
//!
//! Builds and tracks a bingo card of personal goals stored as JSON.

use anyhow::Result;
use clap::Parser;
use goal_bingo::{App, CardStore, Cli, Settings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load_or_default(&cli.config)?.with_env_overrides()?;
    debug!(?settings, "Settings ready");

    let mut app = App::new(settings);
    let store = CardStore::new(&cli.card);
    let output = app.execute(&store, cli.command)?;
    print!("{output}");
    Ok(())
}
