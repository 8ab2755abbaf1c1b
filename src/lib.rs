//! Goal Bingo - a yearly card of personal goals
//!
//! This library wraps the [`bingo_card`] engine with everything a
//! command-line tool needs around it.
//!
//! # Architecture
//!
//! - **Settings**: TOML defaults (grid size, FREE cell, seed, cell width)
//! - **Store**: JSON snapshot of one card on disk
//! - **App**: loads a snapshot, runs one engine operation, saves the result
//! - **CLI**: `clap` commands mapping onto the engine operations
//!
//! # Example
//!
//! ```no_run
//! use goal_bingo::{App, CardStore, Command, Settings};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut app = App::new(Settings::load_or_default("goal_bingo.toml")?);
//! let store = CardStore::new("card.json");
//! let output = app.execute(&store, Command::Show)?;
//! println!("{output}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod cli;
mod settings;
mod store;

// Crate-level exports - Command dispatch
pub use app::App;

// Crate-level exports - Command-line interface
pub use cli::{Cli, Command};

// Crate-level exports - Settings
pub use settings::{ConfigError, SEED_ENV_VAR, Settings};

// Crate-level exports - Storage
pub use store::{CardStore, StoreError};

// Crate-level exports - Card engine
pub use bingo_card;
