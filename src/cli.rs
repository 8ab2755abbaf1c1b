//! Command-line interface for goal_bingo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Goal Bingo - lay out, shuffle and track a card of yearly goals
#[derive(Parser, Debug)]
#[command(name = "goal_bingo")]
#[command(about = "Build and track a bingo card of personal goals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML); defaults are used if it does not exist
    #[arg(long, global = true, default_value = "goal_bingo.toml")]
    pub config: PathBuf,

    /// Card snapshot file (JSON)
    #[arg(long, global = true, default_value = "card.json")]
    pub card: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new draft card
    New {
        /// Grid size (2-5); defaults to the configured size
        #[arg(short, long)]
        size: Option<u8>,

        /// Header text, at most one letter per column
        #[arg(long)]
        header: Option<String>,

        /// Start without a FREE cell
        #[arg(long)]
        no_free: bool,

        /// Overwrite an existing card file
        #[arg(long)]
        force: bool,
    },

    /// Print the card
    Show,

    /// Add a goal
    Add {
        /// Goal text
        content: String,

        /// Cell to place it in; a random empty cell if omitted
        #[arg(short, long)]
        position: Option<usize>,
    },

    /// Remove the goal at a cell
    Remove {
        /// Cell to clear
        position: usize,
    },

    /// Mark the goal at a cell as completed
    Complete {
        /// Cell of the goal
        position: usize,

        /// Mark as not completed instead
        #[arg(long)]
        undo: bool,
    },

    /// Change the header text
    Header {
        /// New header text
        text: String,
    },

    /// Change the grid size of an empty draft
    Resize {
        /// New grid size (2-5)
        size: u8,
    },

    /// Add a FREE cell
    EnableFree,

    /// Remove the FREE cell
    DisableFree,

    /// Move the FREE cell
    MoveFree {
        /// Target cell
        position: usize,
    },

    /// Shuffle goals across their cells
    Shuffle,

    /// Swap two cells
    Swap {
        /// First cell
        a: usize,
        /// Second cell
        b: usize,
    },

    /// List completed bingo lines
    Bingos,

    /// Lock the layout once every cell is filled
    Finalize,

    /// Copy the goals into a new draft card
    #[command(name = "clone")]
    CloneCard {
        /// File to write the new card to
        #[arg(long)]
        out: PathBuf,

        /// Grid size of the new card; defaults to the source size
        #[arg(short, long)]
        size: Option<u8>,

        /// Create the new card without a FREE cell
        #[arg(long)]
        no_free: bool,
    },
}
