//! Shared clap argument types for the curio subcommands.

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum AddItem {
    /// Add a movie
    Movie {
        /// Title of the movie
        name: String,

        /// Release year
        #[arg(short, long)]
        year: u32,

        /// Genre (e.g. Sci-Fi, Drama)
        #[arg(short, long)]
        genre: String,

        /// Director of the movie
        #[arg(short, long)]
        director: String,
    },

    /// Add a game
    Game {
        /// Title of the game
        name: String,

        /// Release year
        #[arg(short, long)]
        year: u32,

        /// Genre (e.g. Platformer, RPG)
        #[arg(short, long)]
        genre: String,

        /// Studio that made the game
        #[arg(short, long)]
        studio: String,
    },

    /// Add a book
    Book {
        /// Title of the book
        name: String,

        /// Publication year
        #[arg(short, long)]
        year: u32,

        /// Genre (e.g. Sci-Fi, History)
        #[arg(short, long)]
        genre: String,

        /// Publisher of the book
        #[arg(short, long)]
        publisher: String,
    },
}

/// Arguments for `curio edit`. Omitted flags keep the current value; the
/// variant-specific flag must match the entry's kind.
#[derive(Args)]
pub(crate) struct EditArgs {
    /// Entry id (as printed by 'curio list')
    pub(crate) id: u64,

    /// New name
    #[arg(long)]
    pub(crate) name: Option<String>,

    /// New year
    #[arg(long)]
    pub(crate) year: Option<u32>,

    /// New genre
    #[arg(long)]
    pub(crate) genre: Option<String>,

    /// New director (movie entries only)
    #[arg(long)]
    pub(crate) director: Option<String>,

    /// New studio (game entries only)
    #[arg(long)]
    pub(crate) studio: Option<String>,

    /// New publisher (book entries only)
    #[arg(long)]
    pub(crate) publisher: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the saved catalogue location
    Show,

    /// Save a catalogue location as the default
    Set {
        /// Path to the catalogue file
        path: std::path::PathBuf,
    },

    /// Clear the saved catalogue location
    Clear,

    /// Print the settings file path
    Path,
}
