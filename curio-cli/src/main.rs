//! curio CLI
//!
//! Command-line interface for managing a personal catalogue of movies,
//! games, and books.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use curio_catalog::ItemKind;

use crate::cli_types::{AddItem, ConfigAction, EditArgs};

#[derive(Parser)]
#[command(name = "curio")]
#[command(about = "Manage a personal catalogue of movies, games, and books", long_about = None)]
struct Cli {
    /// Catalogue file to operate on (overrides the saved location)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an item to the catalogue
    Add {
        #[command(subcommand)]
        item: AddItem,
    },

    /// List catalogue entries by category
    List {
        /// Only list one kind (movie, game, or book)
        #[arg(short, long)]
        kind: Option<ItemKind>,
    },

    /// Search entries by name
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Only search one kind (movie, game, or book)
        #[arg(short, long)]
        kind: Option<ItemKind>,
    },

    /// Show all fields of one entry
    Show {
        /// Entry id (as printed by 'curio list')
        id: u64,
    },

    /// Edit fields of an existing entry
    Edit(EditArgs),

    /// Remove an entry from the catalogue
    Remove {
        /// Entry id (as printed by 'curio list')
        id: u64,
    },

    /// Show catalogue statistics
    Stats,

    /// Manage the saved catalogue location
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    init_logger();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Add { item } => commands::run_add(cli.file, item),
        Commands::List { kind } => commands::run_list(cli.file, kind),
        Commands::Search { query, kind } => commands::run_search(cli.file, &query, kind),
        Commands::Show { id } => commands::run_show(cli.file, id),
        Commands::Edit(args) => commands::run_edit(cli.file, args),
        Commands::Remove { id } => commands::run_remove(cli.file, id),
        Commands::Stats => commands::run_stats(cli.file),
        Commands::Config { action } => commands::run_config(action),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

/// All user-facing output goes through `log` so `RUST_LOG` filtering works.
/// Info-level records print as bare messages; warnings and errors keep their
/// level prefix.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{level}: {}", record.args()),
        })
        .init();
}

pub(crate) fn log_blank() {
    log::info!("");
}
