use std::path::PathBuf;

use curio_store::Store;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

pub(crate) fn run_stats(file: Option<PathBuf>) -> Result<(), CliError> {
    let path = crate::settings::resolve_catalogue_path(file);

    if !path.exists() {
        log::warn!("No catalogue found at {}", path.display());
        log::info!("Run 'curio add' to create one.");
        return Ok(());
    }

    let store = Store::open(path)?;
    let stats = store.stats();

    log::info!(
        "{}",
        "Catalogue Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  File: {}", store.path().display());
    crate::log_blank();
    log::info!("  Movies:  {:>6}", stats.movies);
    log::info!("  Games:   {:>6}", stats.games);
    log::info!("  Books:   {:>6}", stats.books);
    log::info!("  Total:   {:>6}", stats.total);
    Ok(())
}
