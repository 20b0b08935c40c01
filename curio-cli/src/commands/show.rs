use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

pub(crate) fn run_show(file: Option<PathBuf>, id: u64) -> Result<(), CliError> {
    let store = super::open_store(file)?;

    let Some(entry) = store.get(id) else {
        log::warn!("No catalogue entry with id {id} (it may have been removed)");
        return Ok(());
    };

    log::info!(
        "{} [{}]",
        entry.item.name().if_supports_color(Stdout, |t| t.bold()),
        entry.id,
    );
    log::info!("  Kind:      {}", entry.item.kind());
    log::info!("  Year:      {}", entry.item.year());
    log::info!("  Genre:     {}", entry.item.genre());
    log::info!(
        "  {:<11}{}",
        format!("{}:", entry.item.detail_label()),
        entry.item.detail(),
    );
    log::info!("  Added:     {}", entry.added_at);
    log::info!("  Updated:   {}", entry.updated_at);
    Ok(())
}
