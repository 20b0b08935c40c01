use std::path::PathBuf;

use curio_store::StoreError;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

pub(crate) fn run_remove(file: Option<PathBuf>, id: u64) -> Result<(), CliError> {
    let mut store = super::open_store(file)?;

    match store.remove(id) {
        Ok(entry) => {
            log::info!(
                "Removed [{}] {}",
                id,
                entry
                    .item
                    .name()
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            Ok(())
        }
        Err(StoreError::EntryNotFound { .. }) => {
            log::warn!("No catalogue entry with id {id} (it may have been removed already)");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
