use std::path::PathBuf;

use curio_catalog::ItemKind;

use crate::error::CliError;

pub(crate) fn run_search(
    file: Option<PathBuf>,
    query: &str,
    kind: Option<ItemKind>,
) -> Result<(), CliError> {
    let store = super::open_store(file)?;
    let hits = store.search(kind, query);

    if hits.is_empty() {
        log::info!("No entries matching '{query}'.");
        return Ok(());
    }

    for entry in hits {
        log::info!("{}", super::format_entry(entry));
    }
    Ok(())
}
