use std::path::PathBuf;

use curio_catalog::ItemKind;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

pub(crate) fn run_list(file: Option<PathBuf>, kind: Option<ItemKind>) -> Result<(), CliError> {
    let store = super::open_store(file)?;

    if store.is_empty() {
        log::info!("Catalogue is empty.");
        return Ok(());
    }

    let kinds: Vec<ItemKind> = match kind {
        Some(k) => vec![k],
        None => ItemKind::ALL.to_vec(),
    };

    let mut first = true;
    for k in kinds {
        let entries: Vec<_> = store.of_kind(k).collect();
        if entries.is_empty() {
            if kind.is_some() {
                log::info!("No {} entries.", k);
            }
            continue;
        }

        if !first {
            crate::log_blank();
        }
        first = false;

        log::info!("{}:", k.plural().if_supports_color(Stdout, |t| t.bold()));
        for entry in entries {
            log::info!("  {}", super::format_entry(entry));
        }
    }

    Ok(())
}
