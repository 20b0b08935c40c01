use std::path::PathBuf;

use curio_catalog::{Item, validate};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::AddItem;
use crate::error::CliError;

pub(crate) fn run_add(file: Option<PathBuf>, args: AddItem) -> Result<(), CliError> {
    let item = match args {
        AddItem::Movie {
            name,
            year,
            genre,
            director,
        } => Item::Movie {
            name,
            year,
            genre,
            director,
        },
        AddItem::Game {
            name,
            year,
            genre,
            studio,
        } => Item::Game {
            name,
            year,
            genre,
            studio,
        },
        AddItem::Book {
            name,
            year,
            genre,
            publisher,
        } => Item::Book {
            name,
            year,
            genre,
            publisher,
        },
    };

    // Reject the submission before anything touches the store.
    validate(&item).map_err(|e| CliError::validation(e.to_string()))?;

    let name = item.name().to_string();
    let kind = item.kind();
    let mut store = super::open_store(file)?;
    let id = store.add(item)?;

    log::info!(
        "Added {} {} [{}]",
        kind,
        name.if_supports_color(Stdout, |t| t.bold()),
        id,
    );
    Ok(())
}
