use std::path::PathBuf;

use curio_catalog::{Item, ItemKind, validate};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::EditArgs;
use crate::error::CliError;

pub(crate) fn run_edit(file: Option<PathBuf>, args: EditArgs) -> Result<(), CliError> {
    let mut store = super::open_store(file)?;

    // Clone out the current item so the mutable borrow below is free.
    let Some(current) = store.get(args.id).map(|e| e.item.clone()) else {
        log::warn!(
            "No catalogue entry with id {} (it may have been removed)",
            args.id,
        );
        return Ok(());
    };

    let updated = apply_edits(&current, &args)?;
    if updated == current {
        log::info!("No changes for [{}] {}.", args.id, current.name());
        return Ok(());
    }

    validate(&updated).map_err(|e| CliError::validation(e.to_string()))?;

    let name = updated.name().to_string();
    store.update(args.id, updated)?;
    log::info!(
        "Updated [{}] {}",
        args.id,
        name.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

/// Layer the provided flags over the current item, leaving omitted fields
/// unchanged. A variant-specific flag for a different kind is rejected.
fn apply_edits(current: &Item, args: &EditArgs) -> Result<Item, CliError> {
    let kind = current.kind();
    reject_mismatched_flag(kind, ItemKind::Movie, args.director.is_some())?;
    reject_mismatched_flag(kind, ItemKind::Game, args.studio.is_some())?;
    reject_mismatched_flag(kind, ItemKind::Book, args.publisher.is_some())?;

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| current.name().to_string());
    let year = args.year.unwrap_or(current.year());
    let genre = args
        .genre
        .clone()
        .unwrap_or_else(|| current.genre().to_string());

    Ok(match current {
        Item::Movie { director, .. } => Item::Movie {
            name,
            year,
            genre,
            director: args.director.clone().unwrap_or_else(|| director.clone()),
        },
        Item::Game { studio, .. } => Item::Game {
            name,
            year,
            genre,
            studio: args.studio.clone().unwrap_or_else(|| studio.clone()),
        },
        Item::Book { publisher, .. } => Item::Book {
            name,
            year,
            genre,
            publisher: args.publisher.clone().unwrap_or_else(|| publisher.clone()),
        },
    })
}

fn reject_mismatched_flag(
    kind: ItemKind,
    flag_kind: ItemKind,
    flag_given: bool,
) -> Result<(), CliError> {
    if flag_given && kind != flag_kind {
        return Err(CliError::validation(format!(
            "--{} applies to {} entries, but this entry is a {}",
            flag_kind.detail_label().to_lowercase(),
            flag_kind,
            kind,
        )));
    }
    Ok(())
}
