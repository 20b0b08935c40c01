pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod list;
pub(crate) mod remove;
pub(crate) mod search;
pub(crate) mod show;
pub(crate) mod stats;

pub(crate) use add::run_add;
pub(crate) use config::run_config;
pub(crate) use edit::run_edit;
pub(crate) use list::run_list;
pub(crate) use remove::run_remove;
pub(crate) use search::run_search;
pub(crate) use show::run_show;
pub(crate) use stats::run_stats;

use std::path::PathBuf;

use curio_catalog::Entry;
use curio_store::Store;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

/// Open the store at the resolved catalogue path.
pub(crate) fn open_store(file_override: Option<PathBuf>) -> Result<Store, CliError> {
    let path = crate::settings::resolve_catalogue_path(file_override);
    Ok(Store::open(path)?)
}

/// One-line rendering used by list and search views.
pub(crate) fn format_entry(entry: &Entry) -> String {
    format!(
        "[{}] {} ({})  {}  {}: {}",
        entry.id,
        entry
            .item
            .name()
            .if_supports_color(Stdout, |t| t.bold()),
        entry.item.year(),
        entry
            .item
            .genre()
            .if_supports_color(Stdout, |t| t.cyan()),
        entry.item.detail_label(),
        entry.item.detail(),
    )
}
