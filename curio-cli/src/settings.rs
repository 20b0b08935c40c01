//! CLI settings (saved catalogue location).
//!
//! The settings file lives at `~/.config/curio/settings.toml` so every
//! command resolves the catalogue path the same way.

use std::io;
use std::path::{Path, PathBuf};

/// File name used when no catalogue location is configured.
pub(crate) const DEFAULT_CATALOGUE_FILE: &str = "catalogue.json";

/// Canonical path to the settings file: `~/.config/curio/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("curio").join("settings.toml")
}

/// Resolve the catalogue file path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalogue.path` in `settings.toml`
/// 3. `catalogue.json` in the current working directory
pub(crate) fn resolve_catalogue_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_catalogue_path() {
        return p;
    }
    PathBuf::from(DEFAULT_CATALOGUE_FILE)
}

/// Read `catalogue.path` from `settings.toml`, if set.
pub(crate) fn load_catalogue_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("catalogue")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the catalogue path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated settings keys are
/// preserved.
pub(crate) fn save_catalogue_path(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [catalogue] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalogue = table
        .entry("catalogue")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let cat_table = catalogue
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalogue] is not a table"))?;

    match path {
        Some(p) => {
            cat_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            cat_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}
