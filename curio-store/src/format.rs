//! The on-disk catalogue document.
//!
//! A single JSON file holds the complete ordered entry sequence together with
//! a format version and the id counter. Entries carry a `kind` tag, so the
//! file stays self-describing and readable after field additions.

use std::fs;
use std::io;
use std::path::Path;

use curio_catalog::Entry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error on {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("Catalogue parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Catalogue format version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Current catalogue file format version. Increment on incompatible changes.
pub const FORMAT_VERSION: u32 = 1;

/// The deserialized catalogue document.
///
/// `next_id` defaults to 0 for hand-edited files that omit it; the store
/// clamps it past the highest id present on load.
#[derive(Debug, Deserialize)]
pub struct CatalogueFile {
    pub version: u32,
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl CatalogueFile {
    fn empty() -> Self {
        Self {
            version: FORMAT_VERSION,
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

/// Borrowed view serialized on save, so writing never clones the sequence.
#[derive(Serialize)]
struct CatalogueDoc<'a> {
    version: u32,
    next_id: u64,
    entries: &'a [Entry],
}

/// Read the catalogue document at `path`.
///
/// A missing file is the only recognized absence condition and yields an
/// empty document; every other read, parse, or version failure is an error.
pub fn read_catalogue(path: &Path) -> Result<CatalogueFile, FormatError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CatalogueFile::empty()),
        Err(e) => {
            return Err(FormatError::Io {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let file: CatalogueFile = serde_json::from_str(&contents).map_err(|e| FormatError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    if file.version > FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion {
            found: file.version,
            supported: FORMAT_VERSION,
        });
    }

    Ok(file)
}

/// Serialize the full entry sequence to `path`, replacing prior contents.
///
/// The document is written to a temporary file and renamed into place, so a
/// failed write never leaves a truncated catalogue behind.
pub fn write_catalogue(path: &Path, next_id: u64, entries: &[Entry]) -> Result<(), FormatError> {
    let io_error = |e: io::Error| FormatError::Io {
        path: path.display().to_string(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let doc = CatalogueDoc {
        version: FORMAT_VERSION,
        next_id,
        entries,
    };
    let serialized = serde_json::to_string_pretty(&doc).map_err(|e| FormatError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serialized).map_err(io_error)?;
    fs::rename(&tmp, path).map_err(io_error)?;

    Ok(())
}
