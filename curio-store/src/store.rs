//! The collection store.
//!
//! Owns the authoritative entry sequence and keeps it synchronized with the
//! catalogue file: loaded once on open, fully rewritten after every mutation.

use std::path::{Path, PathBuf};

use chrono::Utc;
use curio_catalog::{Entry, Item, ItemKind};
use thiserror::Error;

use crate::format::{self, FormatError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Format(#[from] FormatError),
    /// The stale-reference case: the targeted entry no longer exists.
    #[error("No catalogue entry with id {id}")]
    EntryNotFound { id: u64 },
}

/// In-memory catalogue mirrored to a single JSON file.
///
/// Entries are kept in insertion order. Mutations are keyed by the stable
/// entry id, never by position; removing an entry shifts later positions but
/// leaves every other id untouched.
pub struct Store {
    path: PathBuf,
    entries: Vec<Entry>,
    next_id: u64,
}

impl Store {
    /// Open the catalogue at `path`, starting empty if the file does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let file = format::read_catalogue(&path)?;
        let highest = file.entries.iter().map(|e| e.id).max().unwrap_or(0);
        // Ids must never be handed out twice, even against a hand-edited
        // file whose counter is stale or missing.
        let next_id = file.next_id.max(highest + 1);
        Ok(Self {
            path,
            entries: file.entries,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full sequence, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Append `item` as a new entry and persist. Returns the assigned id.
    ///
    /// No uniqueness check is made; duplicate names and years are permitted.
    pub fn add(&mut self, item: Item) -> Result<u64, StoreError> {
        let id = self.next_id;
        self.next_id += 1;
        let now = timestamp();
        self.entries.push(Entry {
            id,
            item,
            added_at: now.clone(),
            updated_at: now,
        });
        self.save()?;
        Ok(id)
    }

    /// Replace the item of the entry with `id` and persist.
    ///
    /// `added_at` is preserved; `updated_at` is refreshed. If no entry has
    /// that id the sequence and the file are left untouched.
    pub fn update(&mut self, id: u64, item: Item) -> Result<(), StoreError> {
        let pos = self
            .position(id)
            .ok_or(StoreError::EntryNotFound { id })?;
        let entry = &mut self.entries[pos];
        entry.item = item;
        entry.updated_at = timestamp();
        self.save()
    }

    /// Remove the entry with `id` and persist. Returns the removed entry.
    pub fn remove(&mut self, id: u64) -> Result<Entry, StoreError> {
        let pos = self
            .position(id)
            .ok_or(StoreError::EntryNotFound { id })?;
        let entry = self.entries.remove(pos);
        self.save()?;
        Ok(entry)
    }

    /// Entries of a single kind, in insertion order.
    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.item.kind() == kind)
    }

    /// Case-insensitive substring search on item name, optionally restricted
    /// to one kind. Insertion order is preserved.
    pub fn search(&self, kind: Option<ItemKind>, query: &str) -> Vec<&Entry> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| kind.is_none_or(|k| e.item.kind() == k))
            .filter(|e| e.item.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Per-kind entry counts.
    pub fn stats(&self) -> CatalogueStats {
        let mut stats = CatalogueStats::default();
        for entry in &self.entries {
            match entry.item.kind() {
                ItemKind::Movie => stats.movies += 1,
                ItemKind::Game => stats.games += 1,
                ItemKind::Book => stats.books += 1,
            }
        }
        stats.total = self.entries.len();
        stats
    }

    /// Serialize the full sequence to the catalogue file, replacing prior
    /// contents. Every mutation flushes through here before returning, so
    /// callers normally never invoke it directly.
    pub fn save(&self) -> Result<(), StoreError> {
        format::write_catalogue(&self.path, self.next_id, &self.entries)?;
        Ok(())
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
}

/// Summary statistics for the catalogue.
#[derive(Debug, Default)]
pub struct CatalogueStats {
    pub movies: usize,
    pub games: usize,
    pub books: usize,
    pub total: usize,
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
