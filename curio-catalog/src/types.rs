//! Catalogue item variants and the stored entry record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Item ────────────────────────────────────────────────────────────────────

/// One catalogue item: a movie, a game, or a book.
///
/// All variants share `name`, `year`, and `genre`; each adds a single
/// variant-specific field. Serialized with a `kind` tag so the variants stay
/// distinguishable in the catalogue file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Item {
    Movie {
        name: String,
        year: u32,
        genre: String,
        director: String,
    },
    Game {
        name: String,
        year: u32,
        genre: String,
        studio: String,
    },
    Book {
        name: String,
        year: u32,
        genre: String,
        publisher: String,
    },
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Movie { .. } => ItemKind::Movie,
            Self::Game { .. } => ItemKind::Game,
            Self::Book { .. } => ItemKind::Book,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Movie { name, .. } | Self::Game { name, .. } | Self::Book { name, .. } => name,
        }
    }

    pub fn year(&self) -> u32 {
        match self {
            Self::Movie { year, .. } | Self::Game { year, .. } | Self::Book { year, .. } => *year,
        }
    }

    pub fn genre(&self) -> &str {
        match self {
            Self::Movie { genre, .. } | Self::Game { genre, .. } | Self::Book { genre, .. } => {
                genre
            }
        }
    }

    /// The variant-specific field value (director, studio, or publisher).
    pub fn detail(&self) -> &str {
        match self {
            Self::Movie { director, .. } => director,
            Self::Game { studio, .. } => studio,
            Self::Book { publisher, .. } => publisher,
        }
    }

    /// Display label for the variant-specific field.
    pub fn detail_label(&self) -> &'static str {
        self.kind().detail_label()
    }
}

// ── Item Kind ───────────────────────────────────────────────────────────────

/// The three catalogue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Movie,
    Game,
    Book,
}

impl ItemKind {
    /// All kinds, in the order category views are presented.
    pub const ALL: [ItemKind; 3] = [ItemKind::Movie, ItemKind::Game, ItemKind::Book];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Game => "game",
            Self::Book => "book",
        }
    }

    /// Plural heading for category views.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Movie => "Movies",
            Self::Game => "Games",
            Self::Book => "Books",
        }
    }

    /// Display label for the variant-specific field of this kind.
    pub fn detail_label(&self) -> &'static str {
        match self {
            Self::Movie => "Director",
            Self::Game => "Studio",
            Self::Book => "Publisher",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a kind name given on the command line is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown kind '{0}' (expected movie, game, or book)")]
pub struct ParseKindError(String);

impl FromStr for ItemKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "movie" | "movies" | "film" | "films" => Ok(Self::Movie),
            "game" | "games" => Ok(Self::Game),
            "book" | "books" => Ok(Self::Book),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

// ── Entry ───────────────────────────────────────────────────────────────────

/// A stored catalogue entry: an item plus its stable identity.
///
/// `id` is assigned by the store when the entry is created and never changes,
/// so it stays valid across removals that shift positions. Timestamps are UTC
/// `YYYY-MM-DD HH:MM:SS` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    #[serde(flatten)]
    pub item: Item,
    pub added_at: String,
    pub updated_at: String,
}
