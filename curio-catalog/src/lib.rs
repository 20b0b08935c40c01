//! Data model types for the personal media catalogue.
//!
//! This crate defines the catalogue item variants and the stored entry record
//! without any persistence dependencies. Consumers can use these types
//! directly for display, or pass them to `curio-store` for persistence.

pub mod types;
pub mod validate;

pub use types::{Entry, Item, ItemKind, ParseKindError};
pub use validate::{ValidationError, validate};
