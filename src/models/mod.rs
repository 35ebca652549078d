//! Data models for symbol boards.
//!
//! This module contains the ordered map every lookup is built on, the
//! category and board types, and the page trait they share. Models are
//! independent of file formats and front ends.

pub mod board;
pub mod category;
pub mod ordered_map;
pub mod page;

// Re-export all model types
pub use board::{Navigation, SymbolBoard};
pub use category::SymbolCategory;
pub use ordered_map::{OrderedMap, DEFAULT_CAPACITY};
pub use page::{normalize_text, AddOutcome, IgnoredReason, Page};
