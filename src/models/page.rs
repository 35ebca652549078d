//! The page abstraction shared by a board and a single category.

use crate::constants::CHILD_MARKER;
use crate::error::BoardResult;
use std::fmt;

/// Why an `add_entry` call was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The key was empty.
    EmptyKey,
    /// The key contained whitespace, which the board file cannot represent.
    KeyContainsWhitespace,
    /// The key started with `>`, which the board file reads as a child line.
    KeyStartsWithMarker,
    /// The text had no visible characters.
    EmptyText,
    /// The text contained a line break.
    TextContainsNewline,
    /// The board was inside a category that no longer exists.
    NoOpenCategory,
}

impl fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::EmptyKey => "key is empty",
            Self::KeyContainsWhitespace => "key contains whitespace",
            Self::KeyStartsWithMarker => "key starts with '>'",
            Self::EmptyText => "text is empty",
            Self::TextContainsNewline => "text contains a line break",
            Self::NoOpenCategory => "no category is open",
        };
        f.write_str(reason)
    }
}

/// Result of a write to a page.
///
/// Writes never fail. Input the board cannot store is reported as
/// [`AddOutcome::Ignored`] and leaves the page untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// A new key was inserted.
    Added,
    /// An existing key received a new value.
    Updated,
    /// Nothing changed.
    Ignored(IgnoredReason),
}

impl AddOutcome {
    /// Returns true unless the write was ignored.
    pub const fn is_applied(self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

/// Collapses runs of whitespace in `text` to single spaces and trims the ends.
///
/// The loader reads text back in this form, so stored text must match it.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Checks a key/text pair against what the board file format can hold.
pub fn check_entry(key: &str, text: &str) -> Result<(), IgnoredReason> {
    if key.is_empty() {
        return Err(IgnoredReason::EmptyKey);
    }
    if key.chars().any(char::is_whitespace) {
        return Err(IgnoredReason::KeyContainsWhitespace);
    }
    if key.starts_with(CHILD_MARKER) {
        return Err(IgnoredReason::KeyStartsWithMarker);
    }
    if text.contains(['\n', '\r']) {
        return Err(IgnoredReason::TextContainsNewline);
    }
    if text.trim().is_empty() {
        return Err(IgnoredReason::EmptyText);
    }
    Ok(())
}

/// A screen of selectable symbols.
///
/// Both [`SymbolCategory`](crate::models::SymbolCategory) and
/// [`SymbolBoard`](crate::models::SymbolBoard) implement this, so a front end
/// can drive either one without knowing which it holds.
pub trait Page {
    /// Selects the symbol bound to `key` and returns the text to speak.
    ///
    /// An empty string means the selection only changed what is shown.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::KeyNotFound`](crate::error::BoardError::KeyNotFound)
    /// if `key` is not on this page.
    fn select(&mut self, key: &str) -> BoardResult<String>;

    /// Returns the keys on this page in display order.
    fn list_entries(&self) -> Vec<String>;

    /// Returns the page title, or `""` when nothing is selected.
    fn label(&self) -> &str;

    /// Returns true if `key` is on this page.
    fn contains_key(&self, key: &str) -> bool;

    /// Adds or updates a symbol on this page.
    fn add_entry(&mut self, key: &str, text: &str) -> AddOutcome;
}
