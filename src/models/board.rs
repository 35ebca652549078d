//! The two-level symbol board and its navigation state.

use crate::error::{BoardError, BoardResult};
use crate::models::category::SymbolCategory;
use crate::models::ordered_map::{self, OrderedMap};
use crate::models::page::{
    check_entry, normalize_text, AddOutcome, IgnoredReason, Page,
};
use tracing::debug;

/// Which level of the board is being shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Navigation {
    /// Showing the top-level category symbols.
    #[default]
    Top,
    /// Showing the contents of one category.
    InCategory {
        /// Top-level key of the category being shown.
        key: String,
    },
}

/// A board of categories, each holding symbols that speak text.
///
/// Selecting a top-level symbol opens its category; selecting a symbol inside
/// the open category returns its text. [`reset`](Self::reset) goes back to the
/// top level.
///
/// # Examples
///
/// ```
/// use aacboard::models::{Page, SymbolBoard};
///
/// let mut board = SymbolBoard::new();
/// let _ = board.add_entry("img/food/plate.png", "food");
/// board.select("img/food/plate.png").unwrap();
/// let _ = board.add_entry("img/food/fries.png", "french fries");
///
/// assert_eq!(board.label(), "food");
/// assert_eq!(board.select("img/food/fries.png").unwrap(), "french fries");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolBoard {
    /// Top-level key to category
    categories: OrderedMap<String, SymbolCategory>,
    /// Transient navigation state
    navigation: Navigation,
}

impl SymbolBoard {
    /// Creates an empty board at the top level.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns to the top level.
    pub fn reset(&mut self) {
        if !self.is_at_top() {
            debug!("navigation reset to top");
        }
        self.navigation = Navigation::Top;
    }

    /// Returns the current navigation state.
    pub const fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Returns true when the top-level categories are shown.
    pub const fn is_at_top(&self) -> bool {
        matches!(self.navigation, Navigation::Top)
    }

    /// Returns the top-level key of the open category, if any.
    pub fn current_key(&self) -> Option<&str> {
        match &self.navigation {
            Navigation::Top => None,
            Navigation::InCategory { key } => Some(key),
        }
    }

    /// Returns the open category.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] at the top level.
    pub fn current_category(&self) -> BoardResult<&SymbolCategory> {
        match &self.navigation {
            Navigation::Top => Err(BoardError::InvalidState {
                operation: "current_category",
            }),
            Navigation::InCategory { key } => self.categories.get(key.as_str()),
        }
    }

    /// Returns the open category for modification.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] at the top level.
    pub fn current_category_mut(&mut self) -> BoardResult<&mut SymbolCategory> {
        match &self.navigation {
            Navigation::Top => Err(BoardError::InvalidState {
                operation: "current_category_mut",
            }),
            Navigation::InCategory { key } => self.categories.get_mut(key.as_str()),
        }
    }

    /// Looks up a category by its top-level key.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if no category is bound to `key`.
    pub fn category(&self, key: &str) -> BoardResult<&SymbolCategory> {
        self.categories.get(key)
    }

    /// Looks up a category by its top-level key for modification.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if no category is bound to `key`.
    pub fn category_mut(&mut self, key: &str) -> BoardResult<&mut SymbolCategory> {
        self.categories.get_mut(key)
    }

    /// Removes a category and everything in it.
    ///
    /// If the removed category is the open one, the board returns to the top
    /// level.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if no category is bound to `key`.
    pub fn remove_category(&mut self, key: &str) -> BoardResult<SymbolCategory> {
        let category = self.categories.remove(key)?;
        if self.current_key() == Some(key) {
            self.navigation = Navigation::Top;
        }
        debug!(key, name = category.name(), "removed category");
        Ok(category)
    }

    /// Returns `(top-level key, category)` pairs in display order.
    pub fn categories(&self) -> ordered_map::Iter<'_, String, SymbolCategory> {
        self.categories.iter()
    }

    /// Returns the number of categories.
    pub const fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Returns the number of symbols across all categories.
    pub fn entry_count(&self) -> usize {
        self.categories.values().map(SymbolCategory::len).sum()
    }

    /// Binds a new empty category under `key`, replacing any existing one.
    fn insert_category(&mut self, key: &str, name: &str) -> AddOutcome {
        if let Err(reason) = check_entry(key, name) {
            debug!(key, %reason, "ignored category");
            return AddOutcome::Ignored(reason);
        }

        match self
            .categories
            .set(key.to_string(), SymbolCategory::new(normalize_text(name)))
        {
            Some(_) => AddOutcome::Updated,
            None => AddOutcome::Added,
        }
    }
}

impl Page for SymbolBoard {
    fn select(&mut self, key: &str) -> BoardResult<String> {
        match self.navigation {
            Navigation::Top => {
                if !self.categories.has_key(key) {
                    return Err(BoardError::key_not_found(key));
                }
                debug!(key, "opened category");
                self.navigation = Navigation::InCategory {
                    key: key.to_string(),
                };
                Ok(String::new())
            }
            Navigation::InCategory { .. } => self.current_category_mut()?.select(key),
        }
    }

    fn list_entries(&self) -> Vec<String> {
        match self.current_category() {
            Ok(category) => category.list_entries(),
            Err(_) => self.categories.keys().cloned().collect(),
        }
    }

    fn label(&self) -> &str {
        self.current_category().map_or("", SymbolCategory::label)
    }

    fn contains_key(&self, key: &str) -> bool {
        match self.current_category() {
            Ok(category) => category.contains_key(key),
            Err(_) => self.categories.has_key(key),
        }
    }

    fn add_entry(&mut self, key: &str, text: &str) -> AddOutcome {
        if self.is_at_top() {
            return self.insert_category(key, text);
        }
        match self.current_category_mut() {
            Ok(category) => category.add_entry(key, text),
            Err(err) => {
                debug!(%err, key, "open category is missing");
                AddOutcome::Ignored(IgnoredReason::NoOpenCategory)
            }
        }
    }
}
