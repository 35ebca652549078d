//! A named group of symbols that each speak a phrase.

use crate::error::BoardResult;
use crate::models::ordered_map::{self, OrderedMap};
use crate::models::page::{check_entry, normalize_text, AddOutcome, Page};
use tracing::debug;

/// One category of the board, mapping image keys to spoken text.
///
/// Keys are listed in the order they were first added.
///
/// # Examples
///
/// ```
/// use aacboard::models::{Page, SymbolCategory};
///
/// let mut food = SymbolCategory::new("food");
/// let _ = food.add_entry("img/food/fries.png", "french fries");
///
/// assert_eq!(food.select("img/food/fries.png").unwrap(), "french fries");
/// assert_eq!(food.label(), "food");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolCategory {
    /// Display name (e.g., "food", "clothing")
    name: String,
    /// Image key to spoken text
    entries: OrderedMap<String, String>,
}

impl SymbolCategory {
    /// Creates an empty category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: OrderedMap::new(),
        }
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes the category name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the spoken text for an image key without treating it as a tap.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if the image is not in this category.
    pub fn text_for(&self, image_key: &str) -> BoardResult<&str> {
        self.entries.get(image_key).map(String::as_str)
    }

    /// Removes an image and returns the text it spoke.
    ///
    /// # Errors
    ///
    /// Returns `KeyNotFound` if the image is not in this category.
    pub fn remove_entry(&mut self, image_key: &str) -> BoardResult<String> {
        let text = self.entries.remove(image_key)?;
        debug!(category = %self.name, image_key, "removed entry");
        Ok(text)
    }

    /// Returns `(image key, text)` pairs in display order.
    pub fn entries(&self) -> ordered_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Returns the number of images in the category.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the category holds no images.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Page for SymbolCategory {
    fn select(&mut self, key: &str) -> BoardResult<String> {
        self.text_for(key).map(str::to_string)
    }

    fn list_entries(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries.has_key(key)
    }

    fn add_entry(&mut self, key: &str, text: &str) -> AddOutcome {
        if let Err(reason) = check_entry(key, text) {
            debug!(category = %self.name, key, %reason, "ignored entry");
            return AddOutcome::Ignored(reason);
        }

        match self.entries.set(key.to_string(), normalize_text(text)) {
            Some(_) => AddOutcome::Updated,
            None => AddOutcome::Added,
        }
    }
}
