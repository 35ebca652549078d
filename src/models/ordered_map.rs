//! Insertion-ordered associative container.
//!
//! [`OrderedMap`] stores its entries in a growable array of slots and finds
//! keys with a linear scan. Removing a key leaves a tombstone behind so the
//! remaining entries keep their positions; tombstones are dropped the next
//! time the backing storage is reallocated.

use crate::error::{BoardError, BoardResult};
use std::borrow::Borrow;
use std::fmt;

/// Number of slots allocated for a new map.
pub const DEFAULT_CAPACITY: usize = 16;

type Slot<K, V> = Option<(K, V)>;

/// A map from unique keys to values that remembers insertion order.
///
/// Iteration yields entries in the order their keys were first inserted.
/// Updating an existing key replaces its value in place. A key that is
/// removed and inserted again moves to the end.
///
/// # Examples
///
/// ```
/// use aacboard::models::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("b", 2);
/// map.set("a", 1);
/// map.set("b", 20);
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("b"), Ok(&20));
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    /// Occupied slots and tombstones, in insertion order.
    slots: Vec<Slot<K, V>>,
    /// Count of occupied slots.
    len: usize,
    /// Number of slots before the next reallocation.
    capacity: usize,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with room for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            len: 0,
            capacity,
        }
    }

    /// Returns the number of entries in the map.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of entries in the map.
    ///
    /// Alias of [`len`](Self::len).
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots available before the map reallocates.
    ///
    /// Capacity only ever grows.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an iterator over the keys in insertion order.
    ///
    /// The iterator borrows the map, so it can be recreated any number of
    /// times to restart enumeration.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Same as [`keys`](Self::keys).
    pub fn keys_in_order(&self) -> Keys<'_, K, V> {
        self.keys()
    }

    /// Returns an iterator over the values in key insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Removes every entry. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.len = 0;
    }

    /// Reallocates the backing storage at twice the capacity.
    ///
    /// Only occupied slots are copied over, in their current order, so any
    /// tombstones are discarded here.
    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2);
        let mut slots = Vec::with_capacity(new_capacity);
        slots.extend(self.slots.drain(..).filter(Option::is_some));
        self.slots = slots;
        self.capacity = new_capacity;
    }
}

impl<K: Eq, V> OrderedMap<K, V> {
    /// Finds the slot index of an occupied entry with the given key.
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|(existing, _)| <K as Borrow<Q>>::borrow(existing) == key)
        })
    }

    /// Inserts a value, or replaces the value of an existing key.
    ///
    /// An existing key keeps its position. A new key is appended, growing
    /// the backing storage first if every slot is in use. Returns the
    /// previous value when the key was already present.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(idx) = self.position(&key) {
            if let Some((_, existing)) = self.slots[idx].as_mut() {
                return Some(std::mem::replace(existing, value));
            }
        }

        if self.slots.len() == self.capacity {
            self.grow();
        }
        self.slots.push(Some((key, value)));
        self.len += 1;
        None
    }

    /// Returns true if the key is present.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.position(key).is_some()
    }

    /// Same as [`has_key`](Self::has_key).
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.has_key(key)
    }

    /// Returns a reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::KeyNotFound`] if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> BoardResult<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + fmt::Display,
    {
        self.position(key)
            .and_then(|idx| self.slots[idx].as_ref())
            .map(|(_, value)| value)
            .ok_or_else(|| BoardError::key_not_found(key.to_string()))
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::KeyNotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> BoardResult<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + fmt::Display,
    {
        match self.position(key) {
            Some(idx) => self.slots[idx]
                .as_mut()
                .map(|(_, value)| value)
                .ok_or_else(|| BoardError::key_not_found(key.to_string())),
            None => Err(BoardError::key_not_found(key.to_string())),
        }
    }

    /// Removes `key` and returns its value.
    ///
    /// The slot becomes a tombstone, so the other entries keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::KeyNotFound`] if the key is absent.
    pub fn remove<Q>(&mut self, key: &Q) -> BoardResult<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + fmt::Display,
    {
        let (_, value) = self
            .position(key)
            .and_then(|idx| self.slots[idx].take())
            .ok_or_else(|| BoardError::key_not_found(key.to_string()))?;
        self.len -= 1;
        Ok(value)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Eq, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`OrderedMap`], skipping tombstones.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Some((key, value)) = slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over the keys of an [`OrderedMap`].
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of an [`OrderedMap`].
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
