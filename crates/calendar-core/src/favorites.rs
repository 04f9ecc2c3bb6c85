//! Favorites set and its persistence
//!
//! Favorites are a set of game ids kept in ascending order and persisted as a
//! JSON array under a single storage key. Sorting keeps the encoding a pure
//! function of membership, so add-then-remove in any order writes back the
//! same text. Storage problems never block the page: a value that
//! cannot be read or decoded counts as "no favorites", and a failed write
//! still leaves the in-memory set updated.

#[cfg(test)]
use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::error::FavoritesError;

/// Key-value slot holding the encoded favorites
pub trait FavoritesStore {
    fn read(&self) -> Result<Option<String>, FavoritesError>;
    fn write(&self, value: &str) -> Result<(), FavoritesError>;
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self { value: RefCell::new(Some(value.into())), fail_writes: false }
    }

    /// A store that accepts reads but rejects every write
    pub fn read_only(value: Option<String>) -> Self {
        Self { value: RefCell::new(value), fail_writes: true }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
impl FavoritesStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, FavoritesError> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> Result<(), FavoritesError> {
        if self.fail_writes {
            return Err(FavoritesError::Write("store is read-only".to_string()));
        }
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Sorted, duplicate-free set of favorite game ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<i64>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the store, falling back to an empty set on any failure
    pub fn load(store: &dyn FavoritesStore) -> Self {
        match store.read().and_then(|raw| raw.map(|s| Self::decode(&s)).transpose()) {
            Ok(Some(favorites)) => {
                tracing::debug!("Loaded {} favorites", favorites.len());
                favorites
            }
            Ok(None) => Self::new(),
            Err(e) => {
                tracing::warn!("Failed to load favorites, starting empty: {}", e);
                Self::new()
            }
        }
    }

    pub fn decode(raw: &str) -> Result<Self, FavoritesError> {
        let ids: Vec<i64> =
            serde_json::from_str(raw).map_err(|e| FavoritesError::Decode(e.to_string()))?;
        let mut favorites = Self::new();
        for id in ids {
            favorites.add(id);
        }
        Ok(favorites)
    }

    pub fn encode(&self) -> String {
        // A Vec<i64> always serializes
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn save(&self, store: &dyn FavoritesStore) -> Result<(), FavoritesError> {
        store.write(&self.encode())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns false if the id was already present
    pub fn add(&mut self, id: i64) -> bool {
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(index) => {
                self.ids.insert(index, id);
                true
            }
        }
    }

    /// Returns false if the id was not present
    pub fn remove(&mut self, id: i64) -> bool {
        match self.ids.binary_search(&id) {
            Ok(index) => {
                self.ids.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Flip membership and return the new state
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Toggle, then persist. A failed write is logged and otherwise ignored.
    pub fn toggle_and_persist(&mut self, id: i64, store: &dyn FavoritesStore) -> bool {
        let now_favorite = self.toggle(id);
        if let Err(e) = self.save(store) {
            tracing::warn!("Failed to save favorites: {}", e);
        }
        now_favorite
    }
}
