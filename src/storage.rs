//! Browser local storage backing for favorites

use calendar_core::{FavoritesError, FavoritesStore};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;
    window.local_storage().ok().flatten()
}

/// One local storage entry. Storage that is missing or blocked reports
/// `Unavailable` instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl FavoritesStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, FavoritesError> {
        let storage = local_storage().ok_or(FavoritesError::Unavailable)?;
        storage
            .get_item(self.key)
            .map_err(|e| FavoritesError::Read(format!("{:?}", e)))
    }

    fn write(&self, value: &str) -> Result<(), FavoritesError> {
        let storage = local_storage().ok_or(FavoritesError::Unavailable)?;
        storage
            .set_item(self.key, value)
            .map_err(|e| FavoritesError::Write(format!("{:?}", e)))
    }
}
