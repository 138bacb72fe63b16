//! Browser LocalStorage backend

use super::{Store, StoreError};

/// Prefix keeping our keys apart from anything else on the origin
const KEY_PREFIX: &str = "dino_run.";

/// `Store` backed by `window.localStorage`
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable - scores and settings won't persist");
        }
        Self { storage }
    }

    fn full_key(key: &str) -> String {
        format!("{KEY_PREFIX}{key}")
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()?
            .get_item(&Self::full_key(key))
            .ok()
            .flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(&Self::full_key(key), value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}
