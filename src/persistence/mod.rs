//! Key/value persistence
//!
//! The game stores two strings: the best score and the mute flag. Reads never
//! fail (missing or malformed values fall back to defaults); writes report a
//! `StoreError` the host logs and moves on from.

use std::collections::HashMap;

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

/// Best score, as a decimal integer
pub const HIGH_SCORE_KEY: &str = "high_score";
/// Mute preference, "1" or "0"
pub const MUTED_KEY: &str = "muted";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// A string key/value store
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store (native demo and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(HIGH_SCORE_KEY), None);
        store.set(HIGH_SCORE_KEY, "12").expect("memory writes succeed");
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("12"));
    }
}
