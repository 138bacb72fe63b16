//! Player preferences
//!
//! Persisted separately from the best score; written on every change.

use serde::{Deserialize, Serialize};

use crate::persistence::{MUTED_KEY, Store, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Suppress all sound effects
    pub muted: bool,
}

impl Settings {
    /// Flip the mute flag, returning the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Load from the store; anything unrecognised reads as unmuted
    pub fn load(store: &impl Store) -> Self {
        let muted = match store.get(MUTED_KEY).as_deref().map(str::trim) {
            Some("1") | Some("true") => true,
            Some("0") | Some("false") | None => false,
            Some(other) => {
                log::debug!("Ignoring malformed mute flag {:?}", other);
                false
            }
        };
        Self { muted }
    }

    pub fn save(&self, store: &mut impl Store) -> Result<(), StoreError> {
        store.set(MUTED_KEY, if self.muted { "1" } else { "0" })
    }
}
