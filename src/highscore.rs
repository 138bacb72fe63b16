//! Best score
//!
//! Read once at startup, replaced only when a run ends with a better score.

use serde::{Deserialize, Serialize};

use crate::persistence::{HIGH_SCORE_KEY, Store, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Record a finished run's score. Returns true if it is a new best.
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load from the store; missing or malformed values read as 0
    pub fn load(store: &impl Store) -> Self {
        let Some(raw) = store.get(HIGH_SCORE_KEY) else {
            return Self::default();
        };
        match raw.trim().parse::<u64>() {
            Ok(best) => {
                log::info!("Loaded high score {}", best);
                Self { best }
            }
            Err(_) => {
                log::debug!("Ignoring malformed high score {:?}", raw);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl Store) -> Result<(), StoreError> {
        store.set(HIGH_SCORE_KEY, &self.best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_submit() {
        let mut hs = HighScore::new(50);
        assert!(hs.submit(75));
        assert_eq!(hs.best, 75);
        assert!(!hs.submit(30));
        assert!(!hs.submit(75));
        assert_eq!(hs.best, 75);
    }

    #[test]
    fn test_load_defaults() {
        let mut store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best, 0);

        for bad in ["", "abc", "-5", "12.5"] {
            store.set(HIGH_SCORE_KEY, bad).unwrap();
            assert_eq!(HighScore::load(&store).best, 0, "value {bad:?}");
        }
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        HighScore::new(1234).save(&mut store).unwrap();
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("1234"));
        assert_eq!(HighScore::load(&store), HighScore::new(1234));
    }
}
