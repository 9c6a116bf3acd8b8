/// In-memory storage backend. Nothing survives the process.
use std::collections::HashMap;
use std::sync::RwLock;

use super::{validate_key, KeyValueStore, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store with slots already filled, e.g. a captured browser profile.
    pub fn with_slots<I, K, V>(slots: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            slots: RwLock::new(
                slots
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Snapshot of every slot, for assertions.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.slots
            .read()
            .map(|slots| slots.clone())
            .unwrap_or_default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let slots = self
            .slots
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut slots = self
            .slots
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
