pub mod local;
pub mod memory;

/// Slot holding the JSON array of task records.
pub const TASKS_KEY: &str = "tasks";
/// Slot holding the JSON-encoded name of the displayed board.
pub const ACTIVE_BOARD_KEY: &str = "activeBoard";
/// Slot holding `"true"` / `"false"`.
pub const SIDEBAR_KEY: &str = "showSideBar";
/// Slot holding `"enabled"` / `"disabled"`.
pub const THEME_KEY: &str = "light-theme";

/// String-keyed durable store the task board persists into.
/// Implementations: LocalStorage (one file per slot), MemoryStorage (tests, ephemeral runs).
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. `Ok(None)` when it was never written.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace a slot's whole value.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).save(key, value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Slot {key} holds unreadable data: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode slot {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Slot names double as file names, so keep them to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Read and decode a JSON slot.
pub(crate) fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match storage.load(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encode and write a JSON slot.
pub(crate) fn save_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: serde::Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.save(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key(TASKS_KEY).is_ok());
        assert!(validate_key(THEME_KEY).is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc").is_err());
        assert!(validate_key("a b").is_err());
    }

    #[test]
    fn test_corrupt_slot_is_reported() {
        let storage = memory::MemoryStorage::new();
        storage.save(TASKS_KEY, "[{not json").unwrap();
        let err = load_json::<Vec<u8>, _>(&storage, TASKS_KEY).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == TASKS_KEY));
    }
}
