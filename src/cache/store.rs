// Session cache store for reading and writing cached API responses.
// Handles JSON serialization on top of a string-keyed session store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Result, RosterError};

/// A synchronous string-keyed store that lives as long as the session.
pub trait SessionStore: Send + Sync {
    /// Look up the raw stored string for `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: String) -> Result<()>;
}

/// In-memory session store, cleared when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    /// Upper bound on the total bytes of keys and values, if any.
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once `quota` bytes are in use.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Mutex::default(),
            quota: Some(quota),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(quota) = self.quota {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(RosterError::CacheWriteRejected {
                    key: key.to_string(),
                    reason: format!("session store quota of {} bytes exceeded", quota),
                });
            }
        }

        entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON cache over an optional session store.
///
/// A detached cache has no store bound: every read returns the fallback and
/// every write is a no-op.
#[derive(Clone, Default)]
pub struct SessionCache {
    store: Option<Arc<dyn SessionStore>>,
}

impl SessionCache {
    /// Create a cache backed by `store`.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Create a cache with no session store available.
    pub fn detached() -> Self {
        Self { store: None }
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.store.is_some()
    }

    /// Read and deserialize `key`, returning `fallback` when it is absent.
    ///
    /// A stored value that fails to deserialize is an error, never a fallback.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> Result<T> {
        let Some(store) = &self.store else {
            return Ok(fallback);
        };

        match store.get_item(key) {
            Some(raw) if !raw.is_empty() => {
                serde_json::from_str(&raw).map_err(|source| RosterError::CacheReadCorrupt {
                    key: key.to_string(),
                    source,
                })
            }
            _ => Ok(fallback),
        }
    }

    /// Serialize `value` and store it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };

        let json = serde_json::to_string(value)?;
        store.set_item(key, json)
    }
}
