//! In-memory response cache keyed by content hash.
//!
//! Generation calls are the expensive part of a request, so their results
//! are cached for the process lifetime. Keys are SHA-256 digests over the
//! request's identifying parts (endpoint, model, window size, text), which
//! keeps the map small regardless of chat length and makes identical
//! re-submissions free.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Mutex;

use sha2::{Digest, Sha256};

/// Thread-safe map from content hash to generated text.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, String>>,
}

impl ResponseCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cache key from the identifying parts of a request.
    ///
    /// Parts are fed to the hash with a separator so `["ab", "c"]` and
    /// `["a", "bc"]` produce different keys.
    pub fn key(parts: &[&str]) -> String {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }

        let digest = hasher.finalize();
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }

    /// Returns the cached value for a key, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Stores a value under a key, replacing any previous entry.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_stable() {
        let a = ResponseCache::key(&["summarize", "mistral", "0", "chat text"]);
        let b = ResponseCache::key(&["summarize", "mistral", "0", "chat text"]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_key_differs_per_part() {
        let a = ResponseCache::key(&["summarize", "mistral", "0", "chat"]);
        let b = ResponseCache::key(&["summarize", "llama3.1", "0", "chat"]);
        let c = ResponseCache::key(&["ask", "mistral", "0", "chat"]);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_separator_prevents_ambiguity() {
        let a = ResponseCache::key(&["ab", "c"]);
        let b = ResponseCache::key(&["a", "bc"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_get_and_insert() {
        let cache = ResponseCache::new();
        let key = ResponseCache::key(&["summarize", "mistral", "0", "chat"]);

        assert!(cache.get(&key).is_none());
        cache.insert(&key, "a summary");
        assert_eq!(cache.get(&key).as_deref(), Some("a summary"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let cache = ResponseCache::new();
        cache.insert("k", "first");
        cache.insert("k", "second");
        assert_eq!(cache.get("k").as_deref(), Some("second"));
        assert_eq!(cache.len(), 1);
    }
}
