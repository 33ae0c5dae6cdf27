use dashmap::DashMap;
use std::sync::Arc;

use crate::keygen::derive_key;

/// One stored association between a short key and its original URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_key: String,
    pub original_url: String,
}

/// Thread-safe in-memory store mapping short_key -> original_url.
///
/// Backed by a DashMap: lookups take a shared lock on one shard, inserts take
/// the exclusive lock of one shard for the duration of the insert only.
/// Clones share the same map, so a single store can be handed to every
/// request handler while tests build as many independent stores as they like.
///
/// Entries are never evicted and live as long as the last clone.
#[derive(Clone, Debug)]
pub struct ShortenerStore {
    inner: Arc<DashMap<String, String>>,
}

impl ShortenerStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Store a URL under its derived key and return the key.
    pub fn shorten(&self, url: &str) -> String {
        self.shorten_mapping(url).short_key
    }

    /// Store a URL under its derived key and return the resulting mapping.
    ///
    /// An existing entry under the same key is overwritten (last write wins).
    pub fn shorten_mapping(&self, url: &str) -> Mapping {
        let short_key = derive_key(url);

        if let Some(previous) = self.inner.insert(short_key.clone(), url.to_owned()) {
            if previous != url {
                tracing::debug!(
                    "Short key '{}' now maps to '{}' (replaced '{}')",
                    short_key,
                    url,
                    previous
                );
            }
        }

        Mapping {
            short_key,
            original_url: url.to_owned(),
        }
    }

    /// Look up a short key. Returns a clone of the original URL if present.
    pub fn resolve(&self, short_key: &str) -> Option<String> {
        self.inner.get(short_key).map(|v| v.clone())
    }

    /// Number of mappings currently stored.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for ShortenerStore {
    fn default() -> Self {
        Self::new()
    }
}
