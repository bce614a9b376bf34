//! Byte-bounded read cache for encoded records

use bytes::Bytes;
use lru::LruCache;

/// Least-recently-used cache of encoded records, bounded by total value size
///
/// Records larger than the bound are never cached.
#[derive(Debug)]
pub(crate) struct ReadCache {
    entries: LruCache<String, Bytes>,
    bytes: usize,
    max_bytes: usize,
}

impl ReadCache {
    pub(crate) fn new(max_bytes: usize) -> Self {
        Self {
            entries: LruCache::unbounded(),
            bytes: 0,
            max_bytes,
        }
    }

    pub(crate) fn get(&mut self, key: &str) -> Option<Bytes> {
        let hit = self.entries.get(key).cloned();
        log::trace!(
            "cell cache {} for {key}",
            if hit.is_some() { "hit" } else { "miss" }
        );
        hit
    }

    pub(crate) fn insert(&mut self, key: &str, value: Bytes) {
        self.remove(key);
        if value.len() > self.max_bytes {
            return;
        }
        while self.bytes + value.len() > self.max_bytes {
            let Some((evicted, old)) = self.entries.pop_lru() else {
                break;
            };
            log::trace!("evicting {evicted} ({} bytes) from cell cache", old.len());
            self.bytes -= old.len();
        }
        self.bytes += value.len();
        self.entries.put(key.to_string(), value);
    }

    pub(crate) fn remove(&mut self, key: &str) {
        if let Some(old) = self.entries.pop(key) {
            self.bytes -= old.len();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.bytes = 0;
    }

    /// Total size of the cached values
    pub(crate) fn bytes(&self) -> usize {
        self.bytes
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
