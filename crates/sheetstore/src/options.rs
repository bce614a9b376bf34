//! Disk store options

use std::path::PathBuf;

/// Default bound on the disk store's read cache, in bytes (1 MiB)
pub const DEFAULT_CACHE_SIZE: usize = 1024 * 1024;

/// Options for creating a [`crate::DiskCellStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreOptions {
    /// Upper bound on cached record bytes (default: [`DEFAULT_CACHE_SIZE`], 0 disables caching)
    pub cache_size_max: usize,
    /// Parent of the scratch directory (default: the OS temp directory)
    pub temp_dir: Option<PathBuf>,
    /// Flush each record to disk before it replaces the previous one
    pub sync_writes: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            cache_size_max: DEFAULT_CACHE_SIZE,
            temp_dir: None,
            sync_writes: false,
        }
    }
}

impl StoreOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read cache bound in bytes
    pub fn with_cache_size_max(mut self, bytes: usize) -> Self {
        self.cache_size_max = bytes;
        self
    }

    /// Create the scratch directory under `dir`
    pub fn with_temp_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Flush every write to disk
    pub fn with_sync_writes(mut self, sync: bool) -> Self {
        self.sync_writes = sync;
        self
    }
}
