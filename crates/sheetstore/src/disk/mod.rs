//! Disk-backed cell store
//!
//! Each cell record lives in its own file inside a private scratch directory
//! that is created with the store and removed by [`CellStore::close`] (or on
//! drop). Records are grouped in one directory per sheet and one per row, so
//! a row scan lists a single directory. Records pass through the
//! [`crate::codec`] on every write and on every read that misses the bounded
//! read cache.

mod cache;
mod layout;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use bytes::{Bytes, BytesMut};
use sheetstore_core::{Cell, CellPosition, RowRef};
use tempfile::TempDir;

use self::cache::ReadCache;
use self::layout::SheetDirs;
use crate::codec::{decode_cell, encode_cell};
use crate::error::{StoreError, StoreResult};
use crate::options::StoreOptions;
use crate::store::{CellStore, CellVisitor};

/// Prefix of the scratch directory name
const SCRATCH_PREFIX: &str = "cellstore";

/// Prefix of in-flight record files
const PENDING_PREFIX: &str = ".pending";

/// Cell store that keeps encoded records in a scratch directory
#[derive(Debug)]
pub struct DiskCellStore {
    /// `None` once the store has been closed
    dir: Option<TempDir>,
    sheets: SheetDirs,
    cache: ReadCache,
    sync_writes: bool,
}

impl DiskCellStore {
    /// Create a store with default options
    pub fn new() -> StoreResult<Self> {
        Self::with_options(StoreOptions::default())
    }

    /// Create a store, allocating a fresh scratch directory
    pub fn with_options(options: StoreOptions) -> StoreResult<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX);
        let dir = match &options.temp_dir {
            Some(parent) => builder
                .tempdir_in(parent)
                .map_err(|e| StoreError::io(parent, e))?,
            None => builder
                .tempdir()
                .map_err(|e| StoreError::io(&std::env::temp_dir(), e))?,
        };
        log::debug!(
            "created cell store scratch directory {} (cache bound {} bytes)",
            dir.path().display(),
            options.cache_size_max
        );

        Ok(Self {
            dir: Some(dir),
            sheets: SheetDirs::default(),
            cache: ReadCache::new(options.cache_size_max),
            sync_writes: options.sync_writes,
        })
    }

    /// Scratch directory, or `None` after close
    pub fn path(&self) -> Option<&Path> {
        self.dir.as_ref().map(TempDir::path)
    }

    /// Bytes currently held by the read cache
    pub fn cached_bytes(&self) -> usize {
        self.cache.bytes()
    }

    /// Keys of the records stored for `row` of the sheet kept in `sheet_dir`
    fn row_keys(
        root: &Path,
        sheet_dir: &str,
        row: &RowRef,
        keys: &mut Vec<String>,
    ) -> StoreResult<()> {
        let dir = layout::row_dir(root, sheet_dir, row);
        for name in list_dir(&dir)? {
            if let Some(col) = layout::parse_index::<u16>(&name) {
                keys.push(row.cell(col).key());
            }
        }
        Ok(())
    }

    /// Keys of every record of `sheet`
    fn sheet_keys(
        root: &Path,
        sheet: &str,
        sheet_dir: &str,
        keys: &mut Vec<String>,
    ) -> StoreResult<()> {
        for name in list_dir(&root.join(sheet_dir))? {
            if let Some(row) = layout::parse_index::<u32>(&name) {
                Self::row_keys(root, sheet_dir, &RowRef::new(sheet, row), keys)?;
            }
        }
        Ok(())
    }

    fn visit_keys(&mut self, keys: Vec<String>, visitor: CellVisitor<'_>) -> StoreResult<()> {
        for key in keys {
            let cell = self.read_cell(&key)?;
            visitor(cell)?;
        }
        Ok(())
    }
}

fn open_dir(dir: &Option<TempDir>) -> StoreResult<&Path> {
    dir.as_ref().map(TempDir::path).ok_or(StoreError::Closed)
}

/// Entry names of `dir`; a missing directory has none
fn list_dir(dir: &Path) -> StoreResult<Vec<std::ffi::OsString>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::io(dir, e)),
    };
    entries
        .map(|entry| {
            entry
                .map(|e| e.file_name())
                .map_err(|e| StoreError::io(dir, e))
        })
        .collect()
}

impl CellStore for DiskCellStore {
    fn read_cell(&mut self, key: &str) -> StoreResult<Cell> {
        let root = open_dir(&self.dir)?;
        // keys that no cell can have are simply absent
        let Ok(position) = CellPosition::from_key(key) else {
            return Err(StoreError::not_found(key));
        };

        let mut bytes = match self.cache.get(key) {
            Some(bytes) => bytes,
            None => {
                let Some(sheet_dir) = self.sheets.get(&position.sheet) else {
                    return Err(StoreError::not_found(key));
                };
                let path = layout::record_path(root, sheet_dir, &position);
                let data = match fs::read(&path) {
                    Ok(data) => Bytes::from(data),
                    Err(e) if e.kind() == ErrorKind::NotFound => {
                        return Err(StoreError::not_found(key));
                    }
                    Err(e) => return Err(StoreError::io(&path, e)),
                };
                self.cache.insert(key, data.clone());
                data
            }
        };

        let mut cell = decode_cell(&mut bytes)?;
        cell.position = position;
        Ok(cell)
    }

    fn write_cell(&mut self, cell: &Cell) -> StoreResult<()> {
        let root = open_dir(&self.dir)?;

        let mut buf = BytesMut::with_capacity(128);
        encode_cell(cell, &mut buf);

        let sheet_dir = self.sheets.get_or_assign(&cell.position.sheet);
        let path = layout::record_path(root, sheet_dir, &cell.position);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let mut pending = tempfile::Builder::new()
            .prefix(PENDING_PREFIX)
            .tempfile_in(root)
            .map_err(|e| StoreError::io(root, e))?;
        pending
            .write_all(&buf)
            .map_err(|e| StoreError::io(pending.path(), e))?;
        if self.sync_writes {
            pending
                .as_file()
                .sync_all()
                .map_err(|e| StoreError::io(pending.path(), e))?;
        }
        pending
            .persist(&path)
            .map_err(|e| StoreError::io(&path, e.error))?;

        self.cache.remove(&cell.key());
        Ok(())
    }

    fn delete_cell(&mut self, key: &str) -> StoreResult<()> {
        let root = open_dir(&self.dir)?;
        self.cache.remove(key);
        let Ok(position) = CellPosition::from_key(key) else {
            return Ok(());
        };
        let Some(sheet_dir) = self.sheets.get(&position.sheet) else {
            return Ok(());
        };
        let path = layout::record_path(root, sheet_dir, &position);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    fn for_each(&mut self, visitor: CellVisitor<'_>) -> StoreResult<()> {
        let root = open_dir(&self.dir)?;
        let mut keys = Vec::new();
        for (sheet, sheet_dir) in self.sheets.iter() {
            Self::sheet_keys(root, sheet, sheet_dir, &mut keys)?;
        }
        self.visit_keys(keys, visitor)
    }

    fn for_each_in_row(&mut self, row: &RowRef, visitor: CellVisitor<'_>) -> StoreResult<()> {
        let root = open_dir(&self.dir)?;
        let mut keys = Vec::new();
        if let Some(sheet_dir) = self.sheets.get(&row.sheet) {
            Self::row_keys(root, sheet_dir, row, &mut keys)?;
        }
        self.visit_keys(keys, visitor)
    }

    fn close(&mut self) -> StoreResult<()> {
        self.cache.clear();
        self.sheets.clear();
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            dir.close().map_err(|e| StoreError::io(&path, e))?;
            log::debug!("removed cell store scratch directory {}", path.display());
        }
        Ok(())
    }
}

impl Drop for DiskCellStore {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            let path = dir.path().to_path_buf();
            if let Err(e) = dir.close() {
                log::warn!(
                    "failed to remove cell store scratch directory {}: {e}",
                    path.display()
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetstore_core::Style;

    fn cell(row: u32, col: u16, value: &str) -> Cell {
        Cell::new(CellPosition::new("Sheet1", row, col)).with_value(value)
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_one_file_per_key() {
        let mut store = DiskCellStore::new().unwrap();
        store.write_cell(&cell(0, 0, "a")).unwrap();
        store.write_cell(&cell(0, 1, "b")).unwrap();
        store.write_cell(&cell(0, 1, "c")).unwrap();
        store.write_cell(&cell(7, 2, "d")).unwrap();

        let root = store.path().unwrap().to_path_buf();
        assert_eq!(names(&root), ["s0"]);
        assert_eq!(names(&root.join("s0")), ["000000", "000007"]);
        assert_eq!(names(&root.join("s0/000000")), ["000000", "000001"]);
        assert_eq!(names(&root.join("s0/000007")), ["000002"]);
        store.close().unwrap();
    }

    #[test]
    fn test_long_sheet_names_fit_the_filesystem() {
        let mut store = DiskCellStore::new().unwrap();
        let sheets = ["\u{9500}".repeat(31), "x".repeat(1000), "a/b\\c:d%".to_string()];
        for sheet in &sheets {
            let c = Cell::new(CellPosition::new(sheet.as_str(), 2, 3)).with_value("v");
            store.write_cell(&c).unwrap();
            assert_eq!(store.read_cell(&c.key()).unwrap(), c);
        }
        assert_eq!(names(store.path().unwrap()), ["s0", "s1", "s2"]);
    }

    #[test]
    fn test_keys_without_a_record() {
        let mut store = DiskCellStore::new().unwrap();
        store.write_cell(&cell(0, 0, "x")).unwrap();

        for key in ["not a key", "Other:000000:000000", "Sheet1:000000:000001"] {
            let err = store.read_cell(key).unwrap_err();
            assert!(err.is_not_found(), "{key}: {err}");
            store.delete_cell(key).unwrap();
        }
        assert_eq!(store.read_cell(&cell(0, 0, "x").key()).unwrap().value, "x");
    }

    #[test]
    fn test_read_populates_cache_and_write_invalidates() {
        let mut store = DiskCellStore::new().unwrap();
        let c = cell(3, 3, "first");
        store.write_cell(&c).unwrap();
        assert_eq!(store.cached_bytes(), 0);

        store.read_cell(&c.key()).unwrap();
        let cached = store.cached_bytes();
        assert!(cached > 0);

        store
            .write_cell(&c.clone().with_value("second").with_style(Style::default()))
            .unwrap();
        assert_eq!(store.cached_bytes(), 0);
        assert_eq!(store.read_cell(&c.key()).unwrap().value, "second");
        assert!(store.cached_bytes() > cached);
    }

    #[test]
    fn test_cache_disabled_still_reads() {
        let options = StoreOptions::default().with_cache_size_max(0);
        let mut store = DiskCellStore::with_options(options).unwrap();
        let c = cell(0, 0, "x");
        store.write_cell(&c).unwrap();
        assert_eq!(store.read_cell(&c.key()).unwrap(), c);
        assert_eq!(store.cached_bytes(), 0);
    }

    #[test]
    fn test_synced_writes() {
        let options = StoreOptions::default().with_sync_writes(true);
        let mut store = DiskCellStore::with_options(options).unwrap();
        let c = cell(4, 1, "durable");
        store.write_cell(&c).unwrap();
        store.write_cell(&c.clone().with_value("again")).unwrap();
        assert_eq!(store.read_cell(&c.key()).unwrap().value, "again");
        assert_eq!(names(&store.path().unwrap().join("s0/000004")), ["000001"]);
    }

    #[test]
    fn test_corrupt_file_is_malformed() {
        let mut store = DiskCellStore::new().unwrap();
        let c = cell(0, 0, "x");
        store.write_cell(&c).unwrap();
        let path = layout::record_path(store.path().unwrap(), "s0", &c.position);
        fs::write(&path, b"x\x1f").unwrap();

        let err = store.read_cell(&c.key()).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)), "{err}");
    }

    #[test]
    fn test_foreign_files_are_skipped() {
        let mut store = DiskCellStore::new().unwrap();
        store.write_cell(&cell(0, 0, "x")).unwrap();
        let root = store.path().unwrap().to_path_buf();
        fs::write(root.join(".pending-leftover"), b"junk").unwrap();
        fs::write(root.join("s0/000000/notes.txt"), b"junk").unwrap();
        fs::write(root.join("s0/000000/0"), b"junk").unwrap();
        fs::create_dir(root.join("s0/row")).unwrap();

        let mut seen = 0;
        store
            .for_each(&mut |_| {
                seen += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_drop_removes_scratch_directory() {
        let store = DiskCellStore::new().unwrap();
        let dir = store.path().unwrap().to_path_buf();
        assert!(dir.is_dir());
        drop(store);
        assert!(!dir.exists());
    }
}
