//! The cell store contract shared by all backends

use sheetstore_core::{Cell, RowRef};

use crate::disk::DiskCellStore;
use crate::error::StoreResult;
use crate::memory::MemoryCellStore;
use crate::options::StoreOptions;

/// Callback invoked once per cell during iteration
///
/// Returning an error stops the iteration and the error is handed back to the
/// caller unchanged. Wrap foreign errors with [`crate::StoreError::visitor`].
pub type CellVisitor<'a> = &'a mut dyn FnMut(Cell) -> StoreResult<()>;

/// Storage for the cells of a workbook, keyed by [`Cell::key`]
///
/// A store instance has a single owner; every operation takes `&mut self`.
/// Separate instances may be used from separate threads.
pub trait CellStore: Send {
    /// Read the cell stored under `key`
    ///
    /// Returns [`crate::StoreError::CellNotFound`] if nothing is stored there.
    fn read_cell(&mut self, key: &str) -> StoreResult<Cell>;

    /// Store `cell` under its key, replacing any previous record
    fn write_cell(&mut self, cell: &Cell) -> StoreResult<()>;

    /// Remove the cell stored under `key`, if any
    fn delete_cell(&mut self, key: &str) -> StoreResult<()>;

    /// Visit every stored cell, in no particular order
    fn for_each(&mut self, visitor: CellVisitor<'_>) -> StoreResult<()>;

    /// Visit every stored cell of `row`, in no particular order
    fn for_each_in_row(&mut self, row: &RowRef, visitor: CellVisitor<'_>) -> StoreResult<()>;

    /// Release the resources held by the store
    ///
    /// Later operations fail with [`crate::StoreError::Closed`]. Closing twice
    /// is a no-op.
    fn close(&mut self) -> StoreResult<()>;
}

/// Backend selection for [`StoreKind::open`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreKind {
    /// Keep cells in a map in memory
    #[default]
    Memory,
    /// Keep encoded cells in a scratch directory on disk
    Disk(StoreOptions),
}

impl StoreKind {
    /// Create a store of this kind
    pub fn open(self) -> StoreResult<Box<dyn CellStore>> {
        Ok(match self {
            StoreKind::Memory => Box::new(MemoryCellStore::new()),
            StoreKind::Disk(options) => Box::new(DiskCellStore::with_options(options)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetstore_core::CellPosition;

    #[test]
    fn test_default_kind_is_memory() {
        assert_eq!(StoreKind::default(), StoreKind::Memory);
    }

    #[test]
    fn test_open_each_kind() {
        let scratch = tempfile::tempdir().unwrap();
        let kinds = [
            StoreKind::Memory,
            StoreKind::Disk(StoreOptions::default().with_temp_dir(scratch.path())),
        ];
        for kind in kinds {
            let mut store = kind.open().unwrap();
            let cell = Cell::new(CellPosition::new("S", 1, 2)).with_value("v");
            store.write_cell(&cell).unwrap();
            assert_eq!(store.read_cell(&cell.key()).unwrap(), cell);
            store.close().unwrap();
        }
        assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_open_disk_in_missing_parent_fails() {
        let scratch = tempfile::tempdir().unwrap();
        let missing = scratch.path().join("missing");
        let err = StoreKind::Disk(StoreOptions::new().with_temp_dir(&missing))
            .open()
            .err()
            .unwrap();
        match err {
            crate::StoreError::Io { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error {other}"),
        }
    }
}
