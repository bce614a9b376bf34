//! In-memory cell store

use std::collections::HashMap;

use sheetstore_core::{Cell, RowRef};

use crate::error::{StoreError, StoreResult};
use crate::store::{CellStore, CellVisitor};

/// Cell store backed by a `HashMap`; cells are kept as values, not encoded
#[derive(Debug, Default)]
pub struct MemoryCellStore {
    cells: HashMap<String, Cell>,
    closed: bool,
}

impl MemoryCellStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cells are stored
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn ensure_open(&self) -> StoreResult<()> {
        if self.closed {
            return Err(StoreError::Closed);
        }
        Ok(())
    }
}

impl CellStore for MemoryCellStore {
    fn read_cell(&mut self, key: &str) -> StoreResult<Cell> {
        self.ensure_open()?;
        self.cells
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::not_found(key))
    }

    fn write_cell(&mut self, cell: &Cell) -> StoreResult<()> {
        self.ensure_open()?;
        self.cells.insert(cell.key(), cell.clone());
        Ok(())
    }

    fn delete_cell(&mut self, key: &str) -> StoreResult<()> {
        self.ensure_open()?;
        self.cells.remove(key);
        Ok(())
    }

    fn for_each(&mut self, visitor: CellVisitor<'_>) -> StoreResult<()> {
        self.ensure_open()?;
        for cell in self.cells.values() {
            visitor(cell.clone())?;
        }
        Ok(())
    }

    fn for_each_in_row(&mut self, row: &RowRef, visitor: CellVisitor<'_>) -> StoreResult<()> {
        self.ensure_open()?;
        let prefix = row.key_prefix();
        for (key, cell) in &self.cells {
            if key.starts_with(&prefix) {
                visitor(cell.clone())?;
            }
        }
        Ok(())
    }

    fn close(&mut self) -> StoreResult<()> {
        if !self.closed {
            log::debug!("closing memory cell store with {} cells", self.cells.len());
            self.cells.clear();
            self.closed = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetstore_core::CellPosition;

    #[test]
    fn test_read_returns_independent_copy() {
        let mut store = MemoryCellStore::new();
        let cell = Cell::new(CellPosition::new("S", 0, 0)).with_value("a");
        store.write_cell(&cell).unwrap();

        let mut copy = store.read_cell(&cell.key()).unwrap();
        copy.value = "changed".into();
        assert_eq!(store.read_cell(&cell.key()).unwrap().value, "a");
    }

    #[test]
    fn test_len_tracks_writes_and_deletes() {
        let mut store = MemoryCellStore::new();
        assert!(store.is_empty());

        let a = Cell::new(CellPosition::new("S", 0, 0));
        let b = Cell::new(CellPosition::new("S", 0, 1));
        store.write_cell(&a).unwrap();
        store.write_cell(&b).unwrap();
        store.write_cell(&a).unwrap();
        assert_eq!(store.len(), 2);

        store.delete_cell(&a.key()).unwrap();
        store.delete_cell(&a.key()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_closed_store_rejects_operations() {
        let mut store = MemoryCellStore::new();
        let cell = Cell::new(CellPosition::new("S", 0, 0));
        store.write_cell(&cell).unwrap();
        store.close().unwrap();
        store.close().unwrap();

        assert!(store.is_empty());
        assert!(matches!(store.read_cell(&cell.key()), Err(StoreError::Closed)));
        assert!(matches!(store.write_cell(&cell), Err(StoreError::Closed)));
        assert!(matches!(
            store.for_each(&mut |_| Ok(())),
            Err(StoreError::Closed)
        ));
    }
}
