//! # sheetstore
//!
//! Pluggable persistence for spreadsheet cells.
//!
//! A [`CellStore`] keeps the cells of a workbook keyed by [`Cell::key`]. Two
//! backends share the same contract:
//! - [`MemoryCellStore`] - Cells kept as values in a map
//! - [`DiskCellStore`] - Cells encoded with the [`codec`] into a scratch
//!   directory, with a bounded read cache, for workbooks too large to keep in
//!   memory
//!
//! ## Example
//!
//! ```rust
//! use sheetstore::{Cell, CellPosition, CellStore, RowRef, StoreKind, StoreOptions};
//!
//! let mut store = StoreKind::Disk(StoreOptions::default()).open()?;
//!
//! let cell = Cell::new(CellPosition::new("Sheet1", 0, 1)).with_value("Hello");
//! store.write_cell(&cell)?;
//!
//! assert_eq!(store.read_cell(&cell.key())?, cell);
//!
//! let mut values = Vec::new();
//! store.for_each_in_row(&RowRef::new("Sheet1", 0), &mut |cell| {
//!     values.push(cell.value);
//!     Ok(())
//! })?;
//! assert_eq!(values, ["Hello"]);
//!
//! store.close()?;
//! # Ok::<(), sheetstore::StoreError>(())
//! ```

pub mod codec;
pub mod disk;
pub mod error;
pub mod memory;
pub mod options;
pub mod store;

pub use disk::DiskCellStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryCellStore;
pub use options::{StoreOptions, DEFAULT_CACHE_SIZE};
pub use store::{CellStore, CellVisitor, StoreKind};

// Re-export the record types so callers need a single dependency
pub use sheetstore_core::{
    Alignment, Border, Cell, CellPosition, CellType, DataValidation, Fill, Font, Hyperlink,
    RowRef, Style,
};
