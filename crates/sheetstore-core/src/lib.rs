//! # sheetstore-core
//!
//! Plain data records persisted by the sheetstore cell stores.
//!
//! This crate provides:
//! - [`Cell`] - A cell record with its optional [`Style`] and [`DataValidation`]
//! - [`CellPosition`] and [`RowRef`] - The storage key scheme
//! - [`Style`] and its parts ([`Border`], [`Fill`], [`Font`], [`Alignment`])
//!
//! Nothing here performs I/O. The `sheetstore` crate encodes these records and
//! owns the storage backends.
//!
//! ## Example
//!
//! ```rust
//! use sheetstore_core::{Cell, CellPosition, CellType, RowRef};
//!
//! let cell = Cell::new(CellPosition::new("Sheet1", 3, 2))
//!     .with_value("42")
//!     .with_cell_type(CellType::Numeric);
//!
//! assert_eq!(cell.key(), "Sheet1:000003:000002");
//! assert!(cell.key().starts_with(&RowRef::new("Sheet1", 3).key_prefix()));
//! ```

pub mod cell;
pub mod error;
pub mod hyperlink;
pub mod style;
pub mod validation;

pub use cell::{Cell, CellPosition, CellType, RowRef, KEY_SEPARATOR};
pub use error::{Error, Result};
pub use hyperlink::Hyperlink;
pub use style::{Alignment, Border, Fill, Font, Style};
pub use validation::DataValidation;
