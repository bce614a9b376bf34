//! Cell records and their storage keys
//!
//! This module contains:
//! - [`Cell`] - The persisted cell record
//! - [`CellType`] - The cell type discriminant
//! - [`CellPosition`] and [`RowRef`] - Key and row-prefix derivation

mod key;

pub use key::{CellPosition, RowRef, KEY_SEPARATOR};

use crate::error::{Error, Result};
use crate::hyperlink::Hyperlink;
use crate::style::Style;
use crate::validation::DataValidation;

/// Kind of content held by a cell
///
/// The discriminants are part of the stored record layout and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellType {
    /// Shared or literal string
    #[default]
    String = 0,
    /// String produced by a formula
    StringFormula = 1,
    /// Number
    Numeric = 2,
    /// Boolean
    Bool = 3,
    /// Inline rich string
    Inline = 4,
    /// Error value (`#DIV/0!` and friends)
    Error = 5,
    /// Date stored as a serial number
    Date = 6,
}

impl CellType {
    /// Wire discriminant
    pub fn as_i64(self) -> i64 {
        self as i64
    }
}

impl TryFrom<i64> for CellType {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Ok(match value {
            0 => CellType::String,
            1 => CellType::StringFormula,
            2 => CellType::Numeric,
            3 => CellType::Bool,
            4 => CellType::Inline,
            5 => CellType::Error,
            6 => CellType::Date,
            other => return Err(Error::InvalidCellType(other)),
        })
    }
}

/// A single cell as handed to and returned by a cell store
///
/// `style` and `data_validation` are owned by the cell; two cells never share
/// them. `position` determines the storage key and is not part of the encoded
/// record.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Where the cell lives in the workbook
    pub position: CellPosition,
    /// Display value
    pub value: String,
    /// Formula text (empty if none)
    pub formula: String,
    /// Cell style
    pub style: Option<Style>,
    /// Number format code
    pub num_fmt: String,
    /// Workbook uses the 1904 date system
    pub date1904: bool,
    /// Cell is hidden
    pub hidden: bool,
    /// Horizontal merge span
    pub h_merge: i64,
    /// Vertical merge span
    pub v_merge: i64,
    /// Content kind
    pub cell_type: CellType,
    /// Data validation rule
    pub data_validation: Option<DataValidation>,
    /// Hyperlink (empty strings when the cell has none)
    pub hyperlink: Hyperlink,
    /// Numeric cache value
    pub num: i64,
}

impl Cell {
    /// Create an empty cell at `position`
    pub fn new(position: CellPosition) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Storage key, derived from the cell's position
    pub fn key(&self) -> String {
        self.position.key()
    }

    /// Set the display value
    pub fn with_value<S: Into<String>>(mut self, value: S) -> Self {
        self.value = value.into();
        self
    }

    /// Set the formula text
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = formula.into();
        self
    }

    /// Attach a style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the number format code
    pub fn with_num_fmt<S: Into<String>>(mut self, num_fmt: S) -> Self {
        self.num_fmt = num_fmt.into();
        self
    }

    /// Set the content kind
    pub fn with_cell_type(mut self, cell_type: CellType) -> Self {
        self.cell_type = cell_type;
        self
    }

    /// Set the merge spans
    pub fn with_merge(mut self, h_merge: i64, v_merge: i64) -> Self {
        self.h_merge = h_merge;
        self.v_merge = v_merge;
        self
    }

    /// Attach a data validation rule
    pub fn with_data_validation(mut self, validation: DataValidation) -> Self {
        self.data_validation = Some(validation);
        self
    }

    /// Set the hyperlink
    pub fn with_hyperlink(mut self, hyperlink: Hyperlink) -> Self {
        self.hyperlink = hyperlink;
        self
    }
}
