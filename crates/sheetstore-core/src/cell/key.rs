//! Storage key scheme
//!
//! A cell key is `"{sheet}:{row:06}:{col:06}"` and a row prefix is
//! `"{sheet}:{row:06}:"`. The trailing separator on the prefix keeps row
//! 100000 from matching keys of row 1000000 once indices outgrow the padding.
//!
//! The sheet component is escaped so that it never contains
//! [`KEY_SEPARATOR`]: `%` becomes `%25` and `:` becomes `%3A`. Sheet names
//! without either character appear in keys unchanged.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};

/// Separator between the sheet, row and column parts of a key
pub const KEY_SEPARATOR: char = ':';

/// Zero-padding width for the row and column parts of a key
const INDEX_WIDTH: usize = 6;

/// Logical location of a cell inside a workbook
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPosition {
    /// Sheet name
    pub sheet: String,
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based, A=0)
    pub col: u16,
}

impl CellPosition {
    /// Create a new position
    pub fn new<S: Into<String>>(sheet: S, row: u32, col: u16) -> Self {
        Self {
            sheet: sheet.into(),
            row,
            col,
        }
    }

    /// Storage key for this position
    pub fn key(&self) -> String {
        format!(
            "{}{:0width$}",
            self.row_ref().key_prefix(),
            self.col,
            width = INDEX_WIDTH
        )
    }

    /// The row this position belongs to
    pub fn row_ref(&self) -> RowRef {
        RowRef::new(self.sheet.clone(), self.row)
    }

    /// Recover a position from a key produced by [`CellPosition::key`]
    ///
    /// # Examples
    /// ```
    /// use sheetstore_core::CellPosition;
    ///
    /// let pos = CellPosition::from_key("Data:000012:000003").unwrap();
    /// assert_eq!(pos, CellPosition::new("Data", 12, 3));
    ///
    /// assert!(CellPosition::from_key("Data:12").is_err());
    /// ```
    pub fn from_key(key: &str) -> Result<Self> {
        let mut parts = key.rsplitn(3, KEY_SEPARATOR);
        let (Some(col), Some(row), Some(sheet)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::InvalidKey(key.to_string()));
        };

        let row: u32 = parse_index(row).ok_or_else(|| Error::InvalidKey(key.to_string()))?;
        let col: u16 = parse_index(col).ok_or_else(|| Error::InvalidKey(key.to_string()))?;
        let sheet = unescape_sheet(sheet).ok_or_else(|| Error::InvalidKey(key.to_string()))?;
        let position = Self::new(sheet, row, col);

        // Reject keys that parse but would not be produced again, e.g. "S:1:1"
        if position.key() != key {
            return Err(Error::InvalidKey(key.to_string()));
        }
        Ok(position)
    }

    /// Column letters for this position (0 = A, 25 = Z, 26 = AA)
    pub fn column_letters(&self) -> String {
        let mut result = String::new();
        let mut n = self.col as u32 + 1;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}{}", self.sheet, self.column_letters(), self.row + 1)
    }
}

fn escape_sheet(sheet: &str) -> Cow<'_, str> {
    if !sheet.contains(['%', KEY_SEPARATOR]) {
        return Cow::Borrowed(sheet);
    }
    let mut out = String::with_capacity(sheet.len() + 4);
    for c in sheet.chars() {
        match c {
            '%' => out.push_str("%25"),
            KEY_SEPARATOR => out.push_str("%3A"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn unescape_sheet(escaped: &str) -> Option<String> {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;
    while let Some(i) = rest.find('%') {
        out.push_str(&rest[..i]);
        match rest.get(i..i + 3)? {
            "%25" => out.push('%'),
            "%3A" => out.push(KEY_SEPARATOR),
            _ => return None,
        }
        rest = &rest[i + 3..];
    }
    out.push_str(rest);
    Some(out)
}

fn parse_index<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// A row of one sheet, used to scope iteration to the cells of that row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRef {
    /// Sheet name
    pub sheet: String,
    /// Row index (0-based)
    pub row: u32,
}

impl RowRef {
    /// Create a new row reference
    pub fn new<S: Into<String>>(sheet: S, row: u32) -> Self {
        Self {
            sheet: sheet.into(),
            row,
        }
    }

    /// Prefix shared by the key of every cell in this row and by no other key
    ///
    /// ```
    /// use sheetstore_core::{CellPosition, RowRef};
    ///
    /// let row = RowRef::new("a", 1);
    /// assert_eq!(row.key_prefix(), "a:000001:");
    ///
    /// // a separator inside a sheet name cannot forge another row's prefix
    /// let tricky = CellPosition::new("a:000001", 5, 0);
    /// assert!(!tricky.key().starts_with(&row.key_prefix()));
    /// ```
    pub fn key_prefix(&self) -> String {
        format!(
            "{sheet}{sep}{row:0width$}{sep}",
            sheet = escape_sheet(&self.sheet),
            sep = KEY_SEPARATOR,
            row = self.row,
            width = INDEX_WIDTH
        )
    }

    /// Position of the cell at `col` in this row
    pub fn cell(&self, col: u16) -> CellPosition {
        CellPosition::new(self.sheet.clone(), self.row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_layout() {
        assert_eq!(CellPosition::new("Sheet1", 0, 0).key(), "Sheet1:000000:000000");
        assert_eq!(CellPosition::new("Sheet1", 41, 7).key(), "Sheet1:000041:000007");
        assert_eq!(
            CellPosition::new("Big", 1_048_575, 16_383).key(),
            "Big:1048575:016383"
        );
    }

    #[test]
    fn test_row_prefix_covers_row_cells() {
        let row = RowRef::new("Sheet1", 5);
        for col in [0u16, 1, 99, 16_383] {
            assert!(row.cell(col).key().starts_with(&row.key_prefix()));
        }
    }

    #[test]
    fn test_row_prefix_excludes_other_rows() {
        let short = RowRef::new("S", 100_000);
        let long = RowRef::new("S", 1_000_000);
        assert!(!long.cell(0).key().starts_with(&short.key_prefix()));
        assert!(!short.cell(0).key().starts_with(&long.key_prefix()));

        let a = RowRef::new("Sheet1", 1);
        let b = RowRef::new("Sheet10", 1);
        assert!(!b.cell(0).key().starts_with(&a.key_prefix()));
    }

    #[test]
    fn test_from_key_roundtrip() {
        let pos = CellPosition::new("Q1 Sales", 1_000_001, 12);
        assert_eq!(CellPosition::from_key(&pos.key()).unwrap(), pos);
    }

    #[test]
    fn test_from_key_rejects_malformed() {
        for key in ["", "Sheet1", "Sheet1:000001", "S:1:1", "S:000001:+00001", "S:abc:000001"] {
            assert_eq!(
                CellPosition::from_key(key),
                Err(Error::InvalidKey(key.to_string())),
                "{key}"
            );
        }
    }

    #[test]
    fn test_separator_in_sheet_is_escaped() {
        assert_eq!(CellPosition::new("a:b", 1, 2).key(), "a%3Ab:000001:000002");
        assert_eq!(RowRef::new("50%", 3).key_prefix(), "50%25:000003:");

        let forged = CellPosition::new("a:000001", 5, 0);
        assert!(!forged.key().starts_with(&RowRef::new("a", 1).key_prefix()));
        assert!(forged.key().starts_with(&forged.row_ref().key_prefix()));
    }

    #[test]
    fn test_from_key_unescapes_sheet() {
        for sheet in ["a:000001", "100%", "%3A", "x:y:z%", "\u{9500}:\u{9500}"] {
            let pos = CellPosition::new(sheet, 7, 8);
            assert_eq!(CellPosition::from_key(&pos.key()).unwrap(), pos, "{sheet}");
        }
    }

    #[test]
    fn test_from_key_rejects_bad_escapes() {
        for key in [
            "a%3a:000001:000001",
            "a%:000001:000001",
            "a%41:000001:000001",
            "a:b:000001:000001",
        ] {
            assert_eq!(
                CellPosition::from_key(key),
                Err(Error::InvalidKey(key.to_string())),
                "{key}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CellPosition::new("Sheet1", 0, 0).to_string(), "Sheet1!A1");
        assert_eq!(CellPosition::new("Sheet1", 9, 27).to_string(), "Sheet1!AB10");
    }
}
