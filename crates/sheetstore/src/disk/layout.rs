//! Placement of cell records inside the scratch directory
//!
//! A cell at (sheet, row, col) lives at `<sheet dir>/<row>/<col>`. Row and
//! column parts are the zero-padded indices used in keys. Sheet directories
//! get short generated names (`s0`, `s1`, ...) so that path components stay
//! bounded whatever the sheet name; the name mapping is kept in memory for
//! the lifetime of the store.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use sheetstore_core::{CellPosition, RowRef};

/// Zero-padded index as it appears in record paths
pub(crate) fn index_name(index: impl Into<u64>) -> String {
    format!("{:06}", index.into())
}

/// Index encoded by a row directory or record file name
///
/// Anything not produced by [`index_name`] (in-flight temp files, stray
/// files) yields `None`.
pub(crate) fn parse_index<T>(name: &OsStr) -> Option<T>
where
    T: std::str::FromStr + Copy + Into<u64>,
{
    let name = name.to_str()?;
    if !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index: T = name.parse().ok()?;
    (index_name(index) == name).then_some(index)
}

/// Directory names assigned to sheets
#[derive(Debug, Default)]
pub(crate) struct SheetDirs {
    by_sheet: HashMap<String, String>,
}

impl SheetDirs {
    /// Directory of `sheet`, if any cell of it was ever written
    pub(crate) fn get(&self, sheet: &str) -> Option<&str> {
        self.by_sheet.get(sheet).map(String::as_str)
    }

    /// Directory of `sheet`, assigning a fresh one on first use
    pub(crate) fn get_or_assign(&mut self, sheet: &str) -> &str {
        let next = self.by_sheet.len();
        self.by_sheet
            .entry(sheet.to_string())
            .or_insert_with(|| format!("s{next}"))
    }

    /// `(sheet, directory)` pairs
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_sheet.iter().map(|(s, d)| (s.as_str(), d.as_str()))
    }

    pub(crate) fn clear(&mut self) {
        self.by_sheet.clear();
    }
}

/// Directory holding the records of `row` under `root`
pub(crate) fn row_dir(root: &Path, sheet_dir: &str, row: &RowRef) -> PathBuf {
    root.join(sheet_dir).join(index_name(row.row))
}

/// Record file of `position` under `root`
pub(crate) fn record_path(root: &Path, sheet_dir: &str, position: &CellPosition) -> PathBuf {
    row_dir(root, sheet_dir, &position.row_ref()).join(index_name(position.col))
}
