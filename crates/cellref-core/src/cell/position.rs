//! Cell position type

use super::column::column_letters;
use crate::error::{Error, Result};
use std::fmt;

/// A 1-based (row, column) position on a sheet
///
/// Used both as the anchor that relative R1C1 references are resolved
/// against and as the resolved result of an address. The default position
/// is the top-left cell, R1C1 / A1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPosition {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1)
    pub col: u32,
}

impl CellPosition {
    /// Create a new position
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Check that both axes are at least 1
    pub fn is_valid(&self) -> bool {
        self.row >= 1 && self.col >= 1
    }

    /// Format as A1-style string, without `$` anchors
    ///
    /// # Examples
    /// ```
    /// use cellref_core::CellPosition;
    ///
    /// assert_eq!(CellPosition::new(9, 7).to_a1_string().unwrap(), "G9");
    /// assert!(CellPosition::new(0, 7).to_a1_string().is_err());
    /// ```
    pub fn to_a1_string(&self) -> Result<String> {
        if self.row == 0 {
            return Err(Error::RowOutOfRange(0));
        }
        let mut result = column_letters(self.col)?;
        result.push_str(&self.row.to_string());
        Ok(result)
    }
}

impl Default for CellPosition {
    fn default() -> Self {
        Self { row: 1, col: 1 }
    }
}

/// Renders the absolute R1C1 form, e.g. `R3C2`
impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}
