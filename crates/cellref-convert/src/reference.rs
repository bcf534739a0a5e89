//! Parsed R1C1 and A1 references
//!
//! An R1C1 reference is `R` followed by an optional row component and `C`
//! followed by an optional column component, case-insensitive. Each
//! component is one of:
//! - empty: the anchor's own row/column
//! - `[n]` (or `[]`): relative offset from the anchor
//! - `n`: absolute 1-based index

use crate::error::{ConvertError, ConvertResult, Notation};
use cellref_core::{column_index, CellPosition};
use lazy_regex::regex_captures;
use std::fmt;
use std::str::FromStr;

/// One axis (row or column) of an R1C1 reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisRef {
    /// Explicit 1-based index, written without brackets
    Absolute(u32),
    /// Signed offset from the anchor, written in brackets
    Relative(i64),
    /// Empty component, same as the anchor
    Implicit,
}

impl AxisRef {
    /// Parse one captured component. `None` means the digits overflow.
    fn from_component(text: &str) -> Option<Self> {
        if text.is_empty() {
            return Some(AxisRef::Implicit);
        }
        match text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
            Some("") => Some(AxisRef::Relative(0)),
            Some(offset) => offset.parse().ok().map(AxisRef::Relative),
            None => text.parse().ok().map(AxisRef::Absolute),
        }
    }

    /// Resolve against the anchor coordinate on this axis
    pub fn resolve(&self, anchor: u32) -> i64 {
        match *self {
            AxisRef::Absolute(n) => i64::from(n),
            AxisRef::Relative(offset) => i64::from(anchor).saturating_add(offset),
            AxisRef::Implicit => i64::from(anchor),
        }
    }

    /// Describe `target` relative to an optional anchor coordinate
    pub fn relative_to(target: u32, anchor: Option<u32>) -> Self {
        match anchor {
            None => AxisRef::Absolute(target),
            Some(anchor) if anchor == target => AxisRef::Implicit,
            Some(anchor) => AxisRef::Relative(i64::from(target) - i64::from(anchor)),
        }
    }
}

impl fmt::Display for AxisRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRef::Absolute(n) => write!(f, "{n}"),
            AxisRef::Relative(offset) => write!(f, "[{offset}]"),
            AxisRef::Implicit => Ok(()),
        }
    }
}

/// A single R1C1 reference, e.g. `R[-1]C2` or `RC`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct R1C1Reference {
    pub row: AxisRef,
    pub col: AxisRef,
}

impl R1C1Reference {
    /// Create a reference from its two components
    pub fn new(row: AxisRef, col: AxisRef) -> Self {
        Self { row, col }
    }

    /// Parse a whole string as one R1C1 reference
    ///
    /// # Examples
    /// ```
    /// use cellref_convert::{AxisRef, R1C1Reference};
    ///
    /// let r = R1C1Reference::parse("r[-1]C2").unwrap();
    /// assert_eq!(r.row, AxisRef::Relative(-1));
    /// assert_eq!(r.col, AxisRef::Absolute(2));
    /// ```
    pub fn parse(s: &str) -> ConvertResult<Self> {
        let (_, row, col) = regex_captures!(
            r"(?i)^R(\[(?:-?[0-9]+)?\]|[0-9]*)C(\[(?:-?[0-9]+)?\]|[0-9]*)$",
            s
        )
        .ok_or_else(|| ConvertError::format(Notation::R1C1, s))?;

        match (AxisRef::from_component(row), AxisRef::from_component(col)) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(ConvertError::range(Notation::R1C1, s)),
        }
    }

    /// Resolve to an absolute position
    ///
    /// Returns `None` when either axis lands below 1 (or past `u32::MAX`).
    pub fn resolve(&self, anchor: CellPosition) -> Option<CellPosition> {
        let row = u32::try_from(self.row.resolve(anchor.row)).ok()?;
        let col = u32::try_from(self.col.resolve(anchor.col)).ok()?;
        let position = CellPosition::new(row, col);
        position.is_valid().then_some(position)
    }

    /// Describe `target` in R1C1 form
    ///
    /// Each axis with an anchor becomes implicit when equal to it and a
    /// bracketed offset otherwise. Axes without an anchor stay absolute.
    pub fn relative_to(
        target: CellPosition,
        anchor_row: Option<u32>,
        anchor_col: Option<u32>,
    ) -> Self {
        Self {
            row: AxisRef::relative_to(target.row, anchor_row),
            col: AxisRef::relative_to(target.col, anchor_col),
        }
    }
}

impl fmt::Display for R1C1Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}

impl FromStr for R1C1Reference {
    type Err = ConvertError;

    fn from_str(s: &str) -> ConvertResult<Self> {
        Self::parse(s)
    }
}

/// Parse an A1 reference (`B7`, `$B$7`, `b$7`) into a position
///
/// `$` anchors are accepted and discarded. Up to 3 column letters and
/// 7 row digits are allowed.
pub fn parse_a1(s: &str) -> ConvertResult<CellPosition> {
    let (_, letters, digits) = regex_captures!(r"(?i)^\$?([A-Z]{1,3})\$?([0-9]{1,7})$", s)
        .ok_or_else(|| ConvertError::format(Notation::A1, s))?;

    let col = column_index(letters).map_err(|_| ConvertError::format(Notation::A1, s))?;
    let row: u32 = digits
        .parse()
        .map_err(|_| ConvertError::format(Notation::A1, s))?;

    if row == 0 {
        return Err(ConvertError::range(Notation::A1, s));
    }

    Ok(CellPosition::new(row, col))
}
