//! Single-reference conversion between R1C1 and A1 notation

use crate::error::{ConvertError, ConvertResult, Notation};
use crate::reference::{parse_a1, R1C1Reference};
use cellref_core::CellPosition;

/// Convert one R1C1 reference to A1 notation
///
/// Relative and implicit components are resolved against `anchor`. The
/// result never carries `$` anchors.
///
/// # Example
/// ```rust
/// use cellref_convert::convert_to_a1;
/// use cellref_core::CellPosition;
///
/// assert_eq!(convert_to_a1("R2C3", CellPosition::default()).unwrap(), "C2");
/// assert_eq!(convert_to_a1("R[-1]C[2]", CellPosition::new(10, 5)).unwrap(), "G9");
/// ```
pub fn convert_to_a1(address: &str, anchor: CellPosition) -> ConvertResult<String> {
    let position = R1C1Reference::parse(address)?
        .resolve(anchor)
        .ok_or_else(|| ConvertError::range(Notation::R1C1, address))?;

    position
        .to_a1_string()
        .map_err(|_| ConvertError::range(Notation::R1C1, address))
}

/// Convert one A1 reference to R1C1 notation
///
/// With no anchors the result is absolute (`R7C2`). An anchored axis is
/// written as empty when it matches the anchor and as a bracketed offset
/// otherwise.
///
/// # Example
/// ```rust
/// use cellref_convert::convert_to_r1c1;
///
/// assert_eq!(convert_to_r1c1("$B$7", None, None).unwrap(), "R7C2");
/// assert_eq!(convert_to_r1c1("$B$7", Some(7), Some(2)).unwrap(), "RC");
/// assert_eq!(convert_to_r1c1("B7", Some(10), Some(1)).unwrap(), "R[-3]C[1]");
/// ```
pub fn convert_to_r1c1(
    address: &str,
    anchor_row: Option<u32>,
    anchor_col: Option<u32>,
) -> ConvertResult<String> {
    let target = parse_a1(address)?;
    Ok(R1C1Reference::relative_to(target, anchor_row, anchor_col).to_string())
}
