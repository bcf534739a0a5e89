//! Column letter <-> index conversion
//!
//! Columns are 1-based: `A` = 1, `Z` = 26, `AA` = 27. Letters are
//! case-insensitive on input and always upper case on output.

use crate::error::{Error, Result};

/// Convert column letters to a 1-based index (A = 1, Z = 26, AA = 27, etc.)
///
/// # Examples
/// ```
/// use cellref_core::column_index;
///
/// assert_eq!(column_index("A").unwrap(), 1);
/// assert_eq!(column_index("xfd").unwrap(), 16384);
/// assert!(column_index("A1").is_err());
/// ```
pub fn column_index(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumnLetters(String::new()));
    }

    let mut index: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnLetters(letters.to_string()));
        }
        let digit = u64::from(c.to_ascii_uppercase() as u8 - b'A' + 1);
        index = index
            .checked_mul(26)
            .and_then(|n| n.checked_add(digit))
            .ok_or(Error::ColumnOutOfRange(u64::MAX))?;
    }

    u32::try_from(index).map_err(|_| Error::ColumnOutOfRange(index))
}

/// Convert a 1-based column index to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// # Examples
/// ```
/// use cellref_core::column_letters;
///
/// assert_eq!(column_letters(28).unwrap(), "AB");
/// assert!(column_letters(0).is_err());
/// ```
pub fn column_letters(index: u32) -> Result<String> {
    if index == 0 {
        return Err(Error::ColumnOutOfRange(0));
    }

    let mut letters = Vec::new();
    let mut n = index;
    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }
    letters.reverse();

    Ok(letters.into_iter().map(char::from).collect())
}
