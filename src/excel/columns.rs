//! Excel column letters (A, B, ..., Z, AA, ..., XFD)

use crate::error::{ConvertError, ConvertResult};

/// Highest column Excel supports (XFD)
pub const MAX_COLUMNS: u32 = 16_384;

/// Convert a column letter to a 0-based index (A→0, Z→25, AA→26, ...).
///
/// Letters are case-insensitive and surrounding whitespace is ignored.
pub fn column_index(letter: &str) -> ConvertResult<u32> {
    let letter = letter.trim();
    if letter.is_empty() {
        return Err(ConvertError::Config("Column letter is empty".to_string()));
    }

    let mut number: u32 = 0;
    for ch in letter.chars() {
        if !ch.is_ascii_alphabetic() {
            return Err(ConvertError::Config(format!(
                "'{}' is not a column letter",
                letter
            )));
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
        number = number * 26 + digit;
        if number > MAX_COLUMNS {
            return Err(ConvertError::Config(format!(
                "Column '{}' is beyond XFD",
                letter
            )));
        }
    }

    Ok(number - 1)
}
