//! Letter/index conversion over the 26-letter alphabet.
//!
//! The machine works on indices 0..26 internally (`A` = 0, `Z` = 25).
//! These helpers convert between `char`/`u8` letters and indices and
//! provide the modular arithmetic used by rotors.

use crate::error::EnigmaError;

/// Number of letters in the machine alphabet.
pub const LETTERS: u8 = 26;

/// Converts a letter (either case) to its index 0..26.
///
/// # Errors
/// Returns [`EnigmaError::InvalidLetter`] if `c` is not an ASCII letter.
pub fn letter_to_index(c: char) -> Result<u8, EnigmaError> {
    if c.is_ascii_alphabetic() {
        Ok(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        Err(EnigmaError::InvalidLetter(c))
    }
}

/// Converts an index 0..26 to its uppercase letter.
///
/// Indices are always produced by the machine itself, so the value is
/// reduced modulo 26 rather than checked.
pub fn index_to_letter(index: u8) -> char {
    (b'A' + index % LETTERS) as char
}

/// Adds two indices modulo 26.
pub(crate) fn add(a: u8, b: u8) -> u8 {
    (a + b) % LETTERS
}

/// Subtracts `b` from `a` modulo 26.
pub(crate) fn sub(a: u8, b: u8) -> u8 {
    (a + LETTERS - b) % LETTERS
}
