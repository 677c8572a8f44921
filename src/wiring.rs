//! Wiring: a fixed permutation of the alphabet and its inverse.
//!
//! A [`Wiring`] models the internal cross-connections of a rotor or a
//! reflector. It stores both directions so that the return path through
//! a rotor is a table lookup rather than a search.
//!
//! Catalog wirings are built in `const` context by [`Wiring::from_letters`],
//! so a malformed built-in table fails compilation. Wirings supplied at
//! run time go through [`Wiring::parse`], which reports an error instead.

use crate::error::EnigmaError;
use crate::utils::alphabet::{self, LETTERS};

const N: usize = LETTERS as usize;

/// A bijection over the 26-letter alphabet together with its inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; N],
    backward: [u8; N],
}

impl Wiring {
    /// Builds a wiring from 26 uppercase ASCII letters at compile time.
    ///
    /// # Panics
    /// Panics (a compile error in `const`/`static` context) if the table
    /// contains a non-uppercase letter or is not a bijection.
    pub const fn from_letters(letters: &[u8; N]) -> Wiring {
        let mut forward = [0u8; N];
        let mut backward = [0u8; N];
        let mut seen = [false; N];
        let mut i = 0;
        while i < N {
            let c = letters[i];
            assert!(c.is_ascii_uppercase(), "wiring must be uppercase A-Z");
            let out = c - b'A';
            assert!(!seen[out as usize], "wiring is not a bijection");
            seen[out as usize] = true;
            forward[i] = out;
            backward[out as usize] = i as u8;
            i += 1;
        }
        Wiring { forward, backward }
    }

    /// Parses a wiring from a 26-letter string (either case).
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidWiring`] if the length is not 26 or a letter repeats.
    /// - [`EnigmaError::InvalidLetter`] if a character is not A-Z.
    pub fn parse(letters: &str) -> Result<Wiring, EnigmaError> {
        let count = letters.chars().count();
        if count != N {
            return Err(EnigmaError::InvalidWiring(format!(
                "expected {} letters, found {}",
                N, count
            )));
        }
        let mut forward = [0u8; N];
        let mut backward = [0u8; N];
        let mut seen = [false; N];
        for (i, c) in letters.chars().enumerate() {
            let out = alphabet::letter_to_index(c)?;
            if seen[out as usize] {
                return Err(EnigmaError::InvalidWiring(format!(
                    "letter '{}' appears more than once",
                    alphabet::index_to_letter(out)
                )));
            }
            seen[out as usize] = true;
            forward[i] = out;
            backward[out as usize] = i as u8;
        }
        Ok(Wiring { forward, backward })
    }

    /// Maps an index through the wiring in the forward direction.
    pub fn forward(&self, index: u8) -> u8 {
        self.forward[index as usize]
    }

    /// Maps an index through the wiring in the backward (inverse) direction.
    pub fn backward(&self, index: u8) -> u8 {
        self.backward[index as usize]
    }

    /// Returns true if applying the wiring twice is the identity.
    pub fn is_involution(&self) -> bool {
        (0..LETTERS).all(|i| self.forward(self.forward(i)) == i)
    }

    /// Returns true if some letter is wired to itself.
    pub fn has_fixed_point(&self) -> bool {
        (0..LETTERS).any(|i| self.forward(i) == i)
    }

    /// Returns the forward table as an uppercase string.
    pub fn letters(&self) -> String {
        self.forward.iter().map(|&i| alphabet::index_to_letter(i)).collect()
    }
}

/// Passes a signal through a rotated wiring table.
///
/// `table` is the forward or backward half of a [`Wiring`]. The entry
/// contact is shifted by the rotor's position minus its ring setting,
/// looked up, and shifted back:
///
/// ```text
/// shifted = (index + position - ring + 26) mod 26
/// mapped  = table(shifted)
/// output  = (mapped - position + ring + 26) mod 26
/// ```
///
/// Pure and total over indices 0..26.
pub fn through(table: impl Fn(u8) -> u8, index: u8, position: u8, ring: u8) -> u8 {
    let shifted = alphabet::sub(alphabet::add(index, position), ring);
    let mapped = table(shifted);
    alphabet::add(alphabet::sub(mapped, position), ring)
}
