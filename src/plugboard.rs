//! Plugboard: symmetric letter-pair substitution.
//!
//! The plugboard sits between the keyboard and the rotors and is
//! traversed twice per keypress, once on the way in and once on the way
//! out. Each cable swaps two letters; unplugged letters pass straight
//! through.

use crate::error::EnigmaError;
use crate::utils::alphabet::{self, LETTERS};

/// A partial involution over the alphabet, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: [u8; LETTERS as usize],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugboard {
    /// Creates a plugboard with no cables (identity).
    pub fn new() -> Self {
        let mut table = [0u8; LETTERS as usize];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Plugboard { table }
    }

    /// Creates a plugboard from letter pairs.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidLetter`] if a pair contains a non A-Z character.
    /// - [`EnigmaError::PlugboardConflict`] if a letter appears in two pairs
    ///   or is paired with itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Plugboard;
    ///
    /// let board = Plugboard::from_pairs(&[['A', 'B'], ['C', 'D']]).unwrap();
    /// assert_eq!(board.swap(0), 1);
    /// assert!(Plugboard::from_pairs(&[['A', 'B'], ['A', 'C']]).is_err());
    /// ```
    pub fn from_pairs(pairs: &[[char; 2]]) -> Result<Self, EnigmaError> {
        let mut board = Self::new();
        let mut used = [false; LETTERS as usize];
        for &[a, b] in pairs {
            let ia = alphabet::letter_to_index(a)?;
            let ib = alphabet::letter_to_index(b)?;
            if used[ia as usize] {
                return Err(EnigmaError::PlugboardConflict(alphabet::index_to_letter(ia)));
            }
            used[ia as usize] = true;
            if used[ib as usize] {
                return Err(EnigmaError::PlugboardConflict(alphabet::index_to_letter(ib)));
            }
            used[ib as usize] = true;
            board.table[ia as usize] = ib;
            board.table[ib as usize] = ia;
        }
        Ok(board)
    }

    /// Swaps an index through the plugboard.
    ///
    /// Returns the paired index, or the input if the letter is unplugged.
    pub fn swap(&self, index: u8) -> u8 {
        self.table[index as usize]
    }

    /// Returns the configured pairs in alphabetical order of their first letter.
    pub fn pairs(&self) -> Vec<[char; 2]> {
        (0..LETTERS)
            .filter(|&i| self.table[i as usize] > i)
            .map(|i| {
                [
                    alphabet::index_to_letter(i),
                    alphabet::index_to_letter(self.table[i as usize]),
                ]
            })
            .collect()
    }

    /// Returns true if no cables are plugged.
    pub fn is_empty(&self) -> bool {
        (0..LETTERS).all(|i| self.table[i as usize] == i)
    }
}

/// Parses whitespace-separated pair notation such as `"AB CD ef"`.
///
/// Only the shape is checked here; letter conflicts are reported by
/// [`Plugboard::from_pairs`].
///
/// # Errors
/// Returns [`EnigmaError::InvalidLetter`] for non-letter characters, or
/// [`EnigmaError::InvalidPlugboardPair`] for a group that is not two
/// characters long.
pub fn parse_pairs(text: &str) -> Result<Vec<[char; 2]>, EnigmaError> {
    text.split_whitespace()
        .map(|group| {
            let letters: Vec<char> = group.chars().collect();
            if letters.len() != 2 {
                return Err(EnigmaError::InvalidPlugboardPair(group.to_string()));
            }
            let a = alphabet::letter_to_index(letters[0])?;
            let b = alphabet::letter_to_index(letters[1])?;
            Ok([alphabet::index_to_letter(a), alphabet::index_to_letter(b)])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_identity() {
        let board = Plugboard::new();
        assert!(board.is_empty());
        for i in 0..LETTERS {
            assert_eq!(board.swap(i), i);
        }
    }

    #[test]
    fn test_pairs_swap_both_ways() {
        let board = Plugboard::from_pairs(&[['A', 'Z'], ['m', 'q']]).unwrap();
        assert_eq!(board.swap(0), 25);
        assert_eq!(board.swap(25), 0);
        assert_eq!(board.swap(12), 16);
        assert_eq!(board.swap(16), 12);
        assert_eq!(board.swap(1), 1);
        assert!(!board.is_empty());
    }

    #[test]
    fn test_swap_is_involution() {
        let board = Plugboard::from_pairs(&[['A', 'B'], ['C', 'D'], ['X', 'Y']]).unwrap();
        for i in 0..LETTERS {
            assert_eq!(board.swap(board.swap(i)), i);
        }
    }

    #[test]
    fn test_rejects_letter_in_two_pairs() {
        let result = Plugboard::from_pairs(&[['A', 'B'], ['A', 'C']]);
        assert_eq!(result, Err(EnigmaError::PlugboardConflict('A')));
        let result = Plugboard::from_pairs(&[['A', 'B'], ['C', 'b']]);
        assert_eq!(result, Err(EnigmaError::PlugboardConflict('B')));
    }

    #[test]
    fn test_rejects_self_pair() {
        let result = Plugboard::from_pairs(&[['E', 'E']]);
        assert_eq!(result, Err(EnigmaError::PlugboardConflict('E')));
    }

    #[test]
    fn test_rejects_non_letter() {
        let result = Plugboard::from_pairs(&[['A', '1']]);
        assert_eq!(result, Err(EnigmaError::InvalidLetter('1')));
    }

    #[test]
    fn test_pairs_listing() {
        let board = Plugboard::from_pairs(&[['Z', 'A'], ['C', 'D']]).unwrap();
        assert_eq!(board.pairs(), vec![['A', 'Z'], ['C', 'D']]);
    }

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs("ab  CD\tEf").unwrap();
        assert_eq!(pairs, vec![['A', 'B'], ['C', 'D'], ['E', 'F']]);
        assert!(parse_pairs("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_pairs_rejects_bad_groups() {
        assert_eq!(
            parse_pairs("AB CDE"),
            Err(EnigmaError::InvalidPlugboardPair("CDE".to_string()))
        );
        assert_eq!(
            parse_pairs("A"),
            Err(EnigmaError::InvalidPlugboardPair("A".to_string()))
        );
        assert_eq!(parse_pairs("A1"), Err(EnigmaError::InvalidLetter('1')));
    }
}
