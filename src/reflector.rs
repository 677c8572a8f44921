//! Reflector: the stateless turnaround wheel.
//!
//! Sends the signal back through the rotors along a different path.
//! Because the wiring is an involution, the whole machine becomes its own
//! inverse for a fixed rotor state.

use crate::catalog;
use crate::error::EnigmaError;
use crate::utils::alphabet::LETTERS;
use crate::wiring::Wiring;

/// Name reported for reflectors built from a custom table.
const CUSTOM_NAME: &str = "custom";

/// An involutive permutation with no moving parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: &'static str,
    wiring: Wiring,
}

impl Reflector {
    /// Resolves a reflector from a catalog name (`"A"`, `"B"`, `"C"`) or a
    /// custom 26-letter table.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownReflector`] if `choice` is neither a catalog
    ///   name nor 26 characters long.
    /// - [`EnigmaError::InvalidWiring`] / [`EnigmaError::InvalidLetter`] if
    ///   a custom table is not an involutive permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::Reflector;
    ///
    /// let ukw = Reflector::resolve("B").unwrap();
    /// assert_eq!(ukw.reflect(0), 24); // A <-> Y
    /// assert!(Reflector::resolve("Q").is_err());
    /// ```
    pub fn resolve(choice: &str) -> Result<Self, EnigmaError> {
        if let Some(spec) = catalog::reflector(choice) {
            return Ok(Reflector {
                name: spec.name,
                wiring: spec.wiring,
            });
        }
        if choice.chars().count() != LETTERS as usize {
            return Err(EnigmaError::UnknownReflector(choice.to_string()));
        }
        Self::custom(Wiring::parse(choice)?)
    }

    /// Builds a reflector from a custom wiring.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the wiring is not an involution.
    pub fn custom(wiring: Wiring) -> Result<Self, EnigmaError> {
        if !wiring.is_involution() {
            return Err(EnigmaError::InvalidWiring(
                "reflector must be an involution".to_string(),
            ));
        }
        Ok(Reflector {
            name: CUSTOM_NAME,
            wiring,
        })
    }

    /// Reflects an index.
    pub fn reflect(&self, index: u8) -> u8 {
        self.wiring.forward(index)
    }

    /// Returns the catalog name, or `"custom"`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}
