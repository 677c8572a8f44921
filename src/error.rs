//! Error types for the enigmacrypt library.
//!
//! Every error is a configuration error raised while a machine is being
//! built. Once a machine exists, processing text cannot fail.

use thiserror::Error;

/// Errors produced by the enigmacrypt library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    /// Rotor catalog index is outside the catalog.
    #[error("Rotor index {index} in slot {slot} is not in the catalog")]
    UnknownRotor {
        /// Machine slot (0 = left, 2 = right).
        slot: usize,
        /// The rejected catalog index.
        index: usize,
    },
    /// The same catalog rotor was chosen for more than one slot.
    #[error("Rotor {index} is used more than once")]
    DuplicateRotor {
        /// The repeated catalog index.
        index: usize,
    },
    /// Starting position is outside [0, 25].
    #[error("Position {value} in slot {slot} is outside the range 0..=25")]
    PositionOutOfRange {
        /// Machine slot (0 = left, 2 = right).
        slot: usize,
        /// The rejected value.
        value: i64,
    },
    /// Ring setting is outside [0, 25].
    #[error("Ring setting {value} in slot {slot} is outside the range 0..=25")]
    RingSettingOutOfRange {
        /// Machine slot (0 = left, 2 = right).
        slot: usize,
        /// The rejected value.
        value: i64,
    },
    /// A letter A-Z was required.
    #[error("'{0}' is not a letter A-Z")]
    InvalidLetter(char),
    /// A plugboard letter appears in more than one pair.
    #[error("Plugboard letter '{0}' is used more than once")]
    PlugboardConflict(char),
    /// Reflector is neither a catalog name nor a 26-letter table.
    #[error("Unknown reflector '{0}'")]
    UnknownReflector(String),
    /// A wiring table is not a valid permutation for its role.
    #[error("Invalid wiring: {0}")]
    InvalidWiring(String),
    /// A plugboard group in pair notation is not exactly two letters.
    #[error("Invalid plugboard pair '{0}'")]
    InvalidPlugboardPair(String),
    /// Configuration text could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
    /// Configuration could not be written as TOML.
    #[error("Configuration serialize error: {0}")]
    ConfigSerialize(String),
}

impl From<toml::de::Error> for EnigmaError {
    fn from(err: toml::de::Error) -> Self {
        EnigmaError::ConfigParse(err.to_string())
    }
}

impl From<toml::ser::Error> for EnigmaError {
    fn from(err: toml::ser::Error) -> Self {
        EnigmaError::ConfigSerialize(err.to_string())
    }
}
