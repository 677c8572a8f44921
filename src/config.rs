//! Machine configuration.
//!
//! [`MachineConfig`] describes everything needed to build a machine: the
//! rotor choice, starting positions, ring settings, plugboard cables and
//! reflector. It can be built in code or deserialized from TOML; missing
//! fields fall back to [`MachineConfig::default`].
//!
//! ```toml
//! rotors = [0, 1, 2]            # I, II, III (left to right)
//! positions = ["A", "D", "U"]   # letters or indices 0..=25
//! rings = [0, 0, 0]
//! plugboard = [["A", "B"], ["C", "D"]]
//! reflector = "B"
//! ```
//!
//! All checks happen once, in [`MachineConfig::validate`], before any
//! character is processed. Out-of-range values are rejected, never wrapped.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, RotorSpec};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::utils::alphabet::{self, LETTERS};

/// Number of rotor slots in the machine.
pub const ROTOR_SLOTS: usize = 3;

/// A position or ring setting, given either as an index or a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Setting {
    /// Index 0..=25. Stored wide so that any integer in a configuration
    /// file reaches validation and is reported against its slot.
    Index(i64),
    /// Letter A-Z (either case).
    Letter(char),
}

impl Setting {
    /// Returns the raw index without range checking.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidLetter`] for a non A-Z letter.
    fn raw(&self) -> Result<i64, EnigmaError> {
        match *self {
            Setting::Index(value) => Ok(value),
            Setting::Letter(c) => alphabet::letter_to_index(c).map(i64::from),
        }
    }
}

impl Default for Setting {
    fn default() -> Self {
        Setting::Index(0)
    }
}

impl From<u8> for Setting {
    fn from(value: u8) -> Self {
        Setting::Index(i64::from(value))
    }
}

impl From<char> for Setting {
    fn from(c: char) -> Self {
        Setting::Letter(c)
    }
}

/// Configuration for building an [`EnigmaMachine`](crate::EnigmaMachine).
///
/// Slot order is always left, middle, right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// 0-based catalog indices (0 = I ... 4 = V).
    pub rotors: [usize; ROTOR_SLOTS],
    /// Starting positions.
    pub positions: [Setting; ROTOR_SLOTS],
    /// Ring settings.
    pub rings: [Setting; ROTOR_SLOTS],
    /// Plugboard cables.
    pub plugboard: Vec<[char; 2]>,
    /// Catalog reflector name or a custom 26-letter table.
    pub reflector: String,
}

impl Default for MachineConfig {
    /// Rotors I-II-III, all positions and rings at A, no cables, reflector B.
    fn default() -> Self {
        MachineConfig {
            rotors: [0, 1, 2],
            positions: [Setting::default(); ROTOR_SLOTS],
            rings: [Setting::default(); ROTOR_SLOTS],
            plugboard: Vec::new(),
            reflector: catalog::DEFAULT_REFLECTOR.to_string(),
        }
    }
}

/// A configuration whose every field has been checked and resolved.
pub(crate) struct Resolved {
    pub(crate) rotors: [&'static RotorSpec; ROTOR_SLOTS],
    pub(crate) positions: [u8; ROTOR_SLOTS],
    pub(crate) rings: [u8; ROTOR_SLOTS],
    pub(crate) plugboard: Plugboard,
    pub(crate) reflector: Reflector,
}

impl MachineConfig {
    /// Parses a configuration from TOML text.
    ///
    /// Only the syntax and field types are checked here; call
    /// [`validate`](Self::validate) or build a machine to check the values.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ConfigParse`] if the text is not a valid configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::MachineConfig;
    ///
    /// let config = MachineConfig::from_toml_str("rotors = [3, 1, 4]").unwrap();
    /// assert_eq!(config.rotors, [3, 1, 4]);
    /// assert_eq!(config.reflector, "B");
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, EnigmaError> {
        Ok(toml::from_str(text)?)
    }

    /// Serializes the configuration to TOML text.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ConfigSerialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, EnigmaError> {
        Ok(toml::to_string(self)?)
    }

    /// Sets the rotor catalog indices, left to right.
    pub fn with_rotors(mut self, rotors: [usize; ROTOR_SLOTS]) -> Self {
        self.rotors = rotors;
        self
    }

    /// Sets the starting positions, left to right.
    pub fn with_positions<S: Into<Setting>>(mut self, positions: [S; ROTOR_SLOTS]) -> Self {
        self.positions = positions.map(Into::into);
        self
    }

    /// Sets the ring settings, left to right.
    pub fn with_rings<S: Into<Setting>>(mut self, rings: [S; ROTOR_SLOTS]) -> Self {
        self.rings = rings.map(Into::into);
        self
    }

    /// Sets the plugboard cables.
    pub fn with_plugboard(mut self, pairs: Vec<[char; 2]>) -> Self {
        self.plugboard = pairs;
        self
    }

    /// Sets the reflector by catalog name or custom table.
    pub fn with_reflector(mut self, reflector: &str) -> Self {
        self.reflector = reflector.to_string();
        self
    }

    /// Checks every field without building a machine.
    ///
    /// # Errors
    /// The first problem found, in this order: rotors, positions, ring
    /// settings, plugboard, reflector.
    pub fn validate(&self) -> Result<(), EnigmaError> {
        self.resolve().map(|_| ())
    }

    pub(crate) fn resolve(&self) -> Result<Resolved, EnigmaError> {
        let rotors = resolve_rotors(&self.rotors)?;
        let positions = resolve_settings(&self.positions, |slot, value| {
            EnigmaError::PositionOutOfRange { slot, value }
        })?;
        let rings = resolve_settings(&self.rings, |slot, value| {
            EnigmaError::RingSettingOutOfRange { slot, value }
        })?;
        let plugboard = Plugboard::from_pairs(&self.plugboard)?;
        let reflector = Reflector::resolve(&self.reflector)?;
        Ok(Resolved {
            rotors,
            positions,
            rings,
            plugboard,
            reflector,
        })
    }
}

fn resolve_rotors(
    indices: &[usize; ROTOR_SLOTS],
) -> Result<[&'static RotorSpec; ROTOR_SLOTS], EnigmaError> {
    let mut specs = [&catalog::ROTORS[0]; ROTOR_SLOTS];
    for (slot, &index) in indices.iter().enumerate() {
        specs[slot] = catalog::rotor(index).ok_or(EnigmaError::UnknownRotor { slot, index })?;
        if indices[..slot].contains(&index) {
            return Err(EnigmaError::DuplicateRotor { index });
        }
    }
    Ok(specs)
}

/// Resolves settings in slot order; `out_of_range` builds the error for a
/// value outside 0..=25.
pub(crate) fn resolve_settings(
    settings: &[Setting; ROTOR_SLOTS],
    out_of_range: impl Fn(usize, i64) -> EnigmaError,
) -> Result<[u8; ROTOR_SLOTS], EnigmaError> {
    let mut values = [0u8; ROTOR_SLOTS];
    for (slot, setting) in settings.iter().enumerate() {
        let value = setting.raw()?;
        values[slot] = u8::try_from(value)
            .ok()
            .filter(|&v| v < LETTERS)
            .ok_or_else(|| out_of_range(slot, value))?;
    }
    Ok(values)
}
