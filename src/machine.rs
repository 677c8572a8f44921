//! EnigmaMachine: the cipher engine.
//!
//! Composes three rotors (left, middle, right), a reflector and a
//! plugboard. Owns the stepping protocol, including the double-step of
//! the middle rotor, and the per-character signal path.
//!
//! The only state that changes while processing is the three rotor
//! positions. Everything else is fixed when the machine is built.

use crate::config::{self, MachineConfig, Setting, ROTOR_SLOTS};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet;

/// Slot index of the leftmost (slowest) rotor.
const LEFT: usize = 0;
/// Slot index of the middle rotor.
const MIDDLE: usize = 1;
/// Slot index of the rightmost (fastest) rotor.
const RIGHT: usize = 2;

/// Three-rotor cipher machine.
///
/// # Architecture
///
/// ```text
/// key ─► Plugboard ─► Right ─► Middle ─► Left ─► Reflector
///                                                    │
/// lamp ◄─ Plugboard ◄─ Right ◄─ Middle ◄─ Left ◄─────┘
/// ```
///
/// Before each letter the rotors step; then the signal runs the path
/// above. Because the reflector is an involution and the path is
/// symmetric, a machine started from the same configuration turns
/// ciphertext back into plaintext.
///
/// A machine is one session: every mutating method takes `&mut self`.
/// Independent sessions clone the machine or build another one from the
/// same [`MachineConfig`].
#[derive(Debug, Clone)]
pub struct EnigmaMachine {
    rotors: [Rotor; ROTOR_SLOTS],
    reflector: Reflector,
    plugboard: Plugboard,
    start_positions: [u8; ROTOR_SLOTS],
}

impl EnigmaMachine {
    /// Builds a machine from a configuration.
    ///
    /// # Errors
    /// Returns the first configuration problem found; see
    /// [`MachineConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{EnigmaMachine, MachineConfig};
    ///
    /// let mut machine = EnigmaMachine::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.process("AAAAA"), "BDZGO");
    /// ```
    ///
    /// ```
    /// use enigmacrypt::{EnigmaMachine, MachineConfig};
    ///
    /// let config = MachineConfig::default().with_plugboard(vec![['A', 'B'], ['A', 'C']]);
    /// assert!(EnigmaMachine::new(&config).is_err());
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self, EnigmaError> {
        let resolved = config.resolve().map_err(|e| {
            tracing::warn!(error = %e, "Rejected machine configuration");
            e
        })?;

        let rotors = [LEFT, MIDDLE, RIGHT].map(|slot| {
            Rotor::new(
                resolved.rotors[slot],
                resolved.positions[slot],
                resolved.rings[slot],
            )
        });

        tracing::debug!(
            left = rotors[LEFT].name(),
            middle = rotors[MIDDLE].name(),
            right = rotors[RIGHT].name(),
            reflector = resolved.reflector.name(),
            plugboard_pairs = resolved.plugboard.pairs().len(),
            "Built machine"
        );

        Ok(EnigmaMachine {
            rotors,
            reflector: resolved.reflector,
            plugboard: resolved.plugboard,
            start_positions: resolved.positions,
        })
    }

    /// Parses a TOML configuration and builds a machine from it.
    ///
    /// # Errors
    /// [`EnigmaError::ConfigParse`] for malformed text, otherwise the same
    /// errors as [`new`](Self::new).
    pub fn from_toml_str(text: &str) -> Result<Self, EnigmaError> {
        let config = MachineConfig::from_toml_str(text).map_err(|e| {
            tracing::warn!(error = %e, "Rejected machine configuration");
            e
        })?;
        Self::new(&config)
    }

    /// Encrypts (or decrypts) a message.
    ///
    /// Letters are uppercased and transformed; every other character is
    /// copied unchanged and does not move the rotors.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{EnigmaMachine, MachineConfig};
    ///
    /// let config = MachineConfig::default().with_positions(['M', 'C', 'K']);
    /// let mut encoder = EnigmaMachine::new(&config).unwrap();
    /// let mut decoder = EnigmaMachine::new(&config).unwrap();
    ///
    /// let ciphertext = encoder.process("Hello, World!");
    /// assert_eq!(&ciphertext[5..7], ", ");
    /// assert_eq!(decoder.process(&ciphertext), "HELLO, WORLD!");
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        let output: String = text
            .chars()
            .map(|c| self.encrypt_char(c.to_ascii_uppercase()))
            .collect();
        tracing::trace!(chars = output.chars().count(), "Processed message");
        output
    }

    /// Encrypts a single character.
    ///
    /// Non-letters are returned unchanged without stepping. A letter of
    /// either case steps the rotors once and comes back uppercase.
    pub fn encrypt_char(&mut self, c: char) -> char {
        let index = match alphabet::letter_to_index(c) {
            Ok(index) => index,
            Err(_) => return c,
        };
        self.step_rotors();
        alphabet::index_to_letter(self.signal_path(index))
    }

    /// Advances the rotors as one keypress does.
    ///
    /// Both notch checks read the positions before anything moves:
    /// - middle at its notch: left and middle step (double-step);
    /// - otherwise right at its notch: middle steps;
    /// - the right rotor always steps.
    pub fn step_rotors(&mut self) {
        let middle_at_notch = self.rotors[MIDDLE].at_notch();
        let right_at_notch = self.rotors[RIGHT].at_notch();

        if middle_at_notch {
            self.rotors[LEFT].step();
            self.rotors[MIDDLE].step();
        } else if right_at_notch {
            self.rotors[MIDDLE].step();
        }
        self.rotors[RIGHT].step();
    }

    /// Runs an index through the wiring at the current rotor positions.
    ///
    /// Does not step. For a fixed rotor state this is an involution.
    fn signal_path(&self, index: u8) -> u8 {
        let mut signal = self.plugboard.swap(index);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter() {
            signal = rotor.backward(signal);
        }
        self.plugboard.swap(signal)
    }

    /// Returns the rotor positions, left to right.
    pub fn positions(&self) -> [u8; ROTOR_SLOTS] {
        [
            self.rotors[LEFT].position(),
            self.rotors[MIDDLE].position(),
            self.rotors[RIGHT].position(),
        ]
    }

    /// Returns the letters showing in the rotor windows, e.g. `"ADU"`.
    pub fn window(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Returns the mounted rotors, left to right.
    pub fn rotors(&self) -> &[Rotor; ROTOR_SLOTS] {
        &self.rotors
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Returns the rotors to the positions the machine was built with.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigmacrypt::{EnigmaMachine, MachineConfig};
    ///
    /// let mut machine = EnigmaMachine::new(&MachineConfig::default()).unwrap();
    /// let ciphertext = machine.process("ATTACK AT DAWN");
    /// machine.reset();
    /// assert_eq!(machine.process(&ciphertext), "ATTACK AT DAWN");
    /// ```
    pub fn reset(&mut self) {
        for (rotor, &position) in self.rotors.iter_mut().zip(self.start_positions.iter()) {
            rotor.set_position(position);
        }
    }

    /// Moves the rotors to new window positions, left to right.
    ///
    /// The new positions become the ones [`reset`](Self::reset) returns to.
    ///
    /// # Errors
    /// [`EnigmaError::PositionOutOfRange`] or [`EnigmaError::InvalidLetter`];
    /// on error the machine is unchanged.
    pub fn set_positions<S: Into<Setting>>(
        &mut self,
        positions: [S; ROTOR_SLOTS],
    ) -> Result<(), EnigmaError> {
        let settings: [Setting; ROTOR_SLOTS] = positions.map(Into::into);
        let values = config::resolve_settings(&settings, |slot, value| {
            EnigmaError::PositionOutOfRange { slot, value }
        })?;
        self.start_positions = values;
        self.reset();
        Ok(())
    }
}
