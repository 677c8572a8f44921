//! enigmacrypt: three-rotor cipher-machine engine.
//!
//! Simulates the signal path and rotor stepping of an Enigma-class
//! machine: a plugboard, three rotors with ring settings and turnover
//! notches, and a reflector. Stepping reproduces the double-step of the
//! middle rotor. The machine is reciprocal: two machines built from the
//! same configuration undo each other.
//!
//! # Architecture
//!
//! ```text
//! Wiring      (pure permutation + inverse, offset transform)
//!     ↕ used by
//! Rotor       (wiring + notch + ring setting + position)
//! Reflector   (involutive wiring)     Plugboard (letter-pair swaps)
//!     ↕ composed by
//! EnigmaMachine (stepping protocol + per-character signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigmacrypt::{EnigmaMachine, MachineConfig};
//!
//! let config = MachineConfig::default()
//!     .with_rotors([1, 3, 4])
//!     .with_positions(['X', 'W', 'B'])
//!     .with_rings([0u8, 12, 5])
//!     .with_plugboard(vec![['A', 'Z'], ['E', 'R']]);
//!
//! let mut encoder = EnigmaMachine::new(&config).unwrap();
//! let ciphertext = encoder.process("Meet at noon");
//! assert_ne!(ciphertext, "MEET AT NOON");
//!
//! let mut decoder = EnigmaMachine::new(&config).unwrap();
//! assert_eq!(decoder.process(&ciphertext), "MEET AT NOON");
//! ```
//!
//! Load a configuration from TOML:
//!
//! ```
//! use enigmacrypt::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::from_toml_str(
//!     r#"
//!     rotors = [0, 1, 2]
//!     positions = ["A", "A", "A"]
//!     rings = ["B", "B", "B"]
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(machine.process("AAAAA"), "EWTYX");
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod error;
pub mod utils;
pub mod wiring;

mod config;
mod machine;
mod plugboard;
mod reflector;
mod rotor;

pub use config::{MachineConfig, Setting, ROTOR_SLOTS};
pub use error::EnigmaError;
pub use machine::EnigmaMachine;
pub use plugboard::{parse_pairs, Plugboard};
pub use reflector::Reflector;
pub use rotor::Rotor;
pub use wiring::Wiring;
