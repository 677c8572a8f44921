//! Built-in rotor and reflector tables.
//!
//! Wirings for the Enigma I / M3 wheels I-V and reflectors A, B and C.
//! The tables are `static` data built at compile time; nothing in the
//! crate can rebind them.

use crate::wiring::Wiring;

/// A catalog rotor: its wiring and the window letter of its notch.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorSpec {
    /// Roman-numeral name of the wheel.
    pub name: &'static str,
    /// Internal wiring.
    pub wiring: Wiring,
    /// Position (0..26) at which this rotor carries its left neighbor.
    pub notch: u8,
}

/// A catalog reflector.
#[derive(Debug, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Letter name of the reflector.
    pub name: &'static str,
    /// Involutive wiring.
    pub wiring: Wiring,
}

const fn notch(letter: u8) -> u8 {
    letter - b'A'
}

/// Rotors I-V, addressed by 0-based index.
pub static ROTORS: [RotorSpec; 5] = [
    RotorSpec {
        name: "I",
        wiring: Wiring::from_letters(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
        notch: notch(b'Q'),
    },
    RotorSpec {
        name: "II",
        wiring: Wiring::from_letters(b"AJDKSIRUXBLHWTMCQGZNPYFVOE"),
        notch: notch(b'E'),
    },
    RotorSpec {
        name: "III",
        wiring: Wiring::from_letters(b"BDFHJLCPRTXVZNYEIWGAKMUSQO"),
        notch: notch(b'V'),
    },
    RotorSpec {
        name: "IV",
        wiring: Wiring::from_letters(b"ESOVPZJAYQUIRHXLNFTGKDCMWB"),
        notch: notch(b'J'),
    },
    RotorSpec {
        name: "V",
        wiring: Wiring::from_letters(b"VZBRGITYUPSDNHLXAWMJQOFECK"),
        notch: notch(b'Z'),
    },
];

/// Reflectors A, B and C.
pub static REFLECTORS: [ReflectorSpec; 3] = [
    ReflectorSpec {
        name: "A",
        wiring: Wiring::from_letters(b"EJMZALYXVBWFCRQUONTSPIKHGD"),
    },
    ReflectorSpec {
        name: "B",
        wiring: Wiring::from_letters(b"YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    },
    ReflectorSpec {
        name: "C",
        wiring: Wiring::from_letters(b"FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    },
];

/// Name of the reflector used when none is configured.
pub const DEFAULT_REFLECTOR: &str = "B";

/// Looks up a catalog rotor by 0-based index.
pub fn rotor(index: usize) -> Option<&'static RotorSpec> {
    ROTORS.get(index)
}

/// Looks up a catalog reflector by name (case-insensitive).
pub fn reflector(name: &str) -> Option<&'static ReflectorSpec> {
    REFLECTORS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
}
