//! Rotor: a rotating wiring with a ring setting and a turnover notch.
//!
//! Implements the moving part of the machine. A rotor couples a fixed
//! catalog [`Wiring`](crate::wiring::Wiring) with two offsets: the
//! mutable rotational `position` (what shows in the window) and the fixed
//! `ring_setting` (the wiring core's offset against the alphabet ring).
//!
//! The permutation math lives in [`wiring::through`](crate::wiring::through);
//! a rotor only contributes its two offsets and its position state.

use crate::catalog::RotorSpec;
use crate::utils::alphabet::{self, LETTERS};
use crate::wiring;

/// A catalog rotor mounted in the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    spec: &'static RotorSpec,
    position: u8,
    ring_setting: u8,
}

impl Rotor {
    /// Mounts a catalog rotor at the given position and ring setting.
    ///
    /// Callers validate the ranges; the machine rejects out-of-range
    /// values before any rotor is built.
    pub(crate) fn new(spec: &'static RotorSpec, position: u8, ring_setting: u8) -> Self {
        debug_assert!(position < LETTERS && ring_setting < LETTERS);
        Rotor {
            spec,
            position,
            ring_setting,
        }
    }

    /// Advances the rotor by one position, wrapping from Z to A.
    pub fn step(&mut self) {
        self.position = alphabet::add(self.position, 1);
    }

    /// Returns true if the rotor currently sits on its notch.
    ///
    /// Evaluated before any rotor moves on a keypress, so that all
    /// stepping decisions use the same snapshot.
    pub fn at_notch(&self) -> bool {
        self.position == self.spec.notch
    }

    /// Passes an index through the rotor toward the reflector.
    pub fn forward(&self, index: u8) -> u8 {
        wiring::through(
            |i| self.spec.wiring.forward(i),
            index,
            self.position,
            self.ring_setting,
        )
    }

    /// Passes an index through the rotor on the return path from the reflector.
    pub fn backward(&self, index: u8) -> u8 {
        wiring::through(
            |i| self.spec.wiring.backward(i),
            index,
            self.position,
            self.ring_setting,
        )
    }

    // --- Getters and Setters ---

    /// Returns the catalog name of the rotor.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Returns the current position (0..26).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Returns the letter showing in the window.
    pub fn window(&self) -> char {
        alphabet::index_to_letter(self.position)
    }

    /// Returns the ring setting (0..26).
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    /// Returns the notch position (0..26).
    pub fn notch(&self) -> u8 {
        self.spec.notch
    }

    /// Sets the position directly. The value must already be validated.
    pub(crate) fn set_position(&mut self, position: u8) {
        debug_assert!(position < LETTERS);
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ROTORS;

    #[test]
    fn test_new_rotor_values() {
        let rotor = Rotor::new(&ROTORS[2], 3, 7);
        assert_eq!(rotor.name(), "III");
        assert_eq!(rotor.position(), 3);
        assert_eq!(rotor.window(), 'D');
        assert_eq!(rotor.ring_setting(), 7);
        assert_eq!(rotor.notch(), 21);
    }

    #[test]
    fn test_step_wraps() {
        let mut rotor = Rotor::new(&ROTORS[0], 24, 0);
        rotor.step();
        assert_eq!(rotor.position(), 25);
        rotor.step();
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn test_step_26_times_returns_home() {
        let mut rotor = Rotor::new(&ROTORS[4], 11, 3);
        for _ in 0..26 {
            rotor.step();
        }
        assert_eq!(rotor.position(), 11);
        assert_eq!(rotor.ring_setting(), 3);
    }

    #[test]
    fn test_at_notch() {
        // Rotor I notch is Q
        let mut rotor = Rotor::new(&ROTORS[0], 15, 0);
        assert!(!rotor.at_notch());
        rotor.step();
        assert!(rotor.at_notch());
        rotor.step();
        assert!(!rotor.at_notch());
    }

    #[test]
    fn test_forward_at_origin_matches_wiring() {
        let rotor = Rotor::new(&ROTORS[0], 0, 0);
        // A -> E, B -> K, Z -> J
        assert_eq!(rotor.forward(0), 4);
        assert_eq!(rotor.forward(1), 10);
        assert_eq!(rotor.forward(25), 9);
    }

    #[test]
    fn test_backward_inverts_forward() {
        for spec in ROTORS.iter() {
            for position in 0..LETTERS {
                let rotor = Rotor::new(spec, position, (position * 7) % LETTERS);
                for i in 0..LETTERS {
                    assert_eq!(rotor.backward(rotor.forward(i)), i);
                }
            }
        }
    }

    #[test]
    fn test_equal_position_and_ring_cancel() {
        let plain = Rotor::new(&ROTORS[1], 0, 0);
        let shifted = Rotor::new(&ROTORS[1], 5, 5);
        for i in 0..LETTERS {
            assert_eq!(shifted.forward(i), plain.forward(i));
        }
    }

    #[test]
    fn test_set_position() {
        let mut rotor = Rotor::new(&ROTORS[3], 0, 0);
        rotor.set_position(9);
        assert_eq!(rotor.position(), 9);
        assert!(rotor.at_notch());
    }
}
