//! Regression tests for the rotor stepping protocol.
//!
//! Both notch checks must read the positions before any rotor moves.
//! Checking the middle rotor after the right rotor has carried it
//! produces an extra left-rotor step; dropping the middle rotor's
//! self-step loses the double-step. Either mistake only shows up as
//! wrong window sequences, so these tests pin the sequences down.

use enigmacrypt::{EnigmaMachine, MachineConfig};

/// Rotor II notch (E).
const NOTCH_II: u8 = 4;
/// Rotor III notch (V).
const NOTCH_III: u8 = 21;

fn machine_at(positions: [u8; 3]) -> EnigmaMachine {
    EnigmaMachine::new(&MachineConfig::default().with_positions(positions)).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Single-tick transitions
// ═══════════════════════════════════════════════════════════════════════

/// 26 presses from AAA turn the right rotor once and carry the middle
/// rotor exactly once.
#[test]
fn plain_stepping_26_presses() {
    let mut machine = machine_at([0, 0, 0]);
    for i in 0..26 {
        machine.encrypt_char('A');
        assert_eq!(machine.positions()[0], 0, "left moved at press {}", i);
    }
    assert_eq!(machine.positions(), [0, 1, 0]);
}

/// Middle rotor on its notch: left, middle and right all advance.
#[test]
fn double_step_in_one_tick() {
    let mut machine = machine_at([0, NOTCH_II, 0]);
    machine.encrypt_char('A');
    assert_eq!(machine.positions(), [1, NOTCH_II + 1, 1]);
}

/// Right rotor on its notch: middle and right advance, left stays.
#[test]
fn right_notch_carries_middle() {
    let mut machine = machine_at([0, 0, NOTCH_III]);
    machine.encrypt_char('A');
    assert_eq!(machine.positions(), [0, 1, NOTCH_III + 1]);
}

/// Both rotors on their notches: the middle rotor steps once, not twice.
#[test]
fn both_notches_step_middle_once() {
    let mut machine = machine_at([0, NOTCH_II, NOTCH_III]);
    machine.step_rotors();
    assert_eq!(machine.positions(), [1, NOTCH_II + 1, NOTCH_III + 1]);
}

/// Left rotor on its notch has no effect: there is no fourth rotor.
#[test]
fn left_notch_is_inert() {
    // Rotor I notch is Q
    let mut machine = machine_at([16, 0, 0]);
    machine.step_rotors();
    assert_eq!(machine.positions(), [16, 0, 1]);
}

// ═══════════════════════════════════════════════════════════════════════
// Multi-tick sequences
// ═══════════════════════════════════════════════════════════════════════

/// The textbook double-step sequence for rotors I-II-III.
#[test]
fn window_sequence_adu() {
    let mut machine =
        EnigmaMachine::new(&MachineConfig::default().with_positions(['A', 'D', 'U'])).unwrap();
    let expected = ["ADV", "AEW", "BFX", "BFY"];
    for (i, &window) in expected.iter().enumerate() {
        machine.step_rotors();
        assert_eq!(machine.window(), window, "window mismatch after step {}", i + 1);
    }
}

/// Encrypting letters steps exactly like calling `step_rotors`.
#[test]
fn encrypt_char_steps_once_per_letter() {
    let mut by_letter = machine_at([3, 2, 19]);
    let mut by_step = machine_at([3, 2, 19]);
    for i in 0..500 {
        by_letter.encrypt_char('Q');
        by_step.step_rotors();
        assert_eq!(
            by_letter.positions(),
            by_step.positions(),
            "positions diverged at press {}",
            i
        );
    }
}

/// With single-notch rotors the stepping cycle is 26 * 25 * 26 because
/// the double-step skips one middle position per left-rotor turn.
#[test]
fn stepping_period_is_16900() {
    let mut machine = machine_at([0, 0, 0]);
    let start = machine.positions();
    let mut steps = 0u32;
    loop {
        machine.step_rotors();
        steps += 1;
        if machine.positions() == start {
            break;
        }
        assert!(steps < 17_576, "stepping never returned to the start");
    }
    assert_eq!(steps, 16_900);
}

// ═══════════════════════════════════════════════════════════════════════
// Non-letters
// ═══════════════════════════════════════════════════════════════════════

/// Punctuation, digits and whitespace never move the rotors.
#[test]
fn non_letters_do_not_step() {
    let mut machine = machine_at([0, NOTCH_II, NOTCH_III]);
    let output = machine.process("123 ,.!?\n\t-");
    assert_eq!(output, "123 ,.!?\n\t-");
    assert_eq!(machine.positions(), [0, NOTCH_II, NOTCH_III]);
}

/// Interleaving non-letters does not change the letters' ciphertext.
#[test]
fn non_letters_do_not_shift_keystream() {
    let mut plain = machine_at([0, 0, 0]);
    let mut spaced = machine_at([0, 0, 0]);
    let a = plain.process("ATTACKATDAWN");
    let b = spaced.process("ATTACK AT DAWN!");
    let b_letters: String = b.chars().filter(char::is_ascii_alphabetic).collect();
    assert_eq!(a, b_letters);
}
