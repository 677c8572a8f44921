//! Shared helpers for the enigmacrypt library.

pub mod alphabet;
