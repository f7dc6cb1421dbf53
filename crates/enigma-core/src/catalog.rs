//! Static rotor and reflector catalog.
//!
//! The wirings are the historical Wehrmacht rotors I-V and the wide
//! reflectors B and C. The tables are process-wide immutable data; rotors
//! hold `&'static` references into them.

use crate::error::ConfigError;

/// Catalog entry for a rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Identifier, e.g. `"III"`.
    pub name: &'static str,
    /// Forward wiring: entry `i` is the contact the `i`-th letter is wired to.
    pub wiring: &'static str,
    /// Letter at which this rotor carries into the next slower rotor.
    pub notch: char,
}

/// Catalog entry for a reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Identifier, e.g. `"B"`.
    pub name: &'static str,
    /// Involutive wiring table.
    pub wiring: &'static str,
}

/// Rotors available to a machine.
pub static ROTORS: [RotorSpec; 5] = [
    RotorSpec { name: "I", wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ", notch: 'Q' },
    RotorSpec { name: "II", wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE", notch: 'E' },
    RotorSpec { name: "III", wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO", notch: 'V' },
    RotorSpec { name: "IV", wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB", notch: 'J' },
    RotorSpec { name: "V", wiring: "VZBRGITYUPSDNHLXAWMJQOFECK", notch: 'Z' },
];

/// Reflectors available to a machine.
pub static REFLECTORS: [ReflectorSpec; 2] = [
    ReflectorSpec { name: "B", wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT" },
    ReflectorSpec { name: "C", wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL" },
];

/// Looks up a rotor by identifier, ignoring case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownRotor`] if no rotor has that identifier.
pub fn rotor_spec(name: &str) -> Result<&'static RotorSpec, ConfigError> {
    let wanted = name.trim();
    ROTORS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ConfigError::UnknownRotor { name: name.to_string() })
}

/// Looks up a reflector by identifier, ignoring case and surrounding whitespace.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownReflector`] if no reflector has that
/// identifier.
pub fn reflector_spec(name: &str) -> Result<&'static ReflectorSpec, ConfigError> {
    let wanted = name.trim();
    REFLECTORS
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ConfigError::UnknownReflector { name: name.to_string() })
}

/// Rotor identifiers in catalog order.
pub fn rotor_names() -> impl Iterator<Item = &'static str> {
    ROTORS.iter().map(|spec| spec.name)
}

/// Reflector identifiers in catalog order.
pub fn reflector_names() -> impl Iterator<Item = &'static str> {
    REFLECTORS.iter().map(|spec| spec.name)
}
