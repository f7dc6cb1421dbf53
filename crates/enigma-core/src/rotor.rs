//! Rotor: a wiring offset by its rotational position and ring setting.
//!
//! # Index algebra
//!
//! A signal entering at absolute contact `c` meets the wiring at
//! `c + position - ring`. After substitution it leaves at
//! `w - position + ring`, back in the machine's absolute frame. The backward
//! direction uses the same algebra with the inverse wiring.

use std::ops::RangeInclusive;

use crate::{
    alphabet::{Letter, Permutation},
    catalog::RotorSpec,
    error::ConfigError,
};

/// Valid ring settings as entered by an operator (1-based).
pub const RING_SETTINGS: RangeInclusive<u8> = 1..=26;

/// A rotor instance in a machine slot.
#[derive(Debug, Clone)]
pub struct Rotor {
    spec: &'static RotorSpec,
    forward: Permutation,
    backward: Permutation,
    notch: Letter,
    position: Letter,
    /// Zero-based ring offset.
    ring: u8,
}

impl Rotor {
    /// Builds a rotor from a catalog entry.
    ///
    /// `ring_setting` is the 1-based operator setting; it is stored zero-based.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::RingOutOfRange`] if `ring_setting` is not in `1..=26`
    /// - [`ConfigError::InvalidPermutation`] or [`ConfigError::InvalidNotch`]
    ///   if the spec itself is malformed
    pub fn new(
        spec: &'static RotorSpec,
        position: Letter,
        ring_setting: u8,
    ) -> Result<Self, ConfigError> {
        if !RING_SETTINGS.contains(&ring_setting) {
            return Err(ConfigError::RingOutOfRange { ring: ring_setting });
        }

        let forward = Permutation::parse(spec.wiring)?;
        let notch = Letter::from_char(spec.notch).ok_or_else(|| ConfigError::InvalidNotch {
            rotor: spec.name.to_string(),
            notch: spec.notch,
        })?;

        Ok(Self {
            spec,
            backward: forward.inverse(),
            forward,
            notch,
            position,
            ring: ring_setting - 1,
        })
    }

    /// Catalog identifier.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// The catalog entry this rotor was built from.
    pub fn spec(&self) -> &'static RotorSpec {
        self.spec
    }

    /// Current rotational position.
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Moves the rotor to `position` without stepping.
    pub fn set_position(&mut self, position: Letter) {
        self.position = position;
    }

    /// Zero-based ring offset (ring setting minus one).
    pub fn ring(&self) -> u8 {
        self.ring
    }

    /// Notch letter.
    pub fn notch(&self) -> Letter {
        self.notch
    }

    /// Advances one position.
    ///
    /// Returns true if the rotor has just arrived at its notch, which tells
    /// the machine to step the next slower rotor as well.
    pub fn step(&mut self) -> bool {
        self.position = self.position.offset(1);
        self.position == self.notch
    }

    /// Signal path from the entry side towards the reflector.
    pub fn forward(&self, letter: Letter) -> Letter {
        self.pass(&self.forward, letter)
    }

    /// Signal path from the reflector back towards the entry side.
    pub fn backward(&self, letter: Letter) -> Letter {
        self.pass(&self.backward, letter)
    }

    fn pass(&self, wiring: &Permutation, letter: Letter) -> Letter {
        let shift = self.position.ordinal() - i32::from(self.ring);
        wiring.apply(letter.offset(shift)).offset(-shift)
    }
}
