//! Machine: stepping protocol and signal path.
//!
//! Each keypress first advances the rotors, then routes the letter through
//! six stages:
//!
//! ```text
//! plugboard → fast → middle → slow → reflector → slow → middle → fast → plugboard
//! ```
//!
//! # Stepping
//!
//! The fast (rightmost) rotor always steps. Walking towards the slow rotor,
//! each rotor steps only if the rotor before it reported arriving at its
//! notch; the walk stops at the first rotor that does not.
//!
//! # Invariants
//!
//! - Reciprocity: with rotor positions reset between calls, processing the
//!   output of a keypress yields the original letter
//! - Pass-through: characters outside `A..=Z` are returned unchanged and do
//!   not move any rotor
//! - Shape: only rotor positions change after construction

use crate::{
    alphabet::Letter,
    catalog::{reflector_spec, rotor_spec},
    error::ConfigError,
    plugboard::Plugboard,
    reflector::Reflector,
    rotor::Rotor,
};

/// Number of rotor slots.
pub const ROTOR_COUNT: usize = 3;

/// Operator settings for a machine, as supplied by a configuration layer.
///
/// All arrays are ordered left to right: slow, middle, fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Rotor identifiers from the catalog.
    pub rotors: [String; ROTOR_COUNT],
    /// Start positions, `A..=Z`.
    pub positions: [char; ROTOR_COUNT],
    /// Ring settings, `1..=26`.
    pub rings: [u8; ROTOR_COUNT],
    /// Reflector identifier from the catalog.
    pub reflector: String,
    /// Whitespace-separated plugboard pairs, e.g. `"AB CD"`.
    pub plugboard: String,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            rotors: ["I".to_string(), "II".to_string(), "III".to_string()],
            positions: ['A'; ROTOR_COUNT],
            rings: [1; ROTOR_COUNT],
            reflector: "B".to_string(),
            plugboard: String::new(),
        }
    }
}

/// A configured three-rotor machine.
#[derive(Debug, Clone)]
pub struct Machine {
    /// Slow, middle, fast.
    rotors: [Rotor; ROTOR_COUNT],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Builds a machine from operator settings.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking rotors slot by slot
    /// (identifier, position, ring), then the reflector, then the plugboard.
    pub fn new(config: &MachineConfig) -> Result<Self, ConfigError> {
        let [slow, middle, fast] = [0, 1, 2].map(|slot| {
            let spec = rotor_spec(&config.rotors[slot])?;
            let position = config.positions[slot];
            let position =
                Letter::from_char(position).ok_or(ConfigError::InvalidPosition { position })?;
            Rotor::new(spec, position, config.rings[slot])
        });
        let rotors = [slow?, middle?, fast?];

        let reflector = Reflector::new(reflector_spec(&config.reflector)?)?;
        let plugboard = Plugboard::parse(&config.plugboard)?;

        Ok(Self::from_parts(rotors, reflector, plugboard))
    }

    /// Assembles a machine from already-built components.
    pub fn from_parts(
        rotors: [Rotor; ROTOR_COUNT],
        reflector: Reflector,
        plugboard: Plugboard,
    ) -> Self {
        let [slow, middle, fast] = &rotors;
        tracing::debug!(
            wheels = ?[slow.name(), middle.name(), fast.name()],
            reflector = reflector.name(),
            plugs = plugboard.len(),
            "machine configured"
        );

        Self { rotors, reflector, plugboard }
    }

    /// Rotors, slow to fast.
    pub fn rotors(&self) -> &[Rotor; ROTOR_COUNT] {
        &self.rotors
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Current rotor positions, slow to fast.
    pub fn positions(&self) -> [Letter; ROTOR_COUNT] {
        [self.rotors[0].position(), self.rotors[1].position(), self.rotors[2].position()]
    }

    /// Moves the rotors to `positions` (slow to fast) without stepping.
    pub fn set_positions(&mut self, positions: [Letter; ROTOR_COUNT]) {
        for (rotor, position) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(position);
        }
    }

    /// Advances the rotors by one keypress.
    pub fn advance(&mut self) {
        let mut carry = true;
        for rotor in self.rotors.iter_mut().rev() {
            if !carry {
                break;
            }
            carry = rotor.step();
        }
    }

    /// Routes `letter` through the signal path at the current positions,
    /// without stepping.
    pub fn encipher(&self, letter: Letter) -> Letter {
        let mut signal = self.plugboard.swap(letter);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in &self.rotors {
            signal = rotor.backward(signal);
        }
        self.plugboard.swap(signal)
    }

    /// Processes one keypress.
    ///
    /// Characters outside `A..=Z` (including lowercase letters) are returned
    /// unchanged and the rotors do not move.
    pub fn process_letter(&mut self, c: char) -> char {
        let Some(letter) = Letter::from_char(c) else {
            return c;
        };

        self.advance();
        let output = self.encipher(letter);
        tracing::trace!(input = %letter, output = %output, "keypress");
        output.to_char()
    }

    /// Processes a message, uppercasing ASCII letters first.
    ///
    /// The output has the same number of characters as the input; every
    /// non-letter appears verbatim at its original position.
    pub fn process_message(&mut self, text: &str) -> String {
        text.chars().map(|c| self.process_letter(c.to_ascii_uppercase())).collect()
    }
}
