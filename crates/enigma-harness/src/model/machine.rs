//! Model machine - the reference implementation.
//!
//! Letters are plain `u8` indices `0..26`. Each rotor pass is written out as
//! the raw index algebra over the wiring string, and the backward pass
//! searches the wiring string instead of using an inverse table.

use enigma_core::{MachineConfig, REFLECTORS, ROTORS};

use super::operation::{Operation, OperationResult};

/// Observable state for oracle comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Rotor positions, slow to fast.
    pub positions: [char; 3],
}

/// Reference machine.
#[derive(Debug, Clone)]
pub struct ModelMachine {
    wirings: [&'static [u8]; 3],
    notches: [u8; 3],
    rings: [u8; 3],
    positions: [u8; 3],
    start: [u8; 3],
    reflector: &'static [u8],
    plugs: Vec<(u8, u8)>,
}

impl ModelMachine {
    /// Builds the model from the same settings the real machine takes.
    ///
    /// Returns `None` for any setting the real machine must reject.
    pub fn new(config: &MachineConfig) -> Option<Self> {
        let mut wirings: [&'static [u8]; 3] = [&[]; 3];
        let mut notches = [0; 3];
        let mut rings = [0; 3];
        let mut positions = [0; 3];

        for slot in 0..3 {
            let name = config.rotors[slot].trim();
            let spec = ROTORS.iter().find(|s| s.name.eq_ignore_ascii_case(name))?;
            wirings[slot] = spec.wiring.as_bytes();
            notches[slot] = spec.notch as u8 - b'A';

            let position = config.positions[slot];
            if !position.is_ascii_uppercase() {
                return None;
            }
            positions[slot] = position as u8 - b'A';

            let ring = config.rings[slot];
            if !(1..=26).contains(&ring) {
                return None;
            }
            rings[slot] = ring - 1;
        }

        let name = config.reflector.trim();
        let reflector =
            REFLECTORS.iter().find(|s| s.name.eq_ignore_ascii_case(name))?.wiring.as_bytes();

        let mut plugs: Vec<(u8, u8)> = Vec::new();
        for token in config.plugboard.split_whitespace() {
            let bytes = token.as_bytes();
            if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
                return None;
            }
            let a = bytes[0].to_ascii_uppercase() - b'A';
            let b = bytes[1].to_ascii_uppercase() - b'A';
            let used = |x: u8| plugs.iter().any(|&(p, q)| p == x || q == x);
            if a == b || used(a) || used(b) {
                return None;
            }
            plugs.push((a, b));
        }

        Some(Self { wirings, notches, rings, start: positions, positions, reflector, plugs })
    }

    /// Observable state for comparison with the real machine.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState { positions: self.positions.map(|p| char::from(b'A' + p)) }
    }

    /// Apply an operation and return the result.
    ///
    /// The result should match the real implementation's result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Press { key } => {
                OperationResult::Output(self.press(Operation::press_char(*key)).to_string())
            },
            Operation::PressOther { key } => {
                OperationResult::Output(self.press(Operation::other_char(*key)).to_string())
            },
            Operation::Type { text } => OperationResult::Output(
                text.to_text().chars().map(|c| self.press(c.to_ascii_uppercase())).collect(),
            ),
            Operation::Rewind => {
                self.positions = self.start;
                OperationResult::Moved
            },
            Operation::Jump { positions } => {
                self.positions = positions.map(|p| p % 26);
                OperationResult::Moved
            },
        }
    }

    /// One keypress.
    pub fn press(&mut self, c: char) -> char {
        if !c.is_ascii_uppercase() {
            return c;
        }

        // Fast rotor always moves; carries ripple left on arrival at a notch.
        self.positions[2] = (self.positions[2] + 1) % 26;
        if self.positions[2] == self.notches[2] {
            self.positions[1] = (self.positions[1] + 1) % 26;
            if self.positions[1] == self.notches[1] {
                self.positions[0] = (self.positions[0] + 1) % 26;
            }
        }

        let mut x = self.plug(c as u8 - b'A');
        for slot in [2, 1, 0] {
            x = self.through(slot, x, false);
        }
        x = self.reflector[usize::from(x)] - b'A';
        for slot in [0, 1, 2] {
            x = self.through(slot, x, true);
        }
        x = self.plug(x);

        char::from(b'A' + x)
    }

    fn plug(&self, x: u8) -> u8 {
        for &(a, b) in &self.plugs {
            if x == a {
                return b;
            }
            if x == b {
                return a;
            }
        }
        x
    }

    fn through(&self, slot: usize, x: u8, backward: bool) -> u8 {
        let wiring = self.wirings[slot];
        let pos = self.positions[slot];
        let ring = self.rings[slot];

        let entry = (x + pos + 26 - ring) % 26;
        let exit = if backward {
            // A permutation contains every letter exactly once.
            wiring.iter().position(|&w| w - b'A' == entry).unwrap_or(0) as u8
        } else {
            wiring[usize::from(entry)] - b'A'
        };
        (exit + 26 - pos + ring) % 26
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matches_classic_fixture() {
        let mut model = ModelMachine::new(&MachineConfig::default()).unwrap();
        let out: String = "AAAAA".chars().map(|c| model.press(c)).collect();
        assert_eq!(out, "BDZGO");
        assert_eq!(model.observable_state().positions, ['A', 'A', 'F']);
    }

    #[test]
    fn model_rejects_bad_settings() {
        let bad = MachineConfig { plugboard: "AB BA".into(), ..MachineConfig::default() };
        assert!(ModelMachine::new(&bad).is_none());

        let bad = MachineConfig { rings: [0, 1, 1], ..MachineConfig::default() };
        assert!(ModelMachine::new(&bad).is_none());

        let bad = MachineConfig { reflector: "D".into(), ..MachineConfig::default() };
        assert!(ModelMachine::new(&bad).is_none());
    }

    #[test]
    fn rewind_restores_start() {
        let config = MachineConfig { positions: ['Q', 'E', 'V'], ..MachineConfig::default() };
        let mut model = ModelMachine::new(&config).unwrap();
        model.apply(&Operation::Press { key: 3 });
        assert_ne!(model.observable_state().positions, ['Q', 'E', 'V']);
        assert_eq!(model.apply(&Operation::Rewind), OperationResult::Moved);
        assert_eq!(model.observable_state().positions, ['Q', 'E', 'V']);
    }
}
