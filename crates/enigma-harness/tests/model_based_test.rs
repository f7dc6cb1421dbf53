//! Model-based property tests.
//!
//! These tests generate random settings and operation sequences and verify
//! that the real machine behaves identically to the reference model.
//!
//! # Architecture
//!
//! ```text
//! proptest generates: MachineConfig + Vec<Operation>
//!                          │
//!           ┌──────────────┼──────────────┐
//!           ▼              ▼              ▼
//!     ModelMachine    RealMachine      Compare
//!     (reference)    (enigma-core)     Results
//! ```

use enigma_core::{Letter, Machine, MachineConfig, reflector_names, rotor_names};
use enigma_harness::{ModelMachine, ObservableState, Operation, OperationResult, SmallText};
use proptest::prelude::*;

/// Real machine wrapper that mirrors ModelMachine's interface.
struct RealMachine {
    machine: Machine,
    start: [Letter; 3],
}

impl RealMachine {
    fn new(config: &MachineConfig) -> Option<Self> {
        let machine = Machine::new(config).ok()?;
        let start = machine.positions();
        Some(Self { machine, start })
    }

    fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::Press { key } => OperationResult::Output(
                self.machine.process_letter(Operation::press_char(*key)).to_string(),
            ),
            Operation::PressOther { key } => OperationResult::Output(
                self.machine.process_letter(Operation::other_char(*key)).to_string(),
            ),
            Operation::Type { text } => {
                OperationResult::Output(self.machine.process_message(&text.to_text()))
            },
            Operation::Rewind => {
                self.machine.set_positions(self.start);
                OperationResult::Moved
            },
            Operation::Jump { positions } => {
                self.machine.set_positions(positions.map(|p| Letter::from_index(usize::from(p))));
                OperationResult::Moved
            },
        }
    }

    fn observable_state(&self) -> ObservableState {
        ObservableState { positions: self.machine.positions().map(Letter::to_char) }
    }
}

/// Strategy for valid machine settings.
fn valid_config_strategy() -> impl Strategy<Value = MachineConfig> {
    let rotor = prop::sample::select(rotor_names().collect::<Vec<_>>());
    let reflector = prop::sample::select(reflector_names().collect::<Vec<_>>());
    let position = (b'A'..=b'Z').prop_map(char::from);
    let alphabet: Vec<char> = ('A'..='Z').collect();
    let plugboard = (Just(alphabet).prop_shuffle(), 0..=13usize).prop_map(|(letters, cables)| {
        letters.chunks(2).take(cables).map(|p| p.iter().collect::<String>()).collect::<Vec<_>>()
    });

    (
        [rotor.clone(), rotor.clone(), rotor],
        [position.clone(), position.clone(), position],
        [1..=26u8, 1..=26u8, 1..=26u8],
        reflector,
        plugboard,
    )
        .prop_map(|(rotors, positions, rings, reflector, pairs)| MachineConfig {
            rotors: rotors.map(str::to_string),
            positions,
            rings,
            reflector: reflector.to_string(),
            plugboard: pairs.join(" "),
        })
}

/// Strategy for settings that are frequently invalid.
fn any_config_strategy() -> impl Strategy<Value = MachineConfig> {
    let rotor = prop_oneof![
        4 => prop::sample::select(vec!["I", "II", "III", "IV", "V", "iv", " v "]).prop_map(String::from),
        1 => "[IVX]{0,4}",
    ];
    let position = prop_oneof![
        4 => (b'A'..=b'Z').prop_map(char::from),
        1 => any::<char>(),
    ];
    let ring = prop_oneof![4 => 1..=26u8, 1 => any::<u8>()];
    let reflector = prop_oneof![
        4 => prop::sample::select(vec!["B", "C", "b"]).prop_map(String::from),
        1 => "[A-Z]{0,2}",
    ];
    let plugboard = "([A-Za-z]{1,3}[ ]?){0,6}";

    (
        [rotor.clone(), rotor.clone(), rotor],
        [position.clone(), position.clone(), position],
        [ring.clone(), ring.clone(), ring],
        reflector,
        plugboard,
    )
        .prop_map(|(rotors, positions, rings, reflector, plugboard)| MachineConfig {
            rotors,
            positions,
            rings,
            reflector,
            plugboard,
        })
}

/// Strategy for generating operations.
fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        // Weight towards key presses so rotors travel far
        8 => any::<u8>().prop_map(|key| Operation::Press { key }),
        2 => any::<u8>().prop_map(|key| Operation::PressOther { key }),
        3 => (any::<u8>(), any::<u8>())
            .prop_map(|(seed, len)| Operation::Type { text: SmallText { seed, len } }),
        1 => Just(Operation::Rewind),
        1 => any::<[u8; 3]>().prop_map(|positions| Operation::Jump { positions }),
    ]
}

proptest! {
    /// Verify that outputs and rotor positions match between model and real
    /// machine after every operation.
    #[test]
    fn prop_model_matches_real(
        config in valid_config_strategy(),
        ops in prop::collection::vec(operation_strategy(), 0..200)
    ) {
        let mut model = ModelMachine::new(&config).expect("valid config");
        let mut real = RealMachine::new(&config).expect("valid config");
        prop_assert_eq!(model.observable_state(), real.observable_state());

        for (i, op) in ops.iter().enumerate() {
            let model_result = model.apply(op);
            let real_result = real.apply(op);

            prop_assert_eq!(
                &model_result,
                &real_result,
                "Divergence at operation {}: {:?}",
                i, op
            );
            prop_assert_eq!(
                model.observable_state(),
                real.observable_state(),
                "State divergence at operation {}: {:?}",
                i, op
            );
        }
    }

    /// Verify that the model and real machine accept and reject the same
    /// settings.
    #[test]
    fn prop_validation_matches_model(config in any_config_strategy()) {
        let model = ModelMachine::new(&config);
        let real = Machine::new(&config);

        prop_assert_eq!(
            model.is_some(),
            real.is_ok(),
            "Validation divergence for {:?}: real says {:?}",
            config, real.err()
        );
    }

    /// Verify that rewinding and replaying ciphertext recovers the plaintext.
    #[test]
    fn prop_rewind_decrypts(
        config in valid_config_strategy(),
        presses in prop::collection::vec(any::<u8>(), 1..100)
    ) {
        let mut model = ModelMachine::new(&config).expect("valid config");

        let plaintext: String = presses.iter().map(|&key| Operation::press_char(key)).collect();
        let ciphertext: String = plaintext.chars().map(|c| model.press(c)).collect();

        prop_assert_eq!(model.apply(&Operation::Rewind), OperationResult::Moved);
        let recovered: String = ciphertext.chars().map(|c| model.press(c)).collect();

        prop_assert_eq!(recovered, plaintext);
    }
}

#[cfg(test)]
mod smoke_tests {
    use super::*;

    /// Basic smoke test for model and real machine side by side.
    #[test]
    fn model_and_real_basic_operations() {
        let config = MachineConfig::default();
        let mut model = ModelMachine::new(&config).unwrap();
        let mut real = RealMachine::new(&config).unwrap();

        for key in [0u8; 5] {
            let op = Operation::Press { key };
            assert_eq!(model.apply(&op), real.apply(&op));
        }
        assert_eq!(real.observable_state().positions, ['A', 'A', 'F']);

        let op = Operation::PressOther { key: 0 };
        assert_eq!(real.apply(&op), OperationResult::Output(" ".to_string()));
        assert_eq!(real.observable_state().positions, ['A', 'A', 'F']);

        assert_eq!(real.apply(&Operation::Rewind), OperationResult::Moved);
        assert_eq!(real.observable_state().positions, ['A', 'A', 'A']);

        let op = Operation::Jump { positions: [26, 3, 20] };
        real.apply(&op);
        model.apply(&op);
        assert_eq!(real.observable_state().positions, ['A', 'D', 'U']);
        assert_eq!(model.observable_state(), real.observable_state());
    }
}
