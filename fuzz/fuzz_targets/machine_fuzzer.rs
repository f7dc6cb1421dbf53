//! Fuzz target for [`Machine`] construction and processing
//!
//! Configuration is the only fallible step, so it must reject bad settings
//! cleanly, and processing must hold the machine invariants for whatever
//! settings were accepted.
//!
//! # Strategy
//!
//! - Settings: Arbitrary rotor/reflector identifiers, positions, ring values
//!   and plugboard strings, biased towards catalog entries
//! - Operations: Arbitrary key presses, messages, rewinds and manual jumps
//!
//! # Invariants
//!
//! - Construction NEVER panics, whatever the settings
//! - Real machine accepts exactly the settings the model accepts
//! - Every operation produces the same output and positions as the model
//! - Rewinding and replaying the ciphertext recovers the uppercased input
//! - Output has as many characters as input

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{Letter, Machine, MachineConfig, REFLECTORS, ROTORS};
use enigma_harness::{ModelMachine, Operation, OperationResult};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum FuzzedName {
    Catalog(u8),
    Raw(String),
}

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    rotors: [FuzzedName; 3],
    positions: [char; 3],
    rings: [u8; 3],
    reflector: FuzzedName,
    plugboard: String,
    ops: Vec<Operation>,
}

fn rotor_name(name: &FuzzedName) -> String {
    match name {
        FuzzedName::Catalog(i) => ROTORS[usize::from(*i) % ROTORS.len()].name.to_string(),
        FuzzedName::Raw(s) => s.clone(),
    }
}

fn reflector_name(name: &FuzzedName) -> String {
    match name {
        FuzzedName::Catalog(i) => REFLECTORS[usize::from(*i) % REFLECTORS.len()].name.to_string(),
        FuzzedName::Raw(s) => s.clone(),
    }
}

fuzz_target!(|input: FuzzInput| {
    let config = MachineConfig {
        rotors: [
            rotor_name(&input.rotors[0]),
            rotor_name(&input.rotors[1]),
            rotor_name(&input.rotors[2]),
        ],
        positions: input.positions,
        rings: input.rings,
        reflector: reflector_name(&input.reflector),
        plugboard: input.plugboard,
    };

    let real = Machine::new(&config);
    let model = ModelMachine::new(&config);
    assert_eq!(real.is_ok(), model.is_some(), "validation divergence for {config:?}");

    let (Ok(mut machine), Some(mut model)) = (real, model) else {
        return;
    };
    let start = machine.positions();

    for op in &input.ops {
        let expected = model.apply(op);
        let actual = match op {
            Operation::Press { key } => OperationResult::Output(
                machine.process_letter(Operation::press_char(*key)).to_string(),
            ),
            Operation::PressOther { key } => {
                let c = Operation::other_char(*key);
                let before = machine.positions();
                let out = machine.process_letter(c);
                assert_eq!(out, c, "non-letter must pass through");
                assert_eq!(machine.positions(), before, "non-letter must not step");
                OperationResult::Output(out.to_string())
            },
            Operation::Type { text } => {
                let text = text.to_text();
                let out = machine.process_message(&text);
                assert_eq!(out.chars().count(), text.chars().count());
                OperationResult::Output(out)
            },
            Operation::Rewind => {
                machine.set_positions(start);
                OperationResult::Moved
            },
            Operation::Jump { positions } => {
                machine.set_positions(
                    positions.map(|p| Letter::from_index(usize::from(p))),
                );
                OperationResult::Moved
            },
        };
        assert_eq!(expected, actual, "divergence at {op:?}");
        assert_eq!(
            model.observable_state().positions,
            machine.positions().map(Letter::to_char)
        );
    }

    let plaintext: String = (0u8..64).map(Operation::press_char).collect();
    let resume = machine.positions();
    let ciphertext = machine.process_message(&plaintext);
    machine.set_positions(resume);
    assert_eq!(machine.process_message(&ciphertext), plaintext);
});
