//! Enigma Signal Path
//!
//! This crate models the electromechanical core of a three-rotor cipher
//! machine: the rotor wirings, the reflector, the plugboard and the stepping
//! mechanism that couples the rotors together.
//!
//! ## Architecture
//!
//! ```text
//! enigma-core
//!   ├─ Letter / Permutation   (alphabet arithmetic, bijective tables)
//!   ├─ Catalog                (static rotor and reflector wirings)
//!   ├─ Rotor                  (position + ring offset, forward/backward)
//!   ├─ Reflector, Plugboard   (involutive lookups)
//!   └─ Machine                (stepping protocol + six-stage signal path)
//! ```
//!
//! # Design
//!
//! All configuration is validated when a [`Machine`] is built. Once built,
//! processing text is infallible: letters outside `A..=Z` pass through
//! unchanged and never move the rotors.
//!
//! # Example
//!
//! ```
//! use enigma_core::{Machine, MachineConfig};
//!
//! let config = MachineConfig::default();
//! let mut sender = Machine::new(&config).unwrap();
//! let mut receiver = Machine::new(&config).unwrap();
//!
//! let ciphertext = sender.process_message("Attack at dawn");
//! assert_eq!(receiver.process_message(&ciphertext), "ATTACK AT DAWN");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod catalog;
pub mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use alphabet::{ALPHABET_LEN, Letter, Permutation};
pub use catalog::{
    REFLECTORS, ROTORS, ReflectorSpec, RotorSpec, reflector_names, reflector_spec, rotor_names,
    rotor_spec,
};
pub use error::{ConfigError, PermutationDefect};
pub use machine::{Machine, MachineConfig, ROTOR_COUNT};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{RING_SETTINGS, Rotor};
