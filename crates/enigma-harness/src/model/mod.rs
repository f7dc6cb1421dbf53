//! Reference model for model-based testing.
//!
//! The model recomputes every keypress from the wiring strings with plain
//! byte arithmetic: no permutation tables, no precomputed inverses. It
//! serves as the oracle against which the real machine is verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Independence: Shares only the catalog data with the real machine
//! - Deterministic: Same inputs produce same outputs

mod machine;
pub mod operation;

pub use machine::{ModelMachine, ObservableState};
pub use operation::{Operation, OperationResult, SmallText};
