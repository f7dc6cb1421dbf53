//! Model-based testing harness for the enigma machine.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation written directly
//! against the raw catalog strings. Operations are applied to both the model
//! and a real [`enigma_core::Machine`], and their observable states are
//! compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;

pub use model::{ModelMachine, ObservableState, Operation, OperationResult, SmallText};
