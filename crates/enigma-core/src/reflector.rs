//! Reflector: the fixed turnaround wiring at the far end of the rotor stack.

use crate::{
    alphabet::{Letter, Permutation},
    catalog::ReflectorSpec,
    error::ConfigError,
};

/// A reflector instance.
///
/// The table is always an involution with no fixed points: no letter
/// reflects to itself, and reflecting twice is the identity.
#[derive(Debug, Clone)]
pub struct Reflector {
    spec: &'static ReflectorSpec,
    table: Permutation,
}

impl Reflector {
    /// Builds a reflector from a catalog entry.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPermutation`] if the table is not a permutation
    /// - [`ConfigError::NotAnInvolution`] if it is not its own inverse or has a
    ///   fixed point
    pub fn new(spec: &'static ReflectorSpec) -> Result<Self, ConfigError> {
        let table = Permutation::parse(spec.wiring)?;
        if !table.is_involution() || table.fixed_points() != 0 {
            return Err(ConfigError::NotAnInvolution { reflector: spec.name.to_string() });
        }
        Ok(Self { spec, table })
    }

    /// Catalog identifier.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Reflected letter.
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.table.apply(letter)
    }

    /// The underlying table.
    pub fn table(&self) -> &Permutation {
        &self.table
    }
}
