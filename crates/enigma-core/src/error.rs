//! Configuration error types.
//!
//! Every failure in this crate happens while building a machine. Processing
//! text on a built machine cannot fail.

use thiserror::Error;

/// Reasons a 26-character table is not a permutation of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationDefect {
    /// Table does not have exactly 26 characters.
    #[error("expected 26 letters, got {len}")]
    WrongLength {
        /// Number of characters found.
        len: usize,
    },

    /// Table contains something other than `A..=Z`.
    #[error("'{ch}' at offset {offset} is not a letter A-Z")]
    NotALetter {
        /// Offending character.
        ch: char,
        /// Zero-based offset of the character in the table.
        offset: usize,
    },

    /// A letter appears more than once, so the table is not a bijection.
    #[error("'{letter}' appears more than once")]
    Repeated {
        /// The repeated letter.
        letter: char,
    },
}

/// Errors from validating a machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Rotor identifier is not in the catalog.
    #[error("unknown rotor: {name:?}")]
    UnknownRotor {
        /// The identifier that was requested.
        name: String,
    },

    /// Reflector identifier is not in the catalog.
    #[error("unknown reflector: {name:?}")]
    UnknownReflector {
        /// The identifier that was requested.
        name: String,
    },

    /// Ring setting outside `1..=26`.
    #[error("ring setting {ring} out of range 1-26")]
    RingOutOfRange {
        /// The ring setting that was requested.
        ring: u8,
    },

    /// Start position is not a letter `A..=Z`.
    #[error("invalid start position {position:?}: expected a letter A-Z")]
    InvalidPosition {
        /// The position that was requested.
        position: char,
    },

    /// Wiring table is not a permutation of the alphabet.
    #[error("invalid wiring {table:?}: {defect}")]
    InvalidPermutation {
        /// The table as given.
        table: String,
        /// What is wrong with it.
        #[source]
        defect: PermutationDefect,
    },

    /// Rotor notch is not a letter `A..=Z`.
    #[error("rotor {rotor} has invalid notch {notch:?}")]
    InvalidNotch {
        /// Rotor identifier.
        rotor: String,
        /// The notch as given.
        notch: char,
    },

    /// Reflector table is not its own inverse, or maps a letter to itself.
    #[error("reflector {reflector} is not a fixed-point-free involution")]
    NotAnInvolution {
        /// Reflector identifier.
        reflector: String,
    },

    /// Plugboard token is not exactly two letters.
    #[error("malformed plugboard pair {pair:?}: expected two letters A-Z")]
    MalformedPlugPair {
        /// The token as given.
        pair: String,
    },

    /// Plugboard uses a letter in more than one pair.
    #[error("plugboard letter {letter} is used more than once")]
    DuplicatePlug {
        /// The letter used twice.
        letter: char,
    },
}

impl ConfigError {
    /// Name of the configuration field this error refers to.
    ///
    /// Catalog errors (bad wiring, bad notch, bad reflector table) report
    /// `"catalog"`; they only occur with hand-built specs.
    pub fn field(&self) -> &'static str {
        match self {
            Self::UnknownRotor { .. } => "rotors",
            Self::UnknownReflector { .. } => "reflector",
            Self::RingOutOfRange { .. } => "rings",
            Self::InvalidPosition { .. } => "positions",
            Self::MalformedPlugPair { .. } | Self::DuplicatePlug { .. } => "plugboard",
            Self::InvalidPermutation { .. }
            | Self::InvalidNotch { .. }
            | Self::NotAnInvolution { .. } => "catalog",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::RingOutOfRange { ring: 27 };
        assert_eq!(err.to_string(), "ring setting 27 out of range 1-26");

        let err = ConfigError::UnknownRotor { name: "VI".to_string() };
        assert_eq!(err.to_string(), "unknown rotor: \"VI\"");
    }

    #[test]
    fn permutation_defect_is_source() {
        use std::error::Error as _;

        let err = ConfigError::InvalidPermutation {
            table: "ABC".to_string(),
            defect: PermutationDefect::WrongLength { len: 3 },
        };
        assert_eq!(err.to_string(), "invalid wiring \"ABC\": expected 26 letters, got 3");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("expected 26 letters, got 3")
        );
    }

    #[test]
    fn field_names_config_input() {
        assert_eq!(ConfigError::UnknownReflector { name: "A".into() }.field(), "reflector");
        assert_eq!(ConfigError::DuplicatePlug { letter: 'Q' }.field(), "plugboard");
        assert_eq!(ConfigError::InvalidPosition { position: '7' }.field(), "positions");
        assert_eq!(ConfigError::NotAnInvolution { reflector: "X".into() }.field(), "catalog");
    }
}
