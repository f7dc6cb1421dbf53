//! Command-line front end for the enigma machine.
//!
//! This crate is the configuration and I/O collaborator around
//! `enigma-core`: it turns command-line settings into a [`MachineConfig`],
//! feeds text through a [`Machine`] and writes the result.
//!
//! ## Architecture
//!
//! ```text
//! enigma (bin)
//!   ├─ MachineArgs     (clap settings → MachineConfig)
//!   ├─ process_lines   (stdin → machine → stdout, state carried across lines)
//!   └─ write_catalog   (--list)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::io::{self, BufRead, Write};

use clap::Args;
use enigma_core::{ConfigError, Machine, MachineConfig, REFLECTORS, ROTOR_COUNT, ROTORS};
use thiserror::Error;

/// Errors from the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Machine settings were rejected.
    #[error("invalid {}: {source}", .source.field())]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// A per-rotor setting did not have one value per slot.
    #[error("--{setting} needs 3 values, got {count}")]
    SlotCount {
        /// Name of the flag.
        setting: &'static str,
        /// Number of values given.
        count: usize,
    },

    /// A start position was not a single character.
    #[error("invalid positions: {value:?} is not a single letter")]
    Position {
        /// The value as given.
        value: String,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Machine settings, ordered left (slow) to right (fast).
#[derive(Debug, Clone, Args)]
pub struct MachineArgs {
    /// Rotor identifiers
    #[arg(long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"], default_values = ["I", "II", "III"])]
    pub rotors: Vec<String>,

    /// Start positions, one letter per rotor
    #[arg(long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"], default_values = ["A", "A", "A"])]
    pub positions: Vec<String>,

    /// Ring settings, 1-26 per rotor
    #[arg(long, num_args = 3, value_names = ["LEFT", "MIDDLE", "RIGHT"], default_values = ["1", "1", "1"])]
    pub rings: Vec<u8>,

    /// Reflector identifier
    #[arg(long, default_value = "B")]
    pub reflector: String,

    /// Plugboard pairs, e.g. "AB CD EF"
    #[arg(long, default_value = "")]
    pub plugboard: String,
}

impl MachineArgs {
    /// Converts command-line settings into a machine configuration.
    ///
    /// Positions are uppercased; everything else is validated by
    /// [`Machine::new`].
    pub fn to_config(&self) -> Result<MachineConfig, CliError> {
        let rotors = slots("rotors", self.rotors.clone())?;
        let rings = slots("rings", self.rings.clone())?;

        let positions = self
            .positions
            .iter()
            .map(|value| {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c.to_ascii_uppercase()),
                    _ => Err(CliError::Position { value: value.clone() }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        let positions = slots("positions", positions)?;

        Ok(MachineConfig {
            rotors,
            positions,
            rings,
            reflector: self.reflector.clone(),
            plugboard: self.plugboard.clone(),
        })
    }

    /// Builds the machine described by these settings.
    pub fn build(&self) -> Result<Machine, CliError> {
        let config = self.to_config()?;
        Ok(Machine::new(&config)?)
    }
}

fn slots<T>(setting: &'static str, values: Vec<T>) -> Result<[T; ROTOR_COUNT], CliError> {
    let count = values.len();
    values.try_into().map_err(|_| CliError::SlotCount { setting, count })
}

/// Processes `input` line by line through `machine`, writing each result.
///
/// Rotor state carries over from one line to the next, so a multi-line message
/// decrypts correctly when fed through a machine with the same settings.
/// Returns the number of lines processed.
pub fn process_lines<R: BufRead, W: Write>(
    machine: &mut Machine,
    input: R,
    mut output: W,
) -> Result<usize, CliError> {
    let mut lines = 0;
    for line in input.lines() {
        let line = line?;
        writeln!(output, "{}", machine.process_message(&line))?;
        lines += 1;
    }
    output.flush()?;

    tracing::debug!(lines, "input exhausted");
    Ok(lines)
}

/// Writes the rotor and reflector catalog in a human-readable table.
pub fn write_catalog<W: Write>(mut output: W) -> Result<(), CliError> {
    writeln!(output, "Rotors:")?;
    for spec in &ROTORS {
        writeln!(output, "  {:<4} {}  notch {}", spec.name, spec.wiring, spec.notch)?;
    }
    writeln!(output, "Reflectors:")?;
    for spec in &REFLECTORS {
        writeln!(output, "  {:<4} {}", spec.name, spec.wiring)?;
    }
    Ok(())
}
