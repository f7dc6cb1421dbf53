//! Enigma machine binary.
//!
//! # Usage
//!
//! ```bash
//! # Encrypt a message with the default settings (I II III, AAA, 1 1 1, B)
//! enigma "ATTACK AT DAWN"
//!
//! # Full settings, text from stdin
//! echo "HELLO" | enigma --rotors IV V II --positions Q E V --rings 5 12 26 \
//!     --reflector C --plugboard "AB CD EF"
//!
//! # Show the rotor and reflector catalog
//! enigma --list
//! ```

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use enigma_cli::{CliError, MachineArgs, process_lines, write_catalog};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Three-rotor cipher machine simulator
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encrypt or decrypt text with a simulated three-rotor cipher machine")]
#[command(version)]
struct Args {
    #[command(flatten)]
    machine: MachineArgs,

    /// Print the rotor and reflector catalog and exit
    #[arg(long)]
    list: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Text to process; read from stdin line by line if omitted
    message: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(io::stderr(), "error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let stdout = io::stdout().lock();

    if args.list {
        return write_catalog(stdout);
    }

    let mut machine = args.machine.build()?;
    tracing::info!(
        "Machine ready: rotors {:?}, reflector {}",
        machine.rotors().each_ref().map(|r| r.name()),
        machine.reflector().name()
    );

    match &args.message {
        Some(message) => {
            let mut stdout = stdout;
            writeln!(stdout, "{}", machine.process_message(message))?;
        },
        None => {
            process_lines(&mut machine, io::stdin().lock(), stdout)?;
        },
    }

    Ok(())
}
