//! Command-line front end for the calc arithmetic service.
//!
//! ```text
//! calc <a> <+|-|x|/> <b>
//! ```
//!
//! Prints the computed value to stdout and exits 0; usage errors and failed
//! evaluations diagnose on stderr and exit 1. Structured logs go to stderr
//! as well, filtered by `RUST_LOG` (off by default), so stdout carries
//! nothing but the result.

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let parsed = match Cli::try_parse() {
        Ok(parsed) => parsed,
        // --help and --version are not usage errors.
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(cli::exit::FAILURE);
        }
    };

    ExitCode::from(cli::run(&parsed, &mut io::stdout().lock()))
}
