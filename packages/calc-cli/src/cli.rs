//! Argument contract and execution for the `calc` binary.
//!
//! The binary takes exactly three positional arguments: an operand, an
//! operator token, and a second operand. Operator tokens map onto operation
//! kinds (`x` rather than `*` for multiplication, which shells would glob).
//! Argument validation happens entirely here; the arithmetic core is only
//! reached once the command line is well formed.

use std::io::Write;

use calc_core::CalcKind;
use clap::Parser;
use tracing::debug;

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

/// Process exit codes for the `calc` binary.
pub mod exit {
    /// The expression evaluated to a value.
    pub const SUCCESS: u8 = 0;
    /// Usage error or failed evaluation.
    pub const FAILURE: u8 = 1;
}

// ---------------------------------------------------------------------------
// Argument contract
// ---------------------------------------------------------------------------

/// Evaluate a single integer arithmetic expression.
#[derive(Debug, Parser)]
#[command(name = "calc", version)]
pub struct Cli {
    /// First operand.
    #[arg(allow_negative_numbers = true)]
    pub a: i32,

    /// Operator token: one of `+`, `-`, `x`, `/`.
    #[arg(value_parser = parse_operator, allow_hyphen_values = true)]
    pub op: CalcKind,

    /// Second operand.
    #[arg(allow_negative_numbers = true)]
    pub b: i32,
}

fn parse_operator(token: &str) -> Result<CalcKind, String> {
    match token {
        "+" => Ok(CalcKind::Add),
        "-" => Ok(CalcKind::Subtract),
        "x" => Ok(CalcKind::Multiply),
        "/" => Ok(CalcKind::Divide),
        _ => Err(format!(
            "unrecognized operator '{token}' (expected one of: + - x /)"
        )),
    }
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Evaluates the parsed expression and writes the result to `out`.
///
/// On success the value is written followed by a newline and
/// [`exit::SUCCESS`] is returned. On failure a generic diagnostic goes to
/// stderr and [`exit::FAILURE`] is returned; the result stream stays clean.
pub fn run(cli: &Cli, out: &mut impl Write) -> u8 {
    debug!(a = cli.a, op = %cli.op, b = cli.b, "evaluating expression");

    match calc_core::evaluate(cli.op, cli.a, cli.b).ok() {
        Some(value) => {
            if writeln!(out, "{value}").is_err() {
                // e.g. stdout closed mid-pipe
                return exit::FAILURE;
            }
            exit::SUCCESS
        }
        None => {
            eprintln!("Error: calculation failed");
            exit::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
