//! Operation registry: maps a [`CalcKind`] to its arithmetic behavior.
//!
//! The registry is a closed, exhaustive match over the kind enum. Adding an
//! operation means adding a variant, and the compiler then points at every
//! site that must handle it. There is no runtime plugin surface.
//!
//! # Arithmetic semantics
//!
//! All operations work on `i32` with two's-complement wraparound: `i32::MAX`
//! plus one is `i32::MIN`, and `i32::MIN / -1` is `i32::MIN`. Division
//! truncates toward zero and fails only when the divisor is zero.

use crate::kind::CalcKind;

/// Why an evaluation could not produce a value.
///
/// Only two failure causes exist in the whole system. Callers that need
/// a status code rather than a cause use the [`Outcome`](crate::Outcome)
/// layer, which collapses both to the same failure status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The divisor of a [`CalcKind::Divide`] was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A raw integer tag named no recognized operation kind.
    #[error("unknown operation kind tag: {tag}")]
    UnknownKind {
        /// The unrecognized tag as received.
        tag: i32,
    },
}

/// Applies the operation registered for `kind` to the operands.
///
/// # Errors
///
/// Returns [`EvalError::DivisionByZero`] when `kind` is
/// [`CalcKind::Divide`] and `b` is zero. No other input fails.
pub fn apply(kind: CalcKind, a: i32, b: i32) -> Result<i32, EvalError> {
    match kind {
        CalcKind::Add => Ok(a.wrapping_add(b)),
        CalcKind::Subtract => Ok(a.wrapping_sub(b)),
        CalcKind::Multiply => Ok(a.wrapping_mul(b)),
        CalcKind::Divide => {
            if b == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                // wrapping_div: i32::MIN / -1 wraps to i32::MIN.
                Ok(a.wrapping_div(b))
            }
        }
    }
}

/// Applies the operation named by a raw integer tag.
///
/// Entry point for callers holding an untrusted tag (wire input, foreign
/// callers). Recognized tags behave exactly like [`apply`] with the
/// corresponding kind.
///
/// # Errors
///
/// Returns [`EvalError::UnknownKind`] for tags outside `1..=4`, and
/// otherwise whatever [`apply`] returns.
pub fn apply_raw(tag: i32, a: i32, b: i32) -> Result<i32, EvalError> {
    match CalcKind::from_tag(tag) {
        Some(kind) => apply(kind, a, b),
        None => Err(EvalError::UnknownKind { tag }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
