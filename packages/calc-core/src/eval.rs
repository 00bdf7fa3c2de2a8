//! Evaluation façade: the two ways callers consume a calculation.
//!
//! Every function here funnels into the same registry dispatch; the split is
//! purely in how failure comes back:
//!
//! - **Non-throwing** ([`evaluate`], [`evaluate_raw`], and the per-operation
//!   wrappers): always returns an [`Outcome`]. Both failure causes collapse
//!   to the same failure status; the distinction survives only in the logs.
//! - **Throwing** ([`evaluate_or_fail`]): returns `Result<i32, CalcError>`,
//!   with the full calculation context in the error.

use tracing::{debug, warn};

use crate::error::CalcError;
use crate::kind::CalcKind;
use crate::outcome::Outcome;
use crate::registry;

/// Evaluates `a <kind> b` and reports the result as an [`Outcome`].
///
/// Never panics and never fails to return: division by zero comes back as a
/// failed outcome, every other input as a successful one.
///
/// # Examples
///
/// ```
/// use calc_core::{evaluate, status, CalcKind};
///
/// let sum = evaluate(CalcKind::Add, 10, 20);
/// assert_eq!(sum.ok(), Some(30));
///
/// let broken = evaluate(CalcKind::Divide, 10, 0);
/// assert!(!broken.is_success());
/// assert_eq!(broken.status(), status::FAILURE);
/// ```
#[must_use]
pub fn evaluate(kind: CalcKind, a: i32, b: i32) -> Outcome {
    match registry::apply(kind, a, b) {
        Ok(value) => {
            debug!(%kind, a, b, value, "evaluated");
            Outcome::success(value)
        }
        Err(error) => {
            warn!(%kind, a, b, %error, "evaluation failed");
            Outcome::failure()
        }
    }
}

/// Evaluates `a <tag> b` where the operation arrives as a raw integer tag.
///
/// Defensive entry point for untrusted tags: tags outside the recognized set
/// produce a failed [`Outcome`] rather than a panic, and recognized tags
/// behave exactly like [`evaluate`].
#[must_use]
pub fn evaluate_raw(tag: i32, a: i32, b: i32) -> Outcome {
    match registry::apply_raw(tag, a, b) {
        Ok(value) => {
            debug!(tag, a, b, value, "evaluated");
            Outcome::success(value)
        }
        Err(error) => {
            warn!(tag, a, b, %error, "evaluation failed");
            Outcome::failure()
        }
    }
}

/// Evaluates `a <kind> b`, failing loudly instead of reporting a status.
///
/// # Errors
///
/// Returns a [`CalcError`] carrying the kind, both operands, and the failure
/// status whenever [`evaluate`] would have reported a failed outcome.
///
/// # Examples
///
/// ```
/// use calc_core::{evaluate_or_fail, CalcKind};
///
/// let product = evaluate_or_fail(CalcKind::Multiply, 6, 7).unwrap();
/// assert_eq!(product, 42);
///
/// let error = evaluate_or_fail(CalcKind::Divide, 10, 0).unwrap_err();
/// assert!(error.to_string().contains("kind=Divide"));
/// ```
pub fn evaluate_or_fail(kind: CalcKind, a: i32, b: i32) -> Result<i32, CalcError> {
    let outcome = evaluate(kind, a, b);
    if outcome.is_success() {
        Ok(outcome.value())
    } else {
        Err(CalcError::new(kind, a, b, outcome.status()))
    }
}

// ---------------------------------------------------------------------------
// Per-operation wrappers
// ---------------------------------------------------------------------------

/// Adds `a` and `b`. Shorthand for [`evaluate`] with [`CalcKind::Add`].
#[must_use]
pub fn add(a: i32, b: i32) -> Outcome {
    evaluate(CalcKind::Add, a, b)
}

/// Subtracts `b` from `a`. Shorthand for [`evaluate`] with
/// [`CalcKind::Subtract`].
#[must_use]
pub fn subtract(a: i32, b: i32) -> Outcome {
    evaluate(CalcKind::Subtract, a, b)
}

/// Multiplies `a` by `b`. Shorthand for [`evaluate`] with
/// [`CalcKind::Multiply`].
#[must_use]
pub fn multiply(a: i32, b: i32) -> Outcome {
    evaluate(CalcKind::Multiply, a, b)
}

/// Divides `a` by `b`, truncating toward zero. Shorthand for [`evaluate`]
/// with [`CalcKind::Divide`].
#[must_use]
pub fn divide(a: i32, b: i32) -> Outcome {
    evaluate(CalcKind::Divide, a, b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
