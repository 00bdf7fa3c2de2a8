//! The error type surfaced by the throwing evaluation style.
//!
//! [`CalcError`] renders a fixed, machine-parseable message; downstream
//! tooling greps these messages out of logs, so the format is a contract:
//!
//! ```text
//! Calculation failed: kind=<KindName>, a=<a>, b=<b>, errorCode=<code>
//! ```

use std::error::Error as StdError;

use crate::kind::CalcKind;

/// Failure of a throwing evaluation, carrying the full calculation context.
///
/// Holds the operation kind, both operands, and the integer status code the
/// non-throwing layer would have reported. An optional source error chains
/// the lower-level cause for `Error::source` traversal without changing the
/// rendered message.
#[derive(Debug, thiserror::Error)]
#[error("Calculation failed: kind={kind}, a={a}, b={b}, errorCode={status}")]
pub struct CalcError {
    kind: CalcKind,
    a: i32,
    b: i32,
    status: i32,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl CalcError {
    pub(crate) fn new(kind: CalcKind, a: i32, b: i32, status: i32) -> Self {
        Self {
            kind,
            a,
            b,
            status,
            source: None,
        }
    }

    /// Attaches the lower-level cause to this error's source chain.
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The kind of operation that failed.
    #[must_use]
    pub fn kind(&self) -> CalcKind {
        self.kind
    }

    /// The operands of the failed calculation, as `(a, b)`.
    #[must_use]
    pub fn operands(&self) -> (i32, i32) {
        (self.a, self.b)
    }

    /// The integer status code of the failure.
    #[must_use]
    pub fn status(&self) -> i32 {
        self.status
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
