//! The non-throwing result type and its status codes.
//!
//! [`Outcome`] is the value handed to callers who opt out of `Result`
//! handling: a success flag, the computed value, and an integer status code.
//! The three fields are private and only the two crate-internal constructors
//! can build one, so every observable `Outcome` is internally consistent.

use serde::Serialize;

/// Integer status codes carried by an [`Outcome`].
pub mod status {
    /// The evaluation produced a result value.
    pub const SUCCESS: i32 = 0;
    /// The evaluation failed (division by zero or unknown operation kind).
    pub const FAILURE: i32 = -1;
}

/// Immutable result of a non-throwing evaluation.
///
/// Successful outcomes carry the computed value and [`status::SUCCESS`];
/// failed outcomes carry a zero value and [`status::FAILURE`]. The success
/// flag and the status code always agree.
///
/// `Outcome` serializes (for logs and diagnostics) but deliberately does not
/// deserialize: an externally supplied flag/status pair could disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    success: bool,
    value: i32,
    status: i32,
}

impl Outcome {
    pub(crate) const fn success(value: i32) -> Self {
        Self {
            success: true,
            value,
            status: status::SUCCESS,
        }
    }

    pub(crate) const fn failure() -> Self {
        Self {
            success: false,
            value: 0,
            status: status::FAILURE,
        }
    }

    /// Whether the evaluation produced a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// The computed value, or `0` when the evaluation failed.
    ///
    /// `0` is also a perfectly valid result (`0 + 0`, `5 x 0`), so check
    /// [`is_success`](Self::is_success) or use [`ok`](Self::ok) instead of
    /// testing the value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// The integer status code: [`status::SUCCESS`] or [`status::FAILURE`].
    #[must_use]
    pub const fn status(&self) -> i32 {
        self.status
    }

    /// The computed value as an `Option`, `None` on failure.
    #[must_use]
    pub const fn ok(&self) -> Option<i32> {
        if self.success {
            Some(self.value)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
