//! Calc Core — operation kinds, the arithmetic registry, and the dual-mode
//! evaluation façade.

pub mod error;
pub mod eval;
pub mod kind;
pub mod outcome;
pub mod registry;

pub use error::CalcError;
pub use eval::{add, divide, evaluate, evaluate_or_fail, evaluate_raw, multiply, subtract};
pub use kind::{CalcKind, UnknownTag};
pub use outcome::{status, Outcome};
pub use registry::EvalError;
