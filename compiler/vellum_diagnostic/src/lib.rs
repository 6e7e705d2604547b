//! Evaluation errors for the Vellum evaluator.
//!
//! - `EvalError`: structured fatal error with source span and backtrace
//! - `EvalErrorKind`: typed error categories
//! - `EvalBacktrace` / `BacktraceFrame`: call-chain snapshot at an error or
//!   warning site
//! - factory functions (`undefined_variable`, `incompatible_units`, ...):
//!   the public way to build errors
//!
//! Every fatal error aborts the whole evaluation; there is no recovery inside
//! the evaluator.

mod backtrace;
mod error;
mod factories;

pub use backtrace::{BacktraceFrame, EvalBacktrace};
pub use error::{EvalError, EvalErrorKind, EvalResult};
pub use factories::*;
