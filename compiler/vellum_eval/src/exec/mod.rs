//! Evaluation helpers shared by the interpreter.
//!
//! - `bind`: argument-to-parameter binding
//! - `expr`: reduction of literal nodes and uncalled function text

pub mod bind;
pub mod expr;
