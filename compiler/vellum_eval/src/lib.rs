//! Vellum Eval - expression evaluator for the Vellum stylesheet language.
//!
//! This crate reduces a parsed syntax tree to concrete values: numbers with
//! units, colors, strings, lists, maps, booleans and null.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: chain of shared frames with resolve-then-mutate assignment
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `Callable`: user, native, foreign and overloaded functions behind one
//!   call path
//! - `FunctionRegistry`: functions supplied by the embedder
//! - `Value` types from `vellum_ir`
//!
//! # Re-exports
//!
//! Value and error types are re-exported for convenience:
//! - `Value`, `Number`, `Color`, `Heap` (from `vellum_ir`)
//! - `EvalError`, `EvalResult`, `EvalBacktrace` (from `vellum_diagnostic`)

mod callable;
mod compare;
mod diagnostics;
mod environment;
mod exec;
pub mod foreign;
mod functions;
pub mod interpreter;
mod operators;
mod stack;
mod unary_operators;
mod warning_handler;

pub use vellum_diagnostic::{EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use vellum_ir::{Color, Heap, Number, Unit, Value};

pub use callable::{Callable, NativeFn, NativeFunction};
pub use compare::{evaluate_comparison, values_equal, values_less};
pub use diagnostics::{CallFrame, CallStack, FrameKind};
pub use environment::{
    function_key, mixin_key, overload_key, Binding, Environment, LocalScope, Scope, WeakScope,
};
pub use foreign::{ForeignCallable, ForeignFunction, ForeignValue, FunctionRegistry};
pub use functions::signature::{parse_parameter, parse_parameters};
pub use interpreter::{
    CssDeclaration, EvalConfig, Flow, Interpreter, InterpreterBuilder, NativeCall,
    ScopedInterpreter, DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::evaluate_binary;
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;
pub use warning_handler::{
    buffer_handler, silent_handler, stderr_handler, BufferWarningHandler, SharedWarningHandler,
    StderrWarningHandler, WarningHandlerImpl,
};

#[cfg(test)]
mod tests;
