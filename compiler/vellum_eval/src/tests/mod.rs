//! Evaluator tests that span several modules.
//!
//! Trees are built with `vellum_ir::ast::build`; every program runs on a
//! fresh interpreter whose warnings go to an in-memory buffer.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod builtins_tests;
mod foreign_tests;
mod function_tests;

use vellum_diagnostic::{EvalError, EvalResult};
use vellum_ir::{Block, Expr, Value};

use crate::interpreter::{Interpreter, InterpreterBuilder};
use crate::warning_handler::buffer_handler;

fn interpreter() -> Interpreter {
    InterpreterBuilder::new()
        .warning_handler(buffer_handler())
        .build()
}

/// Reduce `expr` on a fresh interpreter.
fn eval(expr: &Expr) -> EvalResult {
    interpreter().eval_expr(expr)
}

/// Run `program`, then reduce `expr` in the resulting root frame.
fn eval_after(program: &Block, expr: &Expr) -> EvalResult {
    let mut interp = interpreter();
    interp.run(program)?;
    interp.eval_expr(expr)
}

/// Run `program` and return the interpreter for inspection.
fn run(program: &Block) -> Interpreter {
    let mut interp = interpreter();
    interp.run(program).unwrap();
    interp
}

fn run_err(program: &Block) -> EvalError {
    interpreter().run(program).unwrap_err()
}

/// CSS rendering at the default precision.
fn css(value: &Value) -> String {
    value.to_css(vellum_ir::DEFAULT_PRECISION)
}
