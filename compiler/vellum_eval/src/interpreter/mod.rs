//! Tree-walking interpreter.
//!
//! `Interpreter` reduces a `Block` of statements, collecting the declarations
//! it produces and reporting `@warn`/`@debug` on the warning channel.
//!
//! # Module structure
//!
//! - `builder`: `InterpreterBuilder` and `EvalConfig`
//! - `scope_guard`: RAII frame management
//! - `statements`: statement execution and control flow
//! - `function_call`: call dispatch and `NativeCall`
//! - `media`: media and feature query reduction

mod builder;
mod function_call;
mod media;
mod scope_guard;
mod statements;

pub use builder::{EvalConfig, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use function_call::NativeCall;
pub use scope_guard::ScopedInterpreter;

use vellum_diagnostic::{duplicate_key, undefined_variable, EvalError, EvalResult};
use vellum_ir::{
    BinaryOp, Block, Expr, ExprKind, QuoteMark, SchemaPart, SourceSpan, UnaryOp, Value,
};

use crate::diagnostics::CallStack;
use crate::exec::expr::{parse_textual, string_literal};
use crate::foreign::FunctionRegistry;
use crate::stack::ensure_sufficient_stack;
use crate::warning_handler::SharedWarningHandler;
use crate::{evaluate_binary, evaluate_unary, Environment};

/// Outcome of executing a statement or block.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
    /// No value produced; continue with the next statement.
    Next,
    /// `@return` reached; unwind to the enclosing function call.
    Return(Value),
}

/// A `property: value` pair produced by evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct CssDeclaration {
    pub property: String,
    pub value: Value,
    pub span: SourceSpan,
}

/// Tree-walking interpreter for stylesheet blocks.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) call_stack: CallStack,
    pub(crate) config: EvalConfig,
    pub(crate) warnings: SharedWarningHandler,
    pub(crate) output: Vec<CssDeclaration>,
}

impl Interpreter {
    /// Interpreter with default configuration and the built-in functions.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Execute a top-level block.
    pub fn run(&mut self, block: &Block) -> EvalResult<()> {
        tracing::debug!(statements = block.stmts.len(), "evaluating stylesheet");
        // `@return` outside a function fails before reaching this point.
        self.exec_block(block).map(|_| ())
    }

    /// Reduce an expression to a value.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
            .map_err(|err| self.decorate(err, &expr.span))
    }

    /// Attach the span of the node being evaluated and the live backtrace,
    /// unless an inner node already did. Generated nodes carry no position
    /// and leave the span to an enclosing node.
    pub(crate) fn decorate(&self, err: EvalError, span: &SourceSpan) -> EvalError {
        let err = if span.is_dummy() { err } else { err.or_span(span) };
        self.call_stack.attach_backtrace(err)
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(value.clone()),
            ExprKind::Textual { kind, text } => parse_textual(*kind, text),
            ExprKind::String {
                text,
                quote,
                delayed,
            } => Ok(string_literal(text, *quote, *delayed)),
            ExprKind::StringSchema { parts, quote } => self.eval_schema(parts, *quote),
            ExprKind::Variable(name) => self
                .env
                .lookup(name)
                .map(Value::unwrap_argument)
                .ok_or_else(|| undefined_variable(name)),
            ExprKind::List {
                items,
                separator,
                is_arglist,
            } => {
                let items = items
                    .iter()
                    .map(|item| self.eval_expr(item))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(if *is_arglist {
                    Value::arglist(items, Vec::new())
                } else {
                    Value::list(items, *separator)
                })
            }
            ExprKind::Map { entries } => self.eval_map(entries),
            ExprKind::Binary {
                op,
                left,
                right,
                delayed,
            } => self.eval_binary(*op, left, right, *delayed),
            ExprKind::Unary { op, operand } => self.eval_unary(*op, operand),
            ExprKind::Call { name, args } => self.eval_call(name, args, &expr.span),
            ExprKind::CallSchema { name, args } => self.eval_call_schema(name, args, &expr.span),
        }
    }

    /// Flatten an interpolated string. Interpolated fragments lose their
    /// quotes; the result takes the schema's quote mark.
    fn eval_schema(&mut self, parts: &[SchemaPart], quote: QuoteMark) -> EvalResult {
        let precision = self.precision();
        let mut text = String::new();
        for part in parts {
            let value = self.eval_expr(&part.expr)?;
            if part.is_interpolant {
                text.push_str(&value.to_text(precision));
            } else {
                text.push_str(&value.to_css(precision));
            }
        }
        Ok(Value::string_with(text, quote))
    }

    fn eval_map(&mut self, entries: &[(Expr, Expr)]) -> EvalResult {
        let mut reduced: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let key = self.eval_expr(key)?;
            if reduced.iter().any(|(k, _)| k.equals(&key)) {
                return Err(duplicate_key(&key.inspect(self.precision())));
            }
            let value = self.eval_expr(value)?;
            reduced.push((key, value));
        }
        Ok(Value::map(reduced))
    }

    pub(crate) fn eval_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        delayed: bool,
    ) -> EvalResult {
        match op {
            BinaryOp::And => {
                let left = self.eval_expr(left)?;
                if !left.is_truthy() {
                    return Ok(left);
                }
                self.eval_expr(right)
            }
            BinaryOp::Or => {
                let left = self.eval_expr(left)?;
                if left.is_truthy() {
                    return Ok(left);
                }
                self.eval_expr(right)
            }
            BinaryOp::Div if delayed => {
                // A literal slash: kept as text, never divided.
                let precision = self.precision();
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Ok(Value::string(format!(
                    "{}/{}",
                    left.to_css(precision),
                    right.to_css(precision)
                )))
            }
            _ => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(op, &left, &right, self.precision())
            }
        }
    }

    fn eval_unary(&mut self, op: UnaryOp, operand: &Expr) -> EvalResult {
        let value = self.eval_expr(operand)?;
        // `-$x` with `$x: null` renders as a bare sign; a literal `-null`
        // keeps its text.
        if op != UnaryOp::Not && operand.is_variable() && value.is_null() {
            return evaluate_unary(op, &Value::string(""), self.precision());
        }
        evaluate_unary(op, &value, self.precision())
    }

    /// Reduce an argument expression, ignoring any `delayed` flag on it.
    pub(crate) fn eval_undelayed(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Binary {
                op,
                left,
                right,
                delayed: true,
            } => self
                .eval_binary(*op, left, right, false)
                .map_err(|err| self.decorate(err, &expr.span)),
            ExprKind::String {
                text,
                quote,
                delayed: true,
            } => Ok(string_literal(text, *quote, false)),
            _ => self.eval_expr(expr),
        }
    }

    // Accessors

    #[inline]
    pub fn precision(&self) -> usize {
        self.config.precision
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    pub fn warning_handler(&self) -> &SharedWarningHandler {
        &self.warnings
    }

    /// Variable visible from the current frame.
    pub fn lookup_variable(&self, name: &str) -> Option<Value> {
        self.env.lookup(name)
    }

    /// Declarations produced so far, in evaluation order.
    pub fn declarations(&self) -> &[CssDeclaration] {
        &self.output
    }

    pub fn take_declarations(&mut self) -> Vec<CssDeclaration> {
        std::mem::take(&mut self.output)
    }

    /// Make every function of `registry` callable from stylesheets.
    pub fn register_foreign(&mut self, registry: &FunctionRegistry) {
        registry.install(&mut self.env);
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
