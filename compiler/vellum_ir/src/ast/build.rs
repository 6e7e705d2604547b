//! Constructors for building trees programmatically.
//!
//! Frontends that already track positions should use `Expr::new` and
//! `Stmt::new`; these helpers attach `SourceSpan::dummy()` and are meant for
//! embedders generating trees and for tests. Chain `.at(span)` to attach a
//! real location.

use std::sync::Arc;

use super::expr::{Argument, Expr, ExprKind, Parameter, SchemaPart, TextualKind};
use super::operators::{BinaryOp, UnaryOp};
use super::stmt::{
    Assign, Block, CallableDef, Declaration, EachLoop, ForLoop, IfStmt, Include, Stmt, StmtKind,
    WhileLoop,
};
use crate::span::SourceSpan;
use crate::value::{QuoteMark, Separator, Value};

fn expr(kind: ExprKind) -> Expr {
    Expr::new(kind, SourceSpan::dummy())
}

fn stmt(kind: StmtKind) -> Stmt {
    Stmt::new(kind, SourceSpan::dummy())
}

// Expressions

/// Already reduced value.
pub fn literal(value: Value) -> Expr {
    expr(ExprKind::Literal(value))
}

/// Unitless number literal.
pub fn number(value: f64) -> Expr {
    literal(Value::number(value))
}

/// Number literal with a unit.
pub fn dimension(value: f64, unit: &str) -> Expr {
    literal(Value::dimension(value, unit))
}

pub fn boolean(value: bool) -> Expr {
    literal(Value::Boolean(value))
}

pub fn null() -> Expr {
    literal(Value::Null)
}

/// Lexed numeric/hex text.
pub fn textual(kind: TextualKind, text: impl Into<String>) -> Expr {
    expr(ExprKind::Textual {
        kind,
        text: text.into(),
    })
}

/// Unquoted identifier-like string.
pub fn ident(text: impl Into<String>) -> Expr {
    expr(ExprKind::String {
        text: text.into(),
        quote: QuoteMark::None,
        delayed: false,
    })
}

/// Double-quoted string.
pub fn quoted(text: impl Into<String>) -> Expr {
    expr(ExprKind::String {
        text: text.into(),
        quote: QuoteMark::Double,
        delayed: false,
    })
}

/// Interpolated string.
pub fn schema(parts: Vec<SchemaPart>, quote: QuoteMark) -> Expr {
    expr(ExprKind::StringSchema { parts, quote })
}

/// Literal fragment of an interpolated string.
pub fn schema_text(text: impl Into<String>) -> SchemaPart {
    SchemaPart {
        expr: ident(text),
        is_interpolant: false,
    }
}

/// `#{...}` fragment of an interpolated string.
pub fn interpolant(expr: Expr) -> SchemaPart {
    SchemaPart {
        expr,
        is_interpolant: true,
    }
}

/// `$name`.
pub fn var(name: impl Into<String>) -> Expr {
    expr(ExprKind::Variable(name.into()))
}

pub fn list(items: Vec<Expr>, separator: Separator) -> Expr {
    expr(ExprKind::List {
        items,
        separator,
        is_arglist: false,
    })
}

pub fn map(entries: Vec<(Expr, Expr)>) -> Expr {
    expr(ExprKind::Map { entries })
}

pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    expr(ExprKind::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
        delayed: false,
    })
}

/// `left / right` kept as a literal slash.
pub fn delayed_div(left: Expr, right: Expr) -> Expr {
    expr(ExprKind::Binary {
        op: BinaryOp::Div,
        left: Box::new(left),
        right: Box::new(right),
        delayed: true,
    })
}

pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
    expr(ExprKind::Unary {
        op,
        operand: Box::new(operand),
    })
}

/// Call with positional arguments.
pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Expr {
    call_with(name, args.into_iter().map(Argument::positional).collect())
}

/// Call with arbitrary arguments.
pub fn call_with(name: impl Into<String>, args: Vec<Argument>) -> Expr {
    expr(ExprKind::Call {
        name: name.into(),
        args,
    })
}

/// Call with an interpolated name.
pub fn call_schema(name: Expr, args: Vec<Argument>) -> Expr {
    expr(ExprKind::CallSchema {
        name: Box::new(name),
        args,
    })
}

// Statements

pub fn block(stmts: Vec<Stmt>) -> Block {
    Block::new(stmts)
}

/// `$name: value`.
pub fn assign(name: impl Into<String>, value: Expr) -> Stmt {
    stmt(StmtKind::Assign(Assign {
        name: name.into(),
        value,
        guarded: false,
        global: false,
    }))
}

/// `$name: value !default`.
pub fn assign_default(name: impl Into<String>, value: Expr) -> Stmt {
    stmt(StmtKind::Assign(Assign {
        name: name.into(),
        value,
        guarded: true,
        global: false,
    }))
}

/// `$name: value !global`.
pub fn assign_global(name: impl Into<String>, value: Expr) -> Stmt {
    stmt(StmtKind::Assign(Assign {
        name: name.into(),
        value,
        guarded: false,
        global: true,
    }))
}

pub fn if_stmt(predicate: Expr, consequent: Block, alternative: Option<Block>) -> Stmt {
    stmt(StmtKind::If(IfStmt {
        predicate,
        consequent,
        alternative,
    }))
}

pub fn for_loop(
    variable: impl Into<String>,
    from: Expr,
    to: Expr,
    inclusive: bool,
    body: Block,
) -> Stmt {
    stmt(StmtKind::For(ForLoop {
        variable: variable.into(),
        from,
        to,
        inclusive,
        body,
    }))
}

pub fn each_loop(variables: &[&str], source: Expr, body: Block) -> Stmt {
    stmt(StmtKind::Each(EachLoop {
        variables: variables.iter().map(|v| (*v).to_string()).collect(),
        source,
        body,
    }))
}

pub fn while_loop(predicate: Expr, body: Block) -> Stmt {
    stmt(StmtKind::While(WhileLoop { predicate, body }))
}

pub fn ret(value: Expr) -> Stmt {
    stmt(StmtKind::Return(value))
}

pub fn warn(message: Expr) -> Stmt {
    stmt(StmtKind::Warn(message))
}

pub fn debug(message: Expr) -> Stmt {
    stmt(StmtKind::Debug(message))
}

pub fn error(message: Expr) -> Stmt {
    stmt(StmtKind::Error(message))
}

pub fn function(name: impl Into<String>, params: Vec<Parameter>, body: Block) -> Stmt {
    stmt(StmtKind::FunctionDef(Arc::new(CallableDef {
        name: name.into(),
        params,
        body,
    })))
}

pub fn mixin(name: impl Into<String>, params: Vec<Parameter>, body: Block) -> Stmt {
    stmt(StmtKind::MixinDef(Arc::new(CallableDef {
        name: name.into(),
        params,
        body,
    })))
}

pub fn include(name: impl Into<String>, args: Vec<Argument>) -> Stmt {
    stmt(StmtKind::Include(Include {
        name: name.into(),
        args,
    }))
}

/// `property: value` with a plain property name.
pub fn declaration(property: impl Into<String>, value: Expr) -> Stmt {
    stmt(StmtKind::Declaration(Declaration {
        property: ident(property),
        value,
    }))
}

pub fn expr_stmt(value: Expr) -> Stmt {
    stmt(StmtKind::Expr(value))
}
