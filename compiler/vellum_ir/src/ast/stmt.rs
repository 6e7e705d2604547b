//! Statement nodes.

use std::sync::Arc;

use super::expr::{Argument, Expr, Parameter};
use crate::span::SourceSpan;

/// A sequence of statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Block { stmts }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// Statement node with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: SourceSpan,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: SourceSpan) -> Self {
        Stmt { kind, span }
    }

    /// Replace the span of this node.
    #[must_use]
    pub fn at(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }
}

/// `$name: value [!default] [!global]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    pub name: String,
    pub value: Expr,
    /// `!default`: only assigns when the name is unbound.
    pub guarded: bool,
    /// `!global`: resolves against the root frame.
    pub global: bool,
}

/// `@if` with an optional `@else` block (an `@else if` is an `If` inside it).
#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    pub predicate: Expr,
    pub consequent: Block,
    pub alternative: Option<Block>,
}

/// `@for $var from <from> through|to <to>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub variable: String,
    pub from: Expr,
    pub to: Expr,
    /// `through` (true) versus `to` (false).
    pub inclusive: bool,
    pub body: Block,
}

/// `@each $a, $b in <source>`.
#[derive(Clone, Debug, PartialEq)]
pub struct EachLoop {
    pub variables: Vec<String>,
    pub source: Expr,
    pub body: Block,
}

/// `@while <predicate>`.
#[derive(Clone, Debug, PartialEq)]
pub struct WhileLoop {
    pub predicate: Expr,
    pub body: Block,
}

/// `@function` / `@mixin` definition.
#[derive(Clone, Debug, PartialEq)]
pub struct CallableDef {
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Block,
}

/// `@include name(args)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Include {
    pub name: String,
    pub args: Vec<Argument>,
}

/// `property: value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: Expr,
    pub value: Expr,
}

/// Statement kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Block(Block),
    Assign(Assign),
    If(IfStmt),
    For(ForLoop),
    Each(EachLoop),
    While(WhileLoop),
    Return(Expr),
    Warn(Expr),
    Debug(Expr),
    Error(Expr),
    FunctionDef(Arc<CallableDef>),
    MixinDef(Arc<CallableDef>),
    Include(Include),
    Declaration(Declaration),
    /// Expression evaluated for its side effects.
    Expr(Expr),
}
