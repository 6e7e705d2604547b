//! Syntax tree consumed from the parser.
//!
//! Nodes own their children (`Box`/`Vec`). Function and mixin bodies are
//! behind `Arc` so definitions can be bound into environments without
//! copying the tree.

pub mod build;
mod expr;
mod media;
mod operators;
mod stmt;

pub use expr::{Argument, Expr, ExprKind, Parameter, SchemaPart, TextualKind};
pub use media::{FeatureQuery, MediaQuery, MediaQueryExpression, SupportsOperator};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{
    Assign, Block, CallableDef, Declaration, EachLoop, ForLoop, IfStmt, Include, Stmt, StmtKind,
    WhileLoop,
};
