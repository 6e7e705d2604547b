//! Vellum IR - syntax tree and runtime value types.
//!
//! This crate contains the data structures shared by every stage of the
//! Vellum evaluator:
//! - `SourceSpan` for diagnostics
//! - The syntax tree handed over by a parser (`Expr`, `Stmt`, `Block`, ...)
//! - The runtime value model (`Value`, `Number`, `Color`, `ListValue`, ...)
//! - Value rendering (`Value::to_css`, `Value::inspect`)
//!
//! # Why values live next to the tree
//!
//! The stylesheet language does not separate expressions from values: a
//! reduced list can be spliced back into the tree (`ExprKind::Literal`) and a
//! lazily evaluated call argument is a value holding an expression
//! (`Value::Thunk`). Keeping both in one crate avoids a dependency cycle.

pub mod ast;
mod span;
pub mod value;

pub use ast::{
    Argument, Assign, BinaryOp, Block, CallableDef, Declaration, EachLoop, Expr, ExprKind,
    FeatureQuery, ForLoop, IfStmt, Include, MediaQuery, MediaQueryExpression, Parameter,
    SchemaPart, Stmt, StmtKind, SupportsOperator, TextualKind, UnaryOp, WhileLoop,
};
pub use span::SourceSpan;
pub use value::{
    color_by_name, format_number, ArgumentValue, Color, Heap, ListValue, MapValue, Number,
    QuoteMark, RenderMode, RenderOptions, Separator, StringValue, Thunk, Unit, Value,
    DEFAULT_PRECISION,
};
