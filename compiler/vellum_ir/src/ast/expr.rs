//! Expression nodes.

use super::operators::{BinaryOp, UnaryOp};
use crate::span::SourceSpan;
use crate::value::{QuoteMark, Separator, Value};

/// Expression node with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: SourceSpan,
}

impl Expr {
    /// Create an expression node.
    #[inline]
    pub fn new(kind: ExprKind, span: SourceSpan) -> Self {
        Expr { kind, span }
    }

    /// Replace the span of this node.
    #[must_use]
    pub fn at(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }

    /// Whether this node is a bare variable reference.
    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self.kind, ExprKind::Variable(_))
    }
}

/// Kind of lexed numeric/color text in a `Textual` node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextualKind {
    /// Plain number: `12`, `.5`.
    Number,
    /// Percentage: `50%`.
    Percentage,
    /// Number with a unit: `12px`, `1.5em`.
    Dimension,
    /// Hex color: `#fff`, `#ff0000`.
    Hex,
}

/// One fragment of an interpolated string.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaPart {
    pub expr: Expr,
    /// Fragment came from `#{...}`; its quotes are dropped when flattening.
    pub is_interpolant: bool,
}

/// A call-site argument.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub value: Expr,
    /// Keyword name (without `$`) for `$name: value` arguments.
    pub name: Option<String>,
    /// Splat of positional values (`$list...`).
    pub is_rest: bool,
    /// Splat of keyword values (`$map...` in keyword position).
    pub is_keyword_rest: bool,
    pub span: SourceSpan,
}

impl Argument {
    /// Plain positional argument.
    pub fn positional(value: Expr) -> Self {
        let span = value.span.clone();
        Argument {
            value,
            name: None,
            is_rest: false,
            is_keyword_rest: false,
            span,
        }
    }

    /// Keyword argument `$name: value`.
    pub fn named(name: impl Into<String>, value: Expr) -> Self {
        Argument {
            name: Some(name.into()),
            ..Argument::positional(value)
        }
    }

    /// Rest argument `value...`.
    pub fn rest(value: Expr) -> Self {
        Argument {
            is_rest: true,
            ..Argument::positional(value)
        }
    }
}

/// A declared parameter of a function or mixin.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    /// Name without `$`.
    pub name: String,
    pub default: Option<Expr>,
    /// Variadic `$args...` parameter. Only valid in last position.
    pub is_rest: bool,
}

impl Parameter {
    /// Required parameter.
    pub fn required(name: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            default: None,
            is_rest: false,
        }
    }

    /// Parameter with a default expression.
    pub fn optional(name: impl Into<String>, default: Expr) -> Self {
        Parameter {
            name: name.into(),
            default: Some(default),
            is_rest: false,
        }
    }

    /// Variadic parameter.
    pub fn rest(name: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            default: None,
            is_rest: true,
        }
    }
}

/// Expression kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// An already reduced value: number/boolean/null literals, and values
    /// spliced back into the tree. Evaluates to itself.
    Literal(Value),
    /// Lexed numeric or hex-color text.
    Textual { kind: TextualKind, text: String },
    /// String literal. Unquoted, non-delayed text naming a CSS color
    /// evaluates to that color.
    String {
        text: String,
        quote: QuoteMark,
        delayed: bool,
    },
    /// String with interpolated fragments.
    StringSchema {
        parts: Vec<SchemaPart>,
        quote: QuoteMark,
    },
    /// Variable reference (name without `$`).
    Variable(String),
    List {
        items: Vec<Expr>,
        separator: Separator,
        is_arglist: bool,
    },
    Map { entries: Vec<(Expr, Expr)> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        /// A `/` used as a literal separator (`font: 12px/1.5`).
        delayed: bool,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Call { name: String, args: Vec<Argument> },
    /// Call whose name is built from interpolation.
    CallSchema { name: Box<Expr>, args: Vec<Argument> },
}
