//! Media and feature query nodes.
//!
//! These carry no semantics of their own during evaluation: the evaluator
//! returns a structural copy with every sub-expression reduced.

use super::expr::Expr;
use crate::span::SourceSpan;

/// `[not|only] <type> and (<feature>: <value>) ...`.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    pub media_type: Option<Expr>,
    pub is_negated: bool,
    pub is_restricted: bool,
    pub expressions: Vec<MediaQueryExpression>,
    pub span: SourceSpan,
}

/// `(<feature>[: <value>])`.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQueryExpression {
    pub feature: Expr,
    pub value: Option<Expr>,
    pub is_interpolated: bool,
}

/// Combinator of two `@supports` conditions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SupportsOperator {
    And,
    Or,
}

/// `@supports` condition tree.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureQuery {
    Operation {
        left: Box<FeatureQuery>,
        right: Box<FeatureQuery>,
        operator: SupportsOperator,
    },
    Negation(Box<FeatureQuery>),
    Declaration { feature: Expr, value: Expr },
    Interpolation(Expr),
}
