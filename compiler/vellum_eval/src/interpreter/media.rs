//! Media and feature query reduction.
//!
//! Queries are returned as structural copies of their input with every
//! sub-expression replaced by an `ExprKind::Literal` holding its value, so an
//! emitter can render them without evaluating anything itself.

use vellum_diagnostic::EvalResult;
use vellum_ir::{Expr, ExprKind, FeatureQuery, MediaQuery, MediaQueryExpression};

use super::Interpreter;

impl Interpreter {
    /// Reduce every expression in a media query.
    pub fn eval_media_query(&mut self, query: &MediaQuery) -> EvalResult<MediaQuery> {
        let media_type = query
            .media_type
            .as_ref()
            .map(|expr| self.reduce(expr))
            .transpose()?;
        let expressions = query
            .expressions
            .iter()
            .map(|expression| {
                Ok(MediaQueryExpression {
                    feature: self.reduce(&expression.feature)?,
                    value: expression
                        .value
                        .as_ref()
                        .map(|value| self.reduce(value))
                        .transpose()?,
                    is_interpolated: expression.is_interpolated,
                })
            })
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(MediaQuery {
            media_type,
            is_negated: query.is_negated,
            is_restricted: query.is_restricted,
            expressions,
            span: query.span.clone(),
        })
    }

    /// Reduce every expression in an `@supports` condition.
    pub fn eval_feature_query(&mut self, query: &FeatureQuery) -> EvalResult<FeatureQuery> {
        Ok(match query {
            FeatureQuery::Operation {
                left,
                right,
                operator,
            } => FeatureQuery::Operation {
                left: Box::new(self.eval_feature_query(left)?),
                right: Box::new(self.eval_feature_query(right)?),
                operator: *operator,
            },
            FeatureQuery::Negation(inner) => {
                FeatureQuery::Negation(Box::new(self.eval_feature_query(inner)?))
            }
            FeatureQuery::Declaration { feature, value } => FeatureQuery::Declaration {
                feature: self.reduce(feature)?,
                value: self.reduce(value)?,
            },
            FeatureQuery::Interpolation(expr) => FeatureQuery::Interpolation(self.reduce(expr)?),
        })
    }

    /// The value of `expr`, spliced back into the tree at the same span.
    fn reduce(&mut self, expr: &Expr) -> EvalResult<Expr> {
        let value = self.eval_expr(expr)?;
        Ok(Expr::new(ExprKind::Literal(value), expr.span.clone()))
    }
}
