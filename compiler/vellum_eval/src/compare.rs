//! Equality and ordering.
//!
//! `eq` and `lt` are the primitives; every relational operator derives from
//! them:
//!
//! ```text
//! a != b  =  !eq(a, b)
//! a >  b  =  !lt(a, b) && !eq(a, b)
//! a <= b  =  lt(a, b) || eq(a, b)
//! a >= b  =  !lt(a, b)
//! ```
//!
//! `lt` ignores units when either side is unitless but `eq` does not, so
//! `1 > 1px` holds while `1px <= 1` does not.

use vellum_diagnostic::{incomparable_units, invalid_operands, not_a_number, EvalResult};
use vellum_ir::{BinaryOp, Value};

/// Language-level equality. Never fails.
#[inline]
pub fn values_equal(a: &Value, b: &Value) -> bool {
    a.equals(b)
}

/// `a < b`. Both operands must be numbers with reconcilable units.
///
/// A unitless operand compares against any unit.
pub fn values_less(a: &Value, b: &Value) -> EvalResult<bool> {
    let (Value::Number(a), Value::Number(b)) = (a.clone().unwrap_argument(), b.clone().unwrap_argument())
    else {
        return Err(not_a_number());
    };
    if a.is_unitless() || b.is_unitless() {
        return Ok(a.value < b.value);
    }
    match b.convert_to(&a.unit) {
        Some(b) => Ok(a.value < b.value),
        None => Err(incomparable_units()),
    }
}

/// Evaluate a relational operator.
pub fn evaluate_comparison(op: BinaryOp, a: &Value, b: &Value) -> EvalResult {
    let result = match op {
        BinaryOp::Eq => values_equal(a, b),
        BinaryOp::NotEq => !values_equal(a, b),
        BinaryOp::Lt => values_less(a, b)?,
        BinaryOp::Gt => !values_less(a, b)? && !values_equal(a, b),
        BinaryOp::LtEq => values_less(a, b)? || values_equal(a, b),
        BinaryOp::GtEq => !values_less(a, b)?,
        _ => return Err(invalid_operands(op, a.type_name(), b.type_name())),
    };
    Ok(Value::Boolean(result))
}
