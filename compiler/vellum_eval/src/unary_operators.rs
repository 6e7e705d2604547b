//! Unary operator implementations.

use vellum_diagnostic::EvalResult;
use vellum_ir::{UnaryOp, Value};

/// Evaluate a unary operation on a reduced operand.
///
/// Numbers keep their unit. Any other operand degrades to text: the sign
/// followed by the operand's inspected form (`-null`, `+"a"`).
pub fn evaluate_unary(op: UnaryOp, operand: &Value, precision: usize) -> EvalResult {
    let operand = operand.clone().unwrap_argument();
    match (op, &operand) {
        (UnaryOp::Not, value) => Ok(Value::Boolean(!value.is_truthy())),
        (UnaryOp::Plus, Value::Number(_)) => Ok(operand.clone()),
        (UnaryOp::Minus, Value::Number(n)) => Ok(Value::from_number(n.map_value(|v| -v))),
        (UnaryOp::Plus | UnaryOp::Minus, value) => Ok(Value::string(format!(
            "{}{}",
            op.as_symbol(),
            value.inspect(precision)
        ))),
    }
}
