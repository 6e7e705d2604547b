//! Number introspection and rounding.

use vellum_diagnostic::EvalResult;
use vellum_ir::{Number, Unit, Value};

use crate::interpreter::NativeCall;

pub(super) fn unit(call: &mut NativeCall<'_>) -> EvalResult {
    let number = call.number("number")?;
    Ok(Value::quoted(number.unit.to_string()))
}

pub(super) fn unitless(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::Boolean(call.number("number")?.is_unitless()))
}

pub(super) fn comparable(call: &mut NativeCall<'_>) -> EvalResult {
    let left = call.number("number-1")?;
    let right = call.number("number-2")?;
    Ok(Value::Boolean(left.is_comparable(&right)))
}

/// `percentage(0.25)` is `25%`.
pub(super) fn percentage(call: &mut NativeCall<'_>) -> EvalResult {
    let number = call.number("value")?;
    if !number.is_unitless() {
        return Err(call.type_error("value", &Value::from_number(number), "unitless number"));
    }
    Ok(Value::from_number(Number::new(
        number.value * 100.0,
        Unit::single("%"),
    )))
}

/// Halves round away from zero.
pub(super) fn round(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::from_number(call.number("value")?.map_value(f64::round)))
}

pub(super) fn abs(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::from_number(call.number("value")?.map_value(f64::abs)))
}
