use vellum_diagnostic::EvalResult;
use vellum_ir::{QuoteMark, Value};

use crate::interpreter::NativeCall;

pub(super) fn quote(call: &mut NativeCall<'_>) -> EvalResult {
    match call.arg("string") {
        Value::String(s) if s.is_quoted() => Ok(Value::String(s)),
        Value::String(s) => Ok(Value::quoted(s.text.clone())),
        other => Err(call.type_error("string", &other, "string")),
    }
}

/// Non-string arguments pass through unchanged.
pub(super) fn unquote(call: &mut NativeCall<'_>) -> EvalResult {
    match call.arg("string") {
        Value::String(s) if s.is_quoted() => Ok(Value::string_with(s.text.clone(), QuoteMark::None)),
        other => Ok(other),
    }
}
