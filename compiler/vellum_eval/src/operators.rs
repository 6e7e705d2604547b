//! Binary operator implementations.
//!
//! Direct enum-based dispatch on the pair of operand types. The type set is
//! closed, so pattern matching is preferred over trait objects.
//!
//! - number op number: unit-aware arithmetic
//! - number op color, color op number: scalar applied per channel
//! - color op color: per-channel arithmetic with matching alpha
//! - anything else: string concatenation

use std::borrow::Cow;

use vellum_diagnostic::{
    alpha_mismatch, division_by_zero, incompatible_units, invalid_operands, modulo_by_zero,
    EvalResult,
};
use vellum_ir::{color_by_name, BinaryOp, Color, Number, QuoteMark, Unit, Value};

use crate::compare::evaluate_comparison;

/// Evaluate a binary operation on two reduced operands.
///
/// `and`/`or` are evaluated eagerly here; the interpreter short-circuits
/// before reaching this point.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value, precision: usize) -> EvalResult {
    let (left, right) = (strip(left), strip(right));
    match op {
        BinaryOp::And => return Ok((if left.is_truthy() { right } else { left }).clone()),
        BinaryOp::Or => return Ok((if left.is_truthy() { left } else { right }).clone()),
        _ if op.is_comparison() => return evaluate_comparison(op, left, right),
        _ => {}
    }
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(op, a, b),
        (Value::Number(n), Value::Color(c)) => eval_number_color(op, n, c, left, right, precision),
        (Value::Color(c), Value::Number(n)) => eval_number_color(op, n, c, left, right, precision),
        (Value::Color(a), Value::Color(b)) => eval_color_binary(op, a, b),
        _ => eval_fallback(op, left, right, precision),
    }
}

/// Look through argument wrappers.
fn strip(value: &Value) -> &Value {
    match value {
        Value::Argument(arg) => strip(&arg.value),
        other => other,
    }
}

// Numbers

/// Unit shared by both operands of `+`, `-` or `%`, and the right operand's
/// value expressed in it. `%` falls back to the raw right value when the
/// units do not convert.
///
/// A unitless operand adopts the other operand's unit.
fn reconcile(a: &Number, b: &Number) -> EvalResult<(Unit, f64)> {
    if b.is_unitless() {
        return Ok((a.unit.clone(), b.value));
    }
    if a.is_unitless() {
        return Ok((b.unit.clone(), b.value));
    }
    match b.convert_to(&a.unit) {
        Some(converted) => Ok((a.unit.clone(), converted.value)),
        None => Err(incompatible_units(&a.unit.to_string(), &b.unit.to_string())),
    }
}

/// Floored modulo: the result takes the sign of the divisor.
fn floored_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

fn eval_number_binary(op: BinaryOp, a: &Number, b: &Number) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let (unit, rhs) = reconcile(a, b)?;
            Ok(Value::from_number(Number::new(a.value + rhs, unit)))
        }
        BinaryOp::Sub => {
            let (unit, rhs) = reconcile(a, b)?;
            Ok(Value::from_number(Number::new(a.value - rhs, unit)))
        }
        BinaryOp::Mod => {
            if b.value == 0.0 {
                return Err(modulo_by_zero());
            }
            // Only `+` and `-` insist on compatible units.
            let (unit, rhs) = reconcile(a, b).unwrap_or_else(|_| (a.unit.clone(), b.value));
            Ok(Value::from_number(Number::new(
                floored_mod(a.value, rhs),
                unit,
            )))
        }
        BinaryOp::Mul => {
            let (unit, factor) = a.unit.multiply(&b.unit);
            Ok(Value::from_number(Number::new(
                a.value * b.value * factor,
                unit,
            )))
        }
        BinaryOp::Div => {
            if b.value == 0.0 {
                // Not an error: the quotient degrades to text.
                let text = if a.value == 0.0 { "NaN" } else { "Infinity" };
                return Ok(Value::string(text));
            }
            let (unit, factor) = a.unit.divide(&b.unit);
            Ok(Value::from_number(Number::new(
                a.value / b.value * factor,
                unit,
            )))
        }
        _ => Err(invalid_operands(op, "number", "number")),
    }
}

// Colors

/// Number with color in either order. `left`/`right` are the original
/// operands, used for the textual forms.
fn eval_number_color(
    op: BinaryOp,
    n: &Number,
    c: &Color,
    left: &Value,
    right: &Value,
    precision: usize,
) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(map_channels(c, |ch| ch + n.value)),
        BinaryOp::Mul => Ok(map_channels(c, |ch| ch * n.value)),
        BinaryOp::Sub | BinaryOp::Div => Ok(Value::string(format!(
            "{}{}{}",
            without_disp(left).to_css(precision),
            op.as_symbol(),
            without_disp(right).to_css(precision)
        ))),
        _ => Err(invalid_operands(op, left.type_name(), right.type_name())),
    }
}

/// A color operand loses its source spelling once arithmetic touches it.
fn without_disp(value: &Value) -> Cow<'_, Value> {
    match value {
        Value::Color(c) if c.disp.is_some() => Cow::Owned(Value::color(Color {
            disp: None,
            ..(**c).clone()
        })),
        other => Cow::Borrowed(other),
    }
}

/// New color with `f` applied to r, g and b; alpha kept, spelling dropped.
fn map_channels(c: &Color, f: impl Fn(f64) -> f64) -> Value {
    Value::rgba(f(c.r), f(c.g), f(c.b), c.a)
}

fn eval_color_binary(op: BinaryOp, a: &Color, b: &Color) -> EvalResult {
    if a.a != b.a {
        return Err(alpha_mismatch());
    }
    let zero_channel = b.r == 0.0 || b.g == 0.0 || b.b == 0.0;
    let channel = |f: fn(f64, f64) -> f64| Value::rgba(f(a.r, b.r), f(a.g, b.g), f(a.b, b.b), a.a);
    match op {
        BinaryOp::Add => Ok(channel(|x, y| x + y)),
        BinaryOp::Sub => Ok(channel(|x, y| x - y)),
        BinaryOp::Mul => Ok(channel(|x, y| x * y)),
        BinaryOp::Div if zero_channel => Err(division_by_zero()),
        BinaryOp::Div => Ok(channel(|x, y| x / y)),
        BinaryOp::Mod if zero_channel => Err(modulo_by_zero()),
        BinaryOp::Mod => Ok(channel(floored_mod)),
        _ => Err(invalid_operands(op, "color", "color")),
    }
}

// Everything else

/// Color named by an unquoted string (`red` kept as text by the parser).
fn named_color(value: &Value) -> Option<Color> {
    match value {
        Value::String(s) if !s.is_quoted() => color_by_name(&s.text),
        _ => None,
    }
}

fn eval_fallback(op: BinaryOp, left: &Value, right: &Value, precision: usize) -> EvalResult {
    match (named_color(left), named_color(right), left, right) {
        (Some(a), Some(b), _, _) => return eval_color_binary(op, &a, &b),
        (Some(c), None, _, Value::Number(n)) | (None, Some(c), Value::Number(n), _) => {
            return eval_number_color(op, n, &c, left, right, precision);
        }
        _ => {}
    }

    let separator = match op {
        BinaryOp::Mul | BinaryOp::Mod => {
            return Err(invalid_operands(op, left.type_name(), right.type_name()));
        }
        BinaryOp::Sub => "-",
        BinaryOp::Div => "/",
        _ => "",
    };
    let text = format!(
        "{}{separator}{}",
        without_disp(left).to_text(precision),
        without_disp(right).to_text(precision)
    );
    Ok(Value::string_with(text, quote_of(left).or(quote_of(right)).unwrap_or_default()))
}

fn quote_of(value: &Value) -> Option<QuoteMark> {
    match value {
        Value::String(s) if s.is_quoted() => Some(s.quote),
        _ => None,
    }
}
