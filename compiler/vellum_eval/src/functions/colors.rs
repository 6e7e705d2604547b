//! Color constructors and channel accessors.

use vellum_diagnostic::EvalResult;
use vellum_ir::{Color, Number, Value};

use crate::interpreter::NativeCall;

/// A channel argument: plain numbers are taken as is, percentages scale to
/// `0..=255`.
fn channel(call: &NativeCall<'_>, name: &str) -> EvalResult<f64> {
    let number = call.number(name)?;
    match number.unit.to_string().as_str() {
        "" => Ok(number.value),
        "%" => Ok(number.value * 255.0 / 100.0),
        _ => Err(call.type_error(name, &Value::from_number(number), "color channel")),
    }
}

fn alpha_channel(call: &NativeCall<'_>) -> EvalResult<f64> {
    let number = call.number("alpha")?;
    if number.unit.to_string() == "%" {
        return Ok(number.value / 100.0);
    }
    Ok(number.value)
}

pub(super) fn rgb(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::rgba(
        channel(call, "red")?,
        channel(call, "green")?,
        channel(call, "blue")?,
        1.0,
    ))
}

/// `rgba($red, $green, $blue, $alpha)`.
pub(super) fn rgba(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::rgba(
        channel(call, "red")?,
        channel(call, "green")?,
        channel(call, "blue")?,
        alpha_channel(call)?,
    ))
}

/// `rgba($color, $alpha)`: the color with its alpha replaced.
pub(super) fn rgba_color(call: &mut NativeCall<'_>) -> EvalResult {
    let color = call.color("color")?;
    let alpha = alpha_channel(call)?;
    Ok(Value::color(Color::new(color.r, color.g, color.b, alpha)))
}

fn channel_of(call: &NativeCall<'_>, pick: fn(&Color) -> f64) -> EvalResult {
    let color = call.color("color")?;
    Ok(Value::from_number(Number::unitless(pick(&color))))
}

pub(super) fn red(call: &mut NativeCall<'_>) -> EvalResult {
    channel_of(call, |c| c.r)
}

pub(super) fn green(call: &mut NativeCall<'_>) -> EvalResult {
    channel_of(call, |c| c.g)
}

pub(super) fn blue(call: &mut NativeCall<'_>) -> EvalResult {
    channel_of(call, |c| c.b)
}

pub(super) fn alpha(call: &mut NativeCall<'_>) -> EvalResult {
    channel_of(call, |c| c.a)
}
