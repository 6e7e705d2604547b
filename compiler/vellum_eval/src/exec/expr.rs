//! Reduction of literal nodes.

use vellum_diagnostic::{EvalError, EvalResult};
use vellum_ir::{color_by_name, Color, QuoteMark, TextualKind, Value};

/// Reduce lexed numeric or hex text.
///
/// Dimensions split at the first character that can't belong to a number:
/// `12.5px` is `12.5` in `px`. Hex colors keep their spelling.
pub fn parse_textual(kind: TextualKind, text: &str) -> EvalResult {
    match kind {
        TextualKind::Number => parse_number(text).map(Value::number),
        TextualKind::Percentage => {
            let digits = text.strip_suffix('%').unwrap_or(text);
            parse_number(digits).map(|v| Value::dimension(v, "%"))
        }
        TextualKind::Dimension => {
            let split = text
                .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.')))
                .unwrap_or(text.len());
            let (digits, unit) = text.split_at(split);
            parse_number(digits).map(|v| Value::dimension(v, unit))
        }
        TextualKind::Hex => Color::from_hex(text)
            .map(|color| Value::color(color.with_disp(text)))
            .ok_or_else(|| EvalError::new(format!("Invalid color: {text}"))),
    }
}

fn parse_number(text: &str) -> EvalResult<f64> {
    text.parse::<f64>()
        .map_err(|_| EvalError::new(format!("Invalid number: {text}")))
}

/// Reduce a string literal. Unquoted, non-delayed color names become colors.
pub fn string_literal(text: &str, quote: QuoteMark, delayed: bool) -> Value {
    if !delayed && !quote.is_quoted() {
        if let Some(color) = color_by_name(text) {
            return Value::color(color);
        }
    }
    Value::string_with(text, quote)
}

/// Text of a call to an undefined function: `name(a, $b: c)`.
pub fn undefined_call_text(name: &str, args: &[Value], precision: usize) -> String {
    let rendered: Vec<String> = args
        .iter()
        .map(|arg| match arg {
            Value::Argument(arg) => {
                let value = arg.value.to_css(precision);
                match &arg.name {
                    Some(name) => format!("${name}: {value}"),
                    None => value,
                }
            }
            other => other.to_css(precision),
        })
        .collect();
    format!("{name}({})", rendered.join(", "))
}
