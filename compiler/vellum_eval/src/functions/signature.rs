//! Parameter lists in signature notation.
//!
//! Built-in and foreign functions declare parameters as short strings:
//! `"$color"`, `"$amount: 10%"`, `"$args..."`. Default values are limited to
//! single literals: numbers, percentages, dimensions, hex colors, `true`,
//! `false`, `null`, quoted strings, and identifiers.

use vellum_ir::ast::build;
use vellum_ir::{Expr, Parameter, TextualKind};

/// Parse every entry of a signature.
pub fn parse_parameters(entries: &[&str]) -> Vec<Parameter> {
    entries.iter().map(|entry| parse_parameter(entry)).collect()
}

/// Parse one signature entry. The leading `$` is optional.
pub fn parse_parameter(entry: &str) -> Parameter {
    let entry = entry.trim();
    let entry = entry.strip_prefix('$').unwrap_or(entry);
    if let Some(name) = entry.strip_suffix("...") {
        return Parameter::rest(name.trim());
    }
    match entry.split_once(':') {
        Some((name, default)) => Parameter::optional(name.trim(), parse_default(default.trim())),
        None => Parameter::required(entry),
    }
}

fn parse_default(text: &str) -> Expr {
    match text {
        "true" => return build::boolean(true),
        "false" => return build::boolean(false),
        "null" => return build::null(),
        _ => {}
    }
    if text.starts_with('#') {
        return build::textual(TextualKind::Hex, text);
    }
    if let Some(inner) = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return build::quoted(inner);
    }
    if starts_numeric(text) {
        let kind = if text.ends_with('%') {
            TextualKind::Percentage
        } else if text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
            TextualKind::Number
        } else {
            TextualKind::Dimension
        };
        return build::textual(kind, text);
    }
    build::ident(text)
}

fn starts_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    digits
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}
