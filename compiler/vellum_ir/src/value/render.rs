//! Value stringification.
//!
//! Two modes share one walker: `Css` produces what ends up in the
//! stylesheet (nulls vanish), `Inspect` produces the debugging form used by
//! `inspect()`, `@debug` and error messages (nulls and empty lists are
//! visible, nested lists are parenthesised).

use std::fmt::{self, Write};

use super::number::format_number;
use super::{Color, ListValue, MapValue, StringValue, Value};

/// Decimal places kept when rendering numbers.
pub const DEFAULT_PRECISION: usize = 5;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Css,
    Inspect,
}

/// How to render a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub precision: usize,
    /// Drop optional whitespace (`a,b` instead of `a, b`).
    pub compressed: bool,
}

impl RenderOptions {
    pub fn new(mode: RenderMode, precision: usize) -> Self {
        RenderOptions {
            mode,
            precision,
            compressed: false,
        }
    }

    #[must_use]
    pub fn compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::new(RenderMode::Css, DEFAULT_PRECISION)
    }
}

impl Value {
    pub fn render(&self, options: RenderOptions) -> String {
        let mut out = String::new();
        render_into(&mut out, self, options, false);
        out
    }

    /// Stylesheet form.
    pub fn to_css(&self, precision: usize) -> String {
        self.render(RenderOptions::new(RenderMode::Css, precision))
    }

    /// Debugging form.
    pub fn inspect(&self, precision: usize) -> String {
        self.render(RenderOptions::new(RenderMode::Inspect, precision))
    }

    /// Stylesheet form with the outer quotes of a string removed.
    ///
    /// Used for concatenation, interpolation and diagnostic messages.
    pub fn to_text(&self, precision: usize) -> String {
        match self {
            Value::String(s) => s.text.clone(),
            Value::Argument(arg) => arg.value.to_text(precision),
            other => other.to_css(precision),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect(DEFAULT_PRECISION))
    }
}

fn render_into(out: &mut String, value: &Value, options: RenderOptions, nested: bool) {
    match value {
        Value::Number(n) => {
            out.push_str(&format_number(n.value, options.precision));
            // Writing to a String cannot fail.
            let _ = write!(out, "{}", n.unit);
        }
        Value::Color(c) => render_color(out, c, options),
        Value::String(s) => render_string(out, s),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => {
            if options.mode == RenderMode::Inspect {
                out.push_str("null");
            }
        }
        Value::List(list) => render_list(out, list, options, nested),
        Value::Map(map) => render_map(out, map, options),
        Value::Argument(arg) => render_into(out, &arg.value, options, nested),
        // Thunks are forced before they can reach output.
        Value::Thunk(_) => {}
    }
}

fn render_color(out: &mut String, color: &Color, options: RenderOptions) {
    if let Some(disp) = &color.disp {
        out.push_str(disp);
        return;
    }
    if color.a >= 1.0 {
        out.push_str(&color.to_hex());
        return;
    }
    let [r, g, b] = color.rgb_bytes();
    let alpha = format_number(color.a.clamp(0.0, 1.0), options.precision);
    let sep = if options.compressed { "," } else { ", " };
    let _ = write!(out, "rgba({r}{sep}{g}{sep}{b}{sep}{alpha})");
}

fn render_string(out: &mut String, string: &StringValue) {
    let Some(quote) = string.quote.as_char() else {
        out.push_str(&string.text);
        return;
    };
    out.push(quote);
    for c in string.text.chars() {
        if c == quote || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
}

fn render_list(out: &mut String, list: &ListValue, options: RenderOptions, nested: bool) {
    let inspect = options.mode == RenderMode::Inspect;
    if list.items.is_empty() {
        if inspect {
            out.push_str("()");
        }
        return;
    }
    let parenthesise = inspect && nested && list.items.len() > 1;
    if parenthesise {
        out.push('(');
    }
    let joiner = list.separator.joiner(options.compressed);
    let mut first = true;
    for item in &list.items {
        let mut rendered = String::new();
        render_into(&mut rendered, item, options, true);
        if rendered.is_empty() && !inspect {
            continue;
        }
        if !first {
            out.push_str(joiner);
        }
        first = false;
        out.push_str(&rendered);
    }
    if parenthesise {
        out.push(')');
    }
}

fn render_map(out: &mut String, map: &MapValue, options: RenderOptions) {
    let (colon, comma) = if options.compressed {
        (":", ",")
    } else {
        (": ", ", ")
    };
    out.push('(');
    for (i, (key, value)) in map.entries.iter().enumerate() {
        if i > 0 {
            out.push_str(comma);
        }
        render_into(out, key, options, true);
        out.push_str(colon);
        render_into(out, value, options, true);
    }
    out.push(')');
}
