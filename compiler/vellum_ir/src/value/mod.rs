//! Runtime values of the stylesheet language.
//!
//! # Heap enforcement
//!
//! Every heap variant stores its payload behind `Heap<T>`, whose constructor
//! is crate-private. Values are built through the factory methods on
//! `Value` and are never mutated afterwards: operators always build new
//! values.
//!
//! ```text
//! let px = Value::dimension(12.0, "px");              // OK
//! let s = Value::quoted("Helvetica");                  // OK
//! let l = Value::List(Heap::new(...));                 // ERROR: Heap::new is pub(crate)
//! ```
//!
//! # Expanded values
//!
//! A `Value` is always fully reduced. Unevaluated structure lives in the
//! syntax tree (`Expr`); a value spliced back into the tree as
//! `ExprKind::Literal` evaluates to the same `Heap` allocation each time.

mod color;
mod composite;
mod heap;
mod number;
mod render;
mod unit;

pub use color::{color_by_name, Color};
pub use composite::{ArgumentValue, ListValue, MapValue, QuoteMark, Separator, StringValue, Thunk};
pub use heap::Heap;
pub use number::{format_number, Number};
pub use render::{RenderMode, RenderOptions, DEFAULT_PRECISION};
pub use unit::{unit_factor, Unit};

use crate::ast::Expr;

/// Tolerance for numeric equality.
pub const EPSILON: f64 = 1e-10;

/// Runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(Number),
    Color(Heap<Color>),
    String(Heap<StringValue>),
    Boolean(bool),
    Null,
    List(Heap<ListValue>),
    Map(Heap<MapValue>),
    /// Reduced call argument, see [`ArgumentValue`].
    Argument(Heap<ArgumentValue>),
    /// Lazily evaluated call argument, see [`Thunk`].
    Thunk(Heap<Thunk>),
}

// Factory methods (the only way to build heap values)

impl Value {
    /// Unitless number.
    #[inline]
    pub fn number(value: f64) -> Self {
        Value::Number(Number::unitless(value))
    }

    /// Number with a single unit.
    pub fn dimension(value: f64, unit: &str) -> Self {
        Value::Number(Number::with_unit(value, unit))
    }

    #[inline]
    pub fn from_number(number: Number) -> Self {
        Value::Number(number)
    }

    pub fn color(color: Color) -> Self {
        Value::Color(Heap::new(color))
    }

    /// Color from channels, without a display spelling.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Value::color(Color::new(r, g, b, a))
    }

    /// Unquoted string.
    pub fn string(text: impl Into<String>) -> Self {
        Value::string_with(text, QuoteMark::None)
    }

    /// Double-quoted string.
    pub fn quoted(text: impl Into<String>) -> Self {
        Value::string_with(text, QuoteMark::Double)
    }

    pub fn string_with(text: impl Into<String>, quote: QuoteMark) -> Self {
        Value::from_string(StringValue::new(text, quote))
    }

    pub fn from_string(string: StringValue) -> Self {
        Value::String(Heap::new(string))
    }

    pub fn list(items: Vec<Value>, separator: Separator) -> Self {
        Value::List(Heap::new(ListValue::new(items, separator)))
    }

    /// Empty space-separated list.
    pub fn empty_list() -> Self {
        Value::list(Vec::new(), Separator::Space)
    }

    /// Arguments collected by a rest parameter.
    pub fn arglist(items: Vec<Value>, keywords: Vec<(String, Value)>) -> Self {
        Value::List(Heap::new(ListValue {
            items,
            separator: Separator::Comma,
            is_arglist: true,
            keywords,
        }))
    }

    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(Heap::new(MapValue::new(entries)))
    }

    pub fn argument(argument: ArgumentValue) -> Self {
        Value::Argument(Heap::new(argument))
    }

    pub fn thunk(expr: Expr) -> Self {
        Value::Thunk(Heap::new(Thunk { expr }))
    }
}

// Accessors

impl Value {
    /// `null` and `false` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null | Value::Boolean(false) => false,
            Value::Argument(arg) => arg.value.is_truthy(),
            _ => true,
        }
    }

    /// Type name as reported by `type-of`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::String(_) => "string",
            Value::Boolean(_) => "bool",
            Value::Null => "null",
            Value::List(list) if list.is_arglist => "arglist",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Argument(arg) => arg.value.type_name(),
            Value::Thunk(_) => "thunk",
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&s.text),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Lists and maps.
    #[inline]
    pub fn is_list_like(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Strip any number of argument wrappers.
    pub fn unwrap_argument(self) -> Value {
        match self {
            Value::Argument(arg) => arg.value.clone().unwrap_argument(),
            other => other,
        }
    }

    /// The value viewed as a list: list items, map entries as two-item
    /// space lists, or the value itself as a single item.
    pub fn list_items(&self) -> Vec<Value> {
        match self {
            Value::List(list) => list.items.clone(),
            Value::Map(map) => map
                .entries
                .iter()
                .map(|(k, v)| Value::list(vec![k.clone(), v.clone()], Separator::Space))
                .collect(),
            Value::Argument(arg) => arg.value.list_items(),
            other => vec![other.clone()],
        }
    }

    /// Separator of the value viewed as a list.
    pub fn separator(&self) -> Separator {
        match self {
            Value::List(list) => list.separator,
            Value::Map(_) => Separator::Comma,
            _ => Separator::Space,
        }
    }

    /// Language-level equality.
    ///
    /// Different types never compare equal. Numbers compare after converting
    /// the right operand into the left operand's unit; incompatible units are
    /// unequal, so `1px != 1`. Strings compare their text regardless of
    /// quoting, colors their channels regardless of spelling. Lists must
    /// share their separator whatever their length.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Argument(a), _) => a.value.equals(other),
            (_, Value::Argument(b)) => self.equals(&b.value),
            (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
            (Value::Color(a), Value::Color(b)) => {
                a.r == b.r && a.g == b.g && a.b == b.b && a.a == b.a
            }
            (Value::String(a), Value::String(b)) => a.text == b.text,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::List(a), Value::List(b)) => {
                a.separator == b.separator
                    && a.items.len() == b.items.len()
                    && a.items.iter().zip(&b.items).all(|(x, y)| x.equals(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a
                        .entries
                        .iter()
                        .all(|(k, v)| b.get(k).is_some_and(|w| v.equals(w)))
            }
            (Value::Thunk(a), Value::Thunk(b)) => a == b,
            _ => false,
        }
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.unit == b.unit {
        return (a.value - b.value).abs() < EPSILON;
    }
    b.convert_to(&a.unit)
        .is_some_and(|b| (a.value - b.value).abs() < EPSILON)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
