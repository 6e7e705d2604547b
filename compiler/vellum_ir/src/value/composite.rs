//! Strings, lists, maps, argument wrappers and thunks.

use crate::ast::Expr;

use super::Value;

/// Quote style of a string.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuoteMark {
    #[default]
    None,
    Single,
    Double,
}

impl QuoteMark {
    /// The quote character, if any.
    pub fn as_char(self) -> Option<char> {
        match self {
            QuoteMark::None => None,
            QuoteMark::Single => Some('\''),
            QuoteMark::Double => Some('"'),
        }
    }

    #[inline]
    pub fn is_quoted(self) -> bool {
        self != QuoteMark::None
    }
}

/// String value.
///
/// Equality compares the text only; quoting is presentation.
#[derive(Clone, Debug)]
pub struct StringValue {
    pub text: String,
    pub quote: QuoteMark,
    /// Produced by `#{...}`. Interpolants lose their quotes when flattened
    /// into a larger string.
    pub is_interpolant: bool,
}

impl StringValue {
    pub fn new(text: impl Into<String>, quote: QuoteMark) -> Self {
        StringValue {
            text: text.into(),
            quote,
            is_interpolant: false,
        }
    }

    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.quote.is_quoted()
    }
}

impl PartialEq for StringValue {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

/// List separator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Separator {
    #[default]
    Space,
    Comma,
}

impl Separator {
    /// Text placed between rendered items.
    pub fn joiner(self, compressed: bool) -> &'static str {
        match (self, compressed) {
            (Separator::Space, _) => " ",
            (Separator::Comma, false) => ", ",
            (Separator::Comma, true) => ",",
        }
    }

    /// Name used by the `join` builtin.
    pub fn name(self) -> &'static str {
        match self {
            Separator::Space => "space",
            Separator::Comma => "comma",
        }
    }
}

/// Reduced list.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub items: Vec<Value>,
    pub separator: Separator,
    /// Collected by a rest parameter.
    pub is_arglist: bool,
    /// Keyword arguments collected by a rest parameter, in call order.
    pub keywords: Vec<(String, Value)>,
}

impl ListValue {
    pub fn new(items: Vec<Value>, separator: Separator) -> Self {
        ListValue {
            items,
            separator,
            is_arglist: false,
            keywords: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reduced map. Keys keep insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct MapValue {
    pub entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new(entries: Vec<(Value, Value)>) -> Self {
        MapValue { entries }
    }

    /// Value stored under a key equal to `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.equals(key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A call argument that has been reduced but not yet bound.
///
/// Only lives inside call argument lists and call frames; variable lookup
/// unwraps it.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentValue {
    pub value: Value,
    pub name: Option<String>,
    pub is_rest: bool,
    pub is_keyword_rest: bool,
}

/// Unevaluated argument expression, forced on demand by the callee.
#[derive(Clone, Debug, PartialEq)]
pub struct Thunk {
    pub expr: Expr,
}
