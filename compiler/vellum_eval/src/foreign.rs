//! Functions supplied by the embedder.
//!
//! Values cross the boundary as owned `ForeignValue` trees: arguments are
//! converted on the way out, the result on the way back, and dropping a tree
//! releases it recursively. A function signals failure by returning
//! `ForeignValue::Error`, which aborts evaluation with its message.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use vellum_ir::{Color, Number, Parameter, QuoteMark, Separator, Unit, Value};

use crate::callable::Callable;
use crate::environment::{function_key, Environment};
use crate::functions::signature::parse_parameters;

/// Value representation on the embedder side of the boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum ForeignValue {
    Boolean(bool),
    /// `unit` uses the `px*em/s` notation; empty for unitless numbers.
    Number { value: f64, unit: String },
    Color { r: f64, g: f64, b: f64, a: f64 },
    String { text: String, quoted: bool },
    List {
        items: Vec<ForeignValue>,
        separator: Separator,
    },
    Map(Vec<(ForeignValue, ForeignValue)>),
    Null,
    /// Failure reported by the function.
    Error(String),
}

impl ForeignValue {
    pub fn number(value: f64) -> Self {
        ForeignValue::Number {
            value,
            unit: String::new(),
        }
    }

    pub fn dimension(value: f64, unit: impl Into<String>) -> Self {
        ForeignValue::Number {
            value,
            unit: unit.into(),
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        ForeignValue::String {
            text: text.into(),
            quoted: false,
        }
    }

    pub fn quoted(text: impl Into<String>) -> Self {
        ForeignValue::String {
            text: text.into(),
            quoted: true,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ForeignValue::Error(message.into())
    }

    /// Convert an evaluator value for the embedder.
    ///
    /// Thunks never reach a foreign function; they convert to Null.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => ForeignValue::Number {
                value: n.value,
                unit: n.unit.to_string(),
            },
            Value::Color(c) => ForeignValue::Color {
                r: c.r,
                g: c.g,
                b: c.b,
                a: c.a,
            },
            Value::String(s) => ForeignValue::String {
                text: s.text.clone(),
                quoted: s.is_quoted(),
            },
            Value::Boolean(b) => ForeignValue::Boolean(*b),
            Value::Null | Value::Thunk(_) => ForeignValue::Null,
            Value::List(list) => ForeignValue::List {
                items: list.items.iter().map(ForeignValue::from_value).collect(),
                separator: list.separator,
            },
            Value::Map(map) => ForeignValue::Map(
                map.entries
                    .iter()
                    .map(|(k, v)| (ForeignValue::from_value(k), ForeignValue::from_value(v)))
                    .collect(),
            ),
            Value::Argument(arg) => ForeignValue::from_value(&arg.value),
        }
    }

    /// Convert a result back into an evaluator value.
    ///
    /// A nested `Error` (one not at the top of the result) converts to Null.
    pub fn into_value(self) -> Value {
        match self {
            ForeignValue::Boolean(b) => Value::Boolean(b),
            ForeignValue::Number { value, unit } => {
                Value::from_number(Number::new(value, Unit::parse(&unit)))
            }
            ForeignValue::Color { r, g, b, a } => Value::color(Color::new(r, g, b, a)),
            ForeignValue::String { text, quoted } => {
                let quote = if quoted {
                    QuoteMark::Double
                } else {
                    QuoteMark::None
                };
                Value::string_with(text, quote)
            }
            ForeignValue::List { items, separator } => Value::list(
                items.into_iter().map(ForeignValue::into_value).collect(),
                separator,
            ),
            ForeignValue::Map(entries) => Value::map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into_value(), v.into_value()))
                    .collect(),
            ),
            ForeignValue::Null | ForeignValue::Error(_) => Value::Null,
        }
    }
}

/// A function body supplied by the embedder.
///
/// Receives one value per declared parameter, in declaration order, after
/// defaults have been applied.
pub trait ForeignFunction: Send + Sync {
    fn call(&self, args: &[ForeignValue]) -> ForeignValue;
}

impl<F> ForeignFunction for F
where
    F: Fn(&[ForeignValue]) -> ForeignValue + Send + Sync,
{
    fn call(&self, args: &[ForeignValue]) -> ForeignValue {
        self(args)
    }
}

/// A registered foreign function.
#[derive(Clone)]
pub struct ForeignCallable {
    pub name: String,
    pub params: Vec<Parameter>,
    pub func: Arc<dyn ForeignFunction>,
}

impl fmt::Debug for ForeignCallable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignCallable")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Foreign functions available to every compile.
///
/// The registry is read-only during evaluation and can be shared between
/// threads; each interpreter installs its own bindings from it.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, ForeignCallable>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with parameters in signature notation:
    /// `["$color", "$amount: 10%", "$args..."]`.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register<F>(&mut self, name: &str, params: &[&str], func: F)
    where
        F: ForeignFunction + 'static,
    {
        tracing::debug!(name, "register foreign function");
        self.functions.insert(
            name.to_string(),
            ForeignCallable {
                name: name.to_string(),
                params: parse_parameters(params),
                func: Arc::new(func),
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&ForeignCallable> {
        self.functions.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Bind every function in the root frame of `env`. Foreign functions
    /// shadow built-ins of the same name.
    pub fn install(&self, env: &mut Environment) {
        for callable in self.functions.values() {
            env.define_global_callable(
                function_key(&callable.name),
                Rc::new(Callable::Foreign(callable.clone())),
            );
        }
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionRegistry")
            .field("functions", &names)
            .finish()
    }
}
