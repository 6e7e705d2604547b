//! Error kinds and the `EvalError` type.

use std::fmt;

use vellum_ir::{BinaryOp, SourceSpan, Value};

use crate::backtrace::EvalBacktrace;

/// Result of evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Typed error category.
///
/// Factory functions populate both `kind` and `message`; `Display` on the
/// kind produces the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    UndefinedVariable {
        name: String,
    },
    UndefinedMixin {
        name: String,
    },

    // Arithmetic
    IncompatibleUnits {
        left: String,
        right: String,
    },
    ModuloByZero,
    DivisionByZero,
    AlphaMismatch,
    InvalidOperands {
        op: BinaryOp,
        left: String,
        right: String,
    },

    // Comparison
    IncomparableUnits,
    NotANumber,

    // Control flow
    ForBound {
        upper: bool,
    },
    MissingReturn {
        function: String,
    },
    ReturnOutsideFunction,

    // Calls
    TooManyArguments {
        allowed: usize,
        passed: usize,
    },
    NoSuchArgument {
        name: String,
    },
    MissingArgument {
        callee: String,
        name: String,
    },
    DuplicateArgument {
        callee: String,
        name: String,
    },
    WrongArgumentCount {
        function: String,
        passed: usize,
    },
    ArgumentType {
        name: String,
        value: String,
        expected: String,
    },
    IndexOutOfBounds {
        index: String,
        len: usize,
    },
    DuplicateKey {
        key: String,
    },
    StackOverflow {
        depth: usize,
    },

    /// `@error` directive.
    UserError {
        message: String,
    },
    /// Error reported by a foreign function.
    Foreign {
        function: String,
        message: String,
    },

    /// Errors without a dedicated category.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable: ${name}"),
            Self::UndefinedMixin { name } => write!(f, "Undefined mixin: {name}"),

            Self::IncompatibleUnits { left, right } => {
                write!(f, "Incompatible units: '{left}' and '{right}'.")
            }
            Self::ModuloByZero => write!(f, "Modulo by zero."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::AlphaMismatch => {
                write!(f, "Alpha channels must be equal when combining colors")
            }
            Self::InvalidOperands { op, left, right } => write!(
                f,
                "Invalid operands for {}: {left} and {right}",
                op.as_symbol()
            ),

            Self::IncomparableUnits => {
                write!(f, "cannot compare numbers with incompatible units")
            }
            Self::NotANumber => write!(f, "may only compare numbers"),

            Self::ForBound { upper } => {
                let which = if *upper { "upper" } else { "lower" };
                write!(f, "@for {which} bound must be a number")
            }
            Self::MissingReturn { function } => {
                write!(f, "Function {function} finished without @return")
            }
            Self::ReturnOutsideFunction => {
                write!(f, "@return may only be used within a function")
            }

            Self::TooManyArguments { allowed, passed } => {
                write!(f, "Only {allowed} arguments allowed, but {passed} passed.")
            }
            Self::NoSuchArgument { name } => write!(f, "No argument named ${name}."),
            Self::MissingArgument { callee, name } => {
                write!(f, "{callee} is missing argument ${name}.")
            }
            Self::DuplicateArgument { callee, name } => write!(
                f,
                "{callee} was passed argument ${name} both by position and by name."
            ),
            Self::WrongArgumentCount { function, passed } => {
                write!(f, "wrong number of arguments ({passed} for {function})")
            }
            Self::ArgumentType {
                name,
                value,
                expected,
            } => write!(f, "${name}: {value} is not a {expected}."),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Invalid index {index} for a list with {len} elements.")
            }
            Self::DuplicateKey { key } => write!(f, "Duplicate key {key} in map."),
            Self::StackOverflow { depth } => {
                write!(f, "maximum recursion depth exceeded (limit: {depth})")
            }

            Self::UserError { message }
            | Self::Foreign { message, .. }
            | Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Fatal evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory-built
    /// errors.
    pub message: String,
    /// Node being evaluated when the error was raised.
    pub span: Option<SourceSpan>,
    /// Call chain at the error site.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    /// Error with a free-form message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
            span: None,
            backtrace: None,
        }
    }

    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
            backtrace: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn or_span(mut self, span: &SourceSpan) -> Self {
        if self.span.is_none() {
            self.span = Some(span.clone());
        }
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    /// `path:line: error: message`, followed by the backtrace.
    pub fn render(&self) -> String {
        let mut out = match &self.span {
            Some(span) => format!("{}:{}: error: {}\n", span.path, span.line, self.message),
            None => format!("error: {}\n", self.message),
        };
        if let Some(backtrace) = &self.backtrace {
            out.push_str(&backtrace.to_string());
        }
        out
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}
