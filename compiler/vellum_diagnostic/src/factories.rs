//! Factory functions for evaluation errors.

use vellum_ir::BinaryOp;

use crate::error::{EvalError, EvalErrorKind};

// Lookup

/// Unbound variable reference.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_mixin(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMixin {
        name: name.to_string(),
    })
}

// Arithmetic

/// Units that cannot be reconciled for `+`, `-` or `%`.
#[cold]
pub fn incompatible_units(left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncompatibleUnits {
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

/// Color channel division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn alpha_mismatch() -> EvalError {
    EvalError::from_kind(EvalErrorKind::AlphaMismatch)
}

/// Operator not defined for the operand types.
#[cold]
pub fn invalid_operands(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperands {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

// Comparison

#[cold]
pub fn incomparable_units() -> EvalError {
    EvalError::from_kind(EvalErrorKind::IncomparableUnits)
}

#[cold]
pub fn not_a_number() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotANumber)
}

// Control flow

/// `@for` bound that did not reduce to a number.
#[cold]
pub fn for_bound_not_number(upper: bool) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ForBound { upper })
}

#[cold]
pub fn missing_return(function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingReturn {
        function: function.to_string(),
    })
}

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnOutsideFunction)
}

// Calls

#[cold]
pub fn too_many_arguments(allowed: usize, passed: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyArguments { allowed, passed })
}

#[cold]
pub fn no_such_argument(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoSuchArgument {
        name: name.to_string(),
    })
}

/// Required parameter left unfilled. `callee` is the frame label
/// (``function `f` ``).
#[cold]
pub fn missing_argument(callee: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingArgument {
        callee: callee.to_string(),
        name: name.to_string(),
    })
}

#[cold]
pub fn duplicate_argument(callee: &str, name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateArgument {
        callee: callee.to_string(),
        name: name.to_string(),
    })
}

/// No overload registered for this argument count.
#[cold]
pub fn wrong_argument_count(function: &str, passed: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgumentCount {
        function: function.to_string(),
        passed,
    })
}

/// Builtin argument of the wrong type. `value` is the inspected argument.
#[cold]
pub fn argument_type(name: &str, value: &str, expected: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgumentType {
        name: name.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    })
}

#[cold]
pub fn index_out_of_bounds(index: &str, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds {
        index: index.to_string(),
        len,
    })
}

#[cold]
pub fn duplicate_key(key: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateKey {
        key: key.to_string(),
    })
}

/// Call depth limit reached.
#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

// Reported errors

/// `@error <message>`.
#[cold]
pub fn user_error(message: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UserError {
        message: message.to_string(),
    })
}

/// Error-tagged result of a foreign function.
#[cold]
pub fn foreign_error(function: &str, message: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Foreign {
        function: function.to_string(),
        message: message.to_string(),
    })
}
