//! Built-in native functions.
//!
//! Each builtin is a plain `fn(&mut NativeCall) -> EvalResult` registered in
//! the root frame under `name[function]`. Arguments are bound by the regular
//! binder, so builtins accept keyword arguments and report missing or
//! surplus arguments the same way user functions do.
//!
//! Functions registered under several arities get an `Overloaded` stub under
//! the plain key and one concrete definition per arity under
//! `name[function]N`.

mod collections;
mod colors;
mod numeric;
pub(crate) mod signature;
mod strings;

use std::rc::Rc;

use vellum_diagnostic::EvalResult;
use vellum_ir::Value;

use crate::callable::{Callable, NativeFn, NativeFunction};
use crate::environment::{function_key, overload_key, Environment};
use crate::interpreter::NativeCall;
use signature::parse_parameters;

/// `(name, signature, body)`.
type Builtin = (&'static str, &'static [&'static str], NativeFn);

const BUILTINS: &[Builtin] = &[
    // Colors
    ("rgb", &["$red", "$green", "$blue"], colors::rgb),
    ("red", &["$color"], colors::red),
    ("green", &["$color"], colors::green),
    ("blue", &["$color"], colors::blue),
    ("alpha", &["$color"], colors::alpha),
    // Numbers
    ("unit", &["$number"], numeric::unit),
    ("unitless", &["$number"], numeric::unitless),
    ("comparable", &["$number-1", "$number-2"], numeric::comparable),
    ("percentage", &["$value"], numeric::percentage),
    ("round", &["$value"], numeric::round),
    ("abs", &["$value"], numeric::abs),
    // Lists and maps
    ("length", &["$list"], collections::length),
    ("nth", &["$list", "$n"], collections::nth),
    (
        "join",
        &["$list1", "$list2", "$separator: auto"],
        collections::join,
    ),
    ("map-get", &["$map", "$key"], collections::map_get),
    ("map-keys", &["$map"], collections::map_keys),
    ("map-has-key", &["$map", "$key"], collections::map_has_key),
    ("keywords", &["$args"], collections::keywords),
    // Strings and introspection
    ("quote", &["$string"], strings::quote),
    ("unquote", &["$string"], strings::unquote),
    ("type-of", &["$value"], type_of),
    ("inspect", &["$value"], inspect),
    ("not", &["$value"], not),
];

const RGBA_OVERLOADS: &[(usize, &[&str], NativeFn)] = &[
    (2, &["$color", "$alpha"], colors::rgba_color),
    (4, &["$red", "$green", "$blue", "$alpha"], colors::rgba),
];

/// Bind every built-in function in the root frame of `env`.
pub(crate) fn register_builtins(env: &mut Environment) {
    for &(name, params, func) in BUILTINS {
        define(env, function_key(name), native(name, params, func, false));
    }
    define(
        env,
        function_key("if"),
        native(
            "if",
            &["$condition", "$if-true", "$if-false"],
            if_function,
            true,
        ),
    );

    define(
        env,
        function_key("rgba"),
        Callable::Overloaded {
            name: "rgba".to_string(),
        },
    );
    for &(arity, params, func) in RGBA_OVERLOADS {
        define(env, overload_key("rgba", arity), native("rgba", params, func, false));
    }
    tracing::debug!(count = BUILTINS.len() + 2, "registered builtin functions");
}

fn native(name: &str, params: &[&str], func: NativeFn, lazy: bool) -> Callable {
    Callable::Native(NativeFunction {
        name: name.to_string(),
        params: parse_parameters(params),
        func,
        lazy,
    })
}

fn define(env: &mut Environment, key: String, callable: Callable) {
    env.define_global_callable(key, Rc::new(callable));
}

/// `if($condition, $if-true, $if-false)`: only the chosen branch is
/// evaluated.
fn if_function(call: &mut NativeCall<'_>) -> EvalResult {
    let branch = if call.force("condition")?.is_truthy() {
        "if-true"
    } else {
        "if-false"
    };
    call.force(branch)
}

fn type_of(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::string(call.arg("value").type_name()))
}

fn inspect(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::string(call.arg("value").inspect(call.precision())))
}

fn not(call: &mut NativeCall<'_>) -> EvalResult {
    Ok(Value::Boolean(!call.arg("value").is_truthy()))
}
