//! Tests for embedder-supplied functions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use vellum_diagnostic::EvalErrorKind;
use vellum_ir::ast::build::{call, call_with, dimension, ident, number, quoted};
use vellum_ir::{Argument, Separator, Value};

use super::{css, interpreter};
use crate::foreign::{ForeignValue, FunctionRegistry};

fn registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    registry.register("double", &["$value"], |args: &[ForeignValue]| {
        match &args[0] {
            ForeignValue::Number { value, unit } => ForeignValue::dimension(value * 2.0, unit.clone()),
            _ => ForeignValue::error("double() expects a number"),
        }
    });
    registry.register(
        "greet",
        &["$name", "$greeting: \"hello\""],
        |args: &[ForeignValue]| match (&args[0], &args[1]) {
            (ForeignValue::String { text: name, .. }, ForeignValue::String { text: greeting, .. }) => {
                ForeignValue::quoted(format!("{greeting} {name}"))
            }
            _ => ForeignValue::Null,
        },
    );
    registry
}

#[test]
fn result_keeps_unit() {
    let mut interp = interpreter();
    interp.register_foreign(&registry());
    let value = interp
        .eval_expr(&call("double", vec![dimension(4.0, "px")]))
        .unwrap();
    assert_eq!(value, Value::dimension(8.0, "px"));
}

#[test]
fn error_result_aborts_with_message() {
    let mut interp = interpreter();
    interp.register_foreign(&registry());
    let err = interp
        .eval_expr(&call("double", vec![quoted("x")]))
        .unwrap_err();
    assert_eq!(err.message, "double() expects a number");
    assert_eq!(
        err.kind,
        EvalErrorKind::Foreign {
            function: "double".to_string(),
            message: "double() expects a number".to_string(),
        }
    );
}

#[test]
fn signature_defaults_and_keywords() {
    let mut interp = interpreter();
    interp.register_foreign(&registry());
    let value = interp
        .eval_expr(&call("greet", vec![ident("world")]))
        .unwrap();
    assert_eq!(value.inspect(5), "\"hello world\"");

    let value = interp
        .eval_expr(&call_with(
            "greet",
            vec![
                Argument::named("greeting", quoted("hi")),
                Argument::named("name", ident("there")),
            ],
        ))
        .unwrap();
    assert_eq!(css(&value), "\"hi there\"");
}

#[test]
fn arity_is_checked_by_the_binder() {
    let mut interp = interpreter();
    interp.register_foreign(&registry());
    let err = interp.eval_expr(&call("double", vec![])).unwrap_err();
    assert_eq!(err.message, "function `double` is missing argument $value.");
}

#[test]
fn foreign_functions_shadow_builtins() {
    let mut registry = FunctionRegistry::new();
    registry.register("round", &["$value"], |_: &[ForeignValue]| {
        ForeignValue::string("custom")
    });
    let mut interp = interpreter();
    interp.register_foreign(&registry);
    let value = interp
        .eval_expr(&call("round", vec![number(1.4)]))
        .unwrap();
    assert_eq!(value, Value::string("custom"));
}

#[test]
fn registry_is_shared_between_interpreters() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut registry = FunctionRegistry::new();
    registry.register("tick", &[], move |_: &[ForeignValue]| {
        ForeignValue::number(counter.fetch_add(1, Ordering::SeqCst) as f64)
    });

    for _ in 0..2 {
        let mut interp = interpreter();
        interp.register_foreign(&registry);
        interp.eval_expr(&call("tick", vec![])).unwrap();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["tick"]);
    assert_eq!(format!("{registry:?}"), "FunctionRegistry { functions: [\"tick\"] }");
}

mod conversion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn values_cross_the_boundary() {
        let list = Value::list(
            vec![Value::dimension(1.0, "em"), Value::quoted("a")],
            Separator::Comma,
        );
        assert_eq!(
            ForeignValue::from_value(&list),
            ForeignValue::List {
                items: vec![ForeignValue::dimension(1.0, "em"), ForeignValue::quoted("a")],
                separator: Separator::Comma,
            }
        );
        assert_eq!(ForeignValue::from_value(&Value::Null), ForeignValue::Null);
        assert_eq!(
            ForeignValue::from_value(&Value::rgba(1.0, 2.0, 3.0, 0.5)),
            ForeignValue::Color {
                r: 1.0,
                g: 2.0,
                b: 3.0,
                a: 0.5
            }
        );
    }

    #[test]
    fn compound_units_parse_back() {
        let value = ForeignValue::dimension(3.0, "px*em/s").into_value();
        let number = value.as_number().unwrap();
        assert_eq!(number.unit.to_string(), "px*em/s");
        assert_eq!(number.unit.denominators(), ["s".to_string()]);
    }

    #[test]
    fn maps_and_strings_convert_back() {
        let map = ForeignValue::Map(vec![(
            ForeignValue::string("key"),
            ForeignValue::Boolean(true),
        )])
        .into_value();
        assert_eq!(map.type_name(), "map");
        assert_eq!(map.inspect(5), "(key: true)");
        assert!(ForeignValue::quoted("x").into_value().inspect(5).starts_with('"'));
        assert_eq!(ForeignValue::error("nested").into_value(), Value::Null);
    }
}
