//! Tests for the built-in native functions.

use pretty_assertions::assert_eq;
use vellum_diagnostic::EvalErrorKind;
use vellum_ir::ast::build::{
    boolean, call, call_with, dimension, ident, list, map, null, number, quoted, textual,
};
use vellum_ir::{Argument, Expr, Separator, TextualKind, Value};

use super::{css, eval};

fn value_of(name: &str, args: Vec<Expr>) -> Value {
    eval(&call(name, args)).unwrap()
}

fn inspect_of(name: &str, args: Vec<Expr>) -> String {
    value_of(name, args).inspect(5)
}

fn hex(text: &str) -> Expr {
    textual(TextualKind::Hex, text)
}

fn comma(items: Vec<Expr>) -> Expr {
    list(items, Separator::Comma)
}

fn space(items: Vec<Expr>) -> Expr {
    list(items, Separator::Space)
}

mod colors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rgb_builds_opaque_color() {
        assert_eq!(
            css(&value_of("rgb", vec![number(255.0), number(0.0), number(128.0)])),
            "#ff0080"
        );
        let pct = textual(TextualKind::Percentage, "100%");
        assert_eq!(
            css(&value_of("rgb", vec![pct, number(0.0), number(0.0)])),
            "#ff0000"
        );
    }

    #[test]
    fn channel_accessors() {
        assert_eq!(value_of("red", vec![hex("#102030")]), Value::number(16.0));
        assert_eq!(value_of("green", vec![hex("#102030")]), Value::number(32.0));
        assert_eq!(value_of("blue", vec![hex("#102030")]), Value::number(48.0));
        assert_eq!(value_of("alpha", vec![hex("#102030")]), Value::number(1.0));
        assert_eq!(value_of("red", vec![ident("white")]), Value::number(255.0));
    }

    #[test]
    fn channel_accessor_rejects_non_color() {
        let err = eval(&call("red", vec![quoted("nope")])).unwrap_err();
        assert_eq!(err.message, "$color: \"nope\" is not a color.");
    }
}

mod numbers {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unit_introspection() {
        assert_eq!(inspect_of("unit", vec![dimension(3.0, "px")]), "\"px\"");
        assert_eq!(inspect_of("unit", vec![number(3.0)]), "\"\"");
        assert_eq!(value_of("unitless", vec![number(3.0)]), Value::Boolean(true));
        assert_eq!(
            value_of("unitless", vec![dimension(3.0, "em")]),
            Value::Boolean(false)
        );
        assert_eq!(
            value_of("comparable", vec![dimension(1.0, "px"), dimension(1.0, "in")]),
            Value::Boolean(true)
        );
        assert_eq!(
            value_of("comparable", vec![dimension(1.0, "px"), dimension(1.0, "s")]),
            Value::Boolean(false)
        );
    }

    #[test]
    fn percentage_of_unitless() {
        assert_eq!(css(&value_of("percentage", vec![number(0.25)])), "25%");
        let err = eval(&call("percentage", vec![dimension(1.0, "px")])).unwrap_err();
        assert_eq!(err.message, "$value: 1px is not a unitless number.");
    }

    #[test]
    fn round_and_abs_keep_unit() {
        assert_eq!(
            value_of("round", vec![dimension(2.5, "px")]),
            Value::dimension(3.0, "px")
        );
        assert_eq!(
            value_of("abs", vec![dimension(-4.0, "em")]),
            Value::dimension(4.0, "em")
        );
    }
}

mod lists {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn length_treats_everything_as_list() {
        assert_eq!(
            value_of("length", vec![comma(vec![number(1.0), number(2.0)])]),
            Value::number(2.0)
        );
        assert_eq!(value_of("length", vec![number(1.0)]), Value::number(1.0));
        let pairs = map(vec![(ident("a"), number(1.0)), (ident("b"), number(2.0))]);
        assert_eq!(value_of("length", vec![pairs]), Value::number(2.0));
    }

    #[test]
    fn nth_is_one_based_and_counts_from_end() {
        let items = || space(vec![ident("a"), ident("b"), ident("c")]);
        assert_eq!(value_of("nth", vec![items(), number(1.0)]), Value::string("a"));
        assert_eq!(value_of("nth", vec![items(), number(-1.0)]), Value::string("c"));
        let err = eval(&call("nth", vec![items(), number(4.0)])).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::IndexOutOfBounds {
                index: "4".to_string(),
                len: 3
            }
        );
        assert!(eval(&call("nth", vec![items(), number(0.0)])).is_err());
    }

    #[test]
    fn join_separator_selection() {
        let joined = value_of(
            "join",
            vec![
                comma(vec![number(1.0), number(2.0)]),
                space(vec![number(3.0), number(4.0)]),
            ],
        );
        assert_eq!(css(&joined), "1, 2, 3, 4");

        let joined = value_of("join", vec![number(1.0), space(vec![number(2.0), number(3.0)])]);
        assert_eq!(css(&joined), "1 2 3");

        let joined = eval(&call_with(
            "join",
            vec![
                Argument::positional(number(1.0)),
                Argument::positional(number(2.0)),
                Argument::named("separator", ident("comma")),
            ],
        ))
        .unwrap();
        assert_eq!(css(&joined), "1, 2");
    }
}

mod maps {
    use super::*;
    use pretty_assertions::assert_eq;

    fn theme() -> Expr {
        map(vec![
            (quoted("primary"), hex("#336699")),
            (quoted("gap"), dimension(8.0, "px")),
        ])
    }

    #[test]
    fn map_get_and_has_key() {
        assert_eq!(
            css(&value_of("map-get", vec![theme(), quoted("gap")])),
            "8px"
        );
        assert_eq!(value_of("map-get", vec![theme(), quoted("none")]), Value::Null);
        assert_eq!(
            value_of("map-has-key", vec![theme(), ident("primary")]),
            Value::Boolean(true)
        );
    }

    #[test]
    fn map_keys_in_insertion_order() {
        assert_eq!(
            inspect_of("map-keys", vec![theme()]),
            "\"primary\", \"gap\""
        );
    }

    #[test]
    fn empty_list_is_empty_map() {
        assert_eq!(
            value_of("map-get", vec![space(vec![]), quoted("x")]),
            Value::Null
        );
        let err = eval(&call("map-get", vec![number(1.0), quoted("x")])).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::ArgumentType { .. }));
    }

    #[test]
    fn keywords_requires_arglist() {
        let err = eval(&call("keywords", vec![number(1.0)])).unwrap_err();
        assert_eq!(err.message, "$args: 1 is not a variable argument list.");
    }
}

mod strings {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quote_and_unquote() {
        assert_eq!(inspect_of("quote", vec![ident("sans")]), "\"sans\"");
        assert_eq!(inspect_of("unquote", vec![quoted("sans")]), "sans");
        assert_eq!(value_of("unquote", vec![number(1.0)]), Value::number(1.0));
    }

    #[test]
    fn introspection() {
        let type_of = |expr| value_of("type-of", vec![expr]).as_str().map(str::to_string);
        assert_eq!(type_of(number(1.0)).as_deref(), Some("number"));
        assert_eq!(type_of(ident("red")).as_deref(), Some("color"));
        assert_eq!(type_of(quoted("red")).as_deref(), Some("string"));
        assert_eq!(type_of(boolean(true)).as_deref(), Some("bool"));
        assert_eq!(type_of(null()).as_deref(), Some("null"));
        assert_eq!(type_of(space(vec![])).as_deref(), Some("list"));
        assert_eq!(
            type_of(map(vec![(ident("a"), number(1.0))])).as_deref(),
            Some("map")
        );

        assert_eq!(value_of("not", vec![null()]), Value::Boolean(true));
        assert_eq!(
            value_of("inspect", vec![space(vec![])]),
            Value::string("()")
        );
    }
}
