//! Tests for function dispatch and argument binding.

use pretty_assertions::assert_eq;
use vellum_diagnostic::EvalErrorKind;
use vellum_ir::ast::build::{
    assign, binary, block, boolean, call, call_schema, call_with, declaration, delayed_div, dimension,
    function, ident, if_stmt, include, interpolant, list, map, mixin, number, quoted, ret, schema,
    schema_text, var,
};
use vellum_ir::{Argument, BinaryOp, Block, Expr, Parameter, QuoteMark, Separator, Stmt, Value};

use super::{css, eval, eval_after, run};

/// `@function pair($a, $b: $a * 2) { @return $a + $b; }`
fn pair() -> Stmt {
    function(
        "pair",
        vec![
            Parameter::required("a"),
            Parameter::optional("b", binary(BinaryOp::Mul, var("a"), number(2.0))),
        ],
        block(vec![ret(binary(BinaryOp::Add, var("a"), var("b")))]),
    )
}

fn with_pair(expr: &Expr) -> Result<Value, vellum_diagnostic::EvalError> {
    eval_after(&block(vec![pair()]), expr)
}

fn pos(value: Expr) -> Argument {
    Argument::positional(value)
}

mod undefined {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn call_becomes_literal_text() {
        let value = eval(&call("foo", vec![number(1.0), number(2.0)])).unwrap();
        assert_eq!(value, Value::string("foo(1, 2)"));
    }

    #[test]
    fn named_arguments_are_kept() {
        let value = eval(&call_with(
            "calc",
            vec![pos(dimension(1.0, "px")), Argument::named("b", quoted("x"))],
        ))
        .unwrap();
        assert_eq!(css(&value), "calc(1px, $b: \"x\")");
    }
}

mod binding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_refers_to_earlier_parameter() {
        assert_eq!(
            with_pair(&call("pair", vec![number(3.0)])).unwrap(),
            Value::number(9.0)
        );
    }

    #[test]
    fn named_arguments_fill_by_name() {
        let expr = call_with(
            "pair",
            vec![
                Argument::named("b", number(1.0)),
                Argument::named("a", number(2.0)),
            ],
        );
        assert_eq!(with_pair(&expr).unwrap(), Value::number(3.0));
    }

    #[test]
    fn too_many_positional_arguments() {
        let err = with_pair(&call("pair", vec![number(1.0), number(2.0), number(3.0)])).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TooManyArguments {
                allowed: 2,
                passed: 3
            }
        );
    }

    #[test]
    fn unknown_keyword() {
        let err = with_pair(&call_with(
            "pair",
            vec![pos(number(1.0)), Argument::named("c", number(1.0))],
        ))
        .unwrap_err();
        assert_eq!(err.message, "No argument named $c.");
    }

    #[test]
    fn missing_required_argument() {
        let err = with_pair(&call("pair", vec![])).unwrap_err();
        assert_eq!(err.message, "function `pair` is missing argument $a.");
    }

    #[test]
    fn positional_and_named_conflict() {
        let err = with_pair(&call_with(
            "pair",
            vec![pos(number(1.0)), Argument::named("a", number(2.0))],
        ))
        .unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::DuplicateArgument { .. }));
    }

    #[test]
    fn delayed_division_is_computed_in_arguments() {
        let value = with_pair(&call(
            "pair",
            vec![delayed_div(dimension(10.0, "px"), number(2.0))],
        ))
        .unwrap();
        assert_eq!(value, Value::dimension(15.0, "px"));
    }
}

mod rest {
    use super::*;
    use pretty_assertions::assert_eq;

    /// `@function count($first, $rest...) { @return length($rest); }`
    fn program(body: Expr) -> Block {
        block(vec![function(
            "f",
            vec![Parameter::required("first"), Parameter::rest("rest")],
            block(vec![ret(body)]),
        )])
    }

    #[test]
    fn surplus_positionals_collect_into_arglist() {
        let prog = program(call("length", vec![var("rest")]));
        let value = eval_after(&prog, &call("f", vec![number(1.0), number(2.0), number(3.0)]));
        assert_eq!(value.unwrap(), Value::number(2.0));

        let prog = program(call("type-of", vec![var("rest")]));
        let value = eval_after(&prog, &call("f", vec![number(1.0)]));
        assert_eq!(value.unwrap(), Value::string("arglist"));
    }

    #[test]
    fn surplus_keywords_are_reachable() {
        let prog = program(call(
            "map-get",
            vec![call("keywords", vec![var("rest")]), quoted("color")],
        ));
        let value = eval_after(
            &prog,
            &call_with(
                "f",
                vec![pos(number(1.0)), Argument::named("color", quoted("red"))],
            ),
        )
        .unwrap();
        assert_eq!(value.as_str(), Some("red"));
    }

    #[test]
    fn list_splat_spreads_positionally() {
        let value = with_pair(&call_with(
            "pair",
            vec![Argument::rest(list(
                vec![number(1.0), number(5.0)],
                Separator::Comma,
            ))],
        ))
        .unwrap();
        assert_eq!(value, Value::number(6.0));
    }

    #[test]
    fn map_splat_spreads_by_name() {
        let value = with_pair(&call_with(
            "pair",
            vec![Argument::rest(map(vec![
                (quoted("b"), number(10.0)),
                (quoted("a"), number(1.0)),
            ]))],
        ))
        .unwrap();
        assert_eq!(value, Value::number(11.0));
    }

    #[test]
    fn single_value_splat() {
        let value = with_pair(&call_with("pair", vec![Argument::rest(number(4.0))])).unwrap();
        assert_eq!(value, Value::number(12.0));
    }
}

mod user_functions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_return_fails_with_backtrace() {
        let prog = block(vec![function("g", vec![], block(vec![]))]);
        let err = eval_after(&prog, &call("g", vec![])).unwrap_err();
        assert_eq!(err.message, "Function g finished without @return");
        assert_eq!(err.backtrace.map(|bt| bt.len()), Some(1));
    }

    #[test]
    fn recursion() {
        // @function fact($n) { @if $n <= 1 { @return 1; } @return $n * fact($n - 1); }
        let fact = function(
            "fact",
            vec![Parameter::required("n")],
            block(vec![
                if_stmt(
                    binary(BinaryOp::LtEq, var("n"), number(1.0)),
                    block(vec![ret(number(1.0))]),
                    None,
                ),
                ret(binary(
                    BinaryOp::Mul,
                    var("n"),
                    call("fact", vec![binary(BinaryOp::Sub, var("n"), number(1.0))]),
                )),
            ]),
        );
        let value = eval_after(&block(vec![fact]), &call("fact", vec![number(5.0)])).unwrap();
        assert_eq!(value, Value::number(120.0));
    }

    #[test]
    fn branch_binding_is_visible_to_return() {
        // @function pick($c) { @if $c { $r: yes } @else { $r: no } @return $r; }
        let pick = function(
            "pick",
            vec![Parameter::required("c")],
            block(vec![
                if_stmt(
                    var("c"),
                    block(vec![assign("r", ident("yes"))]),
                    Some(block(vec![assign("r", ident("no"))])),
                ),
                ret(var("r")),
            ]),
        );
        let program = block(vec![pick]);
        assert_eq!(
            eval_after(&program, &call("pick", vec![boolean(true)])).unwrap(),
            Value::string("yes")
        );
        assert_eq!(
            eval_after(&program, &call("pick", vec![boolean(false)])).unwrap(),
            Value::string("no")
        );
    }

    #[test]
    fn body_sees_defining_frame_not_caller() {
        let interp = run(&block(vec![
            assign("x", number(1.0)),
            function("read-x", vec![], block(vec![ret(var("x"))])),
            mixin(
                "shadow",
                vec![Parameter::required("x")],
                block(vec![declaration("width", call("read-x", vec![]))]),
            ),
            include("shadow", vec![pos(number(5.0))]),
        ]));
        assert_eq!(interp.declarations()[0].value, Value::number(1.0));
    }

    #[test]
    fn assignment_inside_function_reaches_root() {
        let interp = run(&block(vec![
            assign("counter", number(0.0)),
            function(
                "bump",
                vec![],
                block(vec![
                    assign("counter", binary(BinaryOp::Add, var("counter"), number(1.0))),
                    ret(var("counter")),
                ]),
            ),
            assign("ignored", call("bump", vec![])),
            assign("ignored", call("bump", vec![])),
        ]));
        assert_eq!(interp.lookup_variable("counter"), Some(Value::number(2.0)));
    }

    #[test]
    fn interpolated_name_dispatches() {
        let name = schema(
            vec![schema_text("type"), interpolant(quoted("-of"))],
            QuoteMark::None,
        );
        let value = eval(&call_schema(name, vec![pos(dimension(1.0, "px"))])).unwrap();
        assert_eq!(value, Value::string("number"));
    }
}

mod overloads {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rgba_with_color_and_alpha() {
        let value = eval(&call(
            "rgba",
            vec![
                vellum_ir::ast::build::textual(vellum_ir::TextualKind::Hex, "#102030"),
                number(0.5),
            ],
        ))
        .unwrap();
        assert_eq!(css(&value), "rgba(16, 32, 48, 0.5)");
    }

    #[test]
    fn rgba_with_four_channels() {
        let value = eval(&call(
            "rgba",
            vec![number(16.0), number(32.0), number(48.0), number(0.5)],
        ))
        .unwrap();
        assert_eq!(css(&value), "rgba(16, 32, 48, 0.5)");
    }

    #[test]
    fn rgba_with_wrong_arity() {
        let err = eval(&call("rgba", vec![number(1.0), number(2.0), number(3.0)])).unwrap_err();
        assert_eq!(err.message, "wrong number of arguments (3 for rgba)");
    }
}

mod lazy_if {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_chosen_branch_is_evaluated() {
        let value = eval(&call(
            "if",
            vec![
                vellum_ir::ast::build::boolean(true),
                number(1.0),
                var("undefined"),
            ],
        ))
        .unwrap();
        assert_eq!(value, Value::number(1.0));

        let value = eval(&call(
            "if",
            vec![vellum_ir::ast::build::null(), var("undefined"), number(2.0)],
        ))
        .unwrap();
        assert_eq!(value, Value::number(2.0));
    }

    #[test]
    fn branches_see_caller_variables() {
        let prog = block(vec![function(
            "pick",
            vec![Parameter::required("flag")],
            block(vec![ret(call(
                "if",
                vec![var("flag"), quoted("yes"), quoted("no")],
            ))]),
        )]);
        let value = eval_after(
            &prog,
            &call("pick", vec![vellum_ir::ast::build::boolean(false)]),
        )
        .unwrap();
        assert_eq!(value.as_str(), Some("no"));
    }
}
