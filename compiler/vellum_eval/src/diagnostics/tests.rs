use super::*;
use pretty_assertions::assert_eq;
use vellum_diagnostic::{undefined_variable, EvalErrorKind};

fn span(line: u32) -> SourceSpan {
    SourceSpan::new("style.scss", line, 1)
}

#[test]
fn push_pop_tracks_depth() {
    let mut stack = CallStack::new(Some(4));
    assert!(stack.is_empty());
    stack
        .push(CallFrame::function("a", span(1)))
        .expect("within limit");
    stack
        .push(CallFrame::mixin("b", span(2)))
        .expect("within limit");
    assert_eq!(stack.depth(), 2);
    assert_eq!(
        stack.current_frame().map(|f| f.kind),
        Some(FrameKind::Mixin)
    );
    stack.pop();
    assert_eq!(stack.depth(), 1);
}

#[test]
fn push_beyond_limit_fails_without_pushing() {
    let mut stack = CallStack::new(Some(1));
    stack
        .push(CallFrame::function("a", span(1)))
        .expect("within limit");
    let err = stack
        .push(CallFrame::function("a", span(1)))
        .expect_err("limit reached");
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 1 });
    assert_eq!(stack.depth(), 1);
}

#[test]
fn unlimited_stack_never_overflows() {
    let mut stack = CallStack::default();
    for i in 0..2000 {
        stack
            .push(CallFrame::function("f", span(i)))
            .expect("unlimited");
    }
    assert_eq!(stack.max_depth(), None);
    assert_eq!(stack.depth(), 2000);
}

#[test]
fn capture_is_most_recent_first() {
    let mut stack = CallStack::default();
    stack
        .push(CallFrame::function("outer", span(1)))
        .expect("unlimited");
    stack
        .push(CallFrame::function("inner", span(5)))
        .expect("unlimited");
    let bt = stack.capture();
    let names: Vec<_> = bt.frames().iter().map(|f| f.description.as_str()).collect();
    assert_eq!(names, vec!["function `inner`", "function `outer`"]);
    assert_eq!(bt.frames()[0].span, span(5));
}

#[test]
fn attach_backtrace_keeps_existing() {
    let mut stack = CallStack::default();
    assert_eq!(stack.attach_backtrace(undefined_variable("x")).backtrace, None);

    stack
        .push(CallFrame::function("f", span(3)))
        .expect("unlimited");
    let err = stack.attach_backtrace(undefined_variable("x"));
    assert_eq!(err.backtrace.as_ref().map(EvalBacktrace::len), Some(1));

    stack
        .push(CallFrame::function("g", span(4)))
        .expect("unlimited");
    let err = stack.attach_backtrace(err);
    assert_eq!(err.backtrace.as_ref().map(EvalBacktrace::len), Some(1));
}
