//! Function call evaluation methods for the Interpreter.
//!
//! Resolution order for `name(args)`:
//! 1. no `name[function]` binding: the call is kept as literal text
//!    (`calc(1px + 2em)` passes through)
//! 2. user function: body runs in a frame linked to the defining frame
//! 3. native function
//! 4. foreign function, through the `ForeignValue` boundary
//! 5. overload stub: re-resolved as `name[function]N`

use vellum_diagnostic::{
    argument_type, foreign_error, missing_return, wrong_argument_count, EvalError, EvalResult,
};
use vellum_ir::{
    Argument, ArgumentValue, CallableDef, Color, Expr, ExprKind, Number, SourceSpan, Value,
};

use super::{Flow, Interpreter};
use crate::callable::{Callable, NativeFunction};
use crate::diagnostics::CallFrame;
use crate::environment::{function_key, overload_key, LocalScope, Scope, WeakScope};
use crate::exec::expr::undefined_call_text;
use crate::foreign::{ForeignCallable, ForeignValue};

impl Interpreter {
    /// Evaluate `name(args)`.
    #[tracing::instrument(level = "debug", skip_all, fields(function = name))]
    pub(crate) fn eval_call(
        &mut self,
        name: &str,
        args: &[Argument],
        span: &SourceSpan,
    ) -> EvalResult {
        let Some(callable) = self.env.lookup_callable(&function_key(name)) else {
            let args = self.eval_args(args)?;
            return Ok(Value::string(undefined_call_text(
                name,
                &args,
                self.precision(),
            )));
        };
        let lazy = matches!(&*callable, Callable::Native(native) if native.lazy);
        let args = if lazy {
            args.iter().map(thunk_argument).collect()
        } else {
            self.eval_args(args)?
        };
        self.call_callable(&callable, args, span)
    }

    /// Call with an interpolated name: the name is reduced to text, the
    /// arguments to values, and the result dispatched as a plain call.
    pub(crate) fn eval_call_schema(
        &mut self,
        name: &Expr,
        args: &[Argument],
        span: &SourceSpan,
    ) -> EvalResult {
        let name = self.eval_expr(name)?.to_text(self.precision());
        let mut reduced = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.eval_undelayed(&arg.value)?;
            reduced.push(Argument {
                value: Expr::new(ExprKind::Literal(value), arg.value.span.clone()),
                name: arg.name.clone(),
                is_rest: arg.is_rest,
                is_keyword_rest: arg.is_keyword_rest,
                span: arg.span.clone(),
            });
        }
        self.eval_call(&name, &reduced, span)
    }

    /// Reduce call-site arguments to `Value::Argument` wrappers.
    ///
    /// A rest argument holding a map becomes a keyword rest; a rest argument
    /// that isn't list-like becomes a one-item arglist.
    pub(crate) fn eval_args(&mut self, args: &[Argument]) -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.eval_undelayed(&arg.value)?.unwrap_argument();
            let (value, is_rest, is_keyword_rest) = if arg.is_rest || arg.is_keyword_rest {
                match value {
                    Value::Map(_) => (value, false, true),
                    value if value.is_list_like() => (value, true, false),
                    value => (Value::arglist(vec![value], Vec::new()), true, false),
                }
            } else {
                (value, false, false)
            };
            values.push(Value::argument(ArgumentValue {
                value,
                name: arg.name.clone(),
                is_rest,
                is_keyword_rest,
            }));
        }
        Ok(values)
    }

    /// Dispatch reduced arguments to a resolved callable.
    pub(crate) fn call_callable(
        &mut self,
        callable: &Callable,
        args: Vec<Value>,
        span: &SourceSpan,
    ) -> EvalResult {
        match callable {
            Callable::User { def, closure } => self.call_user_function(def, closure, args, span),
            Callable::Native(native) => self.call_native(native, args, span),
            Callable::Foreign(foreign) => self.call_foreign(foreign, args),
            Callable::Overloaded { name } => {
                let resolved = self
                    .env
                    .lookup_callable(&overload_key(name, args.len()))
                    .ok_or_else(|| wrong_argument_count(name, args.len()))?;
                self.call_callable(&resolved, args, span)
            }
        }
    }

    fn call_user_function(
        &mut self,
        def: &CallableDef,
        closure: &WeakScope<Scope>,
        args: Vec<Value>,
        span: &SourceSpan,
    ) -> EvalResult {
        let frame = CallFrame::function(&def.name, span.clone());
        let label = frame.description.clone();
        self.call_stack.push(frame)?;

        let parent = closure
            .upgrade()
            .unwrap_or_else(|| self.env.global().clone());
        let flow = {
            let mut scoped = self.scoped_in(LocalScope::new(Scope::with_parent(parent)));
            scoped
                .bind_arguments(&label, &def.params, args)
                .and_then(|()| scoped.exec_block(&def.body))
        };
        let result = match flow {
            Ok(Flow::Return(value)) => Ok(value),
            Ok(Flow::Next) => Err(self
                .call_stack
                .attach_backtrace(missing_return(&def.name))),
            Err(err) => Err(err),
        };
        self.call_stack.pop();
        result
    }

    fn call_native(
        &mut self,
        native: &NativeFunction,
        args: Vec<Value>,
        span: &SourceSpan,
    ) -> EvalResult {
        let caller = self.env.current();
        let frame = LocalScope::new(Scope::with_parent(self.env.global().clone()));
        let mut scoped = self.scoped_in(frame);
        scoped.bind_arguments(&format!("function `{}`", native.name), &native.params, args)?;
        let mut call = NativeCall {
            interp: &mut *scoped,
            caller,
            span,
            name: &native.name,
        };
        (native.func)(&mut call).map(Value::unwrap_argument)
    }

    fn call_foreign(&mut self, foreign: &ForeignCallable, args: Vec<Value>) -> EvalResult {
        let frame = LocalScope::new(Scope::with_parent(self.env.global().clone()));
        let mut scoped = self.scoped_in(frame);
        scoped.bind_arguments(
            &format!("function `{}`", foreign.name),
            &foreign.params,
            args,
        )?;
        let marshalled: Vec<ForeignValue> = foreign
            .params
            .iter()
            .map(|param| {
                let value = scoped.env.lookup_local(&param.name).unwrap_or(Value::Null);
                ForeignValue::from_value(&value)
            })
            .collect();
        tracing::debug!(function = %foreign.name, args = marshalled.len(), "foreign call");
        match foreign.func.call(&marshalled) {
            ForeignValue::Error(message) => Err(foreign_error(&foreign.name, &message)),
            result => Ok(result.into_value()),
        }
    }
}

/// Argument of a lazy callable: the expression, unevaluated.
fn thunk_argument(arg: &Argument) -> Value {
    Value::argument(ArgumentValue {
        value: Value::thunk(arg.value.clone()),
        name: arg.name.clone(),
        is_rest: false,
        is_keyword_rest: false,
    })
}

/// Context handed to a native function body.
///
/// The native frame is current while the body runs; parameters are read
/// from it by name.
pub struct NativeCall<'a> {
    interp: &'a mut Interpreter,
    /// Frame of the call site; thunks are forced here.
    caller: LocalScope<Scope>,
    span: &'a SourceSpan,
    name: &'a str,
}

impl NativeCall<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub fn span(&self) -> &SourceSpan {
        self.span
    }

    pub fn precision(&self) -> usize {
        self.interp.precision()
    }

    /// Bound parameter, Null if absent.
    pub fn arg(&self, name: &str) -> Value {
        self.interp
            .env
            .lookup_local(name)
            .map_or(Value::Null, Value::unwrap_argument)
    }

    /// Bound parameter, evaluated in the caller's frame if it is a thunk.
    pub fn force(&mut self, name: &str) -> EvalResult {
        match self.arg(name) {
            Value::Thunk(thunk) => {
                let mut scoped = self.interp.scoped_in(self.caller.clone());
                Ok(scoped.eval_expr(&thunk.expr)?.unwrap_argument())
            }
            value => Ok(value),
        }
    }

    pub fn number(&self, name: &str) -> EvalResult<Number> {
        match self.arg(name) {
            Value::Number(n) => Ok(n),
            other => Err(self.type_error(name, &other, "number")),
        }
    }

    pub fn color(&self, name: &str) -> EvalResult<Color> {
        match self.arg(name) {
            Value::Color(c) => Ok((*c).clone()),
            other => Err(self.type_error(name, &other, "color")),
        }
    }

    /// `$name: <value> is not a <expected>.`
    pub fn type_error(&self, name: &str, value: &Value, expected: &str) -> EvalError {
        argument_type(name, &value.inspect(self.precision()), expected)
    }
}
