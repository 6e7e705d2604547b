//! Statement execution and control flow.

use std::rc::Rc;
use std::sync::Arc;

use vellum_diagnostic::{
    for_bound_not_number, return_outside_function, undefined_mixin, user_error, EvalResult,
};
use vellum_ir::{
    Block, Declaration, EachLoop, ForLoop, IfStmt, Include, Number, Separator, SourceSpan, Stmt,
    StmtKind, Value, WhileLoop,
};

use super::{CssDeclaration, Flow, Interpreter};
use crate::callable::Callable;
use crate::diagnostics::{CallFrame, FrameKind};
use crate::environment::{function_key, mixin_key, LocalScope, Scope};
use crate::stack::ensure_sufficient_stack;

impl Interpreter {
    /// Execute statements in order in the current frame. The first
    /// `Flow::Return` stops the block and propagates.
    pub fn exec_block(&mut self, block: &Block) -> EvalResult<Flow> {
        for stmt in &block.stmts {
            if let Flow::Return(value) = self.exec_stmt(stmt)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Next)
    }

    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt))
            .map_err(|err| self.decorate(err, &stmt.span))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> EvalResult<Flow> {
        match &stmt.kind {
            StmtKind::Block(block) => self.exec_block(block),
            StmtKind::Assign(assign) => {
                let value = self.eval_expr(&assign.value)?.unwrap_argument();
                self.env
                    .assign(&assign.name, value, assign.guarded, assign.global);
                Ok(Flow::Next)
            }
            StmtKind::If(if_stmt) => self.exec_if(if_stmt),
            StmtKind::For(for_loop) => self.exec_for(for_loop),
            StmtKind::Each(each) => self.exec_each(each),
            StmtKind::While(while_loop) => self.exec_while(while_loop),
            StmtKind::Return(expr) => {
                let in_function = self
                    .call_stack
                    .current_frame()
                    .is_some_and(|frame| frame.kind == FrameKind::Function);
                if !in_function {
                    return Err(return_outside_function());
                }
                Ok(Flow::Return(self.eval_expr(expr)?.unwrap_argument()))
            }
            StmtKind::Warn(expr) => {
                let message = self.eval_expr(expr)?.to_text(self.precision());
                let backtrace = self.call_stack.capture();
                self.warnings
                    .emit(&format!("WARNING: {message}\n{backtrace}"));
                Ok(Flow::Next)
            }
            StmtKind::Debug(expr) => {
                let message = self.eval_expr(expr)?.to_text(self.precision());
                self.warnings.emit(&format!(
                    "{}:{} DEBUG: {message}",
                    stmt.span.path, stmt.span.line
                ));
                Ok(Flow::Next)
            }
            StmtKind::Error(expr) => {
                let message = self.eval_expr(expr)?.to_text(self.precision());
                Err(user_error(&message))
            }
            StmtKind::FunctionDef(def) => {
                tracing::debug!(name = %def.name, "define function");
                let callable = Callable::user(Arc::clone(def), &self.env.current());
                self.env
                    .define_callable(function_key(&def.name), Rc::new(callable));
                Ok(Flow::Next)
            }
            StmtKind::MixinDef(def) => {
                tracing::debug!(name = %def.name, "define mixin");
                let callable = Callable::user(Arc::clone(def), &self.env.current());
                self.env
                    .define_callable(mixin_key(&def.name), Rc::new(callable));
                Ok(Flow::Next)
            }
            StmtKind::Include(include) => self.exec_include(include, &stmt.span),
            StmtKind::Declaration(decl) => self.exec_declaration(decl, &stmt.span),
            StmtKind::Expr(expr) => {
                self.eval_expr(expr)?;
                Ok(Flow::Next)
            }
        }
    }

    /// Branches run in the enclosing frame, so a name first bound inside a
    /// branch is still visible after the `@if`.
    fn exec_if(&mut self, stmt: &IfStmt) -> EvalResult<Flow> {
        if self.eval_expr(&stmt.predicate)?.is_truthy() {
            return self.exec_block(&stmt.consequent);
        }
        match &stmt.alternative {
            Some(alternative) => self.exec_block(alternative),
            None => Ok(Flow::Next),
        }
    }

    /// `@for`: one loop frame; the counter is rebound on every iteration and
    /// carries the lower bound's unit.
    fn exec_for(&mut self, stmt: &ForLoop) -> EvalResult<Flow> {
        let Value::Number(from) = self.eval_expr(&stmt.from)?.unwrap_argument() else {
            return Err(for_bound_not_number(false));
        };
        let Value::Number(to) = self.eval_expr(&stmt.to)?.unwrap_argument() else {
            return Err(for_bound_not_number(true));
        };
        let mut end = to.convert_to(&from.unit).map_or(to.value, |n| n.value);
        if stmt.inclusive {
            end += 1.0;
        }
        tracing::trace!(variable = %stmt.variable, from = from.value, end, "@for");

        let mut scoped = self.scoped();
        let mut i = from.value;
        while i < end {
            scoped
                .env
                .define(&stmt.variable, Value::from_number(Number::new(i, from.unit.clone())));
            if let Flow::Return(value) = scoped.exec_block(&stmt.body)? {
                return Ok(Flow::Return(value));
            }
            i += 1.0;
        }
        Ok(Flow::Next)
    }

    /// `@each`: maps bind key and value; lists bind each item directly with
    /// one variable, or destructure list-like items across several.
    fn exec_each(&mut self, stmt: &EachLoop) -> EvalResult<Flow> {
        let source = self.eval_expr(&stmt.source)?.unwrap_argument();
        tracing::trace!(variables = stmt.variables.len(), "@each");

        let mut scoped = self.scoped();
        if let Value::Map(map) = &source {
            for (key, value) in &map.entries {
                if let [only] = stmt.variables.as_slice() {
                    scoped.env.define(
                        only,
                        Value::list(vec![key.clone(), value.clone()], Separator::Space),
                    );
                } else {
                    scoped.bind_positions(&stmt.variables, &[key.clone(), value.clone()]);
                }
                if let Flow::Return(value) = scoped.exec_block(&stmt.body)? {
                    return Ok(Flow::Return(value));
                }
            }
            return Ok(Flow::Next);
        }

        for item in source.list_items() {
            match stmt.variables.as_slice() {
                [only] => scoped.env.define(only, item),
                variables if item.is_list_like() => {
                    scoped.bind_positions(variables, &item.list_items());
                }
                variables => scoped.bind_positions(variables, &[item]),
            }
            if let Flow::Return(value) = scoped.exec_block(&stmt.body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Next)
    }

    /// Bind `variables[i]` to `values[i]`, Null past the end of `values`.
    fn bind_positions(&mut self, variables: &[String], values: &[Value]) {
        for (i, variable) in variables.iter().enumerate() {
            let value = values.get(i).cloned().unwrap_or(Value::Null);
            self.env.define(variable, value);
        }
    }

    fn exec_while(&mut self, stmt: &WhileLoop) -> EvalResult<Flow> {
        let mut scoped = self.scoped();
        while scoped.eval_expr(&stmt.predicate)?.is_truthy() {
            if let Flow::Return(value) = scoped.exec_block(&stmt.body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Next)
    }

    /// `@include`: bind arguments like a function call and run the body in a
    /// frame linked to the mixin's defining frame.
    fn exec_include(&mut self, include: &Include, span: &SourceSpan) -> EvalResult<Flow> {
        let callable = self
            .env
            .lookup_callable(&mixin_key(&include.name))
            .ok_or_else(|| undefined_mixin(&include.name))?;
        let Callable::User { def, closure } = &*callable else {
            return Err(undefined_mixin(&include.name));
        };
        let args = self.eval_args(&include.args)?;

        let frame = CallFrame::mixin(&include.name, span.clone());
        let label = frame.description.clone();
        self.call_stack.push(frame)?;
        let parent = closure
            .upgrade()
            .unwrap_or_else(|| self.env.global().clone());
        let result = {
            let mut scoped = self.scoped_in(LocalScope::new(Scope::with_parent(parent)));
            scoped
                .bind_arguments(&label, &def.params, args)
                .and_then(|()| scoped.exec_block(&def.body))
        };
        self.call_stack.pop();
        result.map(|_| Flow::Next)
    }

    /// Append a declaration. Null values and empty lists emit nothing.
    fn exec_declaration(&mut self, decl: &Declaration, span: &SourceSpan) -> EvalResult<Flow> {
        let property = self.eval_expr(&decl.property)?.to_text(self.precision());
        let value = self.eval_expr(&decl.value)?.unwrap_argument();
        let empty = match &value {
            Value::Null => true,
            Value::List(list) => list.is_empty(),
            _ => false,
        };
        if !empty {
            self.output.push(CssDeclaration {
                property,
                value,
                span: span.clone(),
            });
        }
        Ok(Flow::Next)
    }
}
