//! Callable definitions stored in frames.

use std::fmt;
use std::sync::Arc;

use vellum_diagnostic::EvalResult;
use vellum_ir::{CallableDef, Parameter};

use crate::environment::{LocalScope, Scope, WeakScope};
use crate::foreign::ForeignCallable;
use crate::interpreter::NativeCall;

/// Signature of a built-in function body.
///
/// Arguments are bound into the native frame before the call; read them
/// through [`NativeCall`].
pub type NativeFn = fn(&mut NativeCall<'_>) -> EvalResult;

/// Built-in function.
#[derive(Clone)]
pub struct NativeFunction {
    pub name: String,
    pub params: Vec<Parameter>,
    pub func: NativeFn,
    /// Arguments arrive unevaluated, as thunks (`if`).
    pub lazy: bool,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("params", &self.params.len())
            .field("lazy", &self.lazy)
            .finish_non_exhaustive()
    }
}

/// Anything bound under a `[function]` or `[mixin]` key.
#[derive(Clone, Debug)]
pub enum Callable {
    /// `@function` or `@mixin` with a body in the tree.
    User {
        def: Arc<CallableDef>,
        /// Defining frame.
        closure: WeakScope<Scope>,
    },
    Native(NativeFunction),
    /// Registered by the embedder.
    Foreign(ForeignCallable),
    /// Native function registered under several arities; the concrete
    /// definition lives under `name[function]N`.
    Overloaded { name: String },
}

impl Callable {
    pub fn user(def: Arc<CallableDef>, closure: &LocalScope<Scope>) -> Self {
        Callable::User {
            def,
            closure: closure.downgrade(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Callable::User { def, .. } => &def.name,
            Callable::Native(native) => &native.name,
            Callable::Foreign(foreign) => &foreign.name,
            Callable::Overloaded { name } => name,
        }
    }
}
