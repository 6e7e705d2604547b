//! RAII-style frame guards for Interpreter environment management.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! evaluation continues through it unchanged. Dropping the guard pops the
//! frame on every exit path, including `?` and unwinding.
//!
//! ```text
//! {
//!     let mut scoped = interpreter.scoped();
//!     scoped.env.define("i", value);
//!     scoped.exec_block(body)?;
//! } // frame popped here
//! ```

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::{LocalScope, Scope};

/// RAII guard that pops the current frame on drop.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a fresh child of the current frame.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Enter an existing frame: a call frame linked to the callee's defining
    /// frame, or a caller's frame when forcing a thunk.
    pub fn scoped_in(&mut self, frame: LocalScope<Scope>) -> ScopedInterpreter<'_> {
        self.env.push_frame(frame);
        ScopedInterpreter { interpreter: self }
    }
}
