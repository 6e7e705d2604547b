//! Live call stack for backtraces and the call depth limit.
//!
//! Function and mixin calls push a `CallFrame`; the frame is popped when the
//! call returns. At an error or warning site the stack is snapshotted into
//! an `EvalBacktrace`.

use vellum_diagnostic::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};
use vellum_ir::SourceSpan;

/// What kind of callable a frame belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Function,
    Mixin,
}

/// A single frame in the live call stack.
#[derive(Clone, Debug)]
pub struct CallFrame {
    /// ``function `name` `` or ``mixin `name` ``.
    pub description: String,
    /// Where the call was made, not where the callee was defined.
    pub call_span: SourceSpan,
    pub kind: FrameKind,
}

impl CallFrame {
    pub fn function(name: &str, call_span: SourceSpan) -> Self {
        CallFrame {
            description: format!("function `{name}`"),
            call_span,
            kind: FrameKind::Function,
        }
    }

    pub fn mixin(name: &str, call_span: SourceSpan) -> Self {
        CallFrame {
            description: format!("mixin `{name}`"),
            call_span,
            kind: FrameKind::Mixin,
        }
    }
}

/// Live call stack.
///
/// The depth check is integrated into `push()`: `max_depth` of `None` means
/// unlimited.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is NOT pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent call frame.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if the stack is empty.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// The most recent call frame, if any.
    #[inline]
    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Snapshot the stack, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                description: f.description.clone(),
                span: f.call_span.clone(),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace to an error that doesn't carry one yet.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    /// Unlimited call stack.
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
