//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use vellum_ir::DEFAULT_PRECISION;

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::functions::register_builtins;
use crate::warning_handler::{stderr_handler, SharedWarningHandler};
use crate::Environment;

/// Call depth at which evaluation gives up with a recursion error.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Evaluation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Decimal places kept when numbers are rendered.
    pub precision: usize,
    /// `None` for unlimited.
    pub max_call_depth: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            precision: DEFAULT_PRECISION,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

/// Builder for creating Interpreter instances.
pub struct InterpreterBuilder {
    config: EvalConfig,
    env: Option<Environment>,
    warning_handler: Option<SharedWarningHandler>,
    builtins: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            config: EvalConfig::default(),
            env: None,
            warning_handler: None,
            builtins: true,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.config.max_call_depth = depth;
        self
    }

    /// Start from an existing environment (variables predefined by the host).
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Where `@warn` and `@debug` go. Default is stderr.
    #[must_use]
    pub fn warning_handler(mut self, handler: SharedWarningHandler) -> Self {
        self.warning_handler = Some(handler);
        self
    }

    /// Skip registering the built-in functions.
    #[must_use]
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    pub fn build(self) -> Interpreter {
        let mut env = self.env.unwrap_or_default();
        if self.builtins {
            register_builtins(&mut env);
        }
        Interpreter {
            env,
            call_stack: CallStack::new(self.config.max_call_depth),
            config: self.config,
            warnings: self.warning_handler.unwrap_or_else(stderr_handler),
            output: Vec::new(),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
