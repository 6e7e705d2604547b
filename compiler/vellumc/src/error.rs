//! Errors surfaced by `compile`.

use std::path::{Path, PathBuf};

use vellum_diagnostic::EvalError;

/// Fatal compile failure. No output is produced when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("File to read not found or unreadable: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reported by the frontend.
    #[error("{message}")]
    Parse {
        path: PathBuf,
        line: u32,
        message: String,
    },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CompileError {
    pub fn parse(path: impl Into<PathBuf>, line: u32, message: impl Into<String>) -> Self {
        CompileError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// File the error points at, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CompileError::NotFound { path }
            | CompileError::Io { path, .. }
            | CompileError::Parse { path, .. } => Some(path),
            CompileError::Eval(err) => err.span.as_ref().map(|span| Path::new(&*span.path)),
        }
    }

    /// 1-based line, if known.
    pub fn line(&self) -> Option<u32> {
        match self {
            CompileError::Parse { line, .. } => Some(*line),
            CompileError::Eval(err) => err
                .span
                .as_ref()
                .filter(|span| !span.is_dummy())
                .map(|span| span.line),
            CompileError::NotFound { .. } | CompileError::Io { .. } => None,
        }
    }

    /// `path:line: error: message`, followed by the backtrace for
    /// evaluation errors.
    pub fn render(&self) -> String {
        match self {
            CompileError::Eval(err) => err.render(),
            CompileError::Parse {
                path,
                line,
                message,
            } => format!("{}:{line}: error: {message}\n", path.display()),
            CompileError::NotFound { .. } | CompileError::Io { .. } => format!("error: {self}\n"),
        }
    }
}
