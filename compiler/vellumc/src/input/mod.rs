//! Compile inputs and source loading.

use std::path::{Path, PathBuf};

use crate::error::CompileError;

/// Path reported for sources that did not come from a file.
pub const STDIN_PATH: &str = "stdin";

/// Source text together with the path diagnostics report for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        SourceFile {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Path as it appears in diagnostics.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// What to compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileInput {
    /// A stylesheet on disk.
    File(PathBuf),
    /// Literal source text. `path` labels diagnostics; `None` reports
    /// [`STDIN_PATH`].
    Source { text: String, path: Option<PathBuf> },
}

impl CompileInput {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        CompileInput::File(path.into())
    }

    pub fn source(text: impl Into<String>) -> Self {
        CompileInput::Source {
            text: text.into(),
            path: None,
        }
    }

    /// Short description for logs.
    pub fn label(&self) -> String {
        match self {
            CompileInput::File(path) => path.display().to_string(),
            CompileInput::Source { path: Some(path), .. } => path.display().to_string(),
            CompileInput::Source { path: None, .. } => STDIN_PATH.to_string(),
        }
    }

    /// Read the input, resolving relative file paths against the working
    /// directory first and then each include path in order.
    pub fn load(&self, include_paths: &[PathBuf]) -> Result<SourceFile, CompileError> {
        match self {
            CompileInput::Source { text, path } => Ok(SourceFile::new(
                path.clone().unwrap_or_else(|| PathBuf::from(STDIN_PATH)),
                text.clone(),
            )),
            CompileInput::File(path) => {
                let resolved = resolve_path(path, include_paths)
                    .ok_or_else(|| CompileError::NotFound { path: path.clone() })?;
                tracing::debug!(path = %resolved.display(), "reading stylesheet");
                let text = std::fs::read_to_string(&resolved).map_err(|source| {
                    CompileError::Io {
                        path: resolved.clone(),
                        source,
                    }
                })?;
                Ok(SourceFile::new(resolved, text))
            }
        }
    }
}

/// First existing file among `path` and `include/path` for each include
/// path. Absolute paths are only checked as given.
pub fn resolve_path(path: &Path, include_paths: &[PathBuf]) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    if path.is_absolute() {
        return None;
    }
    include_paths
        .iter()
        .map(|dir| dir.join(path))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
