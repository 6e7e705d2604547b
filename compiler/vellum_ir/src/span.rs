//! Source locations for diagnostics.

use std::fmt;
use std::sync::Arc;

/// Location of a syntax node: file path plus 1-based line and column.
///
/// Spans only feed diagnostics. They never take part in value equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub path: Arc<str>,
    pub line: u32,
    pub column: u32,
}

impl SourceSpan {
    /// Create a span for a position in `path`.
    pub fn new(path: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        SourceSpan {
            path: path.into(),
            line,
            column,
        }
    }

    /// Span for nodes built programmatically (no backing source text).
    pub fn dummy() -> Self {
        SourceSpan::new("stdin", 0, 0)
    }

    /// Check if this is a generated span with no real position.
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

impl Default for SourceSpan {
    fn default() -> Self {
        Self::dummy()
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}
