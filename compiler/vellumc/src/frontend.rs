//! Parser seam.

use vellum_ir::Block;

use crate::error::CompileError;
use crate::input::SourceFile;

/// Turns source text into a syntax tree.
///
/// Spans in the returned tree should carry `source.path` so diagnostics
/// point at the right file.
pub trait Frontend {
    fn parse(&self, source: &SourceFile) -> Result<Block, CompileError>;
}

impl<F> Frontend for F
where
    F: Fn(&SourceFile) -> Result<Block, CompileError>,
{
    fn parse(&self, source: &SourceFile) -> Result<Block, CompileError> {
        self(source)
    }
}
