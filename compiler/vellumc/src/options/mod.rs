//! Compile configuration.
//!
//! `CompileOptions` starts from `Default` and is adjusted with the `with_*`
//! methods:
//!
//! ```text
//! let options = CompileOptions::default()
//!     .with_output_style(OutputStyle::Compressed)
//!     .with_precision(3)
//!     .with_include_path("styles/partials");
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use vellum_eval::{EvalConfig, SharedWarningHandler, DEFAULT_MAX_CALL_DEPTH};
use vellum_ir::DEFAULT_PRECISION;

/// Layout of the emitted stylesheet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    #[default]
    Nested,
    Expanded,
    Compact,
    Compressed,
    Formatted,
}

impl OutputStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputStyle::Nested => "nested",
            OutputStyle::Expanded => "expanded",
            OutputStyle::Compact => "compact",
            OutputStyle::Compressed => "compressed",
            OutputStyle::Formatted => "formatted",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown output style name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown output style `{0}` (expected nested, expanded, compact, compressed or formatted)")]
pub struct ParseOutputStyleError(String);

impl FromStr for OutputStyle {
    type Err = ParseOutputStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nested" => Ok(OutputStyle::Nested),
            "expanded" => Ok(OutputStyle::Expanded),
            "compact" => Ok(OutputStyle::Compact),
            "compressed" => Ok(OutputStyle::Compressed),
            "formatted" => Ok(OutputStyle::Formatted),
            _ => Err(ParseOutputStyleError(s.to_string())),
        }
    }
}

/// Source map toggles handed to the emitter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceMapOptions {
    /// Where the map will be written. `None` disables source maps.
    pub file: Option<PathBuf>,
    /// Leave out the `sourceMappingURL` comment.
    pub omit_url: bool,
    /// Include the sources' text in the map.
    pub contents: bool,
}

impl SourceMapOptions {
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }
}

/// Options for one `compile` call.
#[derive(Clone)]
pub struct CompileOptions {
    pub output_style: OutputStyle,
    /// Decimal places kept when numbers are rendered.
    pub precision: usize,
    pub source_map: SourceMapOptions,
    /// Searched in order when a relative input path is not found in the
    /// working directory.
    pub include_paths: Vec<PathBuf>,
    /// `None` for unlimited.
    pub max_call_depth: Option<usize>,
    /// Destination of `@warn` and `@debug`; stderr when unset.
    pub warning_handler: Option<SharedWarningHandler>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            output_style: OutputStyle::default(),
            precision: DEFAULT_PRECISION,
            source_map: SourceMapOptions::default(),
            include_paths: Vec::new(),
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            warning_handler: None,
        }
    }
}

impl CompileOptions {
    #[must_use]
    pub fn with_output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = style;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_source_map(mut self, source_map: SourceMapOptions) -> Self {
        self.source_map = source_map;
        self
    }

    #[must_use]
    pub fn with_include_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.include_paths.push(path.into());
        self
    }

    #[must_use]
    pub fn with_max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn with_warning_handler(mut self, handler: SharedWarningHandler) -> Self {
        self.warning_handler = Some(handler);
        self
    }

    /// The evaluator's share of the options.
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            precision: self.precision,
            max_call_depth: self.max_call_depth,
        }
    }
}

impl fmt::Debug for CompileOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompileOptions")
            .field("output_style", &self.output_style)
            .field("precision", &self.precision)
            .field("source_map", &self.source_map)
            .field("include_paths", &self.include_paths)
            .field("max_call_depth", &self.max_call_depth)
            .field("warning_handler", &self.warning_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
