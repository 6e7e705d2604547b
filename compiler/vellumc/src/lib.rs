//! Embedding layer for the Vellum stylesheet evaluator.
//!
//! `compile` ties the pieces together: it loads a [`CompileInput`], hands
//! the text to a [`Frontend`], evaluates the tree with `vellum_eval` and
//! renders the resulting declarations through an [`Emitter`].
//!
//! ```text
//! let css = vellumc::compile(
//!     &CompileInput::file("main.scss"),
//!     &CompileOptions::default().with_include_path("partials"),
//!     &FunctionRegistry::new(),
//!     &my_parser,
//!     &mut CssEmitter::new(),
//! )?;
//! ```

mod compile;
mod emit;
mod error;
mod frontend;
mod input;
mod options;

use std::sync::Once;

pub use compile::compile;
pub use emit::{CssEmitter, Emitter};
pub use error::CompileError;
pub use frontend::Frontend;
pub use input::{resolve_path, CompileInput, SourceFile, STDIN_PATH};
pub use options::{CompileOptions, OutputStyle, ParseOutputStyleError, SourceMapOptions};
pub use vellum_eval::{ForeignFunction, ForeignValue, FunctionRegistry};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=vellum_eval=debug` or
/// `RUST_LOG=vellumc=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
