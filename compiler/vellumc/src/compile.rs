//! The compile entry point.

use vellum_eval::{FunctionRegistry, InterpreterBuilder};

use crate::emit::Emitter;
use crate::error::CompileError;
use crate::frontend::Frontend;
use crate::input::CompileInput;
use crate::options::CompileOptions;

/// Compile one stylesheet.
///
/// Loads `input`, parses it with `frontend`, evaluates it on a fresh
/// interpreter with the built-in functions plus everything in `registry`,
/// and renders the declarations with `emitter`. Any error aborts the compile
/// and discards partial output.
///
/// Installs the `RUST_LOG` subscriber on first use, see [`crate::init_tracing`].
#[tracing::instrument(level = "debug", skip_all, fields(input = %input.label()))]
pub fn compile(
    input: &CompileInput,
    options: &CompileOptions,
    registry: &FunctionRegistry,
    frontend: &dyn Frontend,
    emitter: &mut dyn Emitter,
) -> Result<String, CompileError> {
    crate::init_tracing();
    let source = input.load(&options.include_paths)?;
    let block = frontend.parse(&source)?;

    let mut builder = InterpreterBuilder::new().config(options.eval_config());
    if let Some(handler) = &options.warning_handler {
        builder = builder.warning_handler(handler.clone());
    }
    let mut interpreter = builder.build();
    interpreter.register_foreign(registry);
    interpreter.run(&block)?;

    let declarations = interpreter.take_declarations();
    tracing::debug!(
        declarations = declarations.len(),
        style = %options.output_style,
        "evaluation finished"
    );
    Ok(emitter.emit(&declarations, options))
}
