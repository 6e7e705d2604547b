//! Serializer seam and the default declaration emitter.

use std::fmt::Write;

use vellum_eval::CssDeclaration;
use vellum_ir::{RenderMode, RenderOptions};

use crate::options::{CompileOptions, OutputStyle};

/// Renders evaluated declarations as stylesheet text.
pub trait Emitter {
    fn emit(&mut self, declarations: &[CssDeclaration], options: &CompileOptions) -> String;
}

/// Emits `property: value;` lines laid out per [`OutputStyle`].
///
/// - nested, expanded, formatted: one declaration per line
/// - compact: all declarations on one line
/// - compressed: no optional whitespace, no final semicolon
#[derive(Clone, Debug, Default)]
pub struct CssEmitter;

impl CssEmitter {
    pub fn new() -> Self {
        CssEmitter
    }
}

impl Emitter for CssEmitter {
    fn emit(&mut self, declarations: &[CssDeclaration], options: &CompileOptions) -> String {
        let compressed = options.output_style == OutputStyle::Compressed;
        let render = RenderOptions::new(RenderMode::Css, options.precision).compressed(compressed);
        let rendered = declarations
            .iter()
            .map(|decl| (decl.property.as_str(), decl.value.render(render)));

        let mut out = String::new();
        match options.output_style {
            OutputStyle::Compressed => {
                let parts: Vec<String> = rendered.map(|(p, v)| format!("{p}:{v}")).collect();
                out.push_str(&parts.join(";"));
            }
            OutputStyle::Compact => {
                let parts: Vec<String> = rendered.map(|(p, v)| format!("{p}: {v};")).collect();
                if !parts.is_empty() {
                    out.push_str(&parts.join(" "));
                    out.push('\n');
                }
            }
            OutputStyle::Nested | OutputStyle::Expanded | OutputStyle::Formatted => {
                for (property, value) in rendered {
                    // Writing to a String cannot fail.
                    let _ = writeln!(out, "{property}: {value};");
                }
            }
        }

        if let Some(file) = &options.source_map.file {
            if !options.source_map.omit_url {
                let _ = write!(out, "\n/*# sourceMappingURL={} */", file.display());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vellum_ir::{Separator, SourceSpan, Value};

    use crate::options::SourceMapOptions;

    fn declarations() -> Vec<CssDeclaration> {
        let decl = |property: &str, value| CssDeclaration {
            property: property.to_string(),
            value,
            span: SourceSpan::dummy(),
        };
        vec![
            decl("width", Value::dimension(1.0 / 3.0, "px")),
            decl(
                "font-family",
                Value::list(
                    vec![Value::quoted("Helvetica"), Value::string("sans-serif")],
                    Separator::Comma,
                ),
            ),
        ]
    }

    fn emit(style: OutputStyle) -> String {
        let options = CompileOptions::default().with_output_style(style);
        CssEmitter::new().emit(&declarations(), &options)
    }

    #[test]
    fn one_declaration_per_line() {
        let expected = "width: 0.33333px;\nfont-family: \"Helvetica\", sans-serif;\n";
        assert_eq!(emit(OutputStyle::Nested), expected);
        assert_eq!(emit(OutputStyle::Expanded), expected);
        assert_eq!(emit(OutputStyle::Formatted), expected);
    }

    #[test]
    fn compact_and_compressed() {
        assert_eq!(
            emit(OutputStyle::Compact),
            "width: 0.33333px; font-family: \"Helvetica\", sans-serif;\n"
        );
        assert_eq!(
            emit(OutputStyle::Compressed),
            "width:0.33333px;font-family:\"Helvetica\",sans-serif"
        );
    }

    #[test]
    fn precision_and_source_map_comment() {
        let options = CompileOptions::default()
            .with_precision(2)
            .with_source_map(SourceMapOptions {
                file: Some("out.css.map".into()),
                ..SourceMapOptions::default()
            });
        let out = CssEmitter::new().emit(&declarations()[..1], &options);
        assert_eq!(out, "width: 0.33px;\n\n/*# sourceMappingURL=out.css.map */");
    }

    #[test]
    fn empty_output() {
        let options = CompileOptions::default().with_output_style(OutputStyle::Compact);
        assert_eq!(CssEmitter::new().emit(&[], &options), "");
    }
}
