use super::*;
use pretty_assertions::assert_eq;

#[test]
fn output_style_names_round_trip() {
    for style in [
        OutputStyle::Nested,
        OutputStyle::Expanded,
        OutputStyle::Compact,
        OutputStyle::Compressed,
        OutputStyle::Formatted,
    ] {
        assert_eq!(style.as_str().parse::<OutputStyle>(), Ok(style));
    }
    assert_eq!("COMPACT".parse::<OutputStyle>(), Ok(OutputStyle::Compact));
}

#[test]
fn unknown_output_style() {
    let err = "pretty".parse::<OutputStyle>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown output style `pretty` (expected nested, expanded, compact, compressed or formatted)"
    );
}

#[test]
fn defaults() {
    let options = CompileOptions::default();
    assert_eq!(options.output_style, OutputStyle::Nested);
    assert_eq!(options.precision, 5);
    assert!(!options.source_map.is_enabled());
    assert!(options.include_paths.is_empty());
    assert_eq!(options.eval_config(), EvalConfig::default());
}

#[test]
fn builder_methods() {
    let options = CompileOptions::default()
        .with_output_style(OutputStyle::Compressed)
        .with_precision(2)
        .with_include_path("a")
        .with_include_path("b")
        .with_max_call_depth(None);
    assert_eq!(options.include_paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    assert_eq!(
        options.eval_config(),
        EvalConfig {
            precision: 2,
            max_call_depth: None,
        }
    );
}
