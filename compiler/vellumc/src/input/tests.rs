use super::*;
use pretty_assertions::assert_eq;

#[test]
fn literal_source_defaults_to_stdin() {
    let source = CompileInput::source("a: 1;").load(&[]).unwrap();
    assert_eq!(source.path, PathBuf::from("stdin"));
    assert_eq!(source.text, "a: 1;");
    assert_eq!(CompileInput::source("").label(), "stdin");
}

#[test]
fn literal_source_keeps_label() {
    let input = CompileInput::Source {
        text: String::new(),
        path: Some(PathBuf::from("inline.scss")),
    };
    assert_eq!(input.label(), "inline.scss");
    assert_eq!(input.load(&[]).unwrap().display_path(), "inline.scss");
}

#[test]
fn include_paths_are_searched_in_order() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    std::fs::write(second.path().join("theme.scss"), "b: 2;").unwrap();
    let includes = vec![first.path().to_path_buf(), second.path().to_path_buf()];

    let source = CompileInput::file("theme.scss").load(&includes).unwrap();
    assert_eq!(source.path, second.path().join("theme.scss"));
    assert_eq!(source.text, "b: 2;");

    std::fs::write(first.path().join("theme.scss"), "a: 1;").unwrap();
    let source = CompileInput::file("theme.scss").load(&includes).unwrap();
    assert_eq!(source.text, "a: 1;");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CompileInput::file("absent.scss")
        .load(&[dir.path().to_path_buf()])
        .unwrap_err();
    assert!(matches!(err, CompileError::NotFound { ref path } if path == Path::new("absent.scss")));
    assert_eq!(resolve_path(&dir.path().join("absent.scss"), &[]), None);
}
