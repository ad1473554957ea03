use std::fs;
use std::path::Path;

use hdevelop::formatting::Indentation;
use hdevelop::language::StructuralError;
use hdevelop::notebook::{self, NotebookError};

fn open(name: &str) -> Result<notebook::EditableDocument, NotebookError> {
    let path = Path::new("tests/broken/").join(name);
    let content =
        fs::read(&path).unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", path, e));
    notebook::open(&content, &Indentation::default())
}

#[test]
fn ensure_fail() {
    let dir = Path::new("tests/broken/");

    assert!(dir.exists(), "broken directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read broken directory");

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path
            .extension()
            .and_then(|s| s.to_str())
            == Some("hdvp")
        {
            files.push(path);
        }
    }

    assert!(!files.is_empty(), "No .hdvp files found in broken directory");

    let mut unexpected_successes = Vec::new();

    for file in &files {
        let content = fs::read(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        if notebook::open(&content, &Indentation::default()).is_ok() {
            println!("File {:?} unexpectedly opened successfully", file);
            unexpected_successes.push(file.clone());
        }
    }

    if !unexpected_successes.is_empty() {
        panic!(
            "Broken files should not open successfully, but {} files did",
            unexpected_successes.len()
        );
    }
}

#[test]
fn naming_what_is_missing() {
    let structural = |name: &str| match open(name) {
        Err(NotebookError::Structural(error)) => error,
        other => panic!("Expected structural error for {}, got {:?}", name, other.map(|_| ())),
    };

    assert_eq!(
        structural("no_declaration.hdvp"),
        StructuralError::MissingDeclaration
    );
    assert_eq!(structural("wrong_root.hdvp"), StructuralError::MissingRoot);
    assert_eq!(
        structural("no_procedure.hdvp"),
        StructuralError::MissingProcedure
    );
    assert_eq!(
        structural("missing_docu.hdvp"),
        StructuralError::TooFewProcedureElements(2)
    );
    assert_eq!(
        structural("swapped_parts.hdvp"),
        StructuralError::MissingProcedureElement("interface")
    );

    assert!(matches!(
        structural("unclosed.hdvp"),
        StructuralError::Malformed(_)
    ));
    assert!(matches!(
        structural("mismatched.hdvp"),
        StructuralError::Malformed(_)
    ));
}

#[test]
fn error_messages() {
    let message = |name: &str| {
        open(name)
            .map(|_| ())
            .unwrap_err()
            .to_string()
    };

    assert_eq!(
        message("no_declaration.hdvp"),
        "Invalid file: could not find XML header and version"
    );
    assert_eq!(
        message("wrong_root.hdvp"),
        "Invalid file: could not find hdevelop element"
    );
    assert!(message("missing_docu.hdvp").starts_with("Invalid file: could not find procedure elements"));
}
