use std::fs;
use std::path::{Path, PathBuf};

use hdevelop::formatting::Indentation;
use hdevelop::notebook;

fn sample_files(dir: &Path) -> Vec<PathBuf> {
    assert!(dir.exists(), "samples directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read samples directory");

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

    assert!(!files.is_empty(), "No .hdvp files found in samples directory");
    files
}

/// Simple diff function to show line-by-line differences
fn show_diff(original: &str, saved: &str, file_path: &Path) {
    let original_lines: Vec<&str> = original
        .lines()
        .collect();
    let saved_lines: Vec<&str> = saved
        .lines()
        .collect();

    let max_lines = original_lines
        .len()
        .max(saved_lines.len());

    println!("\nDifferences found in file: {:?}", file_path);
    println!("--- Original");
    println!("+++ Saved");

    for i in 0..max_lines {
        let orig_line = original_lines
            .get(i)
            .unwrap_or(&"");
        let saved_line = saved_lines
            .get(i)
            .unwrap_or(&"");

        if orig_line != saved_line {
            println!("@@ Line {} @@", i + 1);
            println!("- {}", orig_line);
            println!("+ {}", saved_line);
        }
    }
}

#[test]
fn ensure_samples_open() {
    let files = sample_files(Path::new("tests/samples/"));

    let mut failures = Vec::new();

    for file in &files {
        let content = fs::read(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        if let Err(error) = notebook::open(&content, &Indentation::default()) {
            println!("File {:?} failed to open: {}", file, error);
            failures.push(file.clone());
        }
    }

    if !failures.is_empty() {
        panic!("{} sample files failed to open", failures.len());
    }
}

/// Samples are stored the way a save writes them, so opening and saving
/// without any edits must reproduce each file exactly.
#[test]
fn ensure_identical_output() {
    let files = sample_files(Path::new("tests/samples/"));

    let mut failures = Vec::new();

    for file in &files {
        let original = fs::read_to_string(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        let mut document = notebook::open(original.as_bytes(), &Indentation::default())
            .unwrap_or_else(|e| panic!("Failed to open file {:?}: {}", file, e));
        let saved = document
            .save()
            .unwrap_or_else(|e| panic!("Failed to save file {:?}: {}", file, e));
        let saved = String::from_utf8(saved).unwrap();

        if saved != original {
            show_diff(&original, &saved, file);
            failures.push(file.clone());
        }
    }

    if !failures.is_empty() {
        panic!("All samples must save unchanged");
    }
}
