//! End-to-end runs over the real adapter set and real files

use json_bench::{
    AdapterRegistry, BenchRunner, Document, Protocol, Reporter, default_adapters, load_corpus,
};
use std::path::PathBuf;
use tempfile::TempDir;

const ADAPTER_NAMES: [&str; 3] = ["serde_json", "simd-json", "sonic-rs"];

fn default_registry() -> AdapterRegistry {
    let mut registry = AdapterRegistry::new();
    for adapter in default_adapters() {
        registry.register(adapter).unwrap();
    }
    registry
}

fn run_to_lines(corpus: Vec<Document>) -> Vec<String> {
    let runner = BenchRunner::new(Protocol::default(), default_registry(), corpus).unwrap();
    let mut reporter = Reporter::new(Vec::new());
    runner.run(&mut reporter).unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    out.lines().map(str::to_string).collect()
}

/// A timing line is ` <name>: <ms>ms` with a non-negative integer value
fn assert_timing_line(line: &str, adapter: &str) {
    let rest = line
        .strip_prefix(&format!(" {adapter}: "))
        .unwrap_or_else(|| panic!("line {line:?} is not a timing line for {adapter}"));
    let digits = rest
        .strip_suffix("ms")
        .unwrap_or_else(|| panic!("line {line:?} does not end in ms"));
    digits
        .parse::<u64>()
        .unwrap_or_else(|_| panic!("line {line:?} has a non-integer duration"));
}

#[test]
fn test_full_run_over_one_hundred_byte_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("array.json");

    // A 100-byte valid JSON array: ["aaa...a"] with 96 payload characters
    let body = format!("[\"{}\"]", "a".repeat(96));
    assert_eq!(body.len(), 100);
    std::fs::write(&path, &body).unwrap();

    let corpus = load_corpus(&[&path]).unwrap();
    let lines = run_to_lines(corpus);

    // Parse section: header + 3 adapters x 3 measured trials, then the
    // serialize section with the same shape.
    assert_eq!(lines.len(), 20);

    assert!(lines[0].starts_with("Parse File 1 "));
    assert!(lines[0].ends_with("(100 bytes)"));
    for (i, adapter) in ADAPTER_NAMES.iter().enumerate() {
        for line in &lines[1 + i * 3..1 + (i + 1) * 3] {
            assert_timing_line(line, adapter);
        }
    }

    assert!(lines[10].starts_with("Serialize File 1 "));
    assert!(lines[10].ends_with("(100 bytes)"));
    for (i, adapter) in ADAPTER_NAMES.iter().enumerate() {
        for line in &lines[11 + i * 3..11 + (i + 1) * 3] {
            assert_timing_line(line, adapter);
        }
    }
}

#[test]
fn test_multiple_documents_keep_corpus_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");
    std::fs::write(&first, br#"{"a": 1}"#).unwrap();
    std::fs::write(&second, br#"[true, null]"#).unwrap();

    let corpus = load_corpus(&[&first, &second]).unwrap();
    let lines = run_to_lines(corpus);

    // Two documents, two sections each: 2 x 2 x (1 header + 9 timings)
    assert_eq!(lines.len(), 40);
    assert!(lines[0].starts_with("Parse File 1 "));
    assert!(lines[0].contains("first.json"));
    assert!(lines[10].starts_with("Parse File 2 "));
    assert!(lines[10].contains("second.json"));
    assert!(lines[20].starts_with("Serialize File 1 "));
    assert!(lines[30].starts_with("Serialize File 2 "));
}

#[test]
fn test_empty_argument_list_produces_no_output() {
    let paths: Vec<PathBuf> = Vec::new();
    let corpus = load_corpus(&paths).unwrap();
    let lines = run_to_lines(corpus);
    assert!(lines.is_empty());
}

#[test]
fn test_nonexistent_path_fails_before_any_report_line() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let err = load_corpus(&[&missing]).unwrap_err();
    assert!(matches!(err, json_bench::Error::Document { .. }));
}

#[test]
fn test_identical_content_from_different_paths_reports_identical_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let one = temp_dir.path().join("one.json");
    let two = temp_dir.path().join("two.json");
    let content = br#"{"same": ["bytes", "either", "way"]}"#;
    std::fs::write(&one, content).unwrap();
    std::fs::write(&two, content).unwrap();

    let corpus = load_corpus(&[&one, &two]).unwrap();
    assert_eq!(corpus[0].bytes(), corpus[1].bytes());

    let lines = run_to_lines(corpus);
    let size = format!("({} bytes)", content.len());
    assert!(lines[0].ends_with(&size));
    assert!(lines[10].ends_with(&size));
}
