//! End-to-end tests for the extraction engine.
//!
//! Each test writes a Python source to a temp file, runs the engine
//! over it, and checks the result contract: inclusive threshold,
//! descending stable order, class-method exclusion, and verbatim
//! extraction.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use bloatcheck::analysis::FunctionRecord;
use bloatcheck::engine::{analyze_file, analyze_source, AnalysisError, DEFAULT_MIN_LINES};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn write_source(dir: &TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn test_basic_extraction_with_threshold() {
    let source = "\
def small_function():
    return \"small\"

def large_function():
    \"\"\"Large enough to qualify.\"\"\"
    data = []
    for i in range(100):
        if i % 2 == 0:
            data.append(i * 2)
        elif i % 3 == 0:
            data.append(i * 3)
        else:
            data.append(i)

    processed = []
    for item in data:
        processed.append(item * 1.1)

    return processed
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "basic.py", source);

    let results = analyze_file(&path, 10, None).unwrap();
    assert_eq!(results.len(), 1);

    let record = &results.records()[0];
    assert_eq!(record.name, "large_function");
    assert!(record.line_count >= 10);
    assert!(record.code.starts_with("def large_function():"));
    assert!(record.code.ends_with("return processed"));
}

#[test]
fn test_threshold_boundary_is_inclusive() {
    let source = "\
def exactly_five():
    a = 1
    b = 2
    c = 3
    return a + b + c

def four_lines():
    a = 1
    b = 2
    return a + b
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "boundary.py", source);

    let results = analyze_file(&path, 5, None).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results.records()[0].name, "exactly_five");
    assert_eq!(results.records()[0].line_count, 5);

    // One line stricter excludes nothing extra; one line looser admits both.
    let results = analyze_file(&path, 4, None).unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn test_exact_span_extraction() {
    // A function spanning exactly lines 10-59: the record reproduces
    // the joined text of those lines and counts 50.
    let mut source = String::new();
    for i in 1..=9 {
        source.push_str(&format!("# preamble {i}\n"));
    }
    source.push_str("def spanning():\n");
    for i in 0..49 {
        source.push_str(&format!("    x{i} = {i}\n"));
    }

    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "span.py", &source);

    let results = analyze_file(&path, 50, None).unwrap();
    assert_eq!(results.len(), 1);

    let record = &results.records()[0];
    assert_eq!(record.name, "spanning");
    assert_eq!(record.line_count, 50);

    let expected: String = source
        .lines()
        .skip(9)
        .take(50)
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(record.code, expected);
}

#[test]
fn test_class_methods_are_excluded() {
    let source = "\
def top_level_function():
    result = []
    for i in range(20):
        if i % 2 == 0:
            result.append(i * 2)
        else:
            result.append(i * 3)
    return result

class TestClass:
    def large_method(self):
        data = []
        for i in range(100):
            if i % 2 == 0:
                data.append(i * 2)
            elif i % 3 == 0:
                data.append(i * 3)
            else:
                data.append(i)
        return data

    def another_large_method(self):
        result = {}
        for i in range(50):
            if i % 2 == 0:
                result[i] = i * 2
            else:
                result[i] = i * 3
        return result

def another_top_level():
    values = []
    for i in range(15):
        values.append(i ** 2)
    processed = []
    for val in values:
        processed.append(val * 2)
    return sum(processed)
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "methods.py", source);

    let results = analyze_file(&path, 5, None).unwrap();
    let names: Vec<&str> = results.records().iter().map(|r| r.name.as_str()).collect();

    assert!(names.contains(&"top_level_function"));
    assert!(names.contains(&"another_top_level"));
    assert!(!names.contains(&"large_method"));
    assert!(!names.contains(&"another_large_method"));
}

#[test]
fn test_only_methods_yields_empty_set() {
    let mut source = String::from("class OnlyMethods:\n    def huge(self):\n");
    for i in 0..100 {
        source.push_str(&format!("        x{i} = {i}\n"));
    }

    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "only_methods.py", &source);

    let results = analyze_file(&path, 10, None).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_sorted_by_size_descending() {
    let source = "\
def medium_function():
    data = []
    for i in range(10):
        data.append(i)
    result = sum(data)
    return result

def large_function():
    values = []
    for i in range(50):
        if i % 2 == 0:
            values.append(i * 2)
        elif i % 3 == 0:
            values.append(i * 3)
        else:
            values.append(i)
    processed = []
    for val in values:
        processed.append(val + 1)
    total = sum(processed)
    return total

def small_function():
    return \"small\"
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "sorting.py", source);

    let results = analyze_file(&path, 5, None).unwrap();
    assert!(results.len() >= 2);

    let records = results.records();
    for pair in records.windows(2) {
        assert!(pair[0].line_count >= pair[1].line_count);
    }
    assert_eq!(records[0].name, "large_function");
}

#[test]
fn test_equal_sizes_keep_source_order() {
    let source = "\
def first():
    a = 1
    b = 2
    return a + b

def second():
    c = 3
    d = 4
    return c + d

def third():
    e = 5
    f = 6
    return e + f
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "ties.py", source);

    let results = analyze_file(&path, 2, None).unwrap();
    let names: Vec<&str> = results.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn test_formatting_is_preserved_verbatim() {
    let source = "\
def formatted_function():
    \"\"\"A function with specific formatting.\"\"\"
    # This comment should be preserved
    x = [
        1, 2, 3,
        4, 5, 6
    ]

    y = {
        'key1': 'value1',
        'key2': 'value2'
    }

    for item in x:
        if item % 2 == 0:
            print(f\"Even: {item}\")
        else:
            print(f\"Odd: {item}\")

    return y
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "formatted.py", source);

    let results = analyze_file(&path, 5, None).unwrap();
    assert_eq!(results.len(), 1);

    // The whole file is one function; the extracted code must be the
    // file's text minus only the trailing newline.
    let code = &results.records()[0].code;
    assert_eq!(code, source.trim_end_matches('\n'));
    assert!(code.contains("# This comment should be preserved"));
    assert!(code.contains("x = [\n        1, 2, 3,"));
    assert!(code.contains("'key1': 'value1',"));
}

#[test]
fn test_empty_file_yields_empty_set() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "empty.py", "");

    let results = analyze_file(&path, DEFAULT_MIN_LINES, None).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_no_large_functions_with_default_threshold() {
    let source = "\
def small_one():
    return 1

def small_two():
    return 2

def small_three():
    x = 1 + 2
    return x
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "small.py", source);

    let results = analyze_file(&path, DEFAULT_MIN_LINES, None).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_json_output_round_trips() {
    let source = "\
def function_one():
    data = []
    for i in range(25):
        data.append(i * 2)
    result = sum(data)
    return result

def function_two():
    values = {}
    for i in range(30):
        values[i] = i ** 2
    total = sum(values.values())
    return total
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "roundtrip.py", source);
    let json_path = dir.path().join("out.json");

    let results = analyze_file(&path, 5, Some(&json_path)).unwrap();
    assert!(json_path.exists());

    let written = fs::read_to_string(&json_path).unwrap();
    let parsed: Vec<FunctionRecord> = serde_json::from_str(&written).unwrap();

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed, results.records());
    for record in &parsed {
        assert!(record.line_count >= 5);
        assert!(record.code.starts_with("def "));
    }
}

#[test]
fn test_persisted_empty_set_is_an_empty_array() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "empty.py", "");
    let json_path = dir.path().join("out.json");

    analyze_file(&path, DEFAULT_MIN_LINES, Some(&json_path)).unwrap();
    assert_eq!(fs::read_to_string(&json_path).unwrap(), "[]");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = analyze_file(Path::new("/path/that/does/not/exist.py"), 5, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Io { .. }));
    let message = err.to_string();
    assert!(message.contains("error processing file"));
    assert!(message.contains("/path/that/does/not/exist.py"));
}

#[test]
fn test_invalid_syntax_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "broken.py",
        "def invalid_syntax(\n    # Missing closing parenthesis",
    );

    let err = analyze_file(&path, 5, None).unwrap_err();
    assert!(matches!(err, AnalysisError::Parse { .. }));
    assert!(err.to_string().contains("broken.py"));
}

#[test]
fn test_no_output_written_on_parse_failure() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "broken.py", "def broken(:\n    pass\n");
    let json_path = dir.path().join("out.json");

    assert!(analyze_file(&path, 5, Some(&json_path)).is_err());
    assert!(!json_path.exists());
}

#[test]
fn test_analyze_source_matches_analyze_file() {
    let source = "\
def sample():
    a = 1
    b = 2
    c = 3
    return a + b + c
";
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "same.py", source);

    let from_file = analyze_file(&path, 3, None).unwrap();
    let from_text = analyze_source(source, 3).unwrap();
    assert_eq!(from_file.records(), from_text.records());
}

#[test]
fn test_fixture_file() {
    let path = testdata_path().join("sample.py");

    let results = analyze_file(&path, 10, None).unwrap();
    assert_eq!(results.len(), 1);

    let record = &results.records()[0];
    assert_eq!(record.name, "load_report");
    assert_eq!(record.line_count, 17);
    assert!(record.code.starts_with("def load_report(path):"));
    assert!(record.code.contains("# Defaults keep older report files readable"));
    // The qualifying method inside ReportWriter must not appear.
    assert!(!record.code.contains("ReportWriter"));
}
