//! End-to-End CLI Integration Tests
//!
//! Tests the complete checklist printer through the status_cli Printer
//! API. This is the highest level integration test - document data to
//! final transcript bytes.

use checklist::Checklist;
use status_cli::Printer;

/// Test: Full transcript begins with the banner line
#[test]
fn test_e2e_transcript_begins_with_banner() {
    let mut out = Vec::new();
    Printer::new().run(&mut out).expect("run failed");

    let transcript = String::from_utf8(out).expect("output is UTF-8");
    assert!(transcript.starts_with("⚙️ Testing Core Framework Components...\n"));
}

/// Test: Full transcript ends with the final closing line
#[test]
fn test_e2e_transcript_ends_with_closing_line() {
    let mut out = Vec::new();
    Printer::new().run(&mut out).expect("run failed");

    let transcript = String::from_utf8(out).expect("output is UTF-8");
    assert!(transcript.ends_with("✅ Strict enforcement!\n"));
}

/// Test: Runtime Engine header is immediately before the first
/// multi-threaded execution item
#[test]
fn test_e2e_runtime_engine_adjacency() {
    let mut out = Vec::new();
    Printer::new().run(&mut out).expect("run failed");

    let transcript = String::from_utf8(out).expect("output is UTF-8");
    let lines: Vec<&str> = transcript.lines().collect();
    let pos = lines
        .iter()
        .position(|l| *l == "✅ Multi-threaded execution")
        .expect("multi-threaded item missing");

    assert!(lines[pos - 1].contains("🏃 Runtime Engine"));
}

/// Test: All seven section headers appear, in order
#[test]
fn test_e2e_section_order() {
    let mut out = Vec::new();
    Printer::new().run(&mut out).expect("run failed");

    let transcript = String::from_utf8(out).expect("output is UTF-8");
    let expected = [
        "Runtime Engine",
        "Compiler System",
        "Testing Framework",
        "Linting System",
        "Router System",
        "State Management",
        "Plugin System",
    ];

    let mut cursor = 0;
    for name in expected {
        let at = transcript[cursor..]
            .find(name)
            .unwrap_or_else(|| panic!("section {:?} missing or out of order", name));
        cursor += at + name.len();
    }
}

/// Test: Printer output equals the document transcript byte-for-byte
#[test]
fn test_e2e_printer_matches_document() {
    let mut out = Vec::new();
    let printer = Printer::new();
    printer.run(&mut out).expect("run failed");

    assert_eq!(out, Checklist::standard().transcript().into_bytes());
}

/// Test: Per-section item counts match the fixed checklist
#[test]
fn test_e2e_section_item_counts() {
    let printer = Printer::new();
    assert_eq!(
        printer.document().section_item_counts(),
        vec![7, 8, 8, 11, 12, 10, 11]
    );
}
