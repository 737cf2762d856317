#![cfg(feature = "pdf")]

mod common;

use lopdf::{dictionary, Object};
use std::path::Path;
use struct_store::{ErrorKind, ErrorPolicy, FormatParser, PdfConfig, PdfParser, TextUnit};

use common::{init_tracing, label_tree, write_pdf};

fn texts(units: &[TextUnit]) -> Vec<String> {
    units.iter().map(|u| u.text().trim().to_string()).collect()
}

fn labels(units: &[TextUnit]) -> Vec<&str> {
    units.iter().map(|u| u.page_label().unwrap()).collect()
}

#[test]
fn test_one_unit_per_page_in_order() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    write_pdf(&path, &["Alpha page", "Beta page", "Gamma page", "Delta page"], None);

    let units = PdfParser::default().parse(&path, ErrorPolicy::Strict).unwrap();

    assert_eq!(units.len(), 4);
    assert_eq!(texts(&units), vec!["Alpha page", "Beta page", "Gamma page", "Delta page"]);
    assert_eq!(labels(&units), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_roman_front_matter_labels() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.pdf");
    let tree = label_tree(vec![
        (0, dictionary! { "S" => "r" }),
        (2, dictionary! { "S" => "D" }),
    ]);
    write_pdf(&path, &["Foreword", "Contents", "Chapter One"], Some(tree));

    let units = PdfParser::default().parse(&path, ErrorPolicy::Ignore).unwrap();

    assert_eq!(labels(&units), vec!["i", "ii", "1"]);
    assert_eq!(texts(&units), vec!["Foreword", "Contents", "Chapter One"]);
    for unit in &units {
        assert_eq!(unit.metadata().len(), 1);
    }
}

#[test]
fn test_prefixed_labels_with_start_and_kids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appendix.pdf");
    let leaf = label_tree(vec![(
        1,
        dictionary! {
            "S" => "A",
            "P" => Object::string_literal("App-"),
            "St" => Object::Integer(3),
        },
    )]);
    let tree = dictionary! { "Kids" => vec![Object::Dictionary(leaf)] };
    write_pdf(&path, &["Body", "First appendix", "Second appendix"], Some(tree));

    let units = PdfParser::default().parse(&path, ErrorPolicy::Strict).unwrap();

    assert_eq!(labels(&units), vec!["1", "App-C", "App-D"]);
}

#[test]
fn test_zero_pages_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.pdf");
    write_pdf(&path, &[], None);

    let units = PdfParser::default().parse(&path, ErrorPolicy::Strict).unwrap();
    assert!(units.is_empty());
}

#[test]
fn test_parsing_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twice.pdf");
    write_pdf(&path, &["Same text", "More text"], None);

    let parser = PdfParser::default();
    let first = parser.parse(&path, ErrorPolicy::Strict).unwrap();
    let second = parser.parse(&path, ErrorPolicy::Strict).unwrap();

    assert_eq!(first, second);
    let fresh = PdfParser::default().parse(&path, ErrorPolicy::Strict).unwrap();
    assert_eq!(first, fresh);
}

#[test]
fn test_trim_lines_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trimmed.pdf");
    write_pdf(&path, &["Only line"], None);

    let parser = PdfParser::new(PdfConfig {
        normalize_glyphs: true,
        trim_lines: true,
    });
    let units = parser.parse(&path, ErrorPolicy::Strict).unwrap();
    assert_eq!(units[0].text(), "Only line");
}

#[test]
fn test_corrupt_file_fails_under_both_policies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.pdf");
    std::fs::write(&path, b"%PDF-1.5\nthis is not a pdf body").unwrap();

    for policy in [ErrorPolicy::Ignore, ErrorPolicy::Strict] {
        let err = PdfParser::default().parse(&path, policy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("corrupt.pdf"));
    }
}

#[test]
fn test_missing_file() {
    let err = PdfParser::default()
        .parse(Path::new("/nonexistent/dir/missing.pdf"), ErrorPolicy::Ignore)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("missing.pdf"));
}
