mod common;

use std::path::Path;
use struct_store::{DocxParser, ErrorKind, ErrorPolicy, FormatParser};

#[cfg(feature = "docx")]
use common::{init_tracing, write_docx};

#[cfg(feature = "docx")]
#[test]
fn test_single_unit_with_empty_metadata() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memo.docx");
    write_docx(&path, &["Quarterly memo", "Revenue grew.", "Costs fell."]);

    let units = DocxParser::new().parse(&path, ErrorPolicy::Ignore).unwrap();

    assert_eq!(units.len(), 1);
    assert!(units[0].metadata().is_empty());
    assert_eq!(units[0].text(), "Quarterly memo\nRevenue grew.\nCosts fell.");
}

#[cfg(feature = "docx")]
#[test]
fn test_long_document_is_still_one_unit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.docx");
    let paragraphs: Vec<String> = (0..500).map(|i| format!("Paragraph number {}", i)).collect();
    let refs: Vec<&str> = paragraphs.iter().map(String::as_str).collect();
    write_docx(&path, &refs);

    let units = DocxParser::new().parse(&path, ErrorPolicy::Strict).unwrap();

    assert_eq!(units.len(), 1);
    assert!(units[0].text().starts_with("Paragraph number 0\n"));
    assert!(units[0].text().ends_with("Paragraph number 499"));
}

#[cfg(feature = "docx")]
#[test]
fn test_parsing_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twice.docx");
    write_docx(&path, &["stable"]);

    let parser = DocxParser::new();
    assert_eq!(
        parser.parse(&path, ErrorPolicy::Strict).unwrap(),
        parser.parse(&path, ErrorPolicy::Strict).unwrap()
    );
}

#[cfg(feature = "docx")]
#[test]
fn test_hyperlinks_tables_and_breaks_keep_their_text() {
    use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Paragraph, Run, Table, TableCell, TableRow};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.docx");
    let docx = Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("See our "))
                .add_hyperlink(Hyperlink::new("site", HyperlinkType::Anchor).add_run(Run::new().add_text("WEBSITE"))),
        )
        .add_paragraph(Paragraph::new().add_run(
            Run::new()
                .add_text("line1")
                .add_break(BreakType::TextWrapping)
                .add_text("line2"),
        ))
        .add_table(Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("CELLTEXT"))),
        ])]));
    docx.build().pack(std::fs::File::create(&path).unwrap()).unwrap();

    let units = DocxParser::new().parse(&path, ErrorPolicy::Strict).unwrap();

    assert_eq!(units.len(), 1);
    let lines: Vec<&str> = units[0].text().lines().collect();
    assert!(lines.contains(&"See our WEBSITE"));
    assert!(lines.contains(&"line1"));
    assert!(lines.contains(&"line2"));
    assert!(lines.contains(&"CELLTEXT"));
}

#[cfg(feature = "docx")]
#[test]
fn test_corrupt_docx_fails_even_when_ignoring() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"PK\x03\x04 truncated").unwrap();

    let err = DocxParser::new().parse(&path, ErrorPolicy::Ignore).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("broken.docx"));
}

#[cfg(not(feature = "docx"))]
#[test]
fn test_missing_decoder_names_library() {
    let err = DocxParser::new()
        .parse(Path::new("memo.docx"), ErrorPolicy::Ignore)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingDependency);
    let message = err.to_string();
    assert!(message.contains("docx-rs"));
    assert!(message.contains("--features docx"));
}

#[test]
fn test_missing_file() {
    let err = DocxParser::new()
        .parse(Path::new("/nonexistent/dir/missing.docx"), ErrorPolicy::Strict)
        .unwrap_err();
    let expected = if cfg!(feature = "docx") {
        ErrorKind::Parse
    } else {
        ErrorKind::MissingDependency
    };
    assert_eq!(err.kind(), expected);
}
