use docdiff::reports::{ReportConfig, ReportGenerator, ReportMetadata, SummaryReporter};
use docdiff::{
    compare_json, compare_text, compare_xml, ChangeKind, ComparisonOptions, DifferenceKind,
    DocumentFormat, TextMode,
};
use std::path::Path;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(Path::new("tests/fixtures").join(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

fn paths(result: &docdiff::CompareResult) -> Vec<&str> {
    result.differences.iter().map(|d| d.path.as_str()).collect()
}

#[test]
fn golden_json_config_strict() {
    let result = compare_json(
        &fixture("json/config-old.json"),
        &fixture("json/config-new.json"),
        &ComparisonOptions::default(),
    );

    assert!(!result.are_equal);
    assert!(!result.has_parse_error);
    // Key order is significant, so the walk follows the left document's keys
    assert_eq!(
        paths(&result),
        vec![
            "version",
            "debug",
            "servers[0].host",
            "servers[1].host",
            "servers[1].port",
            "owner.name",
            "features",
        ]
    );
    assert_eq!(result.differences_count, 7);
}

#[test]
fn golden_json_config_lenient() {
    let result = compare_json(
        &fixture("json/config-old.json"),
        &fixture("json/config-new.json"),
        &ComparisonOptions::lenient(),
    );

    // Sorted keys, sorted arrays and case folding leave four real changes
    assert_eq!(
        paths(&result),
        vec!["debug", "features", "servers[0].port", "version"]
    );
    let kinds: Vec<_> = result.differences.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DifferenceKind::Removed,
            DifferenceKind::Added,
            DifferenceKind::Modified,
            DifferenceKind::Modified,
        ]
    );
    assert_eq!(result.differences[2].old_value, Some(serde_json::json!(80)));
    assert_eq!(result.differences[2].new_value, Some(serde_json::json!(8080)));
}

#[test]
fn golden_json_invalid_fixture() {
    let result = compare_json(
        &fixture("json/invalid.json"),
        &fixture("json/config-new.json"),
        &ComparisonOptions::default(),
    );

    assert!(result.has_parse_error);
    assert!(!result.are_equal);
    assert!(result.differences.is_empty());
    let message = result.parse_error_message.as_deref().unwrap_or_default();
    assert!(message.starts_with("Left JSON is invalid"), "{message}");
    // The raw text is still aligned for display
    assert!(result.diff_lines.iter().any(|l| l.left.is_some()));
}

#[test]
fn golden_xml_catalog() {
    let result = compare_xml(
        &fixture("xml/catalog-old.xml"),
        &fixture("xml/catalog-new.xml"),
        &ComparisonOptions::default(),
    );

    assert!(!result.are_equal);
    insta::assert_json_snapshot!(result.differences, @r#"
    [
      {
        "kind": "attribute_changed",
        "path": "/catalog",
        "element": "catalog",
        "attribute": "version",
        "old_value": "1",
        "new_value": "2",
        "message": "Attribute 'version' of <catalog> changed"
      },
      {
        "kind": "attribute_changed",
        "path": "/catalog/book[0]",
        "element": "book",
        "attribute": "attribute_order",
        "old_value": [
          "id",
          "lang"
        ],
        "new_value": [
          "lang",
          "id"
        ],
        "message": "Attribute order of <book> changed"
      },
      {
        "kind": "modified",
        "path": "/catalog/book[1]/price[0]",
        "element": "price",
        "old_value": "49.99",
        "new_value": "44.99",
        "message": "Text of <price> changed"
      },
      {
        "kind": "added",
        "path": "/catalog/magazine[0]",
        "element": "magazine",
        "message": "Element <magazine> added"
      }
    ]
    "#);
}

#[test]
fn golden_xml_catalog_lines() {
    let result = compare_xml(
        &fixture("xml/catalog-old.xml"),
        &fixture("xml/catalog-new.xml"),
        &ComparisonOptions::default(),
    );

    // Root and first <book> carry attribute changes, the second <price> its text
    assert_eq!(result.modified_count, 3);
    assert_eq!(result.added_count, 1);
    assert_eq!(result.removed_count, 0);

    let magazine = result
        .diff_lines
        .iter()
        .find(|l| l.kind == ChangeKind::Added)
        .expect("added magazine row");
    assert_eq!(magazine.right.as_deref(), Some("  <magazine id=\"m1\"/>"));
    // The XML declaration occupies line 1 of the source
    assert_eq!(magazine.right_line_number, Some(11));

    let book = result
        .diff_lines
        .iter()
        .find(|l| l.left.as_deref() == Some("  <book id=\"b1\" lang=\"en\">"))
        .expect("first book row");
    assert_eq!(book.kind, ChangeKind::Modified);
    assert_eq!(book.left_line_number, Some(3));
    assert_eq!(book.right_line_number, Some(3));
}

#[test]
fn golden_xml_catalog_ignoring_attribute_order() {
    let opts = ComparisonOptions::default().ignore_attribute_order(true);
    let result = compare_xml(
        &fixture("xml/catalog-old.xml"),
        &fixture("xml/catalog-new.xml"),
        &opts,
    );

    assert_eq!(result.differences_count, 3);
    assert!(result
        .differences
        .iter()
        .all(|d| d.attribute.as_deref() != Some("attribute_order")));
}

#[test]
fn golden_text_notes_lines() {
    let result = compare_text(
        &fixture("text/notes-old.txt"),
        &fixture("text/notes-new.txt"),
        &ComparisonOptions::default(),
        TextMode::Line,
    );

    assert_eq!(result.modified_count, 1);
    assert_eq!(result.added_count, 1);
    assert_eq!(result.removed_count, 0);
    assert_eq!(paths(&result), vec!["line 5", "line 7"]);

    let modified = &result.diff_lines[4];
    assert_eq!(modified.left.as_deref(), Some("- Fixed crash on empty input"));
    assert_eq!(modified.right.as_deref(), Some("- Fixed crash on empty config"));
}

#[test]
fn golden_text_notes_words() {
    let result = compare_text(
        &fixture("text/notes-old.txt"),
        &fixture("text/notes-new.txt"),
        &ComparisonOptions::default(),
        TextMode::Word,
    );

    let modified = &result.diff_lines[4];
    let removed: Vec<&str> = modified
        .left_words
        .iter()
        .flatten()
        .filter(|w| w.kind == ChangeKind::Removed)
        .map(|w| w.word.as_str())
        .collect();
    let added: Vec<&str> = modified
        .right_words
        .iter()
        .flatten()
        .filter(|w| w.kind == ChangeKind::Added)
        .map(|w| w.word.as_str())
        .collect();
    assert_eq!(removed, vec!["input"]);
    assert_eq!(added, vec!["config"]);
}

#[test]
fn golden_summary_report() {
    let result = compare_json(
        r#"{"name":"app","version":"1.0","debug":true}"#,
        r#"{"name":"app","version":"1.1","features":["x"]}"#,
        &ComparisonOptions::default(),
    );
    let config = ReportConfig::with_metadata(
        ReportMetadata::new()
            .with_paths("old.json", "new.json")
            .with_format(DocumentFormat::Json),
    );
    let summary = SummaryReporter::new()
        .no_color()
        .generate(&result, &config)
        .expect("summary should render");

    insta::assert_snapshot!(summary, @r"
    Document Comparison Summary
    ────────────────────────────────────────
    Files:  old.json → new.json
    Format:  JSON

    Result:  different

    Lines:
      +2 lines added
      ~2 lines modified

    Differences (3):
      ~ version  Value changed at version
      - debug  Value removed at debug
      + features  Value added at features
    ");
}
