use parity_matrix::{
    check, validate_document, CheckConfig, MatrixDocument, MatrixError, ValidationError,
};
use std::fs;

#[test]
fn load_reports_missing_document() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("absent.md");
    let err = MatrixDocument::load(&path).unwrap_err();
    assert!(matches!(err, MatrixError::MissingDocument(ref p) if p == &path));
    assert_eq!(err.to_string(), format!("Missing matrix document: {}", path.display()));
}

#[test]
fn load_rejects_directory_as_missing() {
    let temp = tempfile::tempdir().unwrap();
    let err = MatrixDocument::load(temp.path()).unwrap_err();
    assert!(matches!(err, MatrixError::MissingDocument(_)));
}

#[test]
fn load_splits_crlf_lines() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("matrix.md");
    fs::write(&path, "one\r\ntwo\n").unwrap();
    let doc = MatrixDocument::load(&path).unwrap();
    assert_eq!(doc.lines(), ["one", "two"]);
    assert_eq!(doc.path(), path.as_path());
}

#[test]
fn load_splits_bare_cr_lines() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("matrix.md");
    fs::write(
        &path,
        "| Function | Retail reference | S | A |\r| Bar | r | missing | ok |\r## Remediation schedule\r- [ ] x\r",
    )
    .unwrap();

    let doc = MatrixDocument::load(&path).unwrap();
    assert_eq!(doc.lines().len(), 4);
    assert_eq!(doc.lines()[3], "- [ ] x");

    let report = validate_document(&doc, &CheckConfig::default());
    assert_eq!(report.entries, 1);
    assert_eq!(report.schedule_items, 1);
    assert_eq!(
        report.errors,
        vec![ValidationError::MissingCoverage {
            function: "Bar".into()
        }]
    );
}

#[test]
fn check_resolves_default_path_under_root() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp.path().join("docs")).unwrap();
    fs::write(
        temp.path().join("docs/be_ai_parity_matrix.md"),
        "| Function | Retail reference | Status | Acceptance |\n| Foo | r | implemented | ok |\n\n## Remediation schedule\n- [ ] later\n",
    )
    .unwrap();

    let report = check(&CheckConfig::default(), temp.path()).unwrap();
    assert!(report.is_ok());
    assert_eq!(report.entries, 1);
    assert_eq!(report.schedule_items, 1);
}

#[test]
fn check_fails_fast_without_document() {
    let temp = tempfile::tempdir().unwrap();
    let err = check(&CheckConfig::default(), temp.path()).unwrap_err();
    assert!(matches!(err, MatrixError::MissingDocument(_)));
}

#[test]
fn config_loads_from_toml_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("matrix.toml");
    fs::write(
        &path,
        "document_path = \"notes/matrix.md\"\nallowed_statuses = [\" Implemented \", \"missing\"]\n",
    )
    .unwrap();

    let cfg = CheckConfig::load_from_path(&path).unwrap();
    assert_eq!(cfg.document_path, "notes/matrix.md");
    assert_eq!(cfg.allowed_statuses, vec!["implemented", "missing"]);
    assert_eq!(cfg.schedule_heading, "## Remediation schedule");
}

#[test]
fn config_rejects_blank_heading_and_bad_toml() {
    let err = CheckConfig::from_toml("schedule_heading = \"  \"").unwrap_err();
    assert!(matches!(err, MatrixError::Decode(_)));
    let err = CheckConfig::from_toml("allowed_statuses = 3").unwrap_err();
    assert!(matches!(err, MatrixError::Decode(_)));
}

#[test]
fn example_config_round_trips() {
    let text = CheckConfig::example_toml().unwrap();
    assert!(text.contains("document_path = \"docs/be_ai_parity_matrix.md\""));
    assert_eq!(CheckConfig::from_toml(&text).unwrap(), CheckConfig::default());
}
