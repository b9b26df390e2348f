//! Receipt parsing against recorded drop-box responses.

use ena_submit::{RECEIPT_FILE, Receipt, SubmitError, extract_accession, save_receipt};

const SUCCESS: &str = include_str!("fixtures/receipt_success.xml");
const EXISTING: &str = include_str!("fixtures/receipt_existing.xml");

#[test]
fn successful_receipt_lists_accessions() {
    let receipt = Receipt::parse(SUCCESS).expect("parse");
    assert!(receipt.success);
    assert_eq!(receipt.samples.len(), 2);
    assert_eq!(receipt.accession_for("gut-02"), Some("ERS28000002"));
    assert_eq!(
        receipt.samples[0].biosample.as_deref(),
        Some("SAMEA130000001")
    );
    assert_eq!(receipt.samples[0].status.as_deref(), Some("PRIVATE"));
    assert_eq!(receipt.submission_accession.as_deref(), Some("ERA30000001"));
    assert_eq!(receipt.info.len(), 1);
    assert!(receipt.errors.is_empty());
}

#[test]
fn failed_receipt_keeps_messages() {
    let receipt = Receipt::parse(EXISTING).expect("parse");
    assert!(!receipt.success);
    assert!(receipt.samples.is_empty());
    assert_eq!(receipt.errors.len(), 1);
    assert_eq!(receipt.info.len(), 2);
    assert_eq!(receipt.existing_accessions(), vec!["ERS28000001"]);
}

#[test]
fn extract_prefers_assigned_accession() {
    assert_eq!(extract_accession(SUCCESS).as_deref(), Some("ERS28000001"));
}

#[test]
fn extract_falls_back_to_existing_accession() {
    assert_eq!(extract_accession(EXISTING).as_deref(), Some("ERS28000001"));
    assert_eq!(extract_accession("<RECEIPT success=\"false\"/>"), None);
}

#[test]
fn garbage_is_a_receipt_error() {
    let err = Receipt::parse("Unauthorized").unwrap_err();
    assert!(matches!(err, SubmitError::Receipt(_)));
}

#[test]
fn receipt_is_saved_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = save_receipt(dir.path(), SUCCESS).expect("save");
    assert_eq!(path, dir.path().join(RECEIPT_FILE));
    assert_eq!(std::fs::read_to_string(path).expect("read"), SUCCESS);
}
