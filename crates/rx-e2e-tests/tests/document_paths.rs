//! E2E tests for document field extraction and normalization.

mod helpers;

use helpers::TestHarness;
use rx_rules::{FieldExtractor, ValueNormalizer};

const PASSPORT_SCAN: &str = "PASSPORT
Full Name: MARIA   GARCIA
Date of Birth: 3/9/85
Passport No: X98765432
Email: maria.garcia@mail.com
Valid until: 11-30-27
Authority: Ministry of Interior";

#[tokio::test]
async fn e2e_extract_writes_report() {
    let h = TestHarness::with_document(PASSPORT_SCAN);
    let report = h.extract().await;
    let fields = &report.extraction.fields;

    assert_eq!(fields["date_of_birth"], "03/09/1985");
    assert_eq!(fields["expiry_date"], "11/30/2027");
    assert_eq!(fields["id_number"], "x98765432");
    assert_eq!(report.extraction.field_count, fields.len());

    let written = h.read_report(h.config.fields_report_path());
    assert_eq!(written["input"], "/in/document.txt");
    assert_eq!(written["extraction"]["field_count"], fields.len());
    assert_eq!(written["extraction"]["fields"]["date_of_birth"], "03/09/1985");
}

#[test]
fn e2e_extraction_is_byte_identical() {
    let first = serde_json::to_string(&rx_rules::extract_fields("scan", PASSPORT_SCAN)).unwrap();
    let second = serde_json::to_string(&rx_rules::extract_fields("scan", PASSPORT_SCAN)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn e2e_fields_are_independent() {
    // A phone match does not stop the email search and vice versa.
    let fields = FieldExtractor::builtin().extract_fields("mobile: 212 555 0100\nreach me at ops@example.net");
    assert_eq!(fields["phone"], "(212) 555-0100");
    assert_eq!(fields["email"], "opsexample.net");
}

#[test]
fn e2e_no_trivial_values() {
    let scans = [
        PASSPORT_SCAN,
        "Name: Bo\nState: NY\nPhone: 1",
        "#\n@\n|",
        "",
    ];
    for scan in scans {
        let result = rx_rules::extract_fields("scan", scan);
        for (field, value) in &result.fields {
            assert!(
                value.trim().chars().count() > 2,
                "field '{field}' kept trivial value '{value}'"
            );
        }
        assert_eq!(result.field_count, result.fields.len());
    }
}

#[test]
fn e2e_normalizer_contract() {
    assert_eq!(ValueNormalizer::normalize("date_of_birth", "5-21-90").as_deref(), Some("05/21/1990"));
    assert_eq!(ValueNormalizer::normalize("date_of_birth", "5-21-08").as_deref(), Some("05/21/2008"));
    assert_eq!(ValueNormalizer::normalize("phone", "tel 123.456.7890").as_deref(), Some("(123) 456-7890"));
    assert_eq!(ValueNormalizer::normalize("name", "john doe").as_deref(), Some("John Doe"));
    assert_eq!(ValueNormalizer::normalize("issuer", "$$"), None);
}
