//! Integration tests for the field rule engine against fixture manifests.

use mdfe_core::{ManifestDocument, Section, Severity};
use mdfe_rules::{default_rules, validate_document, FieldRuleEngine};

/// Directory holding the manifest fixtures, relative to the workspace root
const FIXTURES: &str = "testing/fixtures/manifests";

fn fixture(name: &str) -> ManifestDocument {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    let path = workspace_root.join(FIXTURES).join(name);
    let raw = std::fs::read_to_string(&path).unwrap();

    if name.ends_with(".yaml") {
        serde_yaml::from_str(&raw).unwrap()
    } else {
        ManifestDocument::from_json(&raw).unwrap()
    }
}

fn rule_keys(doc: &ManifestDocument) -> Vec<(Section, String, String)> {
    validate_document(doc)
        .into_iter()
        .map(|f| (f.section, f.field, f.rule))
        .collect()
}

// =============================================================================
// Whole-document behaviour
// =============================================================================

#[test]
fn test_valid_fixture_has_no_findings() {
    assert!(validate_document(&fixture("valid.json")).is_empty());
}

#[test]
fn test_blank_fixture_reports_every_required_rule_in_order() {
    let keys = rule_keys(&fixture("blank.json"));

    let expected: Vec<(Section, &str, &str)> = vec![
        (Section::Ide, "cUF", "Required field"),
        (Section::Ide, "serie", "Positive value"),
        (Section::Ide, "nMDF", "Positive value"),
        (Section::Ide, "cMDF", "Eight-digit code"),
        (Section::Ide, "modal", "Positive value"),
        (Section::Ide, "UFIni", "Required field"),
        (Section::Ide, "UFFim", "Required field"),
        (Section::Emit, "CNPJ", "CNPJ or CPF required"),
        (Section::Emit, "IE", "Required field"),
        (Section::Emit, "xNome", "Required field"),
        (Section::Emit, "cMun", "Positive value"),
        (Section::Emit, "xMun", "Required field"),
        (Section::Emit, "UF", "Two-letter UF"),
        (Section::Emit, "CEP", "Eight-digit CEP"),
        (Section::VeicTracao, "placa", "Required field"),
        (Section::VeicTracao, "UF", "Two-letter UF"),
        (Section::Tot, "vCarga", "Positive value"),
        (Section::Tot, "qCarga", "Positive value"),
        (Section::ProdPred, "tpCarga", "Required field"),
        (Section::ProdPred, "xProd", "Description required"),
    ];

    let expected: Vec<(Section, String, String)> = expected
        .into_iter()
        .map(|(s, f, r)| (s, f.to_string(), r.to_string()))
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_results_are_deterministic() {
    let doc = fixture("blank.json");
    let engine = FieldRuleEngine::new();
    assert_eq!(engine.validate(&doc), engine.validate(&doc));
}

#[test]
fn test_rule_table_order_matches_sections() {
    let rules = default_rules();
    assert_eq!(rules.len(), 23);
    assert_eq!(rules.first().unwrap().section, Section::Ide);
    assert_eq!(rules.last().unwrap().section, Section::ProdPred);
    assert!(rules.iter().all(|r| r.severity == Severity::Error));
}

// =============================================================================
// Driver rules
// =============================================================================

#[test]
fn test_driver_name_without_cpf_yields_one_driver_finding() {
    let findings = validate_document(&fixture("driver_without_cpf.yaml"));
    let driver: Vec<_> = findings.iter().filter(|f| f.section == Section::Condutor).collect();

    assert_eq!(driver.len(), 1);
    assert_eq!(driver[0].field, "CPF");
    assert_eq!(driver[0].rule, "CPF required with name");
}

#[test]
fn test_driver_rule_independent_of_other_sections() {
    let mut doc = fixture("valid.json");
    doc.driver.cpf.clear();

    let findings = validate_document(&doc);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].section, Section::Condutor);
}

#[test]
fn test_driver_cpf_length() {
    let mut doc = fixture("valid.json");
    doc.driver.cpf = "1114447773".to_string();

    let findings = validate_document(&doc);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "Eleven-digit CPF");

    // CPF without a name is still length-checked
    doc.driver.name.clear();
    assert_eq!(validate_document(&doc).len(), 1);

    // No driver at all is fine
    doc.driver.cpf.clear();
    assert!(validate_document(&doc).is_empty());
}

// =============================================================================
// Field edge cases
// =============================================================================

#[test]
fn test_manifest_number_overflow() {
    let mut doc = fixture("valid.json");
    doc.ide.number = 99_999;
    assert!(validate_document(&doc).is_empty());

    doc.ide.number = 100_000;
    let findings = validate_document(&doc);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "Five-digit number");
}

#[test]
fn test_manifest_code_format() {
    let mut doc = fixture("valid.json");
    for bad in ["", "1234567", "123456789", "1234567A"] {
        doc.ide.code = bad.to_string();
        let findings = validate_document(&doc);
        assert_eq!(findings.len(), 1, "code {:?}", bad);
        assert_eq!(findings[0].field, "cMDF");
    }
}

#[test]
fn test_issuer_accepts_cpf_instead_of_cnpj() {
    let mut doc = fixture("valid.json");
    doc.emit.cnpj.clear();
    doc.emit.cpf = "11144477735".to_string();
    assert!(validate_document(&doc).is_empty());
}

#[test]
fn test_issuer_uf_and_cep() {
    let mut doc = fixture("valid.json");
    doc.emit.uf = "SAO".to_string();
    doc.emit.postal_code = "01310-100".to_string();

    let fields: Vec<String> = validate_document(&doc).into_iter().map(|f| f.field).collect();
    assert_eq!(fields, vec!["UF".to_string(), "CEP".to_string()]);
}

#[test]
fn test_totals_must_be_positive() {
    let mut doc = fixture("valid.json");
    doc.totals.cargo_value = Some(0.0);
    doc.totals.gross_weight = Some(-3.5);
    assert_eq!(validate_document(&doc).len(), 2);
}

#[test]
fn test_alternate_description_satisfies_product_rule() {
    let mut doc = fixture("valid.json");
    doc.predominant_product.description.clear();
    doc.predominant_product.alternate_description = "Farelo de soja".to_string();
    assert!(validate_document(&doc).is_empty());

    doc.predominant_product.alternate_description = "   ".to_string();
    assert_eq!(validate_document(&doc).len(), 1);
}
