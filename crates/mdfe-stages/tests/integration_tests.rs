//! End-to-end tests: pipeline, transition gate and audit trail over fixtures.

use mdfe_core::{DocumentStatus, ManifestDocument, Section, Severity, Verdict};
use mdfe_quality::{AuditLog, TransitionGate, ValidationProfile};
use mdfe_stages::ValidationPipeline;

const FIXTURES: &str = "testing/fixtures/manifests";

fn fixture(name: &str) -> ManifestDocument {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    let raw = std::fs::read_to_string(workspace_root.join(FIXTURES).join(name)).unwrap();

    if name.ends_with(".yaml") {
        serde_yaml::from_str(&raw).unwrap()
    } else {
        ManifestDocument::from_json(&raw).unwrap()
    }
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn test_valid_fixture_is_allowed() {
    let report = ValidationPipeline::default().validate(&fixture("valid.json"));

    assert!(report.is_valid());
    assert_eq!(report.verdict, Verdict::Allow);
    assert_eq!(report.stages.len(), 2);
    assert!(report.stages.iter().all(|s| s.deterministic));
}

#[test]
fn test_bad_checksums_strict() {
    let report = ValidationPipeline::for_mode("strict").validate(&fixture("bad_checksums.json"));

    let locations: Vec<String> = report.findings.iter().map(|f| f.location()).collect();
    assert_eq!(locations, vec!["emit.CNPJ", "condutor.CPF"]);
    assert!(report.findings.iter().all(|f| f.rule == "Check digits"));
    assert!(report.has_errors());
    assert!(report.verdict.is_blocked());
}

#[test]
fn test_bad_checksums_lenient() {
    let report = ValidationPipeline::for_mode("lenient").validate(&fixture("bad_checksums.json"));

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].section, Section::Emit);
    assert_eq!(report.findings[0].severity, Severity::Warn);
    assert!(!report.has_errors());
    assert!(report.verdict.is_allowed());
    assert_eq!(report.profile, "lenient@1.0");
}

#[test]
fn test_checksums_disabled_by_profile() {
    let profile = ValidationProfile {
        verify_emitter_checksum: false,
        verify_driver_checksum: false,
        ..ValidationProfile::strict()
    };
    let report = ValidationPipeline::new(profile).validate(&fixture("bad_checksums.json"));

    assert!(report.is_valid());
}

#[test]
fn test_driver_without_cpf_single_driver_finding() {
    let report = ValidationPipeline::default().validate(&fixture("driver_without_cpf.yaml"));

    let driver: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.section == Section::Condutor)
        .collect();
    assert_eq!(driver.len(), 1);
    assert_eq!(driver[0].rule, "CPF required with name");
}

#[test]
fn test_repeated_runs_are_identical() {
    let pipeline = ValidationPipeline::default();
    let doc = fixture("bad_checksums.json");

    let first = pipeline.validate(&doc);
    let second = pipeline.validate(&doc);

    assert_eq!(first.findings, second.findings);
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.document_hash, second.document_hash);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_report_serializes() {
    let report = ValidationPipeline::default().validate(&fixture("bad_checksums.json"));
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["verdict"]["type"], "BLOCK");
    assert_eq!(json["findings"][0]["section"], "emit");
    assert_eq!(json["stages"][1]["id"], "checksum.taxid.v1");
}

// =============================================================================
// Gate and audit
// =============================================================================

#[test]
fn test_gate_blocks_signing_with_errors() {
    let report = ValidationPipeline::default().validate(&fixture("bad_checksums.json"));
    let gate = TransitionGate::for_mode("strict");

    // saving an edit is fine, signing is not
    assert!(gate.allows(DocumentStatus::Rascunho, DocumentStatus::EmEdicao, &report));
    assert!(!gate.allows(DocumentStatus::EmEdicao, DocumentStatus::Assinado, &report));
}

#[test]
fn test_gate_lets_warnings_through() {
    let report = ValidationPipeline::for_mode("lenient").validate(&fixture("bad_checksums.json"));
    let gate = TransitionGate::for_mode("lenient");

    let verdict = gate.check(DocumentStatus::EmEdicao, DocumentStatus::Assinado, &report);
    assert!(matches!(verdict, Verdict::Warn { .. }));
}

#[test]
fn test_audit_trail_for_document_lifecycle() {
    let gate = TransitionGate::for_mode("strict");
    let pipeline = ValidationPipeline::default();
    let mut audit = AuditLog::new();

    let bad = pipeline.validate(&fixture("bad_checksums.json"));
    audit.log_report(&bad);
    let verdict = gate.check(DocumentStatus::EmEdicao, DocumentStatus::Assinado, &bad);
    audit.log_transition(&bad, DocumentStatus::EmEdicao, DocumentStatus::Assinado, &verdict);

    let good = pipeline.validate(&fixture("valid.json"));
    let verdict = gate.check(DocumentStatus::EmEdicao, DocumentStatus::Assinado, &good);
    audit.log_transition(&good, DocumentStatus::EmEdicao, DocumentStatus::Assinado, &verdict);

    let stats = audit.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.blocked, 2);
    assert_eq!(stats.allowed, 1);
    assert_eq!(audit.entries_for_document(&bad.document_hash).len(), 2);
    assert_eq!(audit.to_jsonl().unwrap().lines().count(), 3);
}
