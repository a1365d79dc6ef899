//! Check-digit verification for the taxpayer ids carried by a manifest.
//!
//! Only ids that are structurally present are verified. Blank issuer ids and
//! driver CPFs of the wrong length belong to the field rules.

use mdfe_core::{is_blank, ManifestDocument, Section, Severity, Stage, ValidationContext, ValidationFinding};
use mdfe_quality::ValidationProfile;
use mdfe_taxid::{validate_cnpj, validate_cpf};
use tracing::debug;

const RULE: &str = "Check digits";

pub struct TaxIdChecksumStage {
    verify_emitter: bool,
    verify_driver: bool,
    severity: Severity,
}

impl TaxIdChecksumStage {
    pub fn new(profile: &ValidationProfile) -> Self {
        Self {
            verify_emitter: profile.verify_emitter_checksum,
            verify_driver: profile.verify_driver_checksum,
            severity: profile.checksum_severity,
        }
    }

    fn emitter_finding(&self, document: &ManifestDocument) -> Option<ValidationFinding> {
        let emit = &document.emit;

        // CNPJ takes precedence when both are filled
        let (field, valid) = if !is_blank(&emit.cnpj) {
            ("CNPJ", validate_cnpj(&emit.cnpj))
        } else if !is_blank(&emit.cpf) {
            ("CPF", validate_cpf(&emit.cpf))
        } else {
            return None;
        };

        (!valid).then(|| {
            ValidationFinding::new(
                Section::Emit,
                field,
                RULE,
                format!("Issuer {} check digits do not match", field),
            )
            .with_severity(self.severity)
        })
    }

    fn driver_finding(&self, document: &ManifestDocument) -> Option<ValidationFinding> {
        let cpf = document.driver.cpf.trim();
        if cpf.chars().count() != 11 || validate_cpf(cpf) {
            return None;
        }

        Some(
            ValidationFinding::new(
                Section::Condutor,
                "CPF",
                RULE,
                "Driver CPF check digits do not match",
            )
            .with_severity(self.severity),
        )
    }
}

impl Default for TaxIdChecksumStage {
    fn default() -> Self {
        Self::new(&ValidationProfile::default())
    }
}

impl Stage for TaxIdChecksumStage {
    fn id(&self) -> &'static str {
        "checksum.taxid.v1"
    }

    fn run(&self, document: &ManifestDocument, _ctx: &ValidationContext) -> Vec<ValidationFinding> {
        let mut findings = Vec::new();

        if self.verify_emitter {
            findings.extend(self.emitter_finding(document));
        }
        if self.verify_driver {
            findings.extend(self.driver_finding(document));
        }

        debug!(
            emitter = self.verify_emitter,
            driver = self.verify_driver,
            findings = findings.len(),
            "taxpayer ids checked"
        );
        findings
    }
}
