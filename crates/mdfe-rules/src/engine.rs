//! Field rule engine
//!
//! Folds every rule over the document. No rule short-circuits another, so
//! the caller always sees the complete list of problems in a stable order.

use mdfe_core::{ManifestDocument, Section, ValidationFinding};
use tracing::debug;

use crate::rule::FieldRule;
use crate::sections::default_rules;

pub struct FieldRuleEngine {
    rules: Vec<FieldRule>,
}

impl FieldRuleEngine {
    /// Engine with the standard MDF-e rule table
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Engine over a custom rule table, evaluated in the given order
    pub fn with_rules(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Evaluate every rule. Never fails; an empty result means valid.
    pub fn validate(&self, document: &ManifestDocument) -> Vec<ValidationFinding> {
        let findings: Vec<ValidationFinding> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(document))
            .collect();

        debug!(
            rules = self.rules.len(),
            findings = findings.len(),
            "field rules evaluated"
        );

        findings
    }

    /// Evaluate the rules of a single section
    pub fn validate_section(
        &self,
        document: &ManifestDocument,
        section: Section,
    ) -> Vec<ValidationFinding> {
        self.rules
            .iter()
            .filter(|rule| rule.section == section)
            .filter_map(|rule| rule.evaluate(document))
            .collect()
    }

    pub fn is_valid(&self, document: &ManifestDocument) -> bool {
        self.rules.iter().all(|rule| rule.evaluate(document).is_none())
    }
}

impl Default for FieldRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdfe_core::Severity;

    fn valid_document() -> ManifestDocument {
        let mut doc = ManifestDocument::default();
        doc.ide.uf = "35".to_string();
        doc.ide.series = 1;
        doc.ide.number = 123;
        doc.ide.code = "12345678".to_string();
        doc.ide.modal = 1;
        doc.ide.origin_uf = "SP".to_string();
        doc.ide.destination_uf = "MG".to_string();
        doc.emit.cnpj = "11222333000181".to_string();
        doc.emit.state_registration = "110042490114".to_string();
        doc.emit.legal_name = "Transportes Exemplo Ltda".to_string();
        doc.emit.municipality_code = 3550308;
        doc.emit.municipality_name = "São Paulo".to_string();
        doc.emit.uf = "SP".to_string();
        doc.emit.postal_code = "01310100".to_string();
        doc.towing_vehicle.plate = "ABC1D23".to_string();
        doc.towing_vehicle.uf = "SP".to_string();
        doc.driver.name = "João da Silva".to_string();
        doc.driver.cpf = "11144477735".to_string();
        doc.totals.cargo_value = Some(15000.0);
        doc.totals.gross_weight = Some(12000.5);
        doc.predominant_product.cargo_type = "05".to_string();
        doc.predominant_product.description = "Soja em grãos".to_string();
        doc
    }

    #[test]
    fn test_valid_document_has_no_findings() {
        let engine = FieldRuleEngine::new();
        let doc = valid_document();
        assert!(engine.validate(&doc).is_empty());
        assert!(engine.is_valid(&doc));
    }

    #[test]
    fn test_blank_document_counts() {
        let engine = FieldRuleEngine::new();
        let findings = engine.validate(&ManifestDocument::default());

        assert_eq!(findings.len(), 20);
        assert!(findings.iter().all(|f| f.severity == Severity::Error));

        let per_section: Vec<usize> = Section::ALL
            .iter()
            .map(|s| findings.iter().filter(|f| f.section == *s).count())
            .collect();
        assert_eq!(per_section, vec![7, 7, 2, 0, 2, 2]);
    }

    #[test]
    fn test_findings_follow_section_order() {
        let findings = FieldRuleEngine::new().validate(&ManifestDocument::default());
        let sections: Vec<Section> = findings.iter().map(|f| f.section).collect();
        let mut sorted = sections.clone();
        sorted.sort();
        assert_eq!(sections, sorted);
    }

    #[test]
    fn test_validate_section() {
        let engine = FieldRuleEngine::new();
        let mut doc = valid_document();
        doc.totals.cargo_value = None;
        doc.ide.uf.clear();

        let tot = engine.validate_section(&doc, Section::Tot);
        assert_eq!(tot.len(), 1);
        assert_eq!(tot[0].field, "vCarga");

        assert_eq!(engine.validate(&doc).len(), 2);
    }

    #[test]
    fn test_empty_rule_table() {
        let engine = FieldRuleEngine::with_rules(vec![]);
        assert!(engine.validate(&ManifestDocument::default()).is_empty());
    }
}
