use mdfe_core::{ManifestDocument, Stage, ValidationContext, ValidationFinding};
use mdfe_rules::FieldRuleEngine;

/// Runs the per-section business rules
#[derive(Default)]
pub struct FieldRulesStage {
    engine: FieldRuleEngine,
}

impl FieldRulesStage {
    pub fn new(engine: FieldRuleEngine) -> Self {
        Self { engine }
    }
}

impl Stage for FieldRulesStage {
    fn id(&self) -> &'static str {
        "rules.fields.v1"
    }

    fn run(&self, document: &ManifestDocument, _ctx: &ValidationContext) -> Vec<ValidationFinding> {
        self.engine.validate(document)
    }
}
