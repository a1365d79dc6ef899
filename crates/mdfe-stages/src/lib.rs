//! MDF-e Stages: the validation stages and the pipeline that chains them.
//!
//! # Pipeline Flow
//!
//! ```text
//! ManifestDocument → rules.fields.v1 → checksum.taxid.v1 → ValidationReport
//!                        ↓                    ↓
//!                  field findings      check-digit findings
//! ```
//!
//! # Example
//!
//! ```
//! use mdfe_core::ManifestDocument;
//! use mdfe_quality::ValidationProfile;
//! use mdfe_stages::ValidationPipeline;
//!
//! let pipeline = ValidationPipeline::new(ValidationProfile::strict());
//! let report = pipeline.validate(&ManifestDocument::default());
//!
//! assert_eq!(report.pipeline_id, "rules→checksum");
//! assert!(report.verdict.is_blocked());
//! ```

mod field_rules;
mod taxid_checksum;

pub use field_rules::FieldRulesStage;
pub use taxid_checksum::TaxIdChecksumStage;

use mdfe_core::{ManifestDocument, MdfeError, PipelineRunner, ValidationContext, ValidationReport};
use mdfe_quality::ValidationProfile;
use mdfe_rules::FieldRuleEngine;

/// Field rules followed by check-digit verification, configured by a profile
pub struct ValidationPipeline {
    profile: ValidationProfile,
    runner: PipelineRunner,
}

impl ValidationPipeline {
    pub fn new(profile: ValidationProfile) -> Self {
        let runner = PipelineRunner::new(vec![
            Box::new(FieldRulesStage::new(FieldRuleEngine::new())),
            Box::new(TaxIdChecksumStage::new(&profile)),
        ]);

        Self { profile, runner }
    }

    /// Pipeline for a named mode ("strict", "lenient")
    pub fn for_mode(mode: &str) -> Self {
        Self::new(ValidationProfile::for_mode(mode))
    }

    pub fn profile(&self) -> &ValidationProfile {
        &self.profile
    }

    pub fn pipeline_id(&self) -> &str {
        self.runner.pipeline_id()
    }

    pub fn stage_ids(&self) -> Vec<&'static str> {
        self.runner.stage_ids()
    }

    /// Validate under the default tenant with a fresh trace id
    pub fn validate(&self, document: &ManifestDocument) -> ValidationReport {
        let ctx = ValidationContext::new("default", self.profile.name.clone());
        self.runner.run(document, &ctx)
    }

    /// Validate with a caller-supplied context. The report always names
    /// this pipeline's profile, whatever the context carries.
    pub fn validate_with_context(
        &self,
        document: &ManifestDocument,
        ctx: &ValidationContext,
    ) -> ValidationReport {
        if ctx.profile == self.profile.name {
            return self.runner.run(document, ctx);
        }
        let ctx = ValidationContext {
            profile: self.profile.name.clone(),
            ..ctx.clone()
        };
        self.runner.run(document, &ctx)
    }

    /// Parse a JSON document and validate it
    pub fn validate_json(&self, input: &str) -> Result<ValidationReport, MdfeError> {
        let document = ManifestDocument::from_json(input)?;
        Ok(self.validate(&document))
    }
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new(ValidationProfile::default())
    }
}
