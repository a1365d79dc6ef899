//! Pipeline Runner: chains stages over one document and records proofs
use std::time::Instant;

use tracing::{debug, info};

use crate::context::ValidationContext;
use crate::document::ManifestDocument;
use crate::report::{StageProof, ValidationReport};
use crate::stage::Stage;

pub struct PipelineRunner {
    stages: Vec<Box<dyn Stage>>,
    pipeline_id: String,
}

impl PipelineRunner {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        let pipeline_id = stages
            .iter()
            .map(|s| s.id().split('.').next().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join("→");

        Self { stages, pipeline_id }
    }

    /// Run every stage in order. Stages never short-circuit each other:
    /// the report carries the concatenation of all stage findings.
    pub fn run(&self, document: &ManifestDocument, ctx: &ValidationContext) -> ValidationReport {
        let document_hash = document.fingerprint();
        let mut findings = Vec::new();
        let mut proofs = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let start = Instant::now();
            let stage_findings = stage.run(document, ctx);
            let latency_us = start.elapsed().as_micros() as u64;

            debug!(
                stage = stage.id(),
                trace_id = %ctx.trace_id,
                findings = stage_findings.len(),
                latency_us,
                "stage finished"
            );

            proofs.push(StageProof {
                id: stage.id().to_string(),
                document_hash: document_hash.clone(),
                deterministic: stage.deterministic(),
                findings: stage_findings.len(),
                latency_us,
            });

            findings.extend(stage_findings);
        }

        let report = ValidationReport::new(
            ctx.profile.clone(),
            self.pipeline_id.clone(),
            document_hash,
            findings,
            proofs,
        );

        info!(
            tenant = %ctx.tenant,
            trace_id = %ctx.trace_id,
            profile = %report.profile,
            findings = report.findings.len(),
            verdict = %report.verdict,
            "document validated"
        );

        report
    }

    pub fn pipeline_id(&self) -> &str {
        &self.pipeline_id
    }

    pub fn stage_ids(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.id()).collect()
    }
}
