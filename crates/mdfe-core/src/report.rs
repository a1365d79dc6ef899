//! Validation report: the aggregated result handed back to the workflow
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::finding::{Severity, ValidationFinding, Verdict};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unique report id
    pub id: String,
    /// Profile the document was validated under
    pub profile: String,
    /// Pipeline id (stage prefixes joined by "→")
    pub pipeline_id: String,
    /// Fingerprint of the validated document revision
    pub document_hash: String,
    /// Findings in stage order, then rule order
    pub findings: Vec<ValidationFinding>,
    /// Per-stage execution record
    pub stages: Vec<StageProof>,
    pub verdict: Verdict,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageProof {
    pub id: String,
    pub document_hash: String,
    pub deterministic: bool,
    pub findings: usize,
    pub latency_us: u64,
}

impl ValidationReport {
    pub fn new(
        profile: impl Into<String>,
        pipeline_id: impl Into<String>,
        document_hash: impl Into<String>,
        findings: Vec<ValidationFinding>,
        stages: Vec<StageProof>,
    ) -> Self {
        let verdict = Verdict::from_findings(&findings);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            profile: profile.into(),
            pipeline_id: pipeline_id.into(),
            document_hash: document_hash.into(),
            findings,
            stages,
            verdict,
            created_at: Utc::now(),
        }
    }

    /// No findings at all
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Any finding with `ERROR` severity
    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity.is_blocking())
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationFinding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationFinding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warn)
    }

    /// All messages, for surfacing to the user
    pub fn messages(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.message.clone()).collect()
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{}: {} error(s), {} warning(s) [{}]",
            self.verdict,
            self.errors().count(),
            self.warnings().count(),
            self.profile
        )
    }
}
