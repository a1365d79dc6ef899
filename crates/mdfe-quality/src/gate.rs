//! Transition gate
//!
//! Decides whether a validated document may move from one lifecycle status
//! to another. `ERROR` findings block every transition toward a final or
//! transmission-eligible status; `WARN` findings never block unless the
//! profile says so.

use mdfe_core::{DocumentStatus, Severity, ValidationFinding, ValidationReport, Verdict};
use tracing::warn;

use crate::profile::ValidationProfile;

pub struct TransitionGate {
    profile: ValidationProfile,
}

impl TransitionGate {
    pub fn new(profile: ValidationProfile) -> Self {
        Self { profile }
    }

    pub fn for_mode(mode: &str) -> Self {
        Self::new(ValidationProfile::for_mode(mode))
    }

    pub fn profile(&self) -> &ValidationProfile {
        &self.profile
    }

    /// Verdict for moving a document from `current` to `target` given its
    /// latest validation report.
    pub fn check(
        &self,
        current: DocumentStatus,
        target: DocumentStatus,
        report: &ValidationReport,
    ) -> Verdict {
        if current.is_final() && !current.successors().contains(&target) {
            warn!(%current, %target, "transition out of final status refused");
            return Verdict::block(
                format!("{} is final and cannot move to {}", current, target),
                Vec::new(),
            );
        }

        let guarded = target.is_final() || target.is_transmission_eligible();
        if !guarded {
            return advisory(&report.findings);
        }

        let blocking: Vec<ValidationFinding> = report
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Error || self.profile.block_on_warnings)
            .cloned()
            .collect();

        if blocking.is_empty() {
            return advisory(&report.findings);
        }

        warn!(
            %current,
            %target,
            blocking = blocking.len(),
            document = %report.document_hash,
            "transition blocked by validation findings"
        );
        Verdict::block(
            format!("{} finding(s) must be fixed before {}", blocking.len(), target),
            blocking,
        )
    }

    /// Convenience: whether [`check`](Self::check) allows the transition
    pub fn allows(
        &self,
        current: DocumentStatus,
        target: DocumentStatus,
        report: &ValidationReport,
    ) -> bool {
        self.check(current, target, report).is_allowed()
    }
}

impl Default for TransitionGate {
    fn default() -> Self {
        Self::new(ValidationProfile::default())
    }
}

/// Non-blocking verdict: findings surface as warnings
fn advisory(findings: &[ValidationFinding]) -> Verdict {
    if findings.is_empty() {
        Verdict::Allow
    } else {
        Verdict::Warn {
            warnings: findings.to_vec(),
        }
    }
}
