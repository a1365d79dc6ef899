//! Audit trail of validation runs and gate decisions
//!
//! In-memory only. Callers that need durable history export the entries
//! (JSON / JSON Lines) to their own store.

use chrono::{DateTime, Utc};
use mdfe_core::{DocumentStatus, ValidationReport, Verdict, VerdictSeverity};
use serde::{Deserialize, Serialize};

/// An audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry ID
    pub id: String,

    pub timestamp: DateTime<Utc>,

    pub event_type: AuditEventType,

    /// Fingerprint of the document revision
    pub document_hash: String,

    /// Report the entry derives from
    pub report_id: String,

    /// Profile used for validation
    pub profile: String,

    /// Status transition, for gate decisions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<StatusTransition>,

    pub verdict: VerdictSeverity,

    /// Finding messages at the time of the decision
    #[serde(default)]
    pub findings: Vec<String>,

    /// Who triggered this
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
}

impl AuditEntry {
    /// Entry for a validation run
    pub fn from_report(report: &ValidationReport) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event_type: AuditEventType::Validation,
            document_hash: report.document_hash.clone(),
            report_id: report.id.clone(),
            profile: report.profile.clone(),
            transition: None,
            verdict: report.verdict.severity(),
            findings: report.findings.iter().map(|f| f.to_string()).collect(),
            actor: None,
            tenant: None,
        }
    }

    /// Entry for a gate decision
    pub fn from_transition(
        report: &ValidationReport,
        from: DocumentStatus,
        to: DocumentStatus,
        verdict: &Verdict,
    ) -> Self {
        let findings = match verdict {
            Verdict::Allow => Vec::new(),
            Verdict::Warn { warnings } => warnings.iter().map(|f| f.to_string()).collect(),
            Verdict::Block { reason, findings } => std::iter::once(reason.clone())
                .chain(findings.iter().map(|f| f.to_string()))
                .collect(),
        };

        Self {
            event_type: AuditEventType::Transition,
            transition: Some(StatusTransition { from, to }),
            verdict: verdict.severity(),
            findings,
            ..Self::from_report(report)
        }
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Set the tenant
    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    /// Document validated
    Validation,
    /// Status transition checked by the gate
    Transition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTransition {
    pub from: DocumentStatus,
    pub to: DocumentStatus,
}

/// Audit log collector
pub struct AuditLog {
    entries: Vec<AuditEntry>,
    max_entries: usize,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::with_max_entries(10_000)
    }

    /// Create with a custom max size; oldest entries are dropped first
    pub fn with_max_entries(max: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max,
        }
    }

    pub fn log(&mut self, entry: AuditEntry) {
        self.entries.push(entry);

        if self.entries.len() > self.max_entries {
            let drain_count = self.entries.len() - self.max_entries;
            self.entries.drain(0..drain_count);
        }
    }

    /// Log a validation run, returning the entry id
    pub fn log_report(&mut self, report: &ValidationReport) -> String {
        let entry = AuditEntry::from_report(report);
        let id = entry.id.clone();
        self.log(entry);
        id
    }

    /// Log a gate decision, returning the entry id
    pub fn log_transition(
        &mut self,
        report: &ValidationReport,
        from: DocumentStatus,
        to: DocumentStatus,
        verdict: &Verdict,
    ) -> String {
        let entry = AuditEntry::from_transition(report, from, to, verdict);
        let id = entry.id.clone();
        self.log(entry);
        id
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn entries_for_document(&self, document_hash: &str) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| e.document_hash == document_hash)
            .collect()
    }

    pub fn blocked_entries(&self) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| e.verdict == VerdictSeverity::Block)
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Export to JSON Lines
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let lines = self
            .entries
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    pub fn stats(&self) -> AuditStats {
        let total = self.entries.len();
        let count = |severity: VerdictSeverity| {
            self.entries.iter().filter(|e| e.verdict == severity).count()
        };
        let allowed = count(VerdictSeverity::Allow);
        let warned = count(VerdictSeverity::Warn);
        let blocked = count(VerdictSeverity::Block);

        AuditStats {
            total,
            allowed,
            warned,
            blocked,
            block_rate: if total > 0 { blocked as f64 / total as f64 } else { 0.0 },
        }
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about audit entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditStats {
    pub total: usize,
    pub allowed: usize,
    pub warned: usize,
    pub blocked: usize,
    pub block_rate: f64,
}
