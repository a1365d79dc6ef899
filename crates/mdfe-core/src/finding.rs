//! Finding and verdict types for document validation
//!
//! Every rule violation is a [`ValidationFinding`]. Findings are aggregated
//! into an Allow/Warn/Block [`Verdict`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical section of a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "ide")]
    Ide,
    #[serde(rename = "emit")]
    Emit,
    #[serde(rename = "veicTracao")]
    VeicTracao,
    #[serde(rename = "condutor")]
    Condutor,
    #[serde(rename = "tot")]
    Tot,
    #[serde(rename = "prodPred")]
    ProdPred,
}

impl Section {
    /// Sections in evaluation order
    pub const ALL: [Section; 6] = [
        Section::Ide,
        Section::Emit,
        Section::VeicTracao,
        Section::Condutor,
        Section::Tot,
        Section::ProdPred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Ide => "ide",
            Section::Emit => "emit",
            Section::VeicTracao => "veicTracao",
            Section::Condutor => "condutor",
            Section::Tot => "tot",
            Section::ProdPred => "prodPred",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a finding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Advisory, never blocks progression
    Warn = 1,
    /// Blocks any transition toward a final or transmission-eligible status
    #[default]
    Error = 2,
}

impl Severity {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// One reported problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFinding {
    /// Section the field belongs to
    pub section: Section,
    /// Field tag inside the section
    pub field: String,
    /// Human-readable rule name
    pub rule: String,
    /// Message shown to the user
    pub message: String,
    #[serde(default)]
    pub severity: Severity,
}

impl ValidationFinding {
    /// Create a new finding with `ERROR` severity
    pub fn new(
        section: Section,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            section,
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// `section.field` path of the offending value
    pub fn location(&self) -> String {
        format!("{}.{}", self.section, self.field)
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {} ({}): {}", self.severity, self.location(), self.rule, self.message)
    }
}

/// Aggregate decision over a finding list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// No findings
    Allow,

    /// Only advisory findings
    Warn {
        warnings: Vec<ValidationFinding>,
    },

    /// At least one blocking finding
    Block {
        reason: String,
        findings: Vec<ValidationFinding>,
    },
}

impl Verdict {
    /// Derive the verdict for a finding list
    pub fn from_findings(findings: &[ValidationFinding]) -> Self {
        let errors = findings.iter().filter(|f| f.severity.is_blocking()).count();
        if errors > 0 {
            Verdict::Block {
                reason: format!("{} blocking finding(s)", errors),
                findings: findings.to_vec(),
            }
        } else if !findings.is_empty() {
            Verdict::Warn {
                warnings: findings.to_vec(),
            }
        } else {
            Verdict::Allow
        }
    }

    /// Create a block verdict
    pub fn block(reason: impl Into<String>, findings: Vec<ValidationFinding>) -> Self {
        Verdict::Block {
            reason: reason.into(),
            findings,
        }
    }

    /// Allow or warn
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allow | Verdict::Warn { .. })
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Verdict::Block { .. })
    }

    pub fn severity(&self) -> VerdictSeverity {
        match self {
            Verdict::Allow => VerdictSeverity::Allow,
            Verdict::Warn { .. } => VerdictSeverity::Warn,
            Verdict::Block { .. } => VerdictSeverity::Block,
        }
    }

    /// Combine two verdicts, taking the more severe one
    pub fn combine(self, other: Verdict) -> Verdict {
        if self.severity() >= other.severity() {
            self
        } else {
            other
        }
    }
}

/// Severity level of a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VerdictSeverity {
    Allow = 0,
    Warn = 1,
    Block = 2,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Verdict::Allow => write!(f, "ALLOW"),
            Verdict::Warn { warnings } => write!(f, "WARN ({} warnings)", warnings.len()),
            Verdict::Block { reason, .. } => write!(f, "BLOCK: {}", reason),
        }
    }
}
