//! Individual field rules
//!
//! A rule is a pure predicate over the document plus the metadata of the
//! finding it emits when the predicate reports a violation.

use mdfe_core::{ManifestDocument, Section, Severity, ValidationFinding};
use serde::Serialize;
use std::fmt;

/// Returns `true` when the rule is violated.
pub type Predicate = fn(&ManifestDocument) -> bool;

/// A single field rule
#[derive(Clone, Serialize)]
pub struct FieldRule {
    /// Section the checked field belongs to
    pub section: Section,

    /// Field tag (e.g. "cUF")
    pub field: String,

    /// Human-readable rule name
    pub rule: String,

    /// Message carried by the finding
    pub message: String,

    /// Severity of the emitted finding
    pub severity: Severity,

    #[serde(skip)]
    violated: Predicate,
}

fn never(_: &ManifestDocument) -> bool {
    false
}

impl FieldRule {
    /// Create a rule that never fires until a predicate is attached
    pub fn new(section: Section, field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            section,
            field: field.into(),
            rule: rule.into(),
            message: String::new(),
            severity: Severity::Error,
            violated: never,
        }
    }

    /// Set the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attach the violation predicate
    pub fn violated_when(mut self, predicate: Predicate) -> Self {
        self.violated = predicate;
        self
    }

    /// Evaluate this rule alone
    pub fn evaluate(&self, document: &ManifestDocument) -> Option<ValidationFinding> {
        if (self.violated)(document) {
            Some(
                ValidationFinding::new(self.section, &self.field, &self.rule, &self.message)
                    .with_severity(self.severity),
            )
        } else {
            None
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("section", &self.section)
            .field("field", &self.field)
            .field("rule", &self.rule)
            .field("severity", &self.severity)
            .finish()
    }
}

/// Not exactly `len` characters once surrounding whitespace is trimmed
pub(crate) fn wrong_length(value: &str, len: usize) -> bool {
    value.trim().chars().count() != len
}

/// Not exactly `len` ASCII digits
pub(crate) fn not_digits(value: &str, len: usize) -> bool {
    let value = value.trim();
    value.len() != len || !value.bytes().all(|b| b.is_ascii_digit())
}

/// Absent or not strictly positive
pub(crate) fn not_positive(value: Option<f64>) -> bool {
    !matches!(value, Some(v) if v > 0.0)
}
