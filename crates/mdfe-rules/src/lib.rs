//! MDF-e Field Rules: government business rules per manifest section
//!
//! ```text
//! ide → emit → veicTracao → condutor → tot → prodPred
//!  ↓      ↓         ↓           ↓        ↓        ↓
//!  └──────┴─────────┴───────────┴────────┴────────┘
//!                         ↓
//!              Vec<ValidationFinding> (fixed order)
//! ```
//!
//! # Example
//!
//! ```
//! use mdfe_core::ManifestDocument;
//! use mdfe_rules::FieldRuleEngine;
//!
//! let engine = FieldRuleEngine::new();
//! let findings = engine.validate(&ManifestDocument::default());
//!
//! for finding in &findings {
//!     println!("{}", finding);
//! }
//! assert_eq!(findings.len(), 20);
//! ```

pub mod engine;
pub mod rule;
pub mod sections;

pub use engine::FieldRuleEngine;
pub use rule::{FieldRule, Predicate};
pub use sections::{default_rules, rules_for};

use mdfe_core::{ManifestDocument, ValidationFinding};

/// Quick validation with the standard rule table
pub fn validate_document(document: &ManifestDocument) -> Vec<ValidationFinding> {
    FieldRuleEngine::new().validate(document)
}
