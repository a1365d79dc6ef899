//! MDF-e Quality: profiles, transition gate and audit trail
//!
//! # Example
//!
//! ```
//! use mdfe_core::{DocumentStatus, ValidationReport};
//! use mdfe_quality::{AuditLog, TransitionGate};
//!
//! let gate = TransitionGate::for_mode("strict");
//! let report = ValidationReport::new("strict@1.0", "rules", "blake3:00", vec![], vec![]);
//!
//! let verdict = gate.check(DocumentStatus::EmEdicao, DocumentStatus::Assinado, &report);
//! assert!(verdict.is_allowed());
//!
//! let mut audit = AuditLog::new();
//! audit.log_transition(&report, DocumentStatus::EmEdicao, DocumentStatus::Assinado, &verdict);
//! assert_eq!(audit.stats().blocked, 0);
//! ```

pub mod audit;
pub mod gate;
pub mod profile;

pub use audit::{AuditEntry, AuditEventType, AuditLog, AuditStats, StatusTransition};
pub use gate::TransitionGate;
pub use profile::ValidationProfile;
