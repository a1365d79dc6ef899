//! MDF-e Core: manifest data model, findings, lifecycle and stage contract
//!
//! Everything here is pure data and pure functions. Validation stages
//! implement [`Stage`] and are chained by [`PipelineRunner`].

pub mod context;
pub mod document;
pub mod error;
pub mod finding;
pub mod report;
pub mod runner;
pub mod stage;
pub mod status;

pub use context::ValidationContext;
pub use document::{
    is_blank, Driver, Identification, Issuer, ManifestDocument, PredominantProduct, Totals,
    TowingVehicle,
};
pub use error::MdfeError;
pub use finding::{Section, Severity, ValidationFinding, Verdict, VerdictSeverity};
pub use report::{StageProof, ValidationReport};
pub use runner::PipelineRunner;
pub use stage::Stage;
pub use status::{is_final_status, DocumentStatus, UnknownStatus};
