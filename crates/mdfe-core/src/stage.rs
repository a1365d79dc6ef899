//! Stage Trait: single contract for every validation stage
use crate::context::ValidationContext;
use crate::document::ManifestDocument;
use crate::finding::ValidationFinding;

/// A validation stage. Stages are pure: the same document always yields
/// the same findings, in the same order.
pub trait Stage: Send + Sync {
    /// Unique stage id (e.g. "rules.fields.v1")
    fn id(&self) -> &'static str;

    /// Whether the stage is deterministic (default: true)
    fn deterministic(&self) -> bool {
        true
    }

    /// Evaluate the document. A stage cannot fail; problems are findings.
    fn run(&self, document: &ManifestDocument, ctx: &ValidationContext) -> Vec<ValidationFinding>;
}
