//! Validation Context: request-scoped data shared by every stage of a run

#[derive(Debug, Clone)]
pub struct ValidationContext {
    pub tenant: String,
    pub trace_id: String,
    pub profile: String,
}

impl ValidationContext {
    pub fn new(tenant: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            tenant: tenant.into(),
            trace_id: uuid::Uuid::new_v4().to_string(),
            profile: profile.into(),
        }
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new("default", "strict@1.0")
    }
}
