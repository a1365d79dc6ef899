//! Unified Error Model
//!
//! Validation itself never fails; these errors only surface at the loading
//! boundary (documents and profiles read from disk or strings).
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdfeError {
    #[error("PARSE/{0}")]
    Parse(String),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("SERIALIZE/{0}")]
    Serialize(String),

    #[error("IO/{0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for MdfeError {
    fn from(err: serde_json::Error) -> Self {
        MdfeError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MdfeError>;
