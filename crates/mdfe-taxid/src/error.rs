//! Reasons a taxpayer id is rejected, in the order the checks run
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxIdError {
    #[error("expected {expected} digits, found {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("{0} digits is neither a CPF (11) nor a CNPJ (14)")]
    UnsupportedLength(usize),

    #[error("all digits are identical")]
    RepeatedDigits,

    #[error("check digit at position {position} does not match")]
    CheckDigitMismatch { position: usize },
}
