//! Brazilian taxpayer id validation (CPF and CNPJ).
//!
//! The boolean validators answer only "valid or not", folding every kind of
//! rejection into `false`. The typed parsers ([`Cpf::parse`],
//! [`Cnpj::parse`], [`TaxId::parse`]) run the same steps and report which
//! one failed.
//!
//! # Example
//!
//! ```
//! use mdfe_taxid::{validate_cpf, validate_cnpj, Cpf, TaxIdError};
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert!(validate_cnpj("11222333000181"));
//! assert!(!validate_cpf("00000000000"));
//!
//! assert_eq!(Cpf::parse("00000000000"), Err(TaxIdError::RepeatedDigits));
//! ```

/// Implements `Deserialize` for a string newtype by routing the raw string
/// through its `parse` constructor, so invalid ids are rejected at
/// deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

mod cnpj;
mod cpf;
mod digits;
mod error;
mod taxid;

pub use cnpj::{cnpj_check_digits, validate_cnpj, Cnpj};
pub use cpf::{cpf_check_digits, validate_cpf, Cpf};
pub use digits::strip_formatting;
pub use error::TaxIdError;
pub use taxid::{TaxId, TaxIdKind};
