//! Either kind of Brazilian taxpayer id, told apart by digit count.

use serde::Serialize;
use std::fmt;

use crate::cnpj::Cnpj;
use crate::cpf::Cpf;
use crate::digits::strip_formatting;
use crate::error::TaxIdError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxIdKind {
    Cpf,
    Cnpj,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TaxId {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl_validating_deserialize!(TaxId);

impl TaxId {
    /// Parse a CPF (11 digits) or CNPJ (14 digits).
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        match strip_formatting(input).len() {
            11 => Cpf::parse(input).map(TaxId::Cpf),
            14 => Cnpj::parse(input).map(TaxId::Cnpj),
            n => Err(TaxIdError::UnsupportedLength(n)),
        }
    }

    pub fn kind(&self) -> TaxIdKind {
        match self {
            TaxId::Cpf(_) => TaxIdKind::Cpf,
            TaxId::Cnpj(_) => TaxIdKind::Cnpj,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaxId::Cpf(cpf) => cpf.as_str(),
            TaxId::Cnpj(cnpj) => cnpj.as_str(),
        }
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxId::Cpf(cpf) => cpf.fmt(f),
            TaxId::Cnpj(cnpj) => cnpj.fmt(f),
        }
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxIdKind::Cpf => write!(f, "CPF"),
            TaxIdKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}
