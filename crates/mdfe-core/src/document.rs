//! Manifest document view consumed by the validators.
//!
//! Field names on the wire follow the MDF-e layout tags (`cUF`, `nMDF`,
//! `veicTracao`, ...). Every field is optional on input: absent strings are
//! blank, absent integers are zero and absent decimals are `None`, so a
//! partially filled draft still deserializes and gets reported field by field.

use serde::{Deserialize, Serialize};

use crate::error::{MdfeError, Result};

/// The subject of validation. Read-only from the validator's perspective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestDocument {
    /// Identification (`ide`)
    pub ide: Identification,

    /// Issuer (`emit`)
    pub emit: Issuer,

    /// Towing vehicle (`veicTracao`)
    #[serde(rename = "veicTracao")]
    pub towing_vehicle: TowingVehicle,

    /// Driver (`condutor`)
    #[serde(rename = "condutor")]
    pub driver: Driver,

    /// Totals (`tot`)
    #[serde(rename = "tot")]
    pub totals: Totals,

    /// Predominant product (`prodPred`)
    #[serde(rename = "prodPred")]
    pub predominant_product: PredominantProduct,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identification {
    /// Issuing state
    #[serde(rename = "cUF")]
    pub uf: String,

    /// Series number
    #[serde(rename = "serie")]
    pub series: i64,

    /// Manifest sequence number, printed zero-padded to 5 digits
    #[serde(rename = "nMDF")]
    pub number: i64,

    /// 8-digit numeric manifest code
    #[serde(rename = "cMDF")]
    pub code: String,

    /// Transport modal
    pub modal: i64,

    /// Origin state
    #[serde(rename = "UFIni")]
    pub origin_uf: String,

    /// Destination state
    #[serde(rename = "UFFim")]
    pub destination_uf: String,
}

impl Identification {
    /// Manifest number as printed on the document.
    pub fn padded_number(&self) -> String {
        format!("{:05}", self.number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issuer {
    #[serde(rename = "CNPJ")]
    pub cnpj: String,

    #[serde(rename = "CPF")]
    pub cpf: String,

    /// State registration (inscrição estadual)
    #[serde(rename = "IE")]
    pub state_registration: String,

    #[serde(rename = "xNome")]
    pub legal_name: String,

    /// IBGE municipality code
    #[serde(rename = "cMun")]
    pub municipality_code: i64,

    #[serde(rename = "xMun")]
    pub municipality_name: String,

    #[serde(rename = "UF")]
    pub uf: String,

    /// Postal code, 8 digits
    #[serde(rename = "CEP")]
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowingVehicle {
    #[serde(rename = "placa")]
    pub plate: String,

    #[serde(rename = "UF")]
    pub uf: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    #[serde(rename = "xNome")]
    pub name: String,

    #[serde(rename = "CPF")]
    pub cpf: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    /// Total cargo value
    #[serde(rename = "vCarga", skip_serializing_if = "Option::is_none")]
    pub cargo_value: Option<f64>,

    /// Total gross weight
    #[serde(rename = "qCarga", skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredominantProduct {
    #[serde(rename = "tpCarga")]
    pub cargo_type: String,

    #[serde(rename = "xProd")]
    pub description: String,

    /// Alternate description source used by older drafts
    #[serde(rename = "descricao")]
    pub alternate_description: String,
}

impl PredominantProduct {
    /// First non-blank description source.
    pub fn effective_description(&self) -> Option<&str> {
        [&self.description, &self.alternate_description]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}

impl ManifestDocument {
    /// Parse a document from JSON.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Canonical JSON bytes. Field order is fixed by the struct layout.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| MdfeError::Serialize(e.to_string()))
    }

    /// Content fingerprint used to tie reports and audit entries to the
    /// exact document revision that was validated.
    pub fn fingerprint(&self) -> String {
        let bytes = self.canonical_bytes().unwrap_or_default();
        format!("blake3:{}", blake3::hash(&bytes))
    }
}

/// Empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
