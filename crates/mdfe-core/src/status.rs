//! Manifest lifecycle statuses.
//!
//! The status set is closed: adding a variant forces a decision in
//! [`DocumentStatus::is_final`] because the match is exhaustive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    /// Draft (`RASCUNHO`)
    Rascunho,
    /// In edit (`EM_EDICAO`)
    EmEdicao,
    /// Signed (`ASSINADO`)
    Assinado,
    /// Transmitted (`TRANSMITIDO`)
    Transmitido,
    /// XML generated (`XML_GERADO`)
    XmlGerado,
    /// Authorized (`AUTORIZADO`)
    Autorizado,
    /// Denied (`DENEGADO`)
    Denegado,
    /// Rejected (`REJEITADO`)
    Rejeitado,
    /// Cancelled (`CANCELADO`)
    Cancelado,
    /// Closed (`ENCERRADO`)
    Encerrado,
    /// Transmission error (`ERRO_TRANSMISSAO`)
    ErroTransmissao,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 11] = [
        DocumentStatus::Rascunho,
        DocumentStatus::EmEdicao,
        DocumentStatus::Assinado,
        DocumentStatus::Transmitido,
        DocumentStatus::XmlGerado,
        DocumentStatus::Autorizado,
        DocumentStatus::Denegado,
        DocumentStatus::Rejeitado,
        DocumentStatus::Cancelado,
        DocumentStatus::Encerrado,
        DocumentStatus::ErroTransmissao,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DocumentStatus::Rascunho => "RASCUNHO",
            DocumentStatus::EmEdicao => "EM_EDICAO",
            DocumentStatus::Assinado => "ASSINADO",
            DocumentStatus::Transmitido => "TRANSMITIDO",
            DocumentStatus::XmlGerado => "XML_GERADO",
            DocumentStatus::Autorizado => "AUTORIZADO",
            DocumentStatus::Denegado => "DENEGADO",
            DocumentStatus::Rejeitado => "REJEITADO",
            DocumentStatus::Cancelado => "CANCELADO",
            DocumentStatus::Encerrado => "ENCERRADO",
            DocumentStatus::ErroTransmissao => "ERRO_TRANSMISSAO",
        }
    }

    /// Look up a status by its code. Exact, case-sensitive match.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    /// Terminal statuses admit no further edits.
    pub fn is_final(&self) -> bool {
        match self {
            DocumentStatus::Autorizado
            | DocumentStatus::Denegado
            | DocumentStatus::Rejeitado
            | DocumentStatus::Cancelado
            | DocumentStatus::Encerrado => true,
            DocumentStatus::Rascunho
            | DocumentStatus::EmEdicao
            | DocumentStatus::Assinado
            | DocumentStatus::Transmitido
            | DocumentStatus::XmlGerado
            | DocumentStatus::ErroTransmissao => false,
        }
    }

    pub fn accepts_edits(&self) -> bool {
        !self.is_final()
    }

    /// Statuses that move the document toward transmission. Blocking
    /// findings must be resolved before entering any of these.
    pub fn is_transmission_eligible(&self) -> bool {
        matches!(
            self,
            DocumentStatus::Assinado | DocumentStatus::Transmitido | DocumentStatus::XmlGerado
        )
    }

    /// Next statuses in the workflow diagram. Informational only: callers
    /// own transition enforcement.
    pub fn successors(&self) -> &'static [DocumentStatus] {
        use DocumentStatus::*;
        match self {
            Rascunho => &[EmEdicao],
            EmEdicao => &[Assinado],
            Assinado => &[Transmitido],
            Transmitido => &[XmlGerado],
            XmlGerado => &[Autorizado, Denegado, Rejeitado, ErroTransmissao],
            Autorizado => &[Cancelado, Encerrado],
            // retry after fixing the payload
            ErroTransmissao => &[EmEdicao, Transmitido],
            Denegado | Rejeitado | Cancelado | Encerrado => &[],
        }
    }
}

/// Classify a raw status code. Unknown codes are not final.
pub fn is_final_status(code: &str) -> bool {
    DocumentStatus::from_code(code).map_or(false, |s| s.is_final())
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unrecognized status code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for DocumentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
