use mdfe_core::{is_blank, Section};

use crate::rule::{not_digits, wrong_length, FieldRule};

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(Section::Emit, "CNPJ", "CNPJ or CPF required")
            .with_message("Issuer must have a CNPJ or a CPF")
            .violated_when(|doc| is_blank(&doc.emit.cnpj) && is_blank(&doc.emit.cpf)),

        FieldRule::new(Section::Emit, "IE", "Required field")
            .with_message("Issuer state registration is required")
            .violated_when(|doc| is_blank(&doc.emit.state_registration)),

        FieldRule::new(Section::Emit, "xNome", "Required field")
            .with_message("Issuer legal name is required")
            .violated_when(|doc| is_blank(&doc.emit.legal_name)),

        FieldRule::new(Section::Emit, "cMun", "Positive value")
            .with_message("Issuer IBGE municipality code must be informed")
            .violated_when(|doc| doc.emit.municipality_code <= 0),

        FieldRule::new(Section::Emit, "xMun", "Required field")
            .with_message("Issuer municipality name is required")
            .violated_when(|doc| is_blank(&doc.emit.municipality_name)),

        FieldRule::new(Section::Emit, "UF", "Two-letter UF")
            .with_message("Issuer UF must have exactly 2 characters")
            .violated_when(|doc| is_blank(&doc.emit.uf) || wrong_length(&doc.emit.uf, 2)),

        FieldRule::new(Section::Emit, "CEP", "Eight-digit CEP")
            .with_message("Issuer postal code must have exactly 8 digits")
            .violated_when(|doc| not_digits(&doc.emit.postal_code, 8)),
    ]
}
