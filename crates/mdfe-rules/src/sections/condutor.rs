use mdfe_core::{is_blank, Section};

use crate::rule::{wrong_length, FieldRule};

// Both rules are conditional: an absent driver is not a finding here.
pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(Section::Condutor, "CPF", "CPF required with name")
            .with_message("Driver CPF is required when the driver name is informed")
            .violated_when(|doc| !is_blank(&doc.driver.name) && is_blank(&doc.driver.cpf)),

        FieldRule::new(Section::Condutor, "CPF", "Eleven-digit CPF")
            .with_message("Driver CPF must have exactly 11 digits")
            .violated_when(|doc| !is_blank(&doc.driver.cpf) && wrong_length(&doc.driver.cpf, 11)),
    ]
}
