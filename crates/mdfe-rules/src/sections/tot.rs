use mdfe_core::Section;

use crate::rule::{not_positive, FieldRule};

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(Section::Tot, "vCarga", "Positive value")
            .with_message("Total cargo value must be greater than zero")
            .violated_when(|doc| not_positive(doc.totals.cargo_value)),

        FieldRule::new(Section::Tot, "qCarga", "Positive value")
            .with_message("Total gross weight must be greater than zero")
            .violated_when(|doc| not_positive(doc.totals.gross_weight)),
    ]
}
