use mdfe_core::{is_blank, Section};

use crate::rule::{wrong_length, FieldRule};

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(Section::VeicTracao, "placa", "Required field")
            .with_message("Towing vehicle plate is required")
            .violated_when(|doc| is_blank(&doc.towing_vehicle.plate)),

        FieldRule::new(Section::VeicTracao, "UF", "Two-letter UF")
            .with_message("Towing vehicle UF must have exactly 2 characters")
            .violated_when(|doc| {
                is_blank(&doc.towing_vehicle.uf) || wrong_length(&doc.towing_vehicle.uf, 2)
            }),
    ]
}
