use mdfe_core::{is_blank, Section};

use crate::rule::{not_digits, FieldRule};

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(Section::Ide, "cUF", "Required field")
            .with_message("Issuing UF is required")
            .violated_when(|doc| is_blank(&doc.ide.uf)),

        FieldRule::new(Section::Ide, "serie", "Positive value")
            .with_message("Series must be greater than zero")
            .violated_when(|doc| doc.ide.series <= 0),

        FieldRule::new(Section::Ide, "nMDF", "Positive value")
            .with_message("Manifest number must be greater than zero")
            .violated_when(|doc| doc.ide.number <= 0),

        // nMDF is printed zero-padded to 5 digits; anything above 99999 overflows
        FieldRule::new(Section::Ide, "nMDF", "Five-digit number")
            .with_message("Manifest number must fit in 5 digits")
            .violated_when(|doc| doc.ide.padded_number().len() != 5),

        FieldRule::new(Section::Ide, "cMDF", "Eight-digit code")
            .with_message("Manifest code must be exactly 8 numeric digits")
            .violated_when(|doc| not_digits(&doc.ide.code, 8)),

        FieldRule::new(Section::Ide, "modal", "Positive value")
            .with_message("Transport modal must be informed")
            .violated_when(|doc| doc.ide.modal <= 0),

        FieldRule::new(Section::Ide, "UFIni", "Required field")
            .with_message("Origin UF is required")
            .violated_when(|doc| is_blank(&doc.ide.origin_uf)),

        FieldRule::new(Section::Ide, "UFFim", "Required field")
            .with_message("Destination UF is required")
            .violated_when(|doc| is_blank(&doc.ide.destination_uf)),
    ]
}
