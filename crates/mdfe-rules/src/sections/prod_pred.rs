use mdfe_core::{is_blank, Section};

use crate::rule::FieldRule;

pub(super) fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(Section::ProdPred, "tpCarga", "Required field")
            .with_message("Cargo type is required")
            .violated_when(|doc| is_blank(&doc.predominant_product.cargo_type)),

        FieldRule::new(Section::ProdPred, "xProd", "Description required")
            .with_message("Predominant product description is required")
            .violated_when(|doc| doc.predominant_product.effective_description().is_none()),
    ]
}
