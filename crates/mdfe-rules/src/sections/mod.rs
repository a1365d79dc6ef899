//! Rule sets per manifest section, in evaluation order.

mod condutor;
mod emit;
mod ide;
mod prod_pred;
mod tot;
mod veic_tracao;

use mdfe_core::Section;

use crate::rule::FieldRule;

/// Rules of one section
pub fn rules_for(section: Section) -> Vec<FieldRule> {
    match section {
        Section::Ide => ide::rules(),
        Section::Emit => emit::rules(),
        Section::VeicTracao => veic_tracao::rules(),
        Section::Condutor => condutor::rules(),
        Section::Tot => tot::rules(),
        Section::ProdPred => prod_pred::rules(),
    }
}

/// Every rule, sections concatenated in [`Section::ALL`] order
pub fn default_rules() -> Vec<FieldRule> {
    Section::ALL.into_iter().flat_map(rules_for).collect()
}
