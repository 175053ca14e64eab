#![allow(dead_code)]

use pheno_model::{OnsetKey, PhenotypeAnnotation, TermId};
use pheno_ontology::InMemoryOntology;

pub const ABNORMALITY: &str = "HP:0000118";
pub const NERVOUS_SYSTEM: &str = "HP:0000707";
pub const SEIZURE: &str = "HP:0001250";
pub const CLONIC_SEIZURE: &str = "HP:0020221";
pub const PICA: &str = "HP:0011856";
pub const NASAL_OBSTRUCTION: &str = "HP:0001742";

pub fn id(raw: &str) -> TermId {
    TermId::new(raw).unwrap()
}

pub fn ontology() -> InMemoryOntology {
    InMemoryOntology::builder()
        .term("HP:0000001", "All")
        .term(ABNORMALITY, "Phenotypic abnormality")
        .term(NERVOUS_SYSTEM, "Abnormality of the nervous system")
        .term(SEIZURE, "Seizure")
        .synonym(SEIZURE, "Epileptic seizure")
        .term(CLONIC_SEIZURE, "Clonic seizure")
        .term(PICA, "Pica")
        .term(NASAL_OBSTRUCTION, "Nasal obstruction")
        .is_a(ABNORMALITY, "HP:0000001")
        .is_a(NERVOUS_SYSTEM, ABNORMALITY)
        .is_a(SEIZURE, NERVOUS_SYSTEM)
        .is_a(CLONIC_SEIZURE, SEIZURE)
        .is_a(PICA, ABNORMALITY)
        .is_a(NASAL_OBSTRUCTION, ABNORMALITY)
        .build()
        .expect("build ontology")
}

/// Observed, measured annotation carrying the primary label of `raw`.
pub fn term(raw: &str) -> PhenotypeAnnotation {
    let label = match raw {
        ABNORMALITY => "Phenotypic abnormality",
        NERVOUS_SYSTEM => "Abnormality of the nervous system",
        SEIZURE => "Seizure",
        CLONIC_SEIZURE => "Clonic seizure",
        PICA => "Pica",
        NASAL_OBSTRUCTION => "Nasal obstruction",
        other => panic!("no fixture label for {other}"),
    };
    PhenotypeAnnotation::new(id(raw), label)
}

pub fn fetal() -> OnsetKey {
    OnsetKey::from_text("Fetal onset")
}

pub fn ids(annotations: &[PhenotypeAnnotation]) -> Vec<&str> {
    annotations.iter().map(|a| a.id().as_str()).collect()
}
