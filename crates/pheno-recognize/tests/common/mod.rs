#![allow(dead_code)]

use std::sync::Arc;

use pheno_model::TermId;
use pheno_ontology::{InMemoryOntology, PHENOTYPIC_ABNORMALITY, TermCatalog};

pub const SEIZURE: &str = "HP:0001250";
pub const CLONIC_SEIZURE: &str = "HP:0020221";
pub const PICA: &str = "HP:0011856";
pub const NASAL_OBSTRUCTION: &str = "HP:0001742";
pub const MACROCEPHALY: &str = "HP:0000256";
pub const FRONTAL_BOSSING: &str = "HP:0002007";
pub const FETAL_ONSET: &str = "HP:0011461";

pub fn id(raw: &str) -> TermId {
    TermId::new(raw).unwrap()
}

pub fn ontology() -> InMemoryOntology {
    InMemoryOntology::builder()
        .term("HP:0000001", "All")
        .term("HP:0000118", "Phenotypic abnormality")
        .term("HP:0003674", "Onset")
        .term(FETAL_ONSET, "Fetal onset")
        .term("HP:0000707", "Abnormality of the nervous system")
        .term(SEIZURE, "Seizure")
        .synonym(SEIZURE, "Epileptic seizure")
        .synonym(SEIZURE, "Fit")
        .term(CLONIC_SEIZURE, "Clonic seizure")
        .term(PICA, "Pica")
        .term(NASAL_OBSTRUCTION, "Nasal obstruction")
        .term(MACROCEPHALY, "Macrocephaly")
        .term(FRONTAL_BOSSING, "Frontal bossing")
        .is_a("HP:0000118", "HP:0000001")
        .is_a("HP:0003674", "HP:0000001")
        .is_a(FETAL_ONSET, "HP:0003674")
        .is_a("HP:0000707", "HP:0000118")
        .is_a(SEIZURE, "HP:0000707")
        .is_a(CLONIC_SEIZURE, SEIZURE)
        .is_a(PICA, "HP:0000118")
        .is_a(NASAL_OBSTRUCTION, "HP:0000118")
        .is_a(MACROCEPHALY, "HP:0000118")
        .is_a(FRONTAL_BOSSING, "HP:0000118")
        .build()
        .expect("build ontology")
}

/// Catalog over the phenotypic-abnormality subtree.
pub fn catalog() -> Arc<TermCatalog> {
    Arc::new(TermCatalog::from_graph(&ontology(), &id(PHENOTYPIC_ABNORMALITY)).unwrap())
}

/// Catalog over the whole ontology, onset terms included.
pub fn full_catalog() -> Arc<TermCatalog> {
    Arc::new(TermCatalog::from_graph(&ontology(), &id("HP:0000001")).unwrap())
}

pub fn ids(annotations: &[pheno_model::PhenotypeAnnotation]) -> Vec<&str> {
    annotations.iter().map(|a| a.id().as_str()).collect()
}
