//! Cleaning checks.
//!
//! Each module performs one kind of check. Label and id checks run per
//! annotation before bucketing; the others run inside one onset bucket.

pub(crate) mod conflict;
pub(crate) mod duplicates;
pub(crate) mod labels;
pub(crate) mod redundancy;

use pheno_model::{Diagnostic, PhenotypeAnnotation};
use pheno_ontology::OntologyGraph;

/// An annotation taking part in bucket comparison.
#[derive(Debug, Clone)]
pub(crate) struct Entry<'a> {
    /// Position in the input collection.
    pub index: usize,
    /// The annotation as received, used for diagnostics.
    pub source: &'a PhenotypeAnnotation,
    /// The annotation after label repair.
    pub annotation: PhenotypeAnnotation,
}

/// Measured annotations sharing one onset.
#[derive(Debug, Default)]
pub(crate) struct Bucket<'a> {
    pub observed: Vec<Entry<'a>>,
    pub excluded: Vec<Entry<'a>>,
}

impl<'a> Bucket<'a> {
    pub fn push(&mut self, entry: Entry<'a>) {
        if entry.annotation.is_observed() {
            self.observed.push(entry);
        } else {
            self.excluded.push(entry);
        }
    }
}

/// Run all bucket checks and return the surviving entries.
pub(crate) fn clean_bucket<'a, G>(
    ontology: &G,
    bucket: Bucket<'a>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Entry<'a>>
where
    G: OntologyGraph + ?Sized,
{
    // 1. Duplicates and redundancy, each subset on its own
    let observed = duplicates::remove(bucket.observed, diagnostics);
    let observed = redundancy::remove(ontology, observed, diagnostics);
    let excluded = duplicates::remove(bucket.excluded, diagnostics);
    let excluded = redundancy::remove(ontology, excluded, diagnostics);

    // 2. Excluded terms contradicted by the cleaned observed subset
    let excluded = conflict::remove(ontology, excluded, &observed, diagnostics);

    observed.into_iter().chain(excluded).collect()
}
