//! Term id and label validation against the ontology.

use pheno_model::{Diagnostic, DiagnosticCategory, PhenotypeAnnotation, QcOptions};
use pheno_ontology::OntologyGraph;
use tracing::warn;

/// Validate one annotation. Returns the annotation to keep (with its label
/// repaired when allowed) or `None` when it must be dropped.
pub(crate) fn check<G>(
    ontology: &G,
    annotation: &PhenotypeAnnotation,
    options: &QcOptions,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<PhenotypeAnnotation>
where
    G: OntologyGraph + ?Sized,
{
    let primary = ontology
        .contains(annotation.id())
        .then(|| ontology.primary_label(annotation.id()))
        .flatten();
    let Some(primary) = primary else {
        warn!(
            id = %annotation.id(),
            label = annotation.label(),
            "dropping annotation with unknown term id"
        );
        diagnostics.push(Diagnostic::new(
            DiagnosticCategory::MalformedId,
            annotation.clone(),
            "term id is not present in the ontology",
        ));
        return None;
    };

    if primary == annotation.label() {
        return Some(annotation.clone());
    }

    if options.repair_labels {
        diagnostics.push(Diagnostic::new(
            DiagnosticCategory::MalformedLabel,
            annotation.clone(),
            format!("label '{}' replaced by '{primary}'", annotation.label()),
        ));
        Some(annotation.with_label(primary))
    } else {
        diagnostics.push(Diagnostic::new(
            DiagnosticCategory::MalformedLabel,
            annotation.clone(),
            format!("label '{}' does not match '{primary}'", annotation.label()),
        ));
        None
    }
}
