//! Excluded terms contradicted by an observed finding.

use pheno_model::{Diagnostic, DiagnosticCategory};
use pheno_ontology::OntologyGraph;

use super::Entry;

/// Drop excluded entries whose term is the same as, or an ancestor of, an
/// observed term. The observed subset is never changed.
pub(crate) fn remove<'a, G>(
    ontology: &G,
    excluded: Vec<Entry<'a>>,
    observed: &[Entry<'a>],
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Entry<'a>>
where
    G: OntologyGraph + ?Sized,
{
    let mut kept = Vec::with_capacity(excluded.len());
    for entry in excluded {
        let id = entry.annotation.id();
        let contradicted = observed.iter().find(|candidate| {
            let other = candidate.annotation.id();
            id == other || ontology.is_ancestor_of(id, other)
        });
        match contradicted {
            None => kept.push(entry),
            Some(observed) => {
                let observed = &observed.annotation;
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCategory::Conflict,
                        entry.source.clone(),
                        format!(
                            "excluded '{}' contradicts observed '{}' ({})",
                            entry.annotation.label(),
                            observed.label(),
                            observed.id()
                        ),
                    )
                    .with_related(observed.id().clone()),
                );
            }
        }
    }
    kept
}
