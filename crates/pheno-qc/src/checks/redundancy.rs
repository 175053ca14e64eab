//! Removal of terms implied by a more specific term of the same status.

use pheno_model::{Diagnostic, DiagnosticCategory};
use pheno_ontology::OntologyGraph;

use super::Entry;

/// Drop every entry that is a strict ancestor of another entry in `entries`.
///
/// All entries are marked against the full subset before any is removed, so
/// in a chain `A > B > C` both `A` and `B` go.
pub(crate) fn remove<'a, G>(
    ontology: &G,
    entries: Vec<Entry<'a>>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Entry<'a>>
where
    G: OntologyGraph + ?Sized,
{
    let implied_by: Vec<Option<Entry<'a>>> = entries
        .iter()
        .map(|candidate| {
            entries
                .iter()
                .find(|other| {
                    ontology.is_ancestor_of(candidate.annotation.id(), other.annotation.id())
                })
                .cloned()
        })
        .collect();

    let mut kept = Vec::with_capacity(entries.len());
    for (entry, descendant) in entries.into_iter().zip(implied_by) {
        match descendant {
            None => kept.push(entry),
            Some(descendant) => {
                let descendant = descendant.annotation;
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCategory::Redundant,
                        entry.source.clone(),
                        format!(
                            "'{}' is implied by '{}' ({})",
                            entry.annotation.label(),
                            descendant.label(),
                            descendant.id()
                        ),
                    )
                    .with_related(descendant.id().clone()),
                );
            }
        }
    }
    kept
}
