//! Duplicate annotation removal.

use std::collections::HashSet;

use pheno_model::{Diagnostic, DiagnosticCategory, PhenotypeAnnotation};

use super::Entry;

/// Keep the first copy of every annotation value.
pub(crate) fn remove<'a>(
    entries: Vec<Entry<'a>>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Entry<'a>> {
    let mut seen: HashSet<PhenotypeAnnotation> = HashSet::with_capacity(entries.len());
    let mut kept = Vec::with_capacity(entries.len());

    for entry in entries {
        if seen.insert(entry.annotation.clone()) {
            kept.push(entry);
        } else {
            diagnostics.push(Diagnostic::new(
                DiagnosticCategory::Duplicate,
                entry.source.clone(),
                format!("'{}' recorded more than once", entry.annotation.label()),
            ));
        }
    }

    kept
}
