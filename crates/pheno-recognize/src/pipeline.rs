//! Steps shared by every recognizer back-end.
//!
//! A cell goes through: coercion to text, whitespace normalisation, the
//! whole-cell custom-dictionary shortcut, chunking, candidate collection
//! (custom dictionary plus back-end), and per-chunk overlap resolution.

use std::borrow::Cow;

use tracing::{debug, warn};

use pheno_model::{CellValue, CustomDictionary, PhenotypeAnnotation, RecognizerOptions};
use pheno_ontology::TermCatalog;

use crate::candidate::{CandidateMatch, MatchSource, resolve_overlaps};
use crate::error::{RecognizeError, Result};
use crate::utils::{normalize_whitespace, split_chunks};

/// Text form of a cell. Non-text content is coerced and logged; missing
/// cells yield `None`.
pub fn coerce_cell(cell: &CellValue) -> Option<Cow<'_, str>> {
    match cell {
        CellValue::Missing => None,
        CellValue::Text(text) => Some(Cow::Borrowed(text.as_str())),
        other => {
            let text = other.as_text();
            warn!(kind = other.kind(), value = %text, "coercing non-text cell to text");
            Some(text)
        }
    }
}

/// Resolve every label of one dictionary entry through the catalog.
pub fn resolve_custom_labels(
    snippet: &str,
    labels: &[String],
    catalog: &TermCatalog,
) -> Result<Vec<PhenotypeAnnotation>> {
    labels
        .iter()
        .map(|label| {
            catalog.annotation_for_label(label).map_err(|_| {
                RecognizeError::UnresolvableCustomMapping {
                    snippet: snippet.to_string(),
                    label: label.clone(),
                }
            })
        })
        .collect()
}

/// Substring matches of custom-dictionary snippets inside one chunk.
///
/// No word-boundary check applies: dictionary snippets are curated by the
/// caller for exactly this data.
pub fn custom_candidates(
    chunk: &str,
    dictionary: &CustomDictionary,
    catalog: &TermCatalog,
) -> Result<Vec<CandidateMatch>> {
    let mut candidates = Vec::new();
    for (snippet, labels) in dictionary.iter() {
        let Some(start) = chunk.find(snippet) else {
            continue;
        };
        let terms = resolve_custom_labels(snippet, labels, catalog)?;
        candidates.push(CandidateMatch::new(
            terms,
            start,
            snippet.len(),
            MatchSource::CustomDictionary,
        ));
    }
    Ok(candidates)
}

/// Run the shared pipeline with `backend` supplying per-chunk candidates.
pub fn recognize<F>(
    text: &str,
    dictionary: &CustomDictionary,
    catalog: &TermCatalog,
    options: &RecognizerOptions,
    mut backend: F,
) -> Result<Vec<PhenotypeAnnotation>>
where
    F: FnMut(&str) -> Result<Vec<CandidateMatch>>,
{
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(labels) = dictionary.get(&normalized) {
        debug!(cell = %normalized, labels = labels.len(), "whole-cell custom dictionary match");
        return resolve_custom_labels(&normalized, labels, catalog);
    }

    let mut results = Vec::new();
    for chunk in split_chunks(&normalized, &options.delimiters) {
        let mut candidates = custom_candidates(&chunk, dictionary, catalog)?;
        candidates.extend(backend(&chunk)?);
        let total = candidates.len();
        let accepted = resolve_overlaps(candidates);
        debug!(
            chunk = %chunk,
            candidates = total,
            accepted = accepted.len(),
            "resolved chunk"
        );
        results.extend(accepted.into_iter().flat_map(|candidate| candidate.terms));
    }
    Ok(results)
}
