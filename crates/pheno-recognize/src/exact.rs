//! Exact dictionary/catalog matching.

use std::sync::Arc;

use pheno_model::{CustomDictionary, PhenotypeAnnotation, RecognizerOptions};
use pheno_ontology::TermCatalog;

use crate::ConceptRecognizer;
use crate::candidate::{CandidateMatch, MatchSource};
use crate::error::Result;
use crate::pipeline::recognize;
use crate::utils::{find_matches, is_word_match};

/// Recognizer that finds catalog labels and synonyms verbatim in the text.
#[derive(Debug, Clone)]
pub struct ExactMatchRecognizer {
    catalog: Arc<TermCatalog>,
    options: RecognizerOptions,
}

impl ExactMatchRecognizer {
    pub fn new(catalog: Arc<TermCatalog>) -> Self {
        Self::with_options(catalog, RecognizerOptions::default())
    }

    pub fn with_options(catalog: Arc<TermCatalog>, options: RecognizerOptions) -> Self {
        Self { catalog, options }
    }

    pub fn options(&self) -> &RecognizerOptions {
        &self.options
    }

    /// Catalog candidates for one lowercased chunk: every word-bounded
    /// occurrence of every registered label or synonym.
    pub fn catalog_candidates(&self, chunk: &str) -> Result<Vec<CandidateMatch>> {
        let allow_plural = self.options.allow_plural_suffix;
        let mut candidates = Vec::new();
        for (label, id) in self.catalog.labels() {
            let starts = find_matches(chunk, label, |start| {
                is_word_match(chunk, start, start + label.len(), allow_plural)
            });
            if starts.is_empty() {
                continue;
            }
            let term = self.catalog.annotation_for_id(id)?;
            for start in starts {
                candidates.push(CandidateMatch::new(
                    vec![term.clone()],
                    start,
                    label.len(),
                    MatchSource::Catalog,
                ));
            }
        }
        Ok(candidates)
    }
}

impl ConceptRecognizer for ExactMatchRecognizer {
    fn parse_text(
        &self,
        text: &str,
        custom_dictionary: &CustomDictionary,
    ) -> Result<Vec<PhenotypeAnnotation>> {
        recognize(
            text,
            custom_dictionary,
            &self.catalog,
            &self.options,
            |chunk| self.catalog_candidates(chunk),
        )
    }

    fn catalog(&self) -> &TermCatalog {
        &self.catalog
    }
}
