//! Recognition backed by an external annotation service.
//!
//! The service only proposes `(term, span)` hits for a chunk. Normalisation,
//! the custom dictionary and overlap resolution stay the same as for exact
//! matching, so switching back-ends never changes how dictionaries behave.

use std::fmt;
use std::sync::Arc;

use pheno_model::{CustomDictionary, PhenotypeAnnotation, RecognizerOptions, TermId};
use pheno_ontology::TermCatalog;

use crate::ConceptRecognizer;
use crate::candidate::{CandidateMatch, MatchSource};
use crate::error::{AnnotatorError, RecognizeError, Result};
use crate::pipeline::recognize;

/// One term proposed by an annotator; `start..end` is a byte range in the chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorHit {
    pub id: TermId,
    pub start: usize,
    pub end: usize,
}

/// An external concept annotator.
pub trait ExternalAnnotator: Send + Sync {
    /// Propose hits for one trimmed, lowercased chunk.
    fn annotate(&self, chunk: &str) -> std::result::Result<Vec<AnnotatorHit>, AnnotatorError>;
}

/// Recognizer that takes its catalog candidates from an [`ExternalAnnotator`].
#[derive(Clone)]
pub struct ExternalAnnotatorRecognizer {
    catalog: Arc<TermCatalog>,
    annotator: Arc<dyn ExternalAnnotator>,
    options: RecognizerOptions,
}

impl fmt::Debug for ExternalAnnotatorRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalAnnotatorRecognizer")
            .field("catalog_terms", &self.catalog.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ExternalAnnotatorRecognizer {
    pub fn new(catalog: Arc<TermCatalog>, annotator: Arc<dyn ExternalAnnotator>) -> Self {
        Self::with_options(catalog, annotator, RecognizerOptions::default())
    }

    pub fn with_options(
        catalog: Arc<TermCatalog>,
        annotator: Arc<dyn ExternalAnnotator>,
        options: RecognizerOptions,
    ) -> Self {
        Self {
            catalog,
            annotator,
            options,
        }
    }

    fn annotator_candidates(&self, chunk: &str) -> Result<Vec<CandidateMatch>> {
        let hits = self.annotator.annotate(chunk)?;
        let mut candidates = Vec::with_capacity(hits.len());
        for hit in hits {
            if hit.start >= hit.end
                || hit.end > chunk.len()
                || !chunk.is_char_boundary(hit.start)
                || !chunk.is_char_boundary(hit.end)
            {
                return Err(RecognizeError::InvalidAnnotatorSpan {
                    start: hit.start,
                    end: hit.end,
                    len: chunk.len(),
                });
            }
            let term = self
                .catalog
                .annotation_for_id(&hit.id)
                .map_err(|_| RecognizeError::UnknownAnnotatorTerm { id: hit.id.clone() })?;
            candidates.push(CandidateMatch::new(
                vec![term],
                hit.start,
                hit.end - hit.start,
                MatchSource::Catalog,
            ));
        }
        Ok(candidates)
    }
}

impl ConceptRecognizer for ExternalAnnotatorRecognizer {
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
            |chunk| self.annotator_candidates(chunk),
        )
    }

    fn catalog(&self) -> &TermCatalog {
        &self.catalog
    }
}
