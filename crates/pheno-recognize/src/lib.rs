//! Concept recognition: free-text cells to phenotype annotations.
//!
//! Matching is lexical and deterministic. A cell is split into chunks, each
//! chunk collects candidates from the caller's custom dictionary and from the
//! selected back-end, and the longest non-overlapping candidates win.

#![deny(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod exact;
pub mod external;
pub mod pipeline;
pub mod utils;

use std::sync::Arc;

use pheno_model::{
    CellValue, CustomDictionary, PhenotypeAnnotation, RecognizerBackend, RecognizerOptions, TermId,
};
use pheno_ontology::{OntologyGraph, TermCatalog};
use tracing::warn;

pub use candidate::{CandidateMatch, MatchSource, resolve_overlaps};
pub use error::{AnnotatorError, RecognizeError, Result};
pub use exact::ExactMatchRecognizer;
pub use external::{AnnotatorHit, ExternalAnnotator, ExternalAnnotatorRecognizer};

/// Turns one cell into an ordered list of annotations.
///
/// Results may repeat terms across calls; de-duplication belongs to the
/// annotation cleaner.
pub trait ConceptRecognizer: Send + Sync {
    fn parse_text(
        &self,
        text: &str,
        custom_dictionary: &CustomDictionary,
    ) -> Result<Vec<PhenotypeAnnotation>>;

    /// Parse a raw cell. Non-text values are coerced (with a warning) and
    /// missing cells produce no annotations.
    fn parse_cell(
        &self,
        cell: &CellValue,
        custom_dictionary: &CustomDictionary,
    ) -> Result<Vec<PhenotypeAnnotation>> {
        match pipeline::coerce_cell(cell) {
            Some(text) => self.parse_text(&text, custom_dictionary),
            None => Ok(Vec::new()),
        }
    }

    fn catalog(&self) -> &TermCatalog;
}

/// Build the catalog below `root` from `options` and construct the
/// recognizer selected by `options.backend`.
pub fn recognizer_from_graph<G>(
    graph: &G,
    root: &TermId,
    options: RecognizerOptions,
    annotator: Option<Arc<dyn ExternalAnnotator>>,
) -> Result<Box<dyn ConceptRecognizer>>
where
    G: OntologyGraph + ?Sized,
{
    let catalog = TermCatalog::from_graph_with_recognizer_options(graph, root, &options)?;
    build_recognizer(Arc::new(catalog), options, annotator)
}

/// Construct the recognizer selected by `options.backend` over a prebuilt
/// catalog.
pub fn build_recognizer(
    catalog: Arc<TermCatalog>,
    options: RecognizerOptions,
    annotator: Option<Arc<dyn ExternalAnnotator>>,
) -> Result<Box<dyn ConceptRecognizer>> {
    if catalog.min_synonym_length() != options.min_synonym_length {
        warn!(
            catalog = catalog.min_synonym_length(),
            requested = options.min_synonym_length,
            "catalog was built with a different synonym length; rebuild it to apply the option"
        );
    }
    match options.backend {
        RecognizerBackend::ExactMatch => {
            Ok(Box::new(ExactMatchRecognizer::with_options(catalog, options)))
        }
        RecognizerBackend::ExternalAnnotator => {
            let annotator = annotator.ok_or(RecognizeError::MissingAnnotator)?;
            Ok(Box::new(ExternalAnnotatorRecognizer::with_options(
                catalog, annotator, options,
            )))
        }
    }
}
