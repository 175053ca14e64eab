//! Error types for concept recognition.

use pheno_model::TermId;
use pheno_ontology::OntologyError;
use thiserror::Error;

/// Fatal recognition errors. All of them point at caller configuration, not
/// at the cell text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecognizeError {
    /// A custom dictionary maps a snippet to a label the catalog does not know.
    #[error("custom dictionary maps '{snippet}' to unknown label '{label}'")]
    UnresolvableCustomMapping { snippet: String, label: String },

    /// The external annotator returned a term that is not in the catalog.
    #[error("external annotator returned unknown term {id}")]
    UnknownAnnotatorTerm { id: TermId },

    /// The external annotator returned a span outside the chunk it was given.
    #[error("external annotator returned span {start}..{end} outside chunk of length {len}")]
    InvalidAnnotatorSpan { start: usize, end: usize, len: usize },

    #[error("external annotator failed: {0}")]
    Annotator(#[from] AnnotatorError),

    #[error("external annotator back-end selected but no annotator was supplied")]
    MissingAnnotator,

    #[error(transparent)]
    Ontology(#[from] OntologyError),
}

/// Failure reported by an external annotation service.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AnnotatorError {
    pub message: String,
}

impl AnnotatorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecognizeError>;
