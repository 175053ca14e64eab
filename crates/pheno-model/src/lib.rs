pub mod annotation;
pub mod cell;
pub mod diagnostic;
pub mod dictionary;
pub mod error;
pub mod ids;
pub mod onset;
pub mod options;

pub use annotation::{IndividualAnnotations, PhenotypeAnnotation};
pub use cell::CellValue;
pub use diagnostic::{Diagnostic, DiagnosticCategory, QcReport, Severity};
pub use dictionary::CustomDictionary;
pub use error::{ModelError, Result};
pub use ids::TermId;
pub use onset::{OnsetKey, onset_label_for_id, onset_term_for_label};
pub use options::{
    DEFAULT_DELIMITERS, DEFAULT_MIN_SYNONYM_LENGTH, PipelineOptions, QcOptions,
    RecognizerBackend, RecognizerOptions,
};
