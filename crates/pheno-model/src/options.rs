//! Configuration options for recognition and annotation QC.

use serde::{Deserialize, Serialize};

/// Default chunk delimiters for free-text cells.
pub const DEFAULT_DELIMITERS: [char; 4] = [',', ';', '|', '/'];

/// Synonyms shorter than this are not registered in the term catalog.
pub const DEFAULT_MIN_SYNONYM_LENGTH: usize = 5;

/// Which concept recognizer implementation to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognizerBackend {
    /// Lexical matching against the term catalog.
    #[default]
    ExactMatch,
    /// Candidates supplied by an external annotation service.
    ExternalAnnotator,
}

/// Options for the concept recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerOptions {
    /// Characters that split a cell into independently matched chunks.
    pub delimiters: Vec<char>,

    /// Minimum synonym length (in characters) for catalog registration.
    /// Applied when the catalog is built from these options.
    pub min_synonym_length: usize,

    /// Accept a trailing `s`/`es` after a catalog label ("seizures").
    pub allow_plural_suffix: bool,

    pub backend: RecognizerBackend,
}

impl Default for RecognizerOptions {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            min_synonym_length: DEFAULT_MIN_SYNONYM_LENGTH,
            allow_plural_suffix: true,
            backend: RecognizerBackend::default(),
        }
    }
}

impl RecognizerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.delimiters = delimiters;
        self
    }

    pub fn with_min_synonym_length(mut self, length: usize) -> Self {
        self.min_synonym_length = length;
        self
    }

    pub fn with_plural_suffix(mut self, enable: bool) -> Self {
        self.allow_plural_suffix = enable;
        self
    }

    pub fn with_backend(mut self, backend: RecognizerBackend) -> Self {
        self.backend = backend;
        self
    }
}

/// Options for the annotation cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QcOptions {
    /// Replace outdated labels with the ontology's primary label.
    /// When disabled, annotations with a wrong label are dropped.
    pub repair_labels: bool,

    /// Emit an informational diagnostic for every unmeasured annotation.
    pub report_not_measured: bool,
}

impl Default for QcOptions {
    fn default() -> Self {
        Self {
            repair_labels: true,
            report_not_measured: true,
        }
    }
}

impl QcOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label_repair(mut self, enable: bool) -> Self {
        self.repair_labels = enable;
        self
    }

    pub fn with_not_measured_reporting(mut self, enable: bool) -> Self {
        self.report_not_measured = enable;
        self
    }
}

/// Combined options, as read from a TOML configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub recognizer: RecognizerOptions,
    pub qc: QcOptions,
}
