#![deny(unsafe_code)]

use std::path::PathBuf;

use pheno_model::{ModelError, TermId};

/// Errors from ontology queries, catalog lookups and loaders.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OntologyError {
    #[error("unknown term id: {id}")]
    UnknownTermId { id: String },

    #[error("unknown term label: {label}")]
    UnknownLabel { label: String },

    #[error("is-a cycle detected at {id}")]
    Cycle { id: TermId },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid dictionary {path}: {message}")]
    InvalidDictionary { path: PathBuf, message: String },
}

impl OntologyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unknown_id(id: impl ToString) -> Self {
        Self::UnknownTermId { id: id.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, OntologyError>;
