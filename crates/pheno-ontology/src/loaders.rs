//! Loaders for pipeline options and custom dictionaries.
//!
//! Custom dictionaries may be written as:
//!
//! ```text
//! # TOML                         # JSON
//! fetus = "Fetal onset"          {"fetus": "Fetal onset",
//! "big head" = ["Macrocephaly"]   "big head": ["Macrocephaly"]}
//!
//! # CSV (header required, repeated snippets accumulate labels)
//! snippet,label
//! fetus,Fetal onset
//! ```

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use pheno_model::{CustomDictionary, PipelineOptions};

use crate::error::{OntologyError, Result};

/// Load [`PipelineOptions`] from a TOML file; missing keys take defaults.
pub fn load_options(path: &Path) -> Result<PipelineOptions> {
    let text = fs::read_to_string(path).map_err(|e| OntologyError::io(path, e))?;
    toml::from_str(&text).map_err(|source| OntologyError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a custom dictionary, choosing the format by file extension.
pub fn load_custom_dictionary(path: &Path) -> Result<CustomDictionary> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let dictionary = match extension.as_str() {
        "toml" => load_toml_dictionary(path)?,
        "json" => load_json_dictionary(path)?,
        "csv" | "tsv" => load_csv_dictionary(path, extension == "tsv")?,
        other => {
            return Err(OntologyError::InvalidDictionary {
                path: path.to_path_buf(),
                message: format!("unsupported extension '{other}'"),
            });
        }
    };
    debug!(path = %path.display(), entries = dictionary.len(), "loaded custom dictionary");
    Ok(dictionary)
}

fn load_toml_dictionary(path: &Path) -> Result<CustomDictionary> {
    let text = fs::read_to_string(path).map_err(|e| OntologyError::io(path, e))?;
    toml::from_str(&text).map_err(|source| OntologyError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

fn load_json_dictionary(path: &Path) -> Result<CustomDictionary> {
    let text = fs::read_to_string(path).map_err(|e| OntologyError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| OntologyError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn load_csv_dictionary(path: &Path, tab_separated: bool) -> Result<CustomDictionary> {
    let csv_error = |source| OntologyError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .delimiter(if tab_separated { b'\t' } else { b',' })
        .flexible(false)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = reader.headers().map_err(csv_error)?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| OntologyError::InvalidDictionary {
                path: path.to_path_buf(),
                message: format!("missing '{name}' column"),
            })
    };
    let snippet_idx = column("snippet")?;
    let label_idx = column("label")?;

    let mut dictionary = CustomDictionary::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let snippet = record.get(snippet_idx).unwrap_or("").trim();
        let label = record.get(label_idx).unwrap_or("").trim();
        if snippet.is_empty() || label.is_empty() {
            continue;
        }
        dictionary.insert(snippet, label);
    }
    Ok(dictionary)
}
