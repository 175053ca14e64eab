//! Term catalog: lowercase label/synonym -> id and id -> primary label.
//!
//! The catalog is built once per ontology version from every term below a
//! root (usually [`PHENOTYPIC_ABNORMALITY`](crate::PHENOTYPIC_ABNORMALITY))
//! and never changes afterwards, so it can be shared freely between threads.
//!
//! ## Registration
//!
//! - Every primary label is registered, whatever its length.
//! - Synonyms are registered only when at least `min_synonym_length`
//!   characters long; short synonyms ("MR", "ID") cause spurious matches.
//! - Primary labels are registered before synonyms, ids in sorted order; on
//!   a collision the first registration wins.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use pheno_model::{DEFAULT_MIN_SYNONYM_LENGTH, PhenotypeAnnotation, RecognizerOptions, TermId};

use crate::error::{OntologyError, Result};
use crate::graph::OntologyGraph;

#[derive(Debug, Clone, Default)]
pub struct TermCatalog {
    /// Lowercase label or synonym -> canonical id.
    by_label: BTreeMap<String, TermId>,
    /// Canonical id -> primary label.
    by_id: BTreeMap<TermId, String>,
    min_synonym_length: usize,
}

impl TermCatalog {
    /// Build from every strict descendant of `root`.
    pub fn from_graph<G: OntologyGraph + ?Sized>(graph: &G, root: &TermId) -> Result<Self> {
        Self::from_graph_with_options(graph, root, DEFAULT_MIN_SYNONYM_LENGTH)
    }

    /// Build with the synonym threshold taken from recognizer options.
    pub fn from_graph_with_recognizer_options<G: OntologyGraph + ?Sized>(
        graph: &G,
        root: &TermId,
        options: &RecognizerOptions,
    ) -> Result<Self> {
        Self::from_graph_with_options(graph, root, options.min_synonym_length)
    }

    pub fn from_graph_with_options<G: OntologyGraph + ?Sized>(
        graph: &G,
        root: &TermId,
        min_synonym_length: usize,
    ) -> Result<Self> {
        if !graph.contains(root) {
            return Err(OntologyError::unknown_id(root));
        }
        let ids = graph.descendants(root);
        let mut catalog = Self {
            min_synonym_length,
            ..Self::default()
        };

        for id in &ids {
            let Some(label) = graph.primary_label(id) else {
                continue;
            };
            catalog.by_id.insert(id.clone(), label.to_string());
            catalog.register(label, id);
        }

        let mut skipped = 0usize;
        for id in &ids {
            for synonym in graph.synonyms(id) {
                if synonym.chars().count() < min_synonym_length {
                    skipped += 1;
                    continue;
                }
                catalog.register(synonym, id);
            }
        }

        trace!(skipped, min_synonym_length, "short synonyms not registered");
        debug!(
            root = %root,
            terms = catalog.by_id.len(),
            labels = catalog.by_label.len(),
            "built term catalog"
        );
        Ok(catalog)
    }

    fn register(&mut self, text: &str, id: &TermId) {
        let key = text.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        match self.by_label.get(&key) {
            Some(existing) if existing != id => {
                debug!(label = %key, kept = %existing, ignored = %id, "label collision");
            }
            Some(_) => {}
            None => {
                self.by_label.insert(key, id.clone());
            }
        }
    }

    /// Shortest synonym length registered at construction.
    pub fn min_synonym_length(&self) -> usize {
        self.min_synonym_length
    }

    /// Primary label for `id`.
    pub fn get_by_id(&self, id: &TermId) -> Result<&str> {
        self.by_id
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| OntologyError::unknown_id(id))
    }

    /// Id registered for a label or synonym (case-insensitive).
    pub fn get_by_label(&self, label: &str) -> Result<&TermId> {
        self.by_label
            .get(&label.trim().to_lowercase())
            .ok_or_else(|| OntologyError::UnknownLabel {
                label: label.to_string(),
            })
    }

    pub fn contains_id(&self, id: &TermId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label.contains_key(&label.trim().to_lowercase())
    }

    /// Observed annotation for `id`, carrying its primary label.
    pub fn annotation_for_id(&self, id: &TermId) -> Result<PhenotypeAnnotation> {
        let label = self.get_by_id(id)?;
        Ok(PhenotypeAnnotation::new(id.clone(), label))
    }

    /// Observed annotation for a label or synonym, carrying the primary label.
    pub fn annotation_for_label(&self, label: &str) -> Result<PhenotypeAnnotation> {
        let id = self.get_by_label(label)?;
        self.annotation_for_id(id)
    }

    /// `(lowercase label or synonym, id)` pairs in label order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &TermId)> {
        self.by_label.iter().map(|(label, id)| (label.as_str(), id))
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Number of registered labels and synonyms.
    pub fn label_count(&self) -> usize {
        self.by_label.len()
    }
}
