//! Phenotype annotation value type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{OnsetKey, TermId};

/// One phenotype finding for one individual.
///
/// Values are immutable: every modifier returns a new annotation, so a term
/// produced once by the recognizer can sit in several lists without one list
/// changing what another sees. Equality and hashing cover every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhenotypeAnnotation {
    id: TermId,
    label: String,
    observed: bool,
    measured: bool,
    #[serde(default)]
    onset: OnsetKey,
}

impl PhenotypeAnnotation {
    /// Create an observed, measured annotation without onset.
    pub fn new(id: TermId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            observed: true,
            measured: true,
            onset: OnsetKey::NotProvided,
        }
    }

    pub fn id(&self) -> &TermId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }

    pub fn is_excluded(&self) -> bool {
        !self.observed
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    pub fn onset(&self) -> &OnsetKey {
        &self.onset
    }

    /// Copy of this annotation marked as explicitly ruled out.
    #[must_use]
    pub fn excluded(&self) -> Self {
        Self {
            observed: false,
            ..self.clone()
        }
    }

    /// Copy of this annotation marked as present.
    #[must_use]
    pub fn observed(&self) -> Self {
        Self {
            observed: true,
            ..self.clone()
        }
    }

    /// Copy of this annotation marked as not measured.
    #[must_use]
    pub fn not_measured(&self) -> Self {
        Self {
            measured: false,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_onset(&self, onset: OnsetKey) -> Self {
        Self {
            onset,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..self.clone()
        }
    }

    /// Short status word used in diagnostics and logs.
    pub fn status(&self) -> &'static str {
        match (self.measured, self.observed) {
            (false, _) => "not measured",
            (true, true) => "observed",
            (true, false) => "excluded",
        }
    }
}

/// All annotations collected for one individual, possibly over many cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualAnnotations {
    pub individual_id: String,
    pub annotations: Vec<PhenotypeAnnotation>,
}

impl IndividualAnnotations {
    pub fn new(individual_id: impl Into<String>) -> Self {
        Self {
            individual_id: individual_id.into(),
            annotations: Vec::new(),
        }
    }

    pub fn push(&mut self, annotation: PhenotypeAnnotation) {
        self.annotations.push(annotation);
    }

    pub fn extend<I>(&mut self, annotations: I)
    where
        I: IntoIterator<Item = PhenotypeAnnotation>,
    {
        self.annotations.extend(annotations);
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Annotations grouped by onset, in key order.
    pub fn by_onset(&self) -> BTreeMap<&OnsetKey, Vec<&PhenotypeAnnotation>> {
        let mut groups: BTreeMap<&OnsetKey, Vec<&PhenotypeAnnotation>> = BTreeMap::new();
        for annotation in &self.annotations {
            groups.entry(annotation.onset()).or_default().push(annotation);
        }
        groups
    }

    /// Swap in a cleaned collection, returning the previous one.
    pub fn replace(&mut self, cleaned: Vec<PhenotypeAnnotation>) -> Vec<PhenotypeAnnotation> {
        std::mem::replace(&mut self.annotations, cleaned)
    }
}
