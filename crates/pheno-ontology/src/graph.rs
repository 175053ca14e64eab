//! Ontology graph adapter.
//!
//! The annotation core only needs a handful of queries over the is-a DAG.
//! [`OntologyGraph`] names them; [`InMemoryOntology`] is a ready-made
//! implementation with precomputed ancestor closures, built once and then
//! shared read-only.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use pheno_model::TermId;

use crate::error::{OntologyError, Result};

/// Root of the phenotype subontology in HPO.
pub const PHENOTYPIC_ABNORMALITY: &str = "HP:0000118";

/// Read-only queries over an ontology's term DAG.
pub trait OntologyGraph {
    /// True if the ontology knows `id`.
    fn contains(&self, id: &TermId) -> bool;

    /// Current primary label of `id`.
    fn primary_label(&self, id: &TermId) -> Option<&str>;

    /// True if `ancestor` is a strict ancestor of `descendant`.
    fn is_ancestor_of(&self, ancestor: &TermId, descendant: &TermId) -> bool;

    /// Synonyms registered for `id` (empty for unknown ids).
    fn synonyms(&self, id: &TermId) -> &[String];

    /// All strict descendants of `id`, in id order.
    fn descendants(&self, id: &TermId) -> Vec<TermId>;
}

#[derive(Debug, Clone)]
struct TermRecord {
    label: String,
    synonyms: Vec<String>,
    parents: Vec<TermId>,
}

/// Ontology held fully in memory.
#[derive(Debug, Clone)]
pub struct InMemoryOntology {
    terms: BTreeMap<TermId, TermRecord>,
    ancestors: HashMap<TermId, HashSet<TermId>>,
}

impl InMemoryOntology {
    pub fn builder() -> OntologyBuilder {
        OntologyBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Direct is-a parents of `id`.
    pub fn parents(&self, id: &TermId) -> &[TermId] {
        self.terms
            .get(id)
            .map(|record| record.parents.as_slice())
            .unwrap_or(&[])
    }

    /// All strict ancestors of `id`, in id order.
    pub fn ancestors(&self, id: &TermId) -> Vec<TermId> {
        let mut ancestors: Vec<TermId> = self
            .ancestors
            .get(id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        ancestors.sort();
        ancestors
    }

    pub fn term_ids(&self) -> impl Iterator<Item = &TermId> {
        self.terms.keys()
    }
}

impl OntologyGraph for InMemoryOntology {
    fn contains(&self, id: &TermId) -> bool {
        self.terms.contains_key(id)
    }

    fn primary_label(&self, id: &TermId) -> Option<&str> {
        self.terms.get(id).map(|record| record.label.as_str())
    }

    fn is_ancestor_of(&self, ancestor: &TermId, descendant: &TermId) -> bool {
        self.ancestors
            .get(descendant)
            .is_some_and(|set| set.contains(ancestor))
    }

    fn synonyms(&self, id: &TermId) -> &[String] {
        self.terms
            .get(id)
            .map(|record| record.synonyms.as_slice())
            .unwrap_or(&[])
    }

    fn descendants(&self, id: &TermId) -> Vec<TermId> {
        self.ancestors
            .iter()
            .filter(|(_, ancestors)| ancestors.contains(id))
            .map(|(term, _)| term.clone())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Collects terms, synonyms and is-a edges; ids are validated at [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct OntologyBuilder {
    terms: Vec<(String, String)>,
    synonyms: Vec<(String, String)>,
    edges: Vec<(String, String)>,
}

impl OntologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn term(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.terms.push((id.into(), label.into()));
        self
    }

    #[must_use]
    pub fn synonym(mut self, id: impl Into<String>, synonym: impl Into<String>) -> Self {
        self.synonyms.push((id.into(), synonym.into()));
        self
    }

    /// Record that `child` is-a `parent`.
    #[must_use]
    pub fn is_a(mut self, child: impl Into<String>, parent: impl Into<String>) -> Self {
        self.edges.push((child.into(), parent.into()));
        self
    }

    pub fn build(self) -> Result<InMemoryOntology> {
        let mut terms = BTreeMap::new();
        for (id, label) in self.terms {
            let id = TermId::new(id)?;
            terms.insert(
                id,
                TermRecord {
                    label: label.trim().to_string(),
                    synonyms: Vec::new(),
                    parents: Vec::new(),
                },
            );
        }

        for (id, synonym) in self.synonyms {
            let id = TermId::new(id)?;
            let record = terms
                .get_mut(&id)
                .ok_or_else(|| OntologyError::unknown_id(&id))?;
            let synonym = synonym.trim().to_string();
            if !synonym.is_empty() && !record.synonyms.contains(&synonym) {
                record.synonyms.push(synonym);
            }
        }

        for (child, parent) in self.edges {
            let child = TermId::new(child)?;
            let parent = TermId::new(parent)?;
            if !terms.contains_key(&parent) {
                return Err(OntologyError::unknown_id(&parent));
            }
            let record = terms
                .get_mut(&child)
                .ok_or_else(|| OntologyError::unknown_id(&child))?;
            if !record.parents.contains(&parent) {
                record.parents.push(parent);
            }
        }

        let ancestors = compute_ancestors(&terms)?;
        debug!(terms = terms.len(), "built in-memory ontology");
        Ok(InMemoryOntology { terms, ancestors })
    }
}

fn compute_ancestors(
    terms: &BTreeMap<TermId, TermRecord>,
) -> Result<HashMap<TermId, HashSet<TermId>>> {
    let mut closure = HashMap::with_capacity(terms.len());
    let mut visiting = HashSet::new();
    for id in terms.keys() {
        collect_ancestors(id, terms, &mut closure, &mut visiting)?;
    }
    Ok(closure)
}

fn collect_ancestors(
    id: &TermId,
    terms: &BTreeMap<TermId, TermRecord>,
    closure: &mut HashMap<TermId, HashSet<TermId>>,
    visiting: &mut HashSet<TermId>,
) -> Result<()> {
    if closure.contains_key(id) {
        return Ok(());
    }
    if !visiting.insert(id.clone()) {
        return Err(OntologyError::Cycle { id: id.clone() });
    }
    let mut ancestors = HashSet::new();
    if let Some(record) = terms.get(id) {
        for parent in &record.parents {
            collect_ancestors(parent, terms, closure, visiting)?;
            ancestors.insert(parent.clone());
            if let Some(above) = closure.get(parent) {
                ancestors.extend(above.iter().cloned());
            }
        }
    }
    visiting.remove(id);
    closure.insert(id.clone(), ancestors);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> TermId {
        TermId::new(raw).unwrap()
    }

    fn sample() -> InMemoryOntology {
        InMemoryOntology::builder()
            .term("HP:0000118", "Phenotypic abnormality")
            .term("HP:0000707", "Abnormality of the nervous system")
            .term("HP:0001250", "Seizure")
            .term("HP:0020221", "Clonic seizure")
            .is_a("HP:0000707", "HP:0000118")
            .is_a("HP:0001250", "HP:0000707")
            .is_a("HP:0020221", "HP:0001250")
            .build()
            .unwrap()
    }

    #[test]
    fn ancestry_is_transitive_and_strict() {
        let ontology = sample();
        assert!(ontology.is_ancestor_of(&id("HP:0000118"), &id("HP:0020221")));
        assert!(ontology.is_ancestor_of(&id("HP:0001250"), &id("HP:0020221")));
        assert!(!ontology.is_ancestor_of(&id("HP:0020221"), &id("HP:0001250")));
        assert!(!ontology.is_ancestor_of(&id("HP:0001250"), &id("HP:0001250")));
    }

    #[test]
    fn descendants_are_sorted() {
        let ontology = sample();
        assert_eq!(
            ontology.descendants(&id("HP:0000707")),
            vec![id("HP:0001250"), id("HP:0020221")]
        );
        assert!(ontology.descendants(&id("HP:0020221")).is_empty());
    }

    #[test]
    fn cycles_are_rejected() {
        let result = InMemoryOntology::builder()
            .term("HP:1", "A")
            .term("HP:2", "B")
            .is_a("HP:1", "HP:2")
            .is_a("HP:2", "HP:1")
            .build();
        assert!(matches!(result, Err(OntologyError::Cycle { .. })));
    }

    #[test]
    fn edges_to_unknown_terms_are_rejected() {
        let result = InMemoryOntology::builder()
            .term("HP:1", "A")
            .is_a("HP:1", "HP:9")
            .build();
        assert!(matches!(result, Err(OntologyError::UnknownTermId { .. })));
    }
}
