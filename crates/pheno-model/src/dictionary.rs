//! Caller-supplied text-to-term mappings.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One dictionary value as written in a file: a single target label or several.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(label) => vec![label],
            OneOrMany::Many(labels) => labels,
        }
    }
}

/// Maps literal text snippets to one or more canonical term labels.
///
/// Snippets are stored trimmed and lowercased, so lookups are
/// case-insensitive. Labels are kept as given and resolved against the term
/// catalog at recognition time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, OneOrMany>", into = "BTreeMap<String, Vec<String>>")]
pub struct CustomDictionary {
    entries: BTreeMap<String, Vec<String>>,
}

impl CustomDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping; repeated snippets accumulate labels.
    pub fn insert(&mut self, snippet: impl AsRef<str>, label: impl Into<String>) {
        let key = normalize_snippet(snippet.as_ref());
        if key.is_empty() {
            return;
        }
        let label = label.into();
        let labels = self.entries.entry(key).or_default();
        if !labels.contains(&label) {
            labels.push(label);
        }
    }

    #[must_use]
    pub fn with(mut self, snippet: impl AsRef<str>, label: impl Into<String>) -> Self {
        self.insert(snippet, label);
        self
    }

    /// Labels mapped from `text` (case-insensitive, whitespace-normalised).
    pub fn get(&self, text: &str) -> Option<&[String]> {
        self.entries
            .get(&normalize_snippet(text))
            .map(Vec::as_slice)
    }

    /// `(lowercase snippet, labels)` pairs in snippet order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(snippet, labels)| (snippet.as_str(), labels.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_snippet(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl From<BTreeMap<String, OneOrMany>> for CustomDictionary {
    fn from(raw: BTreeMap<String, OneOrMany>) -> Self {
        let mut dictionary = Self::new();
        for (snippet, labels) in raw {
            for label in Vec::<String>::from(labels) {
                dictionary.insert(&snippet, label);
            }
        }
        dictionary
    }
}

impl From<CustomDictionary> for BTreeMap<String, Vec<String>> {
    fn from(value: CustomDictionary) -> Self {
        value.entries
    }
}

impl From<HashMap<String, String>> for CustomDictionary {
    fn from(raw: HashMap<String, String>) -> Self {
        raw.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for CustomDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (snippet, label) in iter {
            dictionary.insert(snippet, label);
        }
        dictionary
    }
}
