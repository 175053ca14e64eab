//! Onset grouping keys.
//!
//! Annotations of one individual are partitioned by onset before they are
//! compared with each other. The same term recorded at two different onsets
//! is two separate findings, not a redundancy.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::TermId;

/// HPO onset terms (subclasses of `HP:0003674` Onset) as `(id, label)`.
const ONSET_TERMS: &[(&str, &str)] = &[
    ("HP:0030674", "Antenatal onset"),
    ("HP:0011460", "Embryonal onset"),
    ("HP:0011461", "Fetal onset"),
    ("HP:0003577", "Congenital onset"),
    ("HP:0003623", "Neonatal onset"),
    ("HP:0410280", "Pediatric onset"),
    ("HP:0003593", "Infantile onset"),
    ("HP:0011463", "Childhood onset"),
    ("HP:0003621", "Juvenile onset"),
    ("HP:0003581", "Adult onset"),
    ("HP:0011462", "Young adult onset"),
    ("HP:0003596", "Middle age onset"),
    ("HP:0003584", "Late onset"),
];

/// Lowercase onset label -> onset term id.
static ONSET_BY_LABEL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    ONSET_TERMS
        .iter()
        .map(|(id, label)| (label.to_lowercase(), *id))
        .collect()
});

/// Onset term id -> label.
static ONSET_BY_ID: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ONSET_TERMS.iter().copied().collect());

/// Look up the onset term id for an onset label (case-insensitive).
///
/// Accepts the bare stage name as well, so `"Infantile"` resolves like
/// `"Infantile onset"`.
pub fn onset_term_for_label(label: &str) -> Option<&'static str> {
    let key = label.trim().to_lowercase();
    if let Some(id) = ONSET_BY_LABEL.get(&key) {
        return Some(*id);
    }
    ONSET_BY_LABEL.get(&format!("{key} onset")).copied()
}

/// Label of a known onset term id.
pub fn onset_label_for_id(id: &str) -> Option<&'static str> {
    ONSET_BY_ID.get(id.trim()).copied()
}

/// Grouping key used to partition an individual's annotations.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum OnsetKey {
    /// No onset information was recorded.
    #[default]
    NotProvided,
    /// Onset expressed as an HPO onset term.
    Term(TermId),
    /// Onset expressed as an age string, kept verbatim.
    Age(String),
}

impl OnsetKey {
    /// Classify free onset text.
    ///
    /// Blank text maps to [`OnsetKey::NotProvided`], a known onset label or id to
    /// [`OnsetKey::Term`], and anything else to [`OnsetKey::Age`] with the
    /// trimmed text.
    pub fn from_text(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Self::NotProvided;
        }
        let known = onset_term_for_label(text)
            .or_else(|| ONSET_BY_ID.get_key_value(text).map(|(id, _)| *id));
        if let Some(id) = known
            && let Ok(term) = TermId::new(id)
        {
            return Self::Term(term);
        }
        Self::Age(text.to_string())
    }

    pub fn is_provided(&self) -> bool {
        !matches!(self, Self::NotProvided)
    }
}

impl fmt::Display for OnsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotProvided => f.write_str("not provided"),
            Self::Term(id) => match onset_label_for_id(id.as_str()) {
                Some(label) => write!(f, "{label} ({id})"),
                None => write!(f, "{id}"),
            },
            Self::Age(age) => f.write_str(age),
        }
    }
}
