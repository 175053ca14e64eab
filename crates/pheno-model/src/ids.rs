#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Canonical ontology term identifier such as `HP:0001166`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TermId(String);

impl TermId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        match trimmed.split_once(':') {
            Some((prefix, local))
                if !prefix.is_empty() && !local.is_empty() && !local.contains(':') =>
            {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ModelError::InvalidTermId(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part of the identifier (`HP` for `HP:0001166`).
    pub fn prefix(&self) -> &str {
        self.0.split_once(':').map_or("", |(prefix, _)| prefix)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TermId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TermId {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TermId> for String {
    fn from(value: TermId) -> Self {
        value.0
    }
}

impl AsRef<str> for TermId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_ids() {
        let id = TermId::new(" HP:0001250 ").unwrap();
        assert_eq!(id.as_str(), "HP:0001250");
        assert_eq!(id.prefix(), "HP");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "HP", "HP:", ":0001250", "HP:1:2"] {
            assert!(TermId::new(raw).is_err(), "{raw} should be rejected");
        }
    }
}
