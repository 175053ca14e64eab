use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PhenotypeAnnotation, TermId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Kind of data-quality condition found by the annotation cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCategory {
    /// Identical annotation recorded more than once.
    Duplicate,
    /// Implied by a more specific annotation with the same status.
    Redundant,
    /// Excluded term contradicted by an observed descendant.
    Conflict,
    /// Term id not present in the ontology.
    MalformedId,
    /// Label differs from the ontology's primary label.
    MalformedLabel,
    /// Annotation was not measured and took no part in the comparison.
    NotMeasured,
}

impl DiagnosticCategory {
    pub const ALL: [Self; 6] = [
        Self::Duplicate,
        Self::Redundant,
        Self::Conflict,
        Self::MalformedId,
        Self::MalformedLabel,
        Self::NotMeasured,
    ];

    pub fn severity(&self) -> Severity {
        match self {
            Self::NotMeasured => Severity::Info,
            Self::Duplicate | Self::Redundant | Self::MalformedLabel => Severity::Warning,
            Self::Conflict | Self::MalformedId => Severity::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duplicate => "DUPLICATE",
            Self::Redundant => "REDUNDANT",
            Self::Conflict => "CONFLICT",
            Self::MalformedId => "MALFORMED_ID",
            Self::MalformedLabel => "MALFORMED_LABEL",
            Self::NotMeasured => "NOT_MEASURED",
        }
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding about one input annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub severity: Severity,
    /// The annotation the diagnostic is about (as it was received).
    pub term: PhenotypeAnnotation,
    /// The other term responsible, e.g. the descendant that makes `term` redundant.
    pub related: Option<TermId>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        category: DiagnosticCategory,
        term: PhenotypeAnnotation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity: category.severity(),
            term,
            related: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_related(mut self, related: TermId) -> Self {
        self.related = Some(related);
        self
    }

    /// True for diagnostics that describe a change to the collection.
    pub fn is_corrective(&self) -> bool {
        self.severity != Severity::Info
    }
}

/// Diagnostics of one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QcReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl QcReport {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn count(&self, category: DiagnosticCategory) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.category == category)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn corrective(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|diagnostic| diagnostic.is_corrective())
    }

    /// Per-category counts followed by one line per diagnostic.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let counts: Vec<String> = DiagnosticCategory::ALL
            .iter()
            .filter_map(|category| {
                let count = self.count(*category);
                (count > 0).then(|| format!("{category}={count}"))
            })
            .collect();
        if counts.is_empty() {
            out.push_str("no diagnostics");
            return out;
        }
        out.push_str(&counts.join(" "));
        for diagnostic in &self.diagnostics {
            out.push('\n');
            out.push_str(&format!(
                "[{}] {} {}: {}",
                diagnostic.severity.label(),
                diagnostic.category,
                diagnostic.term.id(),
                diagnostic.message
            ));
        }
        out
    }
}
