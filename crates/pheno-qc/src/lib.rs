//! Ontology-aware cleaning of one individual's phenotype annotations.
//!
//! The cleaner partitions annotations by onset and, inside each onset,
//! removes duplicates, terms implied by a more specific term of the same
//! status, and excluded terms contradicted by an observed descendant. Every
//! change is reported as a [`Diagnostic`]; cleaning itself never fails.

#![deny(unsafe_code)]

mod checks;

use std::collections::BTreeMap;

use pheno_model::{
    Diagnostic, DiagnosticCategory, IndividualAnnotations, OnsetKey, PhenotypeAnnotation,
    QcOptions, QcReport,
};
use pheno_ontology::OntologyGraph;
use serde::Serialize;
use tracing::{debug, info};

use crate::checks::{Bucket, Entry};

/// Result of one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanedAnnotations {
    /// Kept annotations, in input order.
    pub annotations: Vec<PhenotypeAnnotation>,
    pub report: QcReport,
}

impl CleanedAnnotations {
    pub fn into_parts(self) -> (Vec<PhenotypeAnnotation>, Vec<Diagnostic>) {
        (self.annotations, self.report.diagnostics)
    }
}

/// Cleans annotation collections against a read-only ontology.
#[derive(Debug)]
pub struct AnnotationCleaner<'a, G: OntologyGraph + ?Sized> {
    ontology: &'a G,
    options: QcOptions,
}

impl<'a, G: OntologyGraph + ?Sized> AnnotationCleaner<'a, G> {
    pub fn new(ontology: &'a G) -> Self {
        Self::with_options(ontology, QcOptions::default())
    }

    pub fn with_options(ontology: &'a G, options: QcOptions) -> Self {
        Self { ontology, options }
    }

    pub fn options(&self) -> &QcOptions {
        &self.options
    }

    /// Clean one individual's full annotation collection.
    pub fn clean(&self, annotations: &[PhenotypeAnnotation]) -> CleanedAnnotations {
        let mut diagnostics = Vec::new();
        let mut kept: Vec<(usize, PhenotypeAnnotation)> = Vec::with_capacity(annotations.len());
        let mut buckets: BTreeMap<&OnsetKey, Bucket<'_>> = BTreeMap::new();

        for (index, annotation) in annotations.iter().enumerate() {
            if !annotation.is_measured() {
                if self.options.report_not_measured {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticCategory::NotMeasured,
                        annotation.clone(),
                        format!("'{}' was not measured", annotation.label()),
                    ));
                }
                kept.push((index, annotation.clone()));
                continue;
            }
            let Some(checked) =
                checks::labels::check(self.ontology, annotation, &self.options, &mut diagnostics)
            else {
                continue;
            };
            buckets.entry(annotation.onset()).or_default().push(Entry {
                index,
                source: annotation,
                annotation: checked,
            });
        }

        for (onset, bucket) in buckets {
            let observed = bucket.observed.len();
            let excluded = bucket.excluded.len();
            let cleaned = checks::clean_bucket(self.ontology, bucket, &mut diagnostics);
            debug!(
                onset = %onset,
                observed,
                excluded,
                kept = cleaned.len(),
                "cleaned onset bucket"
            );
            kept.extend(
                cleaned
                    .into_iter()
                    .map(|entry| (entry.index, entry.annotation)),
            );
        }

        kept.sort_by_key(|(index, _)| *index);
        let annotations_out: Vec<PhenotypeAnnotation> =
            kept.into_iter().map(|(_, annotation)| annotation).collect();
        let report = QcReport::new(diagnostics);

        info!(
            input = annotations.len(),
            kept = annotations_out.len(),
            removed = annotations.len() - annotations_out.len(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "annotation cleaning finished"
        );

        CleanedAnnotations {
            annotations: annotations_out,
            report,
        }
    }

    /// Clean an individual's collection in place and return the report.
    pub fn clean_individual(&self, individual: &mut IndividualAnnotations) -> QcReport {
        let cleaned = self.clean(&individual.annotations);
        debug!(
            individual = %individual.individual_id,
            diagnostics = cleaned.report.len(),
            "cleaned individual"
        );
        individual.replace(cleaned.annotations);
        cleaned.report
    }
}

/// Clean `annotations` with default options.
pub fn clean<G>(
    ontology: &G,
    annotations: &[PhenotypeAnnotation],
) -> (Vec<PhenotypeAnnotation>, Vec<Diagnostic>)
where
    G: OntologyGraph + ?Sized,
{
    AnnotationCleaner::new(ontology).clean(annotations).into_parts()
}
