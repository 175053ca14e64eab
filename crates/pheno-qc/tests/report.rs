mod common;

use pheno_model::{PhenotypeAnnotation, Severity};
use pheno_qc::AnnotationCleaner;

use common::{CLONIC_SEIZURE, PICA, SEIZURE, id, ontology, term};

fn mixed_input() -> Vec<PhenotypeAnnotation> {
    vec![
        PhenotypeAnnotation::new(id("HP:9999999"), "Mystery"),
        term(SEIZURE),
        term(CLONIC_SEIZURE),
        term(PICA),
        term(PICA),
        term(PICA).not_measured(),
    ]
}

#[test]
fn summary_lists_counts_then_diagnostics() {
    let ontology = ontology();
    let cleaned = AnnotationCleaner::new(&ontology).clean(&mixed_input());
    insta::assert_snapshot!(cleaned.report.summary(), @r"
    DUPLICATE=1 REDUNDANT=1 MALFORMED_ID=1 NOT_MEASURED=1
    [Error] MALFORMED_ID HP:9999999: term id is not present in the ontology
    [Info] NOT_MEASURED HP:0011856: 'Pica' was not measured
    [Warning] DUPLICATE HP:0011856: 'Pica' recorded more than once
    [Warning] REDUNDANT HP:0001250: 'Seizure' is implied by 'Clonic seizure' (HP:0020221)
    ");
}

#[test]
fn report_severity_counts() {
    let ontology = ontology();
    let report = AnnotationCleaner::new(&ontology).clean(&mixed_input()).report;
    assert_eq!(report.len(), 4);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 2);
    assert_eq!(report.corrective().count(), 3);
    assert!(report.has_errors());
}

#[test]
fn diagnostics_serialize_for_reporting() {
    let ontology = ontology();
    let cleaned = AnnotationCleaner::new(&ontology).clean(&[term(SEIZURE), term(CLONIC_SEIZURE)]);
    let diagnostic = &cleaned.report.diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Warning);

    let json = serde_json::to_value(&cleaned).unwrap();
    let first = &json["report"]["diagnostics"][0];
    assert_eq!(first["category"], "REDUNDANT");
    assert_eq!(first["severity"], "warning");
    assert_eq!(first["related"], CLONIC_SEIZURE);
    assert_eq!(first["term"]["label"], "Seizure");
    assert_eq!(json["annotations"][0]["id"], CLONIC_SEIZURE);
}
