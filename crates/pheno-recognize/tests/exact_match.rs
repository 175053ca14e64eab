mod common;

use pheno_model::{CellValue, CustomDictionary, RecognizerOptions};
use pheno_recognize::{ConceptRecognizer, ExactMatchRecognizer, RecognizeError};

use common::{
    CLONIC_SEIZURE, FETAL_ONSET, FRONTAL_BOSSING, MACROCEPHALY, NASAL_OBSTRUCTION, PICA, SEIZURE,
    catalog, full_catalog, ids,
};

fn recognizer() -> ExactMatchRecognizer {
    ExactMatchRecognizer::new(catalog())
}

fn parse(text: &str) -> Vec<pheno_model::PhenotypeAnnotation> {
    recognizer()
        .parse_text(text, &CustomDictionary::new())
        .expect("parse cell")
}

#[test]
fn longest_match_wins_over_nested_term() {
    let annotations = parse("clonic seizure");
    assert_eq!(ids(&annotations), vec![CLONIC_SEIZURE]);
    assert_eq!(annotations[0].label(), "Clonic seizure");
}

#[test]
fn short_terms_do_not_match_inside_words() {
    assert!(parse("a typical finding").is_empty());
    assert_eq!(ids(&parse("typical pica")), vec![PICA]);
}

#[test]
fn end_to_end_cell_yields_one_annotation_per_term() {
    let annotations = parse("seizures, no nasal obstruction");
    assert_eq!(ids(&annotations), vec![SEIZURE, NASAL_OBSTRUCTION]);
    assert!(annotations.iter().all(|a| a.is_observed() && a.is_measured()));
}

#[test]
fn plural_suffix_can_be_disabled() {
    let recognizer = ExactMatchRecognizer::with_options(
        catalog(),
        RecognizerOptions::default().with_plural_suffix(false),
    );
    let annotations = recognizer
        .parse_text("seizures", &CustomDictionary::new())
        .unwrap();
    assert!(annotations.is_empty());
}

#[test]
fn synonyms_resolve_to_primary_label() {
    let annotations = parse("Epileptic seizure");
    assert_eq!(ids(&annotations), vec![SEIZURE]);
    assert_eq!(annotations[0].label(), "Seizure");
}

#[test]
fn short_synonyms_are_never_matched() {
    assert!(parse("fit").is_empty());
}

#[test]
fn chunks_are_split_on_all_delimiters_and_kept_in_order() {
    let annotations = parse("Pica/Seizure|Nasal obstruction; Macrocephaly");
    assert_eq!(
        ids(&annotations),
        vec![PICA, SEIZURE, NASAL_OBSTRUCTION, MACROCEPHALY]
    );
}

#[test]
fn delimiter_set_is_configurable() {
    let recognizer = ExactMatchRecognizer::with_options(
        catalog(),
        RecognizerOptions::default().with_delimiters(vec![';']),
    );
    let dictionary = CustomDictionary::new().with("pica, seizure", "Macrocephaly");

    // The comma no longer splits, so the snippet spanning it is seen whole.
    let annotations = recognizer.parse_text("x pica, seizure", &dictionary).unwrap();
    assert_eq!(ids(&annotations), vec![MACROCEPHALY]);

    let annotations = recognizer.parse_text("x pica; seizure", &dictionary).unwrap();
    assert_eq!(ids(&annotations), vec![PICA, SEIZURE]);

    let annotations = self::recognizer().parse_text("x pica, seizure", &dictionary).unwrap();
    assert_eq!(ids(&annotations), vec![PICA, SEIZURE]);
}

#[test]
fn later_occurrence_survives_when_first_is_covered() {
    assert_eq!(
        ids(&parse("clonic seizure and seizure")),
        vec![CLONIC_SEIZURE, SEIZURE]
    );
    assert_eq!(ids(&parse("pica and more pica")), vec![PICA, PICA]);
}

#[test]
fn matches_within_a_chunk_follow_text_order() {
    let annotations = parse("nasal obstruction and pica");
    assert_eq!(ids(&annotations), vec![NASAL_OBSTRUCTION, PICA]);
}

#[test]
fn whitespace_and_newlines_are_normalised() {
    let annotations = parse("  Clonic\n\n   SEIZURE ");
    assert_eq!(ids(&annotations), vec![CLONIC_SEIZURE]);
}

#[test]
fn repeated_terms_across_chunks_are_kept() {
    assert_eq!(ids(&parse("seizure, seizure")), vec![SEIZURE, SEIZURE]);
}

#[test]
fn empty_chunks_are_omitted() {
    assert!(parse(" , ; | ").is_empty());
    assert_eq!(ids(&parse("nothing here, pica")), vec![PICA]);
}

#[test]
fn whole_cell_dictionary_match_short_circuits_catalog() {
    let recognizer = ExactMatchRecognizer::new(full_catalog());
    let dictionary = CustomDictionary::new().with("fetus", "Fetal onset");
    let annotations = recognizer.parse_text("Fetus", &dictionary).unwrap();
    assert_eq!(ids(&annotations), vec![FETAL_ONSET]);

    let dictionary = CustomDictionary::new().with("clonic seizure", "Seizure");
    let annotations = recognizer.parse_text("Clonic  Seizure", &dictionary).unwrap();
    assert_eq!(ids(&annotations), vec![SEIZURE]);
}

#[test]
fn whole_cell_dictionary_match_may_map_to_several_labels() {
    let dictionary = CustomDictionary::new()
        .with("big head", "Macrocephaly")
        .with("big head", "Frontal bossing");
    let annotations = recognizer().parse_text("Big head", &dictionary).unwrap();
    assert_eq!(ids(&annotations), vec![MACROCEPHALY, FRONTAL_BOSSING]);
}

#[test]
fn dictionary_substring_labels_are_accepted_together() {
    let dictionary = CustomDictionary::new()
        .with("big head", "Macrocephaly")
        .with("big head", "Frontal bossing");
    let annotations = recognizer()
        .parse_text("very big head and pica", &dictionary)
        .unwrap();
    assert_eq!(ids(&annotations), vec![MACROCEPHALY, FRONTAL_BOSSING, PICA]);
}

#[test]
fn dictionary_wins_equal_length_ties() {
    let dictionary = CustomDictionary::new().with("pica", "Seizure");
    let annotations = recognizer()
        .parse_text("pica; nasal obstruction", &dictionary)
        .unwrap();
    assert_eq!(ids(&annotations), vec![SEIZURE, NASAL_OBSTRUCTION]);
}

#[test]
fn longer_catalog_match_beats_shorter_dictionary_snippet() {
    let dictionary = CustomDictionary::new().with("clonic", "Pica");
    let annotations = recognizer()
        .parse_text("clonic seizure, x", &dictionary)
        .unwrap();
    assert_eq!(ids(&annotations), vec![CLONIC_SEIZURE]);
}

#[test]
fn unresolvable_dictionary_label_is_fatal() {
    let dictionary = CustomDictionary::new().with("fits", "Not a term");
    let err = recognizer().parse_text("fits", &dictionary).unwrap_err();
    assert!(matches!(
        err,
        RecognizeError::UnresolvableCustomMapping { ref label, .. } if label == "Not a term"
    ));

    let err = recognizer()
        .parse_text("pica, frequent fits", &dictionary)
        .unwrap_err();
    assert!(matches!(err, RecognizeError::UnresolvableCustomMapping { .. }));
}

#[test]
fn non_text_cells_are_coerced() {
    let recognizer = recognizer();
    let dictionary = CustomDictionary::new().with("1", "Pica");
    let annotations = recognizer
        .parse_cell(&CellValue::Integer(1), &dictionary)
        .unwrap();
    assert_eq!(ids(&annotations), vec![PICA]);

    let annotations = recognizer
        .parse_cell(&CellValue::Bool(true), &CustomDictionary::new())
        .unwrap();
    assert!(annotations.is_empty());
}

#[test]
fn missing_cells_yield_nothing() {
    let annotations = recognizer()
        .parse_cell(&CellValue::Missing, &CustomDictionary::new())
        .unwrap();
    assert!(annotations.is_empty());
}

#[test]
fn recognizer_is_deterministic() {
    let first = parse("clonic seizure; pica / seizures, nasal obstruction");
    for _ in 0..5 {
        assert_eq!(parse("clonic seizure; pica / seizures, nasal obstruction"), first);
    }
}
