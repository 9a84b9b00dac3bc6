//! End-to-end checks of Analyze and Compare through the umbrella crate.

use docsim::{similarity, DocsimConfig, DocumentPipeline, MatchConfig, PipelineError};

fn pipeline() -> DocumentPipeline {
    DocumentPipeline::in_memory(MatchConfig::default()).expect("default policy is valid")
}

#[test]
fn word_counting_scenario() {
    let record = pipeline().analyze(b"Hello, hello world!\n\nBye.").unwrap();

    assert_eq!(record.word_count, 4);
    assert_eq!(record.unique_word_count, 3);
    assert_eq!(record.paragraph_count, 2);
    assert_eq!(record.count_of("hello"), 2);
    assert_eq!(record.count_of("world"), 1);
    assert_eq!(record.count_of("bye"), 1);
    assert_eq!(record.word_frequency.len(), 3);
}

#[test]
fn empty_input_scenario() {
    let record = pipeline().analyze(b"").unwrap();

    assert_eq!(record.char_count, 0);
    assert_eq!(record.word_count, 0);
    assert_eq!(record.unique_word_count, 0);
    assert_eq!(record.paragraph_count, 0);
}

#[test]
fn reanalysis_is_idempotent() {
    let pipeline = pipeline();
    let first = pipeline.analyze(b"same bytes").unwrap();
    let second = pipeline.analyze(b"same bytes").unwrap();

    assert_eq!(first, second);
    assert_eq!(pipeline.index().len(), 1);
}

#[test]
fn exact_duplicate_scenario() {
    let pipeline = pipeline();
    let first = pipeline.analyze(b"The quick fox").unwrap();
    let second = pipeline.analyze(b"The quick fox").unwrap();
    assert_eq!(similarity(&first, &second), 100.0);

    // Same bytes share a fingerprint; a different rendering of the same words
    // is a distinct document that still scores 100.
    let variant = pipeline.analyze(b"the quick fox.").unwrap();
    let from_first = pipeline.compare(&first.fingerprint).unwrap();
    let from_variant = pipeline.compare(&variant.fingerprint).unwrap();

    assert_eq!(from_first.get(&variant.fingerprint), Some(&100.0));
    assert_eq!(from_variant.get(&first.fingerprint), Some(&100.0));
}

#[test]
fn disjoint_vocabulary_scenario() {
    let pipeline = pipeline();
    let a = pipeline.analyze(b"alpha beta").unwrap();
    let b = pipeline.analyze(b"gamma delta").unwrap();

    assert_eq!(similarity(&a, &b), 0.0);
    assert!(pipeline.compare(&a.fingerprint).unwrap().is_empty());
}

#[test]
fn graded_policy_reports_partial_overlap() {
    let pipeline = pipeline();
    let a = pipeline.analyze(b"one two three four").unwrap();
    let b = pipeline.analyze(b"one two three five").unwrap();
    let c = pipeline.analyze(b"six seven").unwrap();

    let scores = pipeline
        .compare_with(&a.fingerprint, &MatchConfig::default().with_min_score(50.0))
        .unwrap();

    assert_eq!(scores.len(), 1);
    assert_eq!(scores[&b.fingerprint], 75.0);
    assert!(!scores.contains_key(&c.fingerprint));
}

#[test]
fn yaml_policy_flows_into_compare() {
    let cfg = DocsimConfig::from_yaml(
        r#"
version: "1.0"
matcher:
  min_score: 0
  max_results: 1
"#,
    )
    .unwrap();
    let pipeline = DocumentPipeline::from_config(&cfg).unwrap();
    let a = pipeline.analyze(b"red green blue").unwrap();
    let b = pipeline.analyze(b"red green yellow").unwrap();
    pipeline.analyze(b"cyan magenta").unwrap();

    let scores = pipeline.compare(&a.fingerprint).unwrap();
    assert_eq!(scores.len(), 1);
    assert!(scores.contains_key(&b.fingerprint));
}

#[test]
fn unknown_fingerprint_scenario() {
    let err = pipeline().compare("deadbeef").unwrap_err();
    assert_eq!(err, PipelineError::NotFound("deadbeef".into()));
}
