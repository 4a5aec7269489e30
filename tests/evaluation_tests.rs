//! End-to-end evaluation tests over the stub embedding backend.

use rubric::{AnswerSet, Config, EvaluationEngine, EvaluationError};

fn answer_set(entries: &[(&str, &str)]) -> AnswerSet {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn engine_with(config: Config) -> EvaluationEngine {
    EvaluationEngine::from_config(config).expect("engine should construct in stub mode")
}

#[test]
fn test_full_paper_breakdown_shape() {
    let engine = engine_with(Config::default());

    let model = answer_set(&[
        ("Q1A", "Photosynthesis converts light energy into chemical energy"),
        ("Q1B", "Chlorophyll absorbs red and blue light"),
        ("Q2A", "Mitochondria produce ATP through respiration"),
        ("Q2", "Cells are the basic unit of life"),
        ("margin note", "not a question"),
    ]);
    let student = answer_set(&[("Q1A", "Photosynthesis turns light into chemical energy")]);

    let result = engine.evaluate(&model, &student).expect("evaluation should succeed");

    // Two sections from four classifiable keys; the noise key is dropped.
    assert_eq!(result.score_breakdown.len(), 2);
    assert_eq!(result.score_breakdown["Q1"].len(), 2);
    assert_eq!(result.score_breakdown["Q2"].len(), 2);
    assert!(result.score_breakdown["Q2"].contains_key("MAIN"));
    assert!(result.score_breakdown["Q2"].contains_key("A"));
}

#[test]
fn test_identical_submission_scores_capped_sections() {
    let config = Config {
        semantic_weight: 0.5,
        thematic_weight: 0.5,
        marks_per_sub_question: 7.5,
        max_sub_questions_per_section: 2,
        ..Default::default()
    };
    let engine = engine_with(config);

    let model = answer_set(&[
        ("Q1A", "The sky is blue"),
        ("Q1B", "Water boils at 100C"),
        ("Q1C", "Sound needs a medium"),
        ("Q2A", "Force equals mass times acceleration"),
    ]);
    let student = model.clone();

    let result = engine.evaluate(&model, &student).expect("evaluation should succeed");

    // Q1 contributes its best two of three perfect 7.5s, Q2 its single one.
    assert!(
        (result.total_marks - 22.5).abs() < 0.05,
        "Expected ~22.5, got {}",
        result.total_marks
    );
}

#[test]
fn test_partial_submission_matches_spec_example() {
    let config = Config {
        semantic_weight: 0.5,
        thematic_weight: 0.5,
        marks_per_sub_question: 7.5,
        max_sub_questions_per_section: 2,
        ..Default::default()
    };
    let engine = engine_with(config);

    let model = answer_set(&[("Q1A", "The sky is blue"), ("Q1B", "Water boils at 100C")]);
    let student = answer_set(&[("Q1A", "The sky is blue")]);

    let result = engine.evaluate(&model, &student).expect("evaluation should succeed");

    let q1a = result.mark("Q1", "A").expect("Q1A slot should exist");
    assert!((q1a - 7.5).abs() < 0.05, "Expected ~7.5, got {q1a}");
    assert_eq!(result.mark("Q1", "B"), Some(0.0));
    assert!((result.total_marks - q1a).abs() < 0.001);
}

#[test]
fn test_synonym_rewording_still_scores_thematically() {
    // Weight only the thematic signal so the stub's semantic noise does not
    // affect the assertion.
    let config = Config {
        semantic_weight: 0.0,
        thematic_weight: 1.0,
        marks_per_sub_question: 10.0,
        ..Default::default()
    };
    let engine = engine_with(config);

    let model = answer_set(&[("Q1A", "a quick fox")]);
    let student = answer_set(&[("Q1A", "a fast fox")]);

    let result = engine.evaluate(&model, &student).expect("evaluation should succeed");

    let q1a = result.mark("Q1", "A").expect("Q1A slot should exist");
    assert!((q1a - 10.0).abs() < 0.01, "Synonym rewording should score ~10.0, got {q1a}");
}

#[test]
fn test_missing_student_sheet_scores_zero_everywhere() {
    let engine = engine_with(Config::default());

    let model = answer_set(&[("Q1A", "The sky is blue"), ("Q2B", "Water boils at 100C")]);

    let result = engine
        .evaluate(&model, &AnswerSet::new())
        .expect("missing student answers are not an error");

    assert_eq!(result.total_marks, 0.0);
    for section in result.score_breakdown.values() {
        for mark in section.values() {
            assert_eq!(*mark, 0.0);
        }
    }
}

#[test]
fn test_missing_model_sheet_is_an_error() {
    let engine = engine_with(Config::default());
    let student = answer_set(&[("Q1A", "The sky is blue")]);

    let result = engine.evaluate(&AnswerSet::new(), &student);
    assert!(matches!(result, Err(EvaluationError::NoModelAnswers)));
}

#[test]
fn test_repeated_evaluations_are_identical() {
    let engine = engine_with(Config::default());

    let model = answer_set(&[
        ("Q1A", "Gravity attracts mass"),
        ("Q1B", "Light bends near massive objects"),
        ("Q2", "Entropy never decreases in a closed system"),
    ]);
    let student = answer_set(&[
        ("Q1A", "Mass attracts other mass through gravity"),
        ("Q2", "In a closed system entropy never decreases"),
    ]);

    let first = engine.evaluate(&model, &student).expect("first run");
    let second = engine.evaluate(&model, &student).expect("second run");
    let third = engine.evaluate(&model, &student).expect("third run");

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_concurrent_evaluations_share_the_engine() {
    let engine = std::sync::Arc::new(engine_with(Config::default()));

    let model = answer_set(&[("Q1A", "The sky is blue"), ("Q1B", "Water boils at 100C")]);
    let student = answer_set(&[("Q1A", "The sky is blue")]);

    let expected = engine.evaluate(&model, &student).expect("baseline run");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = std::sync::Arc::clone(&engine);
            let model = model.clone();
            let student = student.clone();
            std::thread::spawn(move || engine.evaluate(&model, &student).expect("threaded run"))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("thread should not panic");
        assert_eq!(result, expected);
    }
}
