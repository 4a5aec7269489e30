use super::*;

#[test]
fn test_parse_key_with_sub_part() {
    let key = QuestionKey::parse("Q1A").expect("Q1A should classify");
    assert_eq!(key.main_question, "Q1");
    assert_eq!(key.sub_part, "A");
}

#[test]
fn test_parse_is_case_insensitive() {
    let key = QuestionKey::parse("q2b").expect("q2b should classify");
    assert_eq!(key.main_question, "Q2");
    assert_eq!(key.sub_part, "B");
}

#[test]
fn test_parse_tolerates_separators() {
    let key = QuestionKey::parse("Q.2b").expect("Q.2b should classify");
    assert_eq!(key.main_question, "Q2");
    assert_eq!(key.sub_part, "B");
}

#[test]
fn test_parse_tolerates_dash_separator() {
    let key = QuestionKey::parse("Q-1").expect("Q-1 should classify");
    assert_eq!(key.main_question, "Q1");
    assert_eq!(key.sub_part, "MAIN");
}

#[test]
fn test_parse_multi_digit_main_question() {
    let key = QuestionKey::parse("Q12c").expect("Q12c should classify");
    assert_eq!(key.main_question, "Q12");
    assert_eq!(key.sub_part, "C");
}

#[test]
fn test_parse_without_sub_part_is_main() {
    let key = QuestionKey::parse("Q3").expect("Q3 should classify");
    assert_eq!(key.main_question, "Q3");
    assert_eq!(key.sub_part, "MAIN");
    assert!(key.is_main());
}

#[test]
fn test_parse_trailing_digit_is_main() {
    let key = QuestionKey::parse("Q10").expect("Q10 should classify");
    assert_eq!(key.main_question, "Q10");
    assert_eq!(key.sub_part, "MAIN");
}

#[test]
fn test_parse_rejects_keys_without_question_token() {
    assert!(QuestionKey::parse("Section A").is_none());
    assert!(QuestionKey::parse("1(a)").is_none());
    assert!(QuestionKey::parse("").is_none());
    assert!(QuestionKey::parse("Q").is_none());
    assert!(QuestionKey::parse("QA").is_none());
}

#[test]
fn test_parse_is_deterministic() {
    let first = QuestionKey::parse("Q7d");
    let second = QuestionKey::parse("Q7d");
    assert_eq!(first, second);
}

#[test]
fn test_display_round_trips_canonical_form() {
    assert_eq!(QuestionKey::parse("q1a").unwrap().to_string(), "Q1A");
    assert_eq!(QuestionKey::parse("Q3").unwrap().to_string(), "Q3");
}
