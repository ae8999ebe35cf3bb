//! End-to-end classification scenarios
//!
//! Each test classifies a small VB.NET snippet with the built-in patterns
//! and verifies the exact span partition, including the cases where a
//! higher-priority category must suppress everything beneath it.

use rstest::rstest;
use vbtint::vb::classify::{classify, classify_vb};
use vbtint::vb::lexeme::LexemeCategory;
use vbtint::vb::patterns::MatcherSet;
use vbtint::vb::render::fragments;

/// Helper: classify and flatten to `(category, start, len)` triples in
/// ascending start order.
fn spans_of(source: &str) -> Vec<(LexemeCategory, usize, usize)> {
    let mut table = classify_vb(source).expect("classification must succeed");
    table
        .ordered_view()
        .iter()
        .map(|span| (span.category, span.start, span.len))
        .collect()
}

#[test]
fn statement_with_trailing_comment() {
    // Dim x = 5 ' set x
    assert_eq!(
        spans_of("Dim x = 5 ' set x"),
        vec![
            (LexemeCategory::Keyword, 0, 3),
            (LexemeCategory::Identifier, 4, 1),
            (LexemeCategory::Operator, 6, 1),
            (LexemeCategory::Number, 8, 1),
            (LexemeCategory::Comment, 10, 7),
        ]
    );
}

#[test]
fn full_line_comment_suppresses_its_contents() {
    assert_eq!(
        spans_of("' Dim x = 5"),
        vec![(LexemeCategory::Comment, 0, 11)]
    );
}

#[test]
fn string_literal_suppresses_a_keyword_lookalike() {
    assert_eq!(spans_of("\"Dim\""), vec![(LexemeCategory::StrChar, 0, 5)]);
}

#[test]
fn empty_text_classifies_to_an_empty_table() {
    assert_eq!(spans_of(""), vec![]);
}

#[test]
fn adjacent_spans_with_no_gaps() {
    assert_eq!(
        spans_of("1+2"),
        vec![
            (LexemeCategory::Number, 0, 1),
            (LexemeCategory::Operator, 1, 1),
            (LexemeCategory::Number, 2, 1),
        ]
    );
}

#[test]
fn directive_is_not_fragmented_by_smaller_matches() {
    let source = "#Region \"Setup\"\nDim x = 1\n#End Region";
    assert_eq!(
        spans_of(source),
        vec![(LexemeCategory::Directive, 0, source.len())]
    );
}

#[test]
fn keyword_substring_of_an_identifier_wins_by_priority() {
    // No leading boundary in the keyword data, and keywords run before
    // identifiers: the embedded "Dim" claims its range and the longer
    // identifier candidate is rejected whole.
    assert_eq!(
        spans_of("MyDim x"),
        vec![
            (LexemeCategory::Keyword, 2, 3),
            (LexemeCategory::Identifier, 6, 1),
        ]
    );
}

/// For any two categories A before B in priority order, when both matchers
/// produce a candidate covering the same range, A's span survives.
#[rstest]
#[case(LexemeCategory::Directive, LexemeCategory::Comment)]
#[case(LexemeCategory::Comment, LexemeCategory::StrChar)]
#[case(LexemeCategory::StrChar, LexemeCategory::Number)]
#[case(LexemeCategory::Number, LexemeCategory::Operator)]
#[case(LexemeCategory::Operator, LexemeCategory::Keyword)]
#[case(LexemeCategory::Keyword, LexemeCategory::Identifier)]
#[case(LexemeCategory::Identifier, LexemeCategory::Delimiter)]
fn earlier_category_always_wins(
    #[case] earlier: LexemeCategory,
    #[case] later: LexemeCategory,
) {
    let set = MatcherSet::from_patterns(&[(earlier, r"(abc)"), (later, r"(abc)")])
        .expect("literal patterns compile");

    let mut table = classify("abc abc", &set).expect("classification must succeed");
    let categories: Vec<LexemeCategory> =
        table.ordered_view().iter().map(|s| s.category).collect();
    assert_eq!(categories, vec![earlier, earlier]);
}

#[test]
fn zero_length_candidate_fails_the_whole_run() {
    let set = MatcherSet::from_patterns(&[
        (LexemeCategory::Keyword, r"(abc)"),
        (LexemeCategory::Identifier, r"(b*)"),
    ])
    .expect("patterns compile");

    let err = classify("abc", &set).unwrap_err();
    assert_eq!(err.category, LexemeCategory::Identifier);
    // No partial table is observable; the run produced only the error.
}

#[test]
fn scenario_rendering_reconstructs_the_source() {
    let source = "Dim x = 5 ' set x";
    let mut table = classify_vb(source).expect("classification must succeed");
    let rebuilt: String = fragments(source, &mut table)
        .iter()
        .map(|f| f.text)
        .collect();
    assert_eq!(rebuilt, source);
}
