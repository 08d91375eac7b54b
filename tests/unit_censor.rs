// Unit tests for the censor.
//
// The censor rewrites the original, pre-normalization text: literal,
// case-insensitive occurrences of each canonical term are masked with
// length preserved. Spellings that only matched after normalization are
// deliberately left visible — that behavior is pinned here.

use bleep::censor::censor;

// ============================================================
// Basic masking
// ============================================================

#[test]
fn single_occurrence_is_masked() {
    assert_eq!(censor("this is shit", ["shit"], '*'), "this is ****");
}

#[test]
fn mask_length_equals_term_length() {
    assert_eq!(censor("merde alors", ["merde"], '*'), "***** alors");
}

#[test]
fn every_occurrence_is_masked() {
    assert_eq!(censor("shit and shit", ["shit"], '*'), "**** and ****");
}

#[test]
fn custom_mask_character_is_used() {
    assert_eq!(censor("this is shit", ["shit"], '#'), "this is ####");
}

#[test]
fn no_occurrence_leaves_text_unchanged() {
    assert_eq!(censor("a clean sentence", ["shit"], '*'), "a clean sentence");
}

#[test]
fn empty_term_set_leaves_text_unchanged() {
    let empty: [&str; 0] = [];
    assert_eq!(censor("anything at all", empty, '*'), "anything at all");
}

// ============================================================
// Case-insensitivity
// ============================================================

#[test]
fn uppercase_occurrence_is_masked() {
    assert_eq!(censor("SHIT happens", ["shit"], '*'), "**** happens");
}

#[test]
fn mixed_case_occurrence_is_masked() {
    assert_eq!(censor("ShIt happens", ["shit"], '*'), "**** happens");
}

// ============================================================
// Deterministic multi-term ordering
// ============================================================

#[test]
fn terms_apply_in_lexicographic_order() {
    // "ass" is applied before "asshole", so the prefix of "asshole" is
    // already masked when the longer term's pass runs. The platform's
    // original behavior, reproduced deliberately.
    assert_eq!(censor("ass asshole", ["asshole", "ass"], '*'), "*** ***hole");
}

#[test]
fn disjoint_terms_all_mask() {
    assert_eq!(
        censor("shit and merde", ["merde", "shit"], '*'),
        "**** and *****"
    );
}

#[test]
fn duplicate_terms_mask_once() {
    assert_eq!(censor("this is shit", ["shit", "shit"], '*'), "this is ****");
}

// ============================================================
// Obfuscated spellings stay visible
// ============================================================

#[test]
fn leet_spelling_is_not_masked() {
    // "shit" was detected from the normalized form, but the literal
    // canonical term does not occur in the original text.
    assert_eq!(censor("5h1t", ["shit"], '*'), "5h1t");
}

#[test]
fn zero_width_split_spelling_is_not_masked() {
    let original = "sh\u{200B}it";
    assert_eq!(censor(original, ["shit"], '*'), original);
}

// ============================================================
// Unicode and span behavior
// ============================================================

#[test]
fn mask_counts_characters_not_bytes() {
    // Two-character Arabic-script term inside ASCII-delimited text.
    assert_eq!(censor("oh \u{062E}\u{0631} no", ["\u{062E}\u{0631}"], '*'), "oh ** no");
}

#[test]
fn surrounding_text_is_untouched() {
    assert_eq!(
        censor("caf\u{00E9} shit caf\u{00E9}", ["shit"], '*'),
        "caf\u{00E9} **** caf\u{00E9}"
    );
}

#[test]
fn substring_occurrences_are_masked_without_boundaries() {
    // The censor is boundary-blind by design: it masks literal
    // occurrences wherever they appear, even mid-word. Boundary
    // decisions belong to the matcher.
    assert_eq!(censor("classy", ["ass"], '*'), "cl***y");
}

#[test]
fn overlapping_occurrences_mask_non_overlapping_left_to_right() {
    // "aaa" in "aaaa": first pass masks 0..3, scan resumes at 3.
    assert_eq!(censor("aaaa", ["aaa"], '*'), "***a");
}
