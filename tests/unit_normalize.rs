// Unit tests for text normalization.
//
// Exercises the four normalization steps (NFKC folding, leetspeak
// substitution, zero-width stripping, lowercasing) and the idempotence
// guarantee the matcher relies on.

use bleep::normalize::normalize;

// ============================================================
// Leetspeak substitution
// ============================================================

#[test]
fn leet_digits_fold_to_letters() {
    assert_eq!(normalize("5h1t"), "shit");
    assert_eq!(normalize("$h!7"), "shit");
    assert_eq!(normalize("48370"), "abeto");
}

#[test]
fn leet_at_sign_folds_to_a() {
    assert_eq!(normalize("@ss"), "ass");
}

#[test]
fn unmapped_symbols_pass_through() {
    assert_eq!(normalize("c#%&2"), "c#%&2");
}

// ============================================================
// Zero-width stripping
// ============================================================

#[test]
fn zero_width_space_is_removed() {
    assert_eq!(normalize("sh\u{200B}it"), "shit");
}

#[test]
fn zwnj_zwj_and_bom_are_removed() {
    assert_eq!(normalize("s\u{200C}h\u{200D}i\u{FEFF}t"), "shit");
}

#[test]
fn other_whitespace_is_preserved() {
    assert_eq!(normalize("a b\tc"), "a b\tc");
}

// ============================================================
// NFKC compatibility folding
// ============================================================

#[test]
fn fullwidth_letters_fold_to_ascii() {
    assert_eq!(normalize("\u{FF53}\u{FF48}\u{FF49}\u{FF54}"), "shit");
}

#[test]
fn fullwidth_uppercase_folds_then_lowercases() {
    assert_eq!(normalize("\u{FF33}\u{FF28}\u{FF29}\u{FF34}"), "shit");
}

#[test]
fn circled_digit_folds_then_leet_substitutes() {
    // NFKC turns U+2460 into "1", which the leet table then reads as "i".
    assert_eq!(normalize("\u{2460}"), "i");
}

// ============================================================
// Case folding
// ============================================================

#[test]
fn mixed_case_lowercases() {
    assert_eq!(normalize("ShIt"), "shit");
    assert_eq!(normalize("SHIT"), "shit");
}

#[test]
fn caseless_scripts_pass_through() {
    assert_eq!(normalize("\u{0627}\u{062D}\u{0645}\u{0642}"), "\u{0627}\u{062D}\u{0645}\u{0642}");
}

// ============================================================
// Purity and idempotence
// ============================================================

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(normalize(""), "");
}

#[test]
fn replacement_char_is_ordinary_text() {
    // Malformed bytes decoded upstream arrive as U+FFFD; they must flow
    // through without error.
    assert_eq!(normalize("a\u{FFFD}b"), "a\u{FFFD}b");
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "",
        "plain ascii text",
        "5h1t and $h!7",
        "MiXeD CaSe",
        "sh\u{200B}it with tricks",
        "\u{FF53}\u{FF48}\u{FF49}\u{FF54} fullwidth",
        "\u{0627}\u{062D}\u{0645}\u{0642} Persian insult",
        "emoji \u{1F600} and accents \u{00E9}\u{00E8}",
        "\u{2460}\u{2461}\u{2462} circled",
    ];
    for sample in samples {
        let once = normalize(sample);
        let twice = normalize(&once);
        assert_eq!(once, twice, "normalize not idempotent for {sample:?}");
    }
}
