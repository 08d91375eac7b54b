// Text normalization — the canonical form all matching runs against.
//
// Raw input goes through four steps: NFKC compatibility folding,
// leetspeak substitution, zero-width character removal, and
// lowercasing. The result is a pure function of the input, so two
// checks of the same text always see the same normalized form.

use unicode_normalization::UnicodeNormalization;

/// Fold a single leetspeak character into the letter it imitates.
/// Unmapped characters pass through unchanged.
///
/// The table is fixed: `4,@→a  8→b  3→e  1,!→i  0→o  $,5→s  7→t`.
fn fold_leet(c: char) -> char {
    match c {
        '4' | '@' => 'a',
        '8' => 'b',
        '3' => 'e',
        '1' | '!' => 'i',
        '0' => 'o',
        '$' | '5' => 's',
        '7' => 't',
        other => other,
    }
}

/// Zero-width characters used to split words without changing how the
/// text renders: ZWSP, ZWNJ, ZWJ, and the BOM.
fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}')
}

/// Canonicalize raw text for matching.
///
/// Idempotent: `normalize(normalize(x)) == normalize(x)`. Total over any
/// `&str` — malformed input decoded upstream arrives as U+FFFD and flows
/// through like ordinary (unmatched) text. Scripts without case or the
/// mapped symbols pass through the last three steps largely unchanged.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfkc() {
        if is_zero_width(c) {
            continue;
        }
        for lower in fold_leet(c).to_lowercase() {
            out.push(lower);
        }
    }
    out
}
