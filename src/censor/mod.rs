// Censoring — masking literal occurrences of matched terms.
//
// The censor rewrites the original, pre-normalization text: each
// matched term is searched for case-insensitively as a literal string
// and every occurrence is overwritten with a run of the mask character,
// preserving the span's length. Spellings that only matched after
// normalization (leetspeak digits, zero-width splits) are flagged
// upstream but left visible here — the canonical term never literally
// occurs in the original, so there is no span to rewrite.

/// Mask every literal, case-insensitive occurrence of each term in
/// `original`. Terms are applied in lexicographic order, each pass
/// rewriting the output of the previous one, so the result is
/// deterministic regardless of how the match set was produced.
pub fn censor<'a, I>(original: &str, terms: I, mask: char) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut terms: Vec<&str> = terms.into_iter().collect();
    terms.sort_unstable();
    terms.dedup();

    let mut chars: Vec<char> = original.chars().collect();
    for term in terms {
        let term_chars: Vec<char> = term.chars().collect();
        mask_term(&mut chars, &term_chars, mask);
    }
    chars.into_iter().collect()
}

/// Overwrite every non-overlapping occurrence of `term` in `chars` with
/// `mask`. Occurrences are found left to right; the scan resumes after
/// each replaced span.
fn mask_term(chars: &mut [char], term: &[char], mask: char) {
    if term.is_empty() || term.len() > chars.len() {
        return;
    }
    let mut i = 0;
    while i + term.len() <= chars.len() {
        if window_matches(&chars[i..i + term.len()], term) {
            for slot in &mut chars[i..i + term.len()] {
                *slot = mask;
            }
            i += term.len();
        } else {
            i += 1;
        }
    }
}

fn window_matches(window: &[char], term: &[char]) -> bool {
    window.iter().zip(term).all(|(c, t)| eq_fold(*c, *t))
}

/// Case-insensitive single-character comparison. Terms are already
/// lowercase, so folding each text character is enough; characters
/// whose lowercase form expands to multiple characters never compare
/// equal to a single term character.
fn eq_fold(c: char, t: char) -> bool {
    c == t || c.to_lowercase().eq(t.to_lowercase())
}
