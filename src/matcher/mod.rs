// Term matching — one linear scan of the text, regardless of how many
// terms the wordlist holds.
//
// The wordlist (10^4–10^5 terms across many languages) is compiled once
// at startup into a single Aho-Corasick automaton; per check we walk the
// normalized text once and post-filter the raw hits with two boundary
// rules. Scanning the text once per term would be O(terms × length) and
// is exactly what this module exists to avoid.

use std::collections::BTreeSet;

use aho_corasick::AhoCorasick;
use thiserror::Error;

use crate::wordlist::Wordlist;

/// Failure to compile the wordlist into an automaton. Happens at
/// startup only, and is as fatal as a wordlist load failure.
#[derive(Debug, Error)]
#[error("failed to compile the wordlist automaton")]
pub struct CompileError(#[from] aho_corasick::BuildError);

/// A compiled multi-pattern matcher over an immutable wordlist.
///
/// Construction is the expensive step; `find_matches` is pure and
/// lock-free, safe to call from any number of threads.
pub struct Matcher {
    automaton: AhoCorasick,
    /// Pattern id → term, lexicographically sorted (the wordlist's order).
    terms: Vec<String>,
}

impl Matcher {
    /// Compile every wordlist term into one automaton.
    pub fn compile(wordlist: &Wordlist) -> Result<Self, CompileError> {
        let terms: Vec<String> = wordlist.iter().map(str::to_string).collect();
        let automaton = AhoCorasick::builder().build(&terms)?;
        Ok(Self { automaton, terms })
    }

    /// All distinct wordlist terms present in the (already normalized,
    /// already lowercased) text. A term counts as present if either
    /// boundary rule accepts at least one occurrence:
    ///
    /// - word-boundary: the characters adjacent to the hit, if any, are
    ///   not alphanumeric — reliable for Latin-style scripts;
    /// - whitespace-token: the term equals one of the text's
    ///   whitespace-separated tokens exactly — covers scripts (Arabic,
    ///   Persian, ...) where the first rule misfires.
    ///
    /// Results are deduplicated by term text and come back sorted.
    pub fn find_matches(&self, normalized: &str) -> BTreeSet<&str> {
        let mut found = BTreeSet::new();
        let mut matched = vec![false; self.terms.len()];

        // Single overlapping scan; every occurrence of every pattern is
        // reported, so no boundary-valid occurrence can be shadowed by
        // an earlier overlapping hit of another pattern.
        for hit in self.automaton.find_overlapping_iter(normalized) {
            let id = hit.pattern().as_usize();
            if matched[id] {
                continue;
            }
            if has_word_boundaries(normalized, hit.start(), hit.end()) {
                matched[id] = true;
                found.insert(self.terms[id].as_str());
            }
        }

        // Whitespace-token rule, kept linear in the text: look each
        // token up in the sorted term table instead of walking the
        // wordlist per token.
        for token in normalized.split_whitespace() {
            if let Ok(id) = self
                .terms
                .binary_search_by(|t| t.as_str().cmp(token))
            {
                if !matched[id] {
                    matched[id] = true;
                    found.insert(self.terms[id].as_str());
                }
            }
        }

        found
    }

    /// Number of compiled patterns.
    pub fn pattern_count(&self) -> usize {
        self.terms.len()
    }
}

/// Word-boundary test for a hit spanning `start..end` (byte offsets on
/// char boundaries): the characters on either side, when present, must
/// not be alphanumeric.
fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}
