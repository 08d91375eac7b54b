// Wordlist screening engine — normalize, match, censor in one pass.

use tracing::debug;

use super::traits::ProfanityScreen;
use super::Verdict;
use crate::censor::censor;
use crate::matcher::{CompileError, Matcher};
use crate::normalize::normalize;
use crate::wordlist::Wordlist;

/// The default profanity screen: an immutable wordlist compiled into a
/// multi-pattern automaton at startup, pure computation per check.
pub struct WordlistScreen {
    matcher: Matcher,
    mask: char,
}

impl WordlistScreen {
    /// Compile a screen from a loaded wordlist. This is the one
    /// expensive step; the result is read-only for the life of the
    /// process.
    pub fn new(wordlist: &Wordlist, mask: char) -> Result<Self, CompileError> {
        Ok(Self {
            matcher: Matcher::compile(wordlist)?,
            mask,
        })
    }

    /// Number of terms compiled into the automaton.
    pub fn term_count(&self) -> usize {
        self.matcher.pattern_count()
    }
}

impl ProfanityScreen for WordlistScreen {
    fn screen(&self, text: &str) -> Verdict {
        let normalized = normalize(text);
        let matches = self.matcher.find_matches(&normalized);

        if matches.is_empty() {
            return Verdict {
                toxic: false,
                found_words: Vec::new(),
                censored: text.to_string(),
            };
        }

        debug!(found = matches.len(), "matched wordlist terms");
        let censored = censor(text, matches.iter().copied(), self.mask);
        Verdict {
            toxic: true,
            // BTreeSet iteration keeps found_words sorted.
            found_words: matches.into_iter().map(str::to_string).collect(),
            censored,
        }
    }
}
