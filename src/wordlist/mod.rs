// Wordlist store — the immutable set of canonical offensive terms.
//
// Built exactly once at startup from the merged multilingual artifact,
// then shared read-only across every check. Loading is the only
// blocking I/O in the system; any failure here is fatal because the
// engine refuses to screen text without a fully loaded wordlist.

use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Startup failures while building the wordlist. All of these are
/// fatal — there is no degraded mode with a partial list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read wordlist artifact {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed row in wordlist artifact {path}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("wordlist artifact {path} contains no terms")]
    Empty { path: String },
}

/// A deduplicated, lexicographically sorted set of lowercase terms.
///
/// Immutable after construction and `Send + Sync`, so one instance can
/// back arbitrarily many concurrent checks without locking.
#[derive(Debug, Clone)]
pub struct Wordlist {
    terms: Vec<String>,
}

impl Wordlist {
    /// Load the wordlist from the external artifact: UTF-8 rows, one
    /// candidate term per row, first column significant. Entries are
    /// trimmed and lowercased; empty rows are dropped; duplicates
    /// collapse to one term.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|source| LoadError::Read {
            path: path_str.clone(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut terms = BTreeSet::new();
        for record in reader.records() {
            let record = record.map_err(|source| LoadError::Parse {
                path: path_str.clone(),
                source,
            })?;
            if let Some(field) = record.get(0) {
                let term = field.trim().to_lowercase();
                if !term.is_empty() {
                    terms.insert(term);
                }
            }
        }

        if terms.is_empty() {
            return Err(LoadError::Empty { path: path_str });
        }

        let wordlist = Self::from_terms(terms);
        info!(terms = wordlist.len(), path = %path_str, "wordlist loaded");
        Ok(wordlist)
    }

    /// Build a wordlist directly from terms, applying the same
    /// trim/lowercase/dedup discipline as `load`.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self {
            terms: set.into_iter().collect(),
        }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Exact term membership. The sorted layout keeps this at O(log n).
    pub fn contains(&self, term: &str) -> bool {
        self.terms
            .binary_search_by(|t| t.as_str().cmp(term))
            .is_ok()
    }
}
