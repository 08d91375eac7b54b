use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default mask character, used when BLEEP_CENSOR_CHAR is unset.
pub const DEFAULT_CENSOR_CHAR: char = '*';

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// variable has a default, so `bleep check` works out of the box as long
/// as the wordlist artifact sits next to the binary.
pub struct Config {
    /// Path to the merged wordlist artifact (UTF-8, one term per row,
    /// first column significant). Produced by the external aggregation
    /// process; treated as an opaque, versioned input.
    pub wordlist_path: PathBuf,
    /// Character used to mask censored spans.
    pub censor_char: char,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let wordlist_path = env::var("BLEEP_WORDLIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./merged_badwords.csv"));

        let censor_char = match env::var("BLEEP_CENSOR_CHAR") {
            Ok(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => anyhow::bail!(
                        "BLEEP_CENSOR_CHAR must be exactly one character, got {s:?}"
                    ),
                }
            }
            Err(_) => DEFAULT_CENSOR_CHAR,
        };

        Ok(Self {
            wordlist_path,
            censor_char,
        })
    }

    /// Check that the wordlist artifact exists before attempting a load.
    /// Call this before any operation that needs the screening engine.
    pub fn require_wordlist(&self) -> Result<()> {
        if !self.wordlist_path.exists() {
            anyhow::bail!(
                "Wordlist artifact not found at {}\n\
                 Set BLEEP_WORDLIST in your .env file to point at the merged\n\
                 wordlist. See .env.example for the required variables.",
                self.wordlist_path.display()
            );
        }
        Ok(())
    }
}
