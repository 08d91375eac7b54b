// Moderation verdicts and the request/response contract.
//
// This module owns the shapes the invoking platform sees: the per-check
// Verdict, the input object, and the response envelope. Callers branch
// on the shape of the response (verdict fields vs. an "error" field),
// never on exceptions or status codes.

pub mod engine;
pub mod traits;

pub use engine::WordlistScreen;
pub use traits::ProfanityScreen;

use serde::{Deserialize, Serialize};

/// The error string returned when a request carries no usable text.
pub const NO_TEXT_ERROR: &str = "No text provided";

/// The per-check moderation outcome. Created fresh per call, returned
/// to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether any wordlist term was found.
    pub toxic: bool,
    /// Distinct matched terms. Sorted, so identical inputs serialize to
    /// identical bytes; consumers treat it as an unordered collection.
    pub found_words: Vec<String>,
    /// The original text with literal occurrences of matched terms
    /// masked. Identical to the input when nothing matched.
    pub censored: String,
}

/// A single screening request from the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreenRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// The response envelope: either a verdict or the input-error shape.
/// Serializes untagged, so the wire forms are exactly
/// `{"toxic": ..., "found_words": [...], "censored": ...}` and
/// `{"error": "No text provided"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScreenResponse {
    Verdict(Verdict),
    Error { error: String },
}

/// Screen one request. A missing or empty `text` field produces the
/// input-error shape instead of a verdict; everything else is handed to
/// the screen, which is total over arbitrary Unicode.
pub fn respond(screen: &dyn ProfanityScreen, request: &ScreenRequest) -> ScreenResponse {
    match request.text.as_deref() {
        Some(text) if !text.is_empty() => ScreenResponse::Verdict(screen.screen(text)),
        _ => ScreenResponse::Error {
            error: NO_TEXT_ERROR.to_string(),
        },
    }
}
