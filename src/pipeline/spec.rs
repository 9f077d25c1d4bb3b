//! Summarizer specification types.
//!
//! A [`SummarySpec`] is the JSON-configurable surface of the pipeline:
//! callers ship a small JSON document, the spec is validated by the
//! [`super::validation::ValidationEngine`], and then lowered into a
//! [`SummarizerConfig`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "en",
//!   "num_sentences": 6,
//!   "min_sentence_words": 9,
//!   "noise_prefixes": ["click", "read more"],
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::SummarizerConfig;

/// The spec version this crate understands.
pub const SPEC_VERSION: u32 = 1;

/// Failure to parse a summary spec from JSON.
#[derive(Debug, Error)]
pub enum SpecParseError {
    #[error("invalid summary spec JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level summarizer specification (v1).
///
/// Omitted fields inherit the [`SummarizerConfig`] defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Stopword language (e.g., `"en"`).
    #[serde(default)]
    pub language: Option<String>,

    /// Maximum number of sentences in the summary (K).
    #[serde(default)]
    pub num_sentences: Option<usize>,

    /// Minimum word count for a candidate sentence.
    #[serde(default)]
    pub min_sentence_words: Option<usize>,

    /// Lowercase prefixes marking a sentence as boilerplate.
    #[serde(default)]
    pub noise_prefixes: Option<Vec<String>>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarySpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            language: None,
            num_sentences: None,
            min_sentence_words: None,
            noise_prefixes: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarySpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lower the spec into a runnable config, filling omitted fields with
    /// defaults.
    pub fn to_config(&self) -> SummarizerConfig {
        let defaults = SummarizerConfig::default();
        SummarizerConfig {
            language: self.language.clone().unwrap_or(defaults.language),
            num_sentences: self.num_sentences.unwrap_or(defaults.num_sentences),
            min_sentence_words: self
                .min_sentence_words
                .unwrap_or(defaults.min_sentence_words),
            noise_prefixes: self
                .noise_prefixes
                .clone()
                .map(|ps| ps.iter().map(|p| p.to_lowercase()).collect())
                .unwrap_or(defaults.noise_prefixes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarySpec::from_json(r#"{ "v": 1 }"#).unwrap();
        assert_eq!(spec.v, 1);
        assert!(spec.num_sentences.is_none());
        assert!(!spec.strict);
    }

    #[test]
    fn test_deserialize_full_spec() {
        let spec = SummarySpec::from_json(
            r#"{
                "v": 1,
                "language": "en",
                "num_sentences": 3,
                "min_sentence_words": 5,
                "noise_prefixes": ["sponsored"],
                "strict": true
            }"#,
        )
        .unwrap();
        assert_eq!(spec.num_sentences, Some(3));
        assert_eq!(spec.min_sentence_words, Some(5));
        assert!(spec.strict);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "bogus": 42 }"#).unwrap();
        assert!(spec.unknown_fields.contains_key("bogus"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = SummarySpec::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("invalid summary spec JSON"));
    }

    #[test]
    fn test_to_config_fills_defaults() {
        let spec = SummarySpec::from_json(r#"{ "v": 1, "num_sentences": 2 }"#).unwrap();
        let cfg = spec.to_config();
        assert_eq!(cfg.num_sentences, 2);
        assert_eq!(cfg.min_sentence_words, 9);
        assert_eq!(cfg.noise_prefixes, vec!["click", "read more"]);
        assert_eq!(cfg.language, "en");
    }

    #[test]
    fn test_to_config_lowercases_prefixes() {
        let spec =
            SummarySpec::from_json(r#"{ "v": 1, "noise_prefixes": ["Sponsored"] }"#).unwrap();
        assert_eq!(spec.to_config().noise_prefixes, vec!["sponsored"]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let spec = SummarySpec::from_json(r#"{"v":1,"num_sentences":4,"strict":true}"#).unwrap();
        let back = serde_json::to_value(&spec).unwrap();
        assert_eq!(back["v"], 1);
        assert_eq!(back["num_sentences"], 4);
        assert_eq!(back["strict"], true);
    }
}
