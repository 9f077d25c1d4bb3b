//! Stopword filtering.
//!
//! Wraps the `stop-words` crate behind an immutable set with case-insensitive
//! membership. The English set used by the default pipeline is process-wide,
//! loaded once, and never mutated, so concurrent summarization calls share it
//! without synchronization.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Process-wide English stopword set.
static ENGLISH: Lazy<StopwordFilter> = Lazy::new(|| StopwordFilter::new("en"));

/// The shared read-only English stopword filter.
pub fn english() -> &'static StopwordFilter {
    &ENGLISH
}

/// An immutable set of stopwords with case-insensitive lookup.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords, stored lowercase.
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a stopword filter for the given language.
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            _ => LANGUAGE::English,
        };
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Create an empty filter (no word is a stopword).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Check whether a word is a stopword. Case-insensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_uppercase()) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Number of stopwords in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Whether the filter contains no stopwords.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("market"));
        assert!(!filter.is_stopword("riverbank"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("xx");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_custom_list() {
        let filter = StopwordFilter::from_list(&["Custom", "words"]);
        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("WORDS"));
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_shared_english_set() {
        let a = english();
        let b = english();
        assert!(std::ptr::eq(a, b));
        assert!(a.is_stopword("and"));
        assert!(!a.is_empty());
    }
}
