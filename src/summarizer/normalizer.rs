//! Sentence segmentation and noise filtering.
//!
//! The normalizer collapses irregular whitespace, splits the text into
//! sentences at terminal punctuation followed by a space, and drops
//! short or boilerplate candidates before scoring.

use crate::nlp::tokenizer::collapse_whitespace;
use crate::pipeline::traits::Normalizer;
use crate::types::{Sentence, SummarizerConfig};

/// Splits text on `.`, `!`, or `?` followed by a space and filters
/// candidates by word count and noise prefix.
///
/// The boundary rule is deliberately naive: punctuation not followed by a
/// space (decimals, abbreviations like "U.S.") does not split. Punctuation
/// stays attached to the preceding sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceNormalizer;

impl SentenceNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for SentenceNormalizer {
    fn normalize(&self, text: &str, cfg: &SummarizerConfig) -> Vec<Sentence> {
        let collapsed = collapse_whitespace(text);
        if collapsed.is_empty() {
            return Vec::new();
        }

        let mut sentences = Vec::new();
        for raw in split_sentences(&collapsed) {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let candidate = Sentence::new(trimmed, sentences.len());
            if candidate.word_count < cfg.min_sentence_words {
                continue;
            }
            if is_noise(&candidate.text, &cfg.noise_prefixes) {
                continue;
            }
            sentences.push(candidate);
        }
        sentences
    }
}

/// Split on terminal punctuation (`.`, `!`, `?`) followed by a space.
///
/// The punctuation character belongs to the preceding segment. Text with no
/// terminal punctuation comes back as a single segment.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if matches!(bytes[i], b'.' | b'!' | b'?') && bytes.get(i + 1) == Some(&b' ') {
            segments.push(&text[start..=i]);
            start = i + 2;
            i += 2;
        } else {
            i += 1;
        }
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}

/// Whether a sentence starts with one of the configured boilerplate
/// prefixes ("click", "read more", ...). Case-insensitive.
fn is_noise(text: &str, prefixes: &[String]) -> bool {
    let lowered = text.to_lowercase();
    prefixes.iter().any(|p| lowered.starts_with(p.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> Vec<Sentence> {
        SentenceNormalizer::new().normalize(text, &SummarizerConfig::default())
    }

    #[test]
    fn test_split_basic() {
        let parts = split_sentences("One two. Three four! Five six? Seven");
        assert_eq!(parts, vec!["One two.", "Three four!", "Five six?", "Seven"]);
    }

    #[test]
    fn test_split_no_terminal_punctuation() {
        let parts = split_sentences("a single unterminated sentence");
        assert_eq!(parts, vec!["a single unterminated sentence"]);
    }

    #[test]
    fn test_split_punctuation_without_space_does_not_split() {
        // Known mis-segmentation tradeoff: abbreviations stay glued.
        let parts = split_sentences("U.S. markets rallied. Then fell.");
        assert_eq!(parts, vec!["U.S.", "markets rallied.", "Then fell."]);
    }

    #[test]
    fn test_trailing_punctuation_kept() {
        let parts = split_sentences("The end.");
        assert_eq!(parts, vec!["The end."]);
    }

    #[test]
    fn test_short_sentences_discarded() {
        // 8 words: below the 9-word minimum.
        let out = normalize("One two three four five six seven eight.");
        assert!(out.is_empty());

        // 9 words: kept.
        let out = normalize("One two three four five six seven eight nine.");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word_count, 9);
    }

    #[test]
    fn test_noise_prefixes_discarded() {
        let text = "Click here right now for the best deal ever offered. \
                    Read more about this story on our website front page today. \
                    The quick brown fox jumps over the lazy dog near the riverbank.";
        let out = normalize(text);
        assert_eq!(out.len(), 1);
        assert!(out[0].text.starts_with("The quick"));
    }

    #[test]
    fn test_noise_prefix_case_insensitive() {
        let out = normalize("CLICK this link to see all ten of the pictures now.");
        assert!(out.is_empty());
    }

    #[test]
    fn test_whitespace_collapsed_before_split() {
        let out = normalize("The  quick\tbrown fox\njumps over the lazy dog today.  \n");
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].text,
            "The quick brown fox jumps over the lazy dog today."
        );
    }

    #[test]
    fn test_indices_are_sequential_over_survivors() {
        let text = "Too short. \
                    The first long sentence keeps going on for nine whole words here. \
                    The second long sentence also keeps going on for nine words here.";
        let out = normalize(text);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].index, 0);
        assert_eq!(out[1].index, 1);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_unterminated_text_is_single_candidate() {
        let out = normalize("a lone sentence of exactly twenty words that never ends with any terminal punctuation and just keeps on rolling along");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].word_count, 20);
    }
}
