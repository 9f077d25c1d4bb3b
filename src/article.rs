//! News article records, as supplied by the article-source collaborator.
//!
//! The core pipeline never inspects structured records; callers derive a
//! single text string via [`Article::combined_text`] and hand that to the
//! summarizer.

use serde::{Deserialize, Serialize};

/// One article from a news feed. Any field may be missing or null.
///
/// The shape mirrors common news-API responses (`title`, `description`,
/// `content`, `url`) and deserializes leniently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Article {
    /// Concatenate title, description, and content into the raw text the
    /// summarizer consumes. Missing fields are skipped; present fields are
    /// joined by a single space. Returns an empty string when nothing is
    /// present.
    pub fn combined_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        for field in [&self.title, &self.description, &self.content] {
            if let Some(value) = field {
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_text_joins_present_fields() {
        let article = Article {
            title: Some("Fox sighted.".to_string()),
            description: Some("A fox near the riverbank.".to_string()),
            content: Some("The fox returned at dawn.".to_string()),
            url: Some("https://example.com/fox".to_string()),
        };
        assert_eq!(
            article.combined_text(),
            "Fox sighted. A fox near the riverbank. The fox returned at dawn."
        );
    }

    #[test]
    fn test_combined_text_skips_missing_and_blank_fields() {
        let article = Article {
            title: Some("Fox sighted.".to_string()),
            description: Some("   ".to_string()),
            content: None,
            url: None,
        };
        assert_eq!(article.combined_text(), "Fox sighted.");
    }

    #[test]
    fn test_combined_text_empty_article() {
        assert_eq!(Article::default().combined_text(), "");
    }

    #[test]
    fn test_deserializes_with_missing_and_null_fields() {
        let article: Article =
            serde_json::from_str(r#"{ "title": "Fox sighted.", "content": null }"#).unwrap();
        assert_eq!(article.title.as_deref(), Some("Fox sighted."));
        assert!(article.content.is_none());
        assert!(article.description.is_none());
    }
}
