//! Data models for extracted articles and the paginated news page.
//!
//! - [`ArticleRecord`]: one structured article produced by an extraction call
//! - [`NewsPage`]: a page of records plus the totals a renderer needs
//!
//! Field names are snake_case so the serialized records can be handed to
//! rendering and summarization consumers unchanged.

use serde::{Deserialize, Serialize};

/// Substring present in the `notes` of every synthetic record.
///
/// Consumers use it to tell live data from placeholder data.
pub const MOCK_SENTINEL: &str = "Mock article";

/// A structured article extracted from the source homepage.
///
/// Records are built once per extraction call and never mutated afterwards.
/// Every record has a non-empty `headline` and an absolute `url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Absolute article URL, unique within one extraction result.
    pub url: String,
    /// Publication date in `YYYY-MM-DD` format.
    pub publication_date: String,
    /// Human-readable name of the source site.
    pub source_name: String,
    /// Article headline.
    pub headline: String,
    /// Category or section, `"General"` when the page gives none.
    pub primary_topic: String,
    /// Capitalized phrases found in the headline and description (at most 5).
    pub key_entities: Vec<String>,
    /// Free-text themes; the description excerpt or the link text.
    pub main_themes: Vec<String>,
    /// Editorial stance placeholder.
    pub sentiment_editorial_stance: String,
    /// Description text or a fixed placeholder.
    pub notes: String,
    /// Echoes `url` for citation purposes.
    pub source_citations: String,
}

impl ArticleRecord {
    /// Whether this record came from the mock fallback.
    pub fn is_mock(&self) -> bool {
        self.notes.contains(MOCK_SENTINEL)
    }
}

/// One page of extracted articles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsPage {
    /// Records on this page.
    pub articles: Vec<ArticleRecord>,
    /// 1-based page number.
    pub current_page: usize,
    /// Number of pages available at the requested page size.
    pub total_pages: usize,
    /// Number of records across all pages.
    pub total_articles: usize,
    /// True when the records are synthetic placeholders.
    pub is_mock_data: bool,
}

impl NewsPage {
    /// Slice `records` into the requested page.
    ///
    /// Pages past the end (or page `0`) produce an empty `articles` list
    /// while still reporting the totals.
    pub fn paginate(records: Vec<ArticleRecord>, page: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_articles = records.len();
        let total_pages = total_articles.div_ceil(per_page);
        let is_mock_data = records.first().is_some_and(ArticleRecord::is_mock);

        let start = page.saturating_sub(1).saturating_mul(per_page);
        let articles = if page == 0 {
            Vec::new()
        } else {
            records.into_iter().skip(start).take(per_page).collect()
        };

        Self {
            articles,
            current_page: page,
            total_pages,
            total_articles,
            is_mock_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, notes: &str) -> ArticleRecord {
        ArticleRecord {
            url: url.to_string(),
            publication_date: "2025-05-06".to_string(),
            source_name: "La Prensa Gráfica".to_string(),
            headline: "Test Headline".to_string(),
            primary_topic: "General".to_string(),
            key_entities: vec!["Test Headline".to_string()],
            main_themes: vec![],
            sentiment_editorial_stance: "Neutral / informational".to_string(),
            notes: notes.to_string(),
            source_citations: url.to_string(),
        }
    }

    #[test]
    fn test_article_record_serializes_snake_case() {
        let json = serde_json::to_string(&record("https://example.com/a", "n")).unwrap();
        assert!(json.contains("\"publication_date\":\"2025-05-06\""));
        assert!(json.contains("\"sentiment_editorial_stance\""));
        assert!(json.contains("\"source_citations\":\"https://example.com/a\""));
    }

    #[test]
    fn test_article_record_deserialization() {
        let json = r#"{
            "url": "https://example.com/a",
            "publication_date": "2025-05-06",
            "source_name": "La Prensa Gráfica",
            "headline": "Hola",
            "primary_topic": "General",
            "key_entities": ["Hola"],
            "main_themes": [],
            "sentiment_editorial_stance": "Neutral / informational",
            "notes": "No additional notes available.",
            "source_citations": "https://example.com/a"
        }"#;

        let parsed: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.headline, "Hola");
        assert!(!parsed.is_mock());
    }

    #[test]
    fn test_is_mock_detects_sentinel() {
        assert!(record("u", "Mock article for testing.").is_mock());
        assert!(!record("u", "Scraped from homepage link.").is_mock());
    }

    #[test]
    fn test_paginate_first_page() {
        let records: Vec<_> = (0..25)
            .map(|i| record(&format!("https://example.com/{i}"), "n"))
            .collect();

        let page = NewsPage::paginate(records, 1, 10);
        assert_eq!(page.articles.len(), 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_articles, 25);
        assert_eq!(page.articles[0].url, "https://example.com/0");
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let records: Vec<_> = (0..25)
            .map(|i| record(&format!("https://example.com/{i}"), "n"))
            .collect();

        let page = NewsPage::paginate(records, 3, 10);
        assert_eq!(page.articles.len(), 5);
        assert_eq!(page.articles[0].url, "https://example.com/20");
    }

    #[test]
    fn test_paginate_out_of_range() {
        let records = vec![record("https://example.com/a", "n")];
        let page = NewsPage::paginate(records.clone(), 4, 10);
        assert!(page.articles.is_empty());
        assert_eq!(page.total_pages, 1);

        let page = NewsPage::paginate(records, 0, 10);
        assert!(page.articles.is_empty());
    }

    #[test]
    fn test_paginate_empty() {
        let page = NewsPage::paginate(Vec::new(), 1, 10);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_articles, 0);
        assert!(!page.is_mock_data);
    }

    #[test]
    fn test_paginate_flags_mock_data() {
        let records = vec![record("https://example.com/a", "Mock article for testing.")];
        assert!(NewsPage::paginate(records, 1, 10).is_mock_data);
    }
}
