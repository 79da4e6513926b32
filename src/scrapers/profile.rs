//! Per-source extraction configuration.
//!
//! A [`SourceProfile`] is the table of selectors and heuristics the
//! extractor applies to one site. Swapping the profile re-targets the
//! extractor without touching its control flow.

use crate::error::{ExtractError, Result};
use scraper::Selector;
use url::Url;

const LA_PRENSA_ORIGIN: &str = "https://www.laprensagrafica.com";

/// Browser-like request headers sent with the homepage fetch.
#[derive(Debug, Clone)]
pub struct RequestHeaders {
    pub user_agent: &'static str,
    pub accept: &'static str,
    pub accept_language: &'static str,
}

/// Selector groups and heuristics for one news site.
#[derive(Debug, Clone)]
pub struct SourceProfile {
    /// Site origin; relative links are resolved against it.
    pub origin: String,
    /// Page fetched for extraction. Usually the origin itself.
    pub homepage: String,
    pub source_name: &'static str,
    pub headers: RequestHeaders,
    /// Article-like containers, most specific first.
    pub article_selectors: Vec<&'static str>,
    pub headline_selectors: Vec<&'static str>,
    pub description_selectors: Vec<&'static str>,
    pub date_selectors: Vec<&'static str>,
    /// Attribute holding a machine-readable date on date elements.
    pub date_attribute: &'static str,
    pub topic_selectors: Vec<&'static str>,
    /// Path fragments marking an anchor as an article link in the fallback pass.
    pub fallback_path_hints: Vec<&'static str>,
    /// Whether the current and previous year also count as fallback hints.
    pub fallback_year_hints: bool,
    /// Anchor text must be strictly longer than this (in characters).
    pub fallback_min_text_chars: usize,
    /// The fallback pass runs when the primary pass yields fewer records.
    pub fallback_threshold: usize,
    pub default_topic: &'static str,
    pub default_entity: &'static str,
    pub live_stance: &'static str,
    pub empty_notes: &'static str,
    pub fallback_notes: &'static str,
    pub excerpt_chars: usize,
}

impl SourceProfile {
    /// Profile for the La Prensa Gráfica homepage.
    pub fn la_prensa_grafica() -> Self {
        Self {
            origin: LA_PRENSA_ORIGIN.to_string(),
            homepage: format!("{LA_PRENSA_ORIGIN}/"),
            source_name: "La Prensa Gráfica",
            headers: RequestHeaders {
                user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
                accept: "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
                accept_language: "es-ES,es;q=0.9,en;q=0.8",
            },
            article_selectors: vec![
                "article.article",
                ".article-item",
                ".news-item",
                ".story-item",
                "article",
            ],
            headline_selectors: vec!["h2", "h3", ".article-title", ".headline", ".title"],
            description_selectors: vec![".description", ".summary", ".excerpt", "p"],
            date_selectors: vec!["time", ".date", ".publish-date"],
            date_attribute: "datetime",
            topic_selectors: vec![".category", ".topic", ".section", ".tag"],
            fallback_path_hints: vec!["/elsalvador/", "/noticias/"],
            fallback_year_hints: true,
            fallback_min_text_chars: 30,
            fallback_threshold: 5,
            default_topic: "General",
            default_entity: "El Salvador",
            live_stance: "Neutral / informational",
            empty_notes: "No additional notes available.",
            fallback_notes: "Scraped from homepage link.",
            excerpt_chars: 200,
        }
    }

    /// Point the profile at another origin (mirrors, test servers).
    pub fn with_origin(mut self, origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        self.origin = origin.to_string();
        self.homepage = format!("{origin}/");
        self
    }

    /// Parse the origin and compile every selector group.
    pub fn compile(&self) -> Result<CompiledProfile> {
        Ok(CompiledProfile {
            origin: Url::parse(&self.origin)?,
            articles: compile_group(&self.article_selectors)?,
            headline: compile_group(&self.headline_selectors)?,
            description: compile_group(&self.description_selectors)?,
            date: compile_group(&self.date_selectors)?,
            topic: compile_group(&self.topic_selectors)?,
            anchor: compile_group(&["a"])?,
        })
    }
}

impl Default for SourceProfile {
    fn default() -> Self {
        Self::la_prensa_grafica()
    }
}

/// Selectors ready for matching, plus the parsed origin.
///
/// Each group is compiled into a single selector list, so matches come back
/// in document order with every element reported once.
#[derive(Debug, Clone)]
pub struct CompiledProfile {
    pub origin: Url,
    pub articles: Selector,
    pub headline: Selector,
    pub description: Selector,
    pub date: Selector,
    pub topic: Selector,
    pub anchor: Selector,
}

fn compile_group(selectors: &[&str]) -> Result<Selector> {
    let joined = selectors.join(", ");
    Selector::parse(&joined).map_err(|e| ExtractError::InvalidSelector {
        selector: joined.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_compiles() {
        let compiled = SourceProfile::la_prensa_grafica().compile().unwrap();
        assert_eq!(compiled.origin.as_str(), "https://www.laprensagrafica.com/");
    }

    #[test]
    fn test_with_origin_strips_trailing_slash() {
        let profile = SourceProfile::default().with_origin("http://127.0.0.1:8080/");
        assert_eq!(profile.origin, "http://127.0.0.1:8080");
        assert_eq!(profile.homepage, "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let mut profile = SourceProfile::default();
        profile.topic_selectors = vec!["[[["];
        let err = profile.compile().unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector { .. }));
    }

    #[test]
    fn test_invalid_origin_is_reported() {
        let profile = SourceProfile::default().with_origin("not an origin");
        assert!(matches!(profile.compile().unwrap_err(), ExtractError::InvalidOrigin(_)));
    }
}
