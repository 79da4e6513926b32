//! Homepage article extractor.
//!
//! One call to [`ArticleExtractor::extract`] fetches the source homepage and
//! runs up to three stages over it:
//!
//! 1. **Primary pass**: structured selectors from the [`SourceProfile`]
//! 2. **Fallback pass**: generic anchor harvesting, only when the primary
//!    pass yields fewer than `fallback_threshold` records
//! 3. **Mock fallback**: placeholder records when both passes yield nothing
//!
//! Only the fetch can fail. Parsing and per-element extraction skip or
//! default whatever is missing.

use crate::error::{ExtractError, Result};
use crate::models::ArticleRecord;
use crate::scrapers::mock::mock_articles;
use crate::scrapers::profile::{CompiledProfile, SourceProfile};
use crate::utils::{
    collapse_whitespace, excerpt, extract_entities, normalize_date, resolve_link, utc_today,
};
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Extracts [`ArticleRecord`]s from one news homepage.
///
/// Holds only immutable state, so a single extractor can serve concurrent
/// calls.
#[derive(Debug, Clone)]
pub struct ArticleExtractor {
    client: Client,
    profile: SourceProfile,
    selectors: CompiledProfile,
}

impl ArticleExtractor {
    /// Build an extractor for `profile`. With `timeout` unset, requests
    /// wait as long as the server keeps the connection open.
    pub fn with_timeout(profile: SourceProfile, timeout: Option<Duration>) -> Result<Self> {
        let selectors = profile.compile()?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("user-agent", profile.headers.user_agent)?);
        headers.insert(ACCEPT, header_value("accept", profile.headers.accept)?);
        headers.insert(
            ACCEPT_LANGUAGE,
            header_value("accept-language", profile.headers.accept_language)?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(ExtractError::ClientBuild)?,
            profile,
            selectors,
        })
    }

    pub fn profile(&self) -> &SourceProfile {
        &self.profile
    }

    /// Fetch the homepage and extract at most `limit` records.
    ///
    /// # Errors
    ///
    /// Fails only when the fetch fails: a non-success status yields
    /// [`ExtractError::FetchStatus`], a transport problem
    /// [`ExtractError::FetchTransport`]. No partial records are returned.
    #[instrument(level = "info", skip(self), fields(source = %self.profile.homepage))]
    pub async fn extract(&self, limit: NonZeroUsize) -> Result<Vec<ArticleRecord>> {
        let html = self.fetch_homepage().await?;
        Ok(self.extract_from_html(&html, limit, utc_today()))
    }

    async fn fetch_homepage(&self) -> Result<String> {
        let response = self.client.get(&self.profile.homepage).send().await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status").to_string();
            error!(%status, %reason, "Homepage fetch failed");
            return Err(ExtractError::FetchStatus { status, reason });
        }

        let html = response.text().await?;
        info!(bytes = html.len(), "Received homepage HTML");
        Ok(html)
    }

    /// Run the extraction stages over an already fetched document.
    ///
    /// `today` backs missing dates, the year hints of the fallback pass and
    /// the dates of mock records.
    pub fn extract_from_html(
        &self,
        html: &str,
        limit: NonZeroUsize,
        today: NaiveDate,
    ) -> Vec<ArticleRecord> {
        let document = Html::parse_document(html);
        let mut collected = Collected::new(limit.get());

        self.primary_pass(&document, today, &mut collected);
        info!(count = collected.len(), "Primary pass complete");

        if collected.len() < self.profile.fallback_threshold {
            self.fallback_pass(&document, today, &mut collected);
            info!(count = collected.len(), "Fallback pass complete");
        }

        if collected.is_empty() {
            warn!(
                limit = limit.get(),
                "No articles found on the homepage; returning mock records"
            );
            return mock_articles(limit.get(), self.profile.source_name, today);
        }

        collected.into_records()
    }

    fn primary_pass(&self, document: &Html, today: NaiveDate, collected: &mut Collected) {
        for article in document.select(&self.selectors.articles) {
            if collected.is_full() {
                break;
            }
            match self.primary_record(article, today) {
                Some(record) => {
                    if !collected.push(record) {
                        debug!("Skipping candidate with an already collected URL");
                    }
                }
                None => debug!("Skipping candidate without headline or link"),
            }
        }
    }

    fn primary_record(&self, article: ElementRef<'_>, today: NaiveDate) -> Option<ArticleRecord> {
        let selectors = &self.selectors;
        let profile = &self.profile;

        let headline_el = article.select(&selectors.headline).next()?;
        let headline = element_text(headline_el);
        if headline.is_empty() {
            return None;
        }

        let anchor = if headline_el.value().name() == "a" {
            Some(headline_el)
        } else {
            headline_el
                .select(&selectors.anchor)
                .next()
                .or_else(|| article.select(&selectors.anchor).next())
        };
        let url = resolve_link(&selectors.origin, anchor?.value().attr("href")?)?;

        let description = article
            .select(&selectors.description)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let raw_date = article
            .select(&selectors.date)
            .next()
            .map(|el| match el.value().attr(profile.date_attribute) {
                Some(value) => value.to_string(),
                None => element_text(el),
            })
            .unwrap_or_default();

        let primary_topic = article
            .select(&selectors.topic)
            .next()
            .map(element_text)
            .filter(|topic| !topic.is_empty())
            .unwrap_or_else(|| profile.default_topic.to_string());

        let main_themes = if description.is_empty() {
            Vec::new()
        } else {
            vec![excerpt(&description, profile.excerpt_chars)]
        };
        let notes = if description.is_empty() {
            profile.empty_notes.to_string()
        } else {
            description.clone()
        };

        Some(ArticleRecord {
            publication_date: normalize_date(&raw_date, today),
            source_name: profile.source_name.to_string(),
            key_entities: extract_entities(&headline, &description, profile.default_entity),
            headline,
            primary_topic,
            main_themes,
            sentiment_editorial_stance: profile.live_stance.to_string(),
            notes,
            source_citations: url.clone(),
            url,
        })
    }

    fn fallback_pass(&self, document: &Html, today: NaiveDate, collected: &mut Collected) {
        let hints = self.fallback_hints(today);
        let profile = &self.profile;

        for anchor in document.select(&self.selectors.anchor) {
            if collected.is_full() {
                break;
            }
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            if !hints.iter().any(|hint| href.contains(hint.as_str())) {
                continue;
            }
            let text = element_text(anchor);
            if text.chars().count() <= profile.fallback_min_text_chars {
                continue;
            }
            let Some(url) = resolve_link(&self.selectors.origin, href) else {
                continue;
            };
            if collected.contains(&url) {
                continue;
            }

            debug!(%url, "Harvested fallback link");
            collected.push(ArticleRecord {
                url: url.clone(),
                publication_date: normalize_date("", today),
                source_name: profile.source_name.to_string(),
                headline: text.clone(),
                primary_topic: profile.default_topic.to_string(),
                key_entities: vec![profile.default_entity.to_string()],
                main_themes: vec![text],
                sentiment_editorial_stance: profile.live_stance.to_string(),
                notes: profile.fallback_notes.to_string(),
                source_citations: url,
            });
        }
    }

    fn fallback_hints(&self, today: NaiveDate) -> Vec<String> {
        let mut hints: Vec<String> = self
            .profile
            .fallback_path_hints
            .iter()
            .map(|hint| hint.to_string())
            .collect();
        if self.profile.fallback_year_hints {
            hints.push(today.year().to_string());
            hints.push((today.year() - 1).to_string());
        }
        hints
    }
}

/// Records gathered so far, with the URLs already taken.
struct Collected {
    records: Vec<ArticleRecord>,
    urls: HashSet<String>,
    limit: usize,
}

impl Collected {
    fn new(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            urls: HashSet::new(),
            limit,
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn is_full(&self) -> bool {
        self.records.len() >= self.limit
    }

    fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Returns `false` when the URL was already collected.
    fn push(&mut self, record: ArticleRecord) -> bool {
        if !self.urls.insert(record.url.clone()) {
            return false;
        }
        self.records.push(record);
        true
    }

    fn into_records(mut self) -> Vec<ArticleRecord> {
        self.records.truncate(self.limit);
        self.records
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| ExtractError::InvalidHeader {
        name,
        reason: e.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}
