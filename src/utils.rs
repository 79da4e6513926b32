//! Utility functions for text heuristics, URL handling, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Date normalization for loosely formatted publication dates
//! - Capitalized-phrase entity extraction
//! - Whitespace cleanup, excerpts, and log truncation
//! - Link resolution against a site origin
//! - File system validation for output directories

use chrono::{DateTime, NaiveDate, Utc};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid ISO date regex"));

static SPANISH_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2})\s+de\s+([a-záéíóú]+)(?:\s+de)?\s+(\d{4})")
        .expect("valid Spanish date regex")
});

static CAPITALIZED_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-ZÁÉÍÓÚÑ][a-záéíóúñ]+(?:\s+[A-ZÁÉÍÓÚÑ][a-záéíóúñ]+)*")
        .expect("valid entity regex")
});

/// Formats tried after RFC 2822 fails.
const LOOSE_DATE_FORMATS: [&str; 5] = ["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%d/%m/%Y", "%Y/%m/%d"];

const MAX_ENTITIES: usize = 5;

/// Today's date in UTC.
pub fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Normalize a raw date string to `YYYY-MM-DD`.
///
/// Tries, in order: an embedded `YYYY-MM-DD` substring that is a real
/// calendar date (which covers RFC 3339 timestamps, keeping their local
/// date), RFC 2822, a handful of common English layouts,
/// and the Spanish long form (`19 de octubre de 2025`). Anything else, the
/// empty string included, yields `today`.
///
/// # Examples
///
/// ```ignore
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(normalize_date("Publicado 2024-03-05T10:00", today), "2024-03-05");
/// assert_eq!(normalize_date("", today), "2025-01-01");
/// ```
pub fn normalize_date(raw: &str, today: NaiveDate) -> String {
    parse_loose_date(raw).unwrap_or(today).format("%Y-%m-%d").to_string()
}

fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(date) = ISO_DATE
        .find_iter(text)
        .find_map(|m| NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok())
    {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    if let Some(date) = LOOSE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Some(date);
    }

    parse_spanish_date(text)
}

fn parse_spanish_date(text: &str) -> Option<NaiveDate> {
    let caps = SPANISH_DATE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = spanish_month(&caps[2].to_lowercase())?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn spanish_month(name: &str) -> Option<u32> {
    let month = match name {
        "enero" => 1,
        "febrero" => 2,
        "marzo" => 3,
        "abril" => 4,
        "mayo" => 5,
        "junio" => 6,
        "julio" => 7,
        "agosto" => 8,
        "septiembre" | "setiembre" => 9,
        "octubre" => 10,
        "noviembre" => 11,
        "diciembre" => 12,
        _ => return None,
    };
    Some(month)
}

/// Extract capitalized phrases from a headline and its description.
///
/// Phrases are maximal runs of capitalized words (accented capitals
/// included), deduplicated in first-seen order and capped at five. When
/// nothing matches, the result is `[default_entity]`.
pub fn extract_entities(headline: &str, description: &str, default_entity: &str) -> Vec<String> {
    let text = format!("{headline} {description}");
    let entities: Vec<String> = CAPITALIZED_PHRASE
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .unique()
        .take(MAX_ENTITIES)
        .collect();

    if entities.is_empty() {
        vec![default_entity.to_string()]
    } else {
        entities
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().join(" ")
}

/// Keep at most `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Resolve `href` against `base`, keeping only http(s) results.
///
/// Empty hrefs and `javascript:`/`mailto:` style links resolve to `None`.
pub fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let resolved = base.join(href).ok()?;
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a char boundary) with an
/// ellipsis and the number of dropped bytes appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
