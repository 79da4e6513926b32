//! News homepage scraping.
//!
//! Extraction is driven by a per-site [`profile::SourceProfile`] and runs in
//! up to three stages:
//!
//! | Stage | Runs when | Produces |
//! |-------|-----------|----------|
//! | Primary pass | always | records from article-like containers |
//! | Fallback pass | primary pass yields fewer than 5 records | records from long, news-looking links |
//! | Mock fallback | both passes yield nothing | placeholder records tagged with [`crate::models::MOCK_SENTINEL`] |
//!
//! # Submodules
//!
//! - [`extractor`]: the fetch plus the extraction stages
//! - [`profile`]: selector and heuristic tables per source
//! - [`mock`]: placeholder records

pub mod extractor;
pub mod mock;
pub mod profile;

pub use extractor::ArticleExtractor;
pub use profile::SourceProfile;
