//! JSON output for the news page.
//!
//! Files are organized by date:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     └── news.json
//! ```

use crate::models::NewsPage;
use chrono::NaiveDate;
use std::error::Error;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`NewsPage`] to `{json_output_dir}/{date}/news.json`.
///
/// Creates the date directory when missing and returns the written path.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir, %date))]
pub async fn write_news_page(
    page: &NewsPage,
    json_output_dir: &str,
    date: NaiveDate,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(page)?;

    let full_json_dir = PathBuf::from(json_output_dir).join(date.format("%Y-%m-%d").to_string());
    info!(path = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(path = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = full_json_dir.join("news.json");
    fs::write(&output_json_filename, json).await?;
    info!(
        path = %output_json_filename.display(),
        articles = page.articles.len(),
        "Wrote JSON news page"
    );

    Ok(output_json_filename)
}
