//! # Prensa News
//!
//! Scrapes the La Prensa Gráfica homepage into structured article records
//! and writes them as a paginated JSON page and/or a Markdown report.
//!
//! ## Usage
//!
//! ```sh
//! prensa_news -l 20 -j ./json -m ./markdown
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: one GET of the homepage with browser-like headers
//! 2. **Extraction**: primary selector pass, link-harvesting fallback, then
//!    mock records if nothing was found
//! 3. **Pagination**: slice the records into the requested page
//! 4. **Output**: JSON and Markdown files, or JSON on stdout

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use models::NewsPage;
use outputs::{json, markdown};
use scrapers::{ArticleExtractor, SourceProfile};
use utils::{ensure_writable_dir, truncate_for_log, utc_today};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("prensa_news starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Early check: output dirs must be writable before we spend a fetch
    for dir in [&args.json_output_dir, &args.markdown_output_dir].into_iter().flatten() {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "Output directory is not writable");
            return Err(e);
        }
    }

    // ---- Extract ----
    let profile = SourceProfile::la_prensa_grafica().with_origin(&args.source_url);
    let extractor =
        ArticleExtractor::with_timeout(profile, args.timeout_secs.map(Duration::from_secs))?;
    let source_name = extractor.profile().source_name;

    let records = match extractor.extract(args.limit).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, fetch_error = e.is_fetch_error(), "Failed to load news articles");
            return Err(e.into());
        }
    };
    info!(count = records.len(), "Extracted articles");

    // ---- Paginate ----
    let per_page = args.per_page.get();
    let page = NewsPage::paginate(records, args.page, per_page);
    if page.is_mock_data {
        warn!("Currently showing sample data; the live homepage yielded no articles");
    }
    info!(
        page = page.current_page,
        total_pages = page.total_pages,
        total_articles = page.total_articles,
        "Built news page"
    );

    // ---- Output ----
    let today = utc_today();
    if args.json_output_dir.is_none() && args.markdown_output_dir.is_none() {
        let json = serde_json::to_string_pretty(&page)?;
        debug!(preview = %truncate_for_log(&json, 300), "Printing news page");
        println!("{json}");
    }

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_news_page(&page, dir, today).await {
            error!(error = %e, "Failed to write JSON");
        }
    }

    if let Some(dir) = &args.markdown_output_dir {
        if let Err(e) = markdown::write_news_page(&page, source_name, per_page, dir, today).await {
            error!(error = %e, "Failed to write Markdown");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
