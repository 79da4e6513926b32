//! Markdown rendering of a news page.

use crate::models::NewsPage;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::Write;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

const MOCK_ADVISORY: &str =
    "> ℹ️ Currently showing sample data. Real-time scraping is being optimized.";

/// Render a [`NewsPage`] as Markdown.
///
/// Articles are numbered across pages, so the first article on page 2 with
/// `per_page = 10` is number 11.
pub fn news_page_to_markdown(page: &NewsPage, source_name: &str, per_page: usize) -> String {
    let mut md = String::new();

    writeln!(md, "# Latest News from El Salvador\n").unwrap();
    writeln!(md, "Scraped from {source_name}\n").unwrap();
    if page.is_mock_data {
        writeln!(md, "{MOCK_ADVISORY}\n").unwrap();
    }

    writeln!(
        md,
        "## Articles ({} total) - Page {} of {}\n",
        page.total_articles, page.current_page, page.total_pages
    )
    .unwrap();

    if page.articles.is_empty() {
        writeln!(md, "_No articles on this page._").unwrap();
        return md;
    }

    let offset = page.current_page.saturating_sub(1) * per_page;
    for (i, article) in page.articles.iter().enumerate() {
        writeln!(
            md,
            "### {}. [{}]({})\n",
            offset + i + 1,
            escape_link_text(&article.headline),
            escape_link_target(&article.url)
        )
        .unwrap();
        writeln!(
            md,
            "*{} • {} • {}*\n",
            article.source_name, article.publication_date, article.primary_topic
        )
        .unwrap();
        if !article.key_entities.is_empty() {
            let entities = article
                .key_entities
                .iter()
                .map(|e| format!("`{e}`"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(md, "{entities}\n").unwrap();
        }
        writeln!(md, "{}\n", article.notes).unwrap();
    }

    md
}

fn escape_link_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_link_target(url: &str) -> String {
    url.replace(' ', "%20").replace('(', "%28").replace(')', "%29")
}

/// Write the rendered page to `{markdown_output_dir}/{date}_news.md`.
#[instrument(level = "info", skip_all, fields(%markdown_output_dir, %date))]
pub async fn write_news_page(
    page: &NewsPage,
    source_name: &str,
    per_page: usize,
    markdown_output_dir: &str,
    date: NaiveDate,
) -> Result<PathBuf, Box<dyn Error>> {
    let md = news_page_to_markdown(page, source_name, per_page);
    fs::create_dir_all(markdown_output_dir).await?;
    let path = PathBuf::from(markdown_output_dir).join(format!("{}_news.md", date.format("%Y-%m-%d")));

    fs::write(&path, md).await?;
    info!(path = %path.display(), "Wrote news page Markdown");
    Ok(path)
}
