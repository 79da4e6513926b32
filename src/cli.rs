//! Command-line interface definitions for Prensa News.
//!
//! All arguments can be provided via command-line flags, and the ones that
//! configure the scrape itself also via environment variables.

use clap::Parser;
use std::num::NonZeroUsize;

/// Command-line arguments for the Prensa News application.
///
/// # Examples
///
/// ```sh
/// # Print the first page of 10 articles as JSON
/// prensa_news
///
/// # Scrape 20 articles and write both outputs
/// prensa_news -l 20 -j ./json -m ./markdown
///
/// # Scrape a mirror with a 15 second timeout
/// prensa_news --source-url http://localhost:8080 --timeout-secs 15
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Maximum number of articles to extract
    #[arg(short, long, env = "PRENSA_LIMIT", default_value = "10")]
    pub limit: NonZeroUsize,

    /// Page of results to output (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Articles per page
    #[arg(long, default_value = "10")]
    pub per_page: NonZeroUsize,

    /// Origin of the news site to scrape
    #[arg(long, env = "PRENSA_SOURCE_URL", default_value = "https://www.laprensagrafica.com")]
    pub source_url: String,

    /// Give up on the homepage fetch after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Output directory for the JSON news page
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Output directory for the Markdown report
    #[arg(short, long)]
    pub markdown_output_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["prensa_news"]);

        assert_eq!(cli.limit.get(), 10);
        assert_eq!(cli.page, 1);
        assert_eq!(cli.per_page.get(), 10);
        assert_eq!(cli.source_url, "https://www.laprensagrafica.com");
        assert!(cli.timeout_secs.is_none());
        assert!(cli.json_output_dir.is_none());
        assert!(cli.markdown_output_dir.is_none());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "prensa_news",
            "-l",
            "25",
            "-p",
            "3",
            "-j",
            "/tmp/json",
            "-m",
            "/tmp/markdown",
        ]);

        assert_eq!(cli.limit.get(), 25);
        assert_eq!(cli.page, 3);
        assert_eq!(cli.json_output_dir.as_deref(), Some("/tmp/json"));
        assert_eq!(cli.markdown_output_dir.as_deref(), Some("/tmp/markdown"));
    }

    #[test]
    fn test_cli_rejects_zero_limit() {
        assert!(Cli::try_parse_from(["prensa_news", "--limit", "0"]).is_err());
    }
}
