//! Output generation for extracted news pages.
//!
//! # Submodules
//!
//! - [`json`]: Writes a `NewsPage` to a JSON file for API and summarizer consumption
//! - [`markdown`]: Renders a `NewsPage` as a Markdown report
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     └── news.json
//!
//! markdown_output_dir/
//! └── 2025-05-06_news.md
//! ```

pub mod json;
pub mod markdown;
