//! Error types for article extraction.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures that abort an extraction call.
///
/// Missing headlines, links, dates or topics never show up here: those are
/// handled per candidate by skipping or defaulting.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The source answered with a non-success status.
    #[error("fetch failed with status {status}: {reason}")]
    FetchStatus { status: StatusCode, reason: String },

    /// The request never produced a response (DNS, TLS, connection, body read).
    #[error("fetch failed: {0}")]
    FetchTransport(#[from] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// A request header in the source profile is not a valid header value.
    #[error("invalid value for header `{name}`: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    /// A selector in the source profile does not parse.
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The profile origin is not an absolute URL.
    #[error("invalid source origin: {0}")]
    InvalidOrigin(#[from] url::ParseError),
}

impl ExtractError {
    /// Whether this is a failure of the homepage fetch itself.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::FetchStatus { .. } | Self::FetchTransport(_))
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
