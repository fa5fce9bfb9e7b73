//! Error types for query string decoding and URL parsing.

use thiserror::Error;

/// Errors produced by the strict decoding and parsing layers.
///
/// The public URL and query operations never surface these: they fall back
/// to the raw text (or to the relative split) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryUrlError {
    /// A `%` was not followed by two hexadecimal digits.
    #[error("Malformed percent-escape at byte {index}")]
    MalformedEscape { index: usize },

    /// The percent-escapes decoded to bytes that are not valid UTF-8.
    #[error("Percent-escapes do not decode to valid UTF-8")]
    InvalidUtf8,

    /// URL parsing failed using the url crate.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),

    /// The URL parsed but has no host, so it has no base URL.
    #[error("URL has no host")]
    MissingHost,
}

impl From<::url::ParseError> for QueryUrlError {
    fn from(err: ::url::ParseError) -> Self {
        QueryUrlError::UrlParseError(err.to_string())
    }
}
