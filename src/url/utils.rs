//! URL parsing and rebuilding utilities.
//!
//! Absolute URLs go through the `url` crate. Anything it rejects, or that has
//! no host, is split by hand so relative paths and bare query strings work
//! too.

use std::fmt;

use ::url::Url;
use tracing::trace;

use crate::error::QueryUrlError;
use crate::query::params::{merge_params, parse_query_with, stringify_query_with};
use crate::types::{ParseQueryOptions, ParsedUrl, QueryParams, StringifyQueryOptions, UrlParts};

/// Undecoded URL pieces, before the query is parsed.
#[derive(Debug, PartialEq)]
struct RawUrl<'a> {
    base_url: String,
    path: &'a str,
    query: &'a str,
    hash: &'a str,
}

/// Split an absolute URL (scheme and host required).
fn split_absolute(parsed: &Url) -> Result<RawUrl<'_>, QueryUrlError> {
    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or(QueryUrlError::MissingHost)?;

    let base_url = match parsed.port() {
        Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
        None => format!("{}://{}", parsed.scheme(), host),
    };

    Ok(RawUrl {
        base_url,
        path: parsed.path(),
        query: parsed.query().unwrap_or_default(),
        hash: parsed.fragment().unwrap_or_default(),
    })
}

/// Split a relative URL or bare query string.
///
/// Text without `?` but containing `=` is taken to be a query string.
fn split_relative(input: &str) -> RawUrl<'_> {
    let (rest, hash) = input.split_once('#').unwrap_or((input, ""));

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, query),
        None if rest.contains('=') => ("", rest),
        None => (rest, ""),
    };

    RawUrl {
        base_url: String::new(),
        path,
        query,
        hash,
    }
}

fn into_parsed(raw: RawUrl<'_>, options: &ParseQueryOptions) -> ParsedUrl {
    ParsedUrl {
        base_url: raw.base_url,
        path: raw.path.to_string(),
        query: parse_query_with(raw.query, options),
        hash: raw.hash.to_string(),
    }
}

/// Parse a URL with the default query options.
///
/// # Examples
///
/// ```
/// use toolbox_url::{parse_url, QueryValue};
///
/// let parsed = parse_url("https://example.com/path?x=1#frag");
/// assert_eq!(parsed.base_url, "https://example.com");
/// assert_eq!(parsed.path, "/path");
/// assert_eq!(parsed.query.get("x"), Some(&QueryValue::from("1")));
/// assert_eq!(parsed.hash, "frag");
///
/// let bare = parse_url("a=1&b=2");
/// assert_eq!(bare.path, "");
/// assert_eq!(bare.query.len(), 2);
/// ```
pub fn parse_url(input: &str) -> ParsedUrl {
    parse_url_with(input, &ParseQueryOptions::default())
}

/// Split `input` into base URL, path, query parameters and fragment.
///
/// Never fails: input the `url` crate cannot read as an absolute URL with a
/// host is split on `#` and `?` instead.
pub fn parse_url_with(input: &str, options: &ParseQueryOptions) -> ParsedUrl {
    if input.is_empty() {
        return ParsedUrl::default();
    }

    let absolute = Url::parse(input);
    let split = match &absolute {
        Ok(parsed) => split_absolute(parsed),
        Err(err) => Err(QueryUrlError::from(*err)),
    };

    match split {
        Ok(raw) => into_parsed(raw, options),
        Err(err) => {
            trace!("splitting `{input}` as a relative URL: {err}");
            into_parsed(split_relative(input), options)
        }
    }
}

fn assemble_url(
    base_url: &str,
    path: &str,
    params: Option<&QueryParams>,
    hash: &str,
    options: &StringifyQueryOptions,
) -> String {
    let query = params
        .map(|params| stringify_query_with(params, options))
        .unwrap_or_default();

    let mut url = String::with_capacity(base_url.len() + path.len() + query.len() + hash.len() + 1);
    url.push_str(base_url);
    url.push_str(path);
    url.push_str(&query);
    if !hash.is_empty() {
        url.push('#');
        url.push_str(hash);
    }
    url
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = assemble_url(
            &self.base_url,
            &self.path,
            Some(&self.query),
            &self.hash,
            &StringifyQueryOptions::default(),
        );
        f.write_str(&url)
    }
}

/// Build a URL with the default stringify options.
///
/// # Examples
///
/// ```
/// use toolbox_url::{build_url, QueryParams, UrlParts};
///
/// let url = build_url(&UrlParts {
///     path: "/search".to_string(),
///     params: Some(QueryParams::from([("q", "rust")])),
///     hash: "results".to_string(),
///     ..UrlParts::default()
/// });
/// assert_eq!(url, "/search?q=rust#results");
/// ```
pub fn build_url(parts: &UrlParts) -> String {
    build_url_with(parts, &StringifyQueryOptions::default())
}

/// Concatenate base URL, path, query string and `#fragment`.
pub fn build_url_with(parts: &UrlParts, options: &StringifyQueryOptions) -> String {
    assemble_url(
        &parts.base_url,
        &parts.path,
        parts.params.as_ref(),
        &parts.hash,
        options,
    )
}

/// Add or replace query parameters of `url` with the default options.
///
/// # Examples
///
/// ```
/// use toolbox_url::{update_url_params, QueryParams};
///
/// let updates = QueryParams::from([("b", "9"), ("c", "3")]);
/// assert_eq!(
///     update_url_params("https://x.com/p?a=1&b=2", &updates),
///     "https://x.com/p?a=1&b=9&c=3"
/// );
/// ```
pub fn update_url_params(url: &str, updates: &QueryParams) -> String {
    update_url_params_with(
        url,
        updates,
        &ParseQueryOptions::default(),
        &StringifyQueryOptions::default(),
    )
}

/// Parse `url`, merge `updates` over its query and rebuild it. The path,
/// fragment and unrelated parameters are kept.
pub fn update_url_params_with(
    url: &str,
    updates: &QueryParams,
    parse_options: &ParseQueryOptions,
    stringify_options: &StringifyQueryOptions,
) -> String {
    let parsed = parse_url_with(url, parse_options);
    let merged = merge_params(&parsed.query, updates);
    assemble_url(
        &parsed.base_url,
        &parsed.path,
        Some(&merged),
        &parsed.hash,
        stringify_options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_relative_path_and_query() {
        let raw = split_relative("/docs/page?x=1#top");
        assert_eq!(raw.base_url, "");
        assert_eq!(raw.path, "/docs/page");
        assert_eq!(raw.query, "x=1");
        assert_eq!(raw.hash, "top");
    }

    #[test]
    fn test_split_relative_bare_query() {
        let raw = split_relative("a=1&b=2#frag");
        assert_eq!(raw.path, "");
        assert_eq!(raw.query, "a=1&b=2");
        assert_eq!(raw.hash, "frag");
    }

    #[test]
    fn test_split_relative_plain_path() {
        let raw = split_relative("docs/readme.md");
        assert_eq!(raw.path, "docs/readme.md");
        assert_eq!(raw.query, "");
        assert_eq!(raw.hash, "");
    }

    #[test]
    fn test_split_relative_hash_before_question_mark() {
        let raw = split_relative("/page#section?not=query");
        assert_eq!(raw.path, "/page");
        assert_eq!(raw.query, "");
        assert_eq!(raw.hash, "section?not=query");
    }

    #[test]
    fn test_split_absolute_requires_host() {
        let parsed = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(split_absolute(&parsed), Err(QueryUrlError::MissingHost));
    }

    #[test]
    fn test_split_absolute_keeps_non_default_port() {
        let parsed = Url::parse("http://localhost:8080/api?x=1").unwrap();
        let raw = split_absolute(&parsed).unwrap();
        assert_eq!(raw.base_url, "http://localhost:8080");
        assert_eq!(raw.path, "/api");

        let default_port = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(split_absolute(&default_port).unwrap().base_url, "https://example.com");
    }

    #[test]
    fn test_assemble_url_omits_empty_pieces() {
        let options = StringifyQueryOptions::default();
        assert_eq!(assemble_url("", "", None, "", &options), "");
        assert_eq!(assemble_url("", "/p", Some(&QueryParams::new()), "", &options), "/p");
        assert_eq!(assemble_url("https://a.io", "", None, "h", &options), "https://a.io#h");
    }

    #[test]
    fn test_parsed_url_display() {
        let parsed = ParsedUrl {
            base_url: "https://example.com".to_string(),
            path: "/docs".to_string(),
            query: QueryParams::from([("q", "rust lang")]),
            hash: "top".to_string(),
        };
        assert_eq!(parsed.to_string(), "https://example.com/docs?q=rust%20lang#top");
        assert_eq!(ParsedUrl::default().to_string(), "");
    }
}
