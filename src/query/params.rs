//! Parsing, serializing and updating query parameter mappings.
//!
//! Every update function returns a fresh [`QueryParams`]; inputs are never
//! modified.

use crate::query::codec::{decode_component, encode_component};
use crate::types::{ParseQueryOptions, QueryParams, QueryValue, StringifyQueryOptions};

/// Parse a query string with the default options.
///
/// # Examples
///
/// ```
/// use toolbox_url::{parse_query, QueryValue};
///
/// let params = parse_query("?q=hello+world&tag=a&tag=b");
/// assert_eq!(params.get("q"), Some(&QueryValue::from("hello world")));
/// assert_eq!(params.get("tag"), Some(&QueryValue::from(vec!["a", "b"])));
/// ```
pub fn parse_query(query: &str) -> QueryParams {
    parse_query_with(query, &ParseQueryOptions::default())
}

/// Parse a query string, optionally prefixed with `?`.
///
/// Empty pairs are skipped, a pair without `=` gets an empty value, and a
/// repeated key collects its values in order.
pub fn parse_query_with(query: &str, options: &ParseQueryOptions) -> QueryParams {
    let trimmed = query.strip_prefix('?').unwrap_or(query);

    let mut params = QueryParams::new();
    for pair in trimmed.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        params.append(
            decode_component(raw_key, options),
            decode_component(raw_value, options),
        );
    }
    params
}

/// Serialize parameters with the default options.
///
/// # Examples
///
/// ```
/// use toolbox_url::{stringify_query, QueryParams, QueryValue};
///
/// let params = QueryParams::from([
///     ("a", QueryValue::from("1")),
///     ("b", QueryValue::from(vec!["2", "3"])),
/// ]);
/// assert_eq!(stringify_query(&params), "?a=1&b=2&b=3");
/// ```
pub fn stringify_query(params: &QueryParams) -> String {
    stringify_query_with(params, &StringifyQueryOptions::default())
}

/// Serialize parameters in insertion order, one `key=value` pair per value.
///
/// Unset keys are skipped. An empty result is never prefixed.
pub fn stringify_query_with(params: &QueryParams, options: &StringifyQueryOptions) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        let key = encode_component(key, options.encode);
        for item in value.values() {
            pairs.push(format!("{}={}", key, encode_component(item, options.encode)));
        }
    }

    let query = pairs.join("&");
    if query.is_empty() || !options.add_prefix {
        query
    } else {
        format!("?{query}")
    }
}

/// Look up a parameter. Values are returned as stored, without decoding.
pub fn get_param<'a>(params: &'a QueryParams, key: &str) -> Option<&'a QueryValue> {
    params.get(key)
}

/// Copy of `params` with `key` set to `value`.
pub fn set_param(params: &QueryParams, key: &str, value: impl Into<QueryValue>) -> QueryParams {
    let mut next = params.clone();
    next.insert(key, value);
    next
}

/// Copy of `params` without `key`. Removing a missing key still copies.
pub fn remove_param(params: &QueryParams, key: &str) -> QueryParams {
    let mut next = params.clone();
    next.remove(key);
    next
}

/// Right-biased merge: every entry of `updates` replaces or extends `base`.
///
/// Unset keys in `updates` carry over as unset, so they hide the base value.
pub fn merge_params(base: &QueryParams, updates: &QueryParams) -> QueryParams {
    let mut next = base.clone();
    for (key, value) in updates.entries() {
        next.set_entry(key, value.cloned());
    }
    next
}
