//! Core data structures for query parameters and split URLs.

use std::slice;

use indexmap::map::Entry;
use indexmap::IndexMap;

/// The value stored under a query key: one string, or every value of a
/// repeated key in the order it was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A key that appeared once (`?a=1`)
    Single(String),
    /// A repeated key (`?a=1&a=2`)
    Multiple(Vec<String>),
}

impl QueryValue {
    /// The value if this is a single string.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Multiple(_) => None,
        }
    }

    /// The first value, whichever variant this is.
    pub fn first(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// All values as a slice. A single value is a one-element slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            QueryValue::Single(value) => slice::from_ref(value),
            QueryValue::Multiple(values) => values,
        }
    }

    /// All values in order. A single value yields one item.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.as_slice().iter().map(String::as_str)
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, QueryValue::Multiple(_))
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multiple(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Query parameters keyed by name, kept in insertion order.
///
/// A key may be present without a value (see [`QueryParams::unset`]). Such
/// keys read as absent and are skipped when serializing, but they still
/// override the base mapping in [`merge_params`](crate::merge_params), which
/// makes them the way to drop a parameter through an update.
///
/// Equality compares the keys that hold a value, as a map: key order and
/// unset keys do not matter.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: IndexMap<String, Option<QueryValue>>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys that hold a value.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|value| value.is_some()).count()
    }

    /// True when no key holds a value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value`. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.entries.insert(key.into(), Some(value.into()));
    }

    /// Keep `key` in the mapping but without a value.
    pub fn unset(&mut self, key: impl Into<String>) {
        self.entries.insert(key.into(), None);
    }

    /// Drop `key` entirely, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.entries.shift_remove(key).flatten()
    }

    /// Add a value for `key`, promoting a single value to a list when the
    /// key repeats. Values keep the order they were appended in.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.entries.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(Some(QueryValue::Single(value)));
            }
            Entry::Occupied(mut slot) => {
                let current = slot.get_mut();
                *current = match current.take() {
                    None => Some(QueryValue::Single(value)),
                    Some(QueryValue::Single(first)) => Some(QueryValue::Multiple(vec![first, value])),
                    Some(QueryValue::Multiple(mut values)) => {
                        values.push(value);
                        Some(QueryValue::Multiple(values))
                    }
                };
            }
        }
    }

    /// Keys that hold a value, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Keys with their values, in insertion order. Unset keys are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_ref().map(|value| (key.as_str(), value)))
    }

    /// Every key including unset ones, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&QueryValue>)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    pub(crate) fn set_entry(&mut self, key: &str, value: Option<QueryValue>) {
        self.entries.insert(key.to_string(), value);
    }
}

impl PartialEq for QueryParams {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl Eq for QueryParams {}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// A URL split into base, path, decoded query and fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Scheme and host (`https://example.com`), empty for relative input
    pub base_url: String,
    /// Path component (`/search`), may be empty
    pub path: String,
    /// Decoded query parameters
    pub query: QueryParams,
    /// Fragment without the leading `#`
    pub hash: String,
}

/// Pieces to assemble with [`build_url`](crate::build_url). Missing
/// strings are empty and a missing `params` adds no query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub base_url: String,
    pub path: String,
    pub params: Option<QueryParams>,
    pub hash: String,
}

impl From<ParsedUrl> for UrlParts {
    fn from(parsed: ParsedUrl) -> Self {
        Self {
            base_url: parsed.base_url,
            path: parsed.path,
            params: Some(parsed.query),
            hash: parsed.hash,
        }
    }
}

/// How raw query text is turned into keys and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseQueryOptions {
    /// Percent-decode keys and values
    pub decode: bool,
    /// Read `+` as a space before decoding
    pub plus_as_space: bool,
}

impl ParseQueryOptions {
    /// Leave keys and values exactly as written.
    pub fn raw() -> Self {
        Self {
            decode: false,
            plus_as_space: false,
        }
    }
}

impl Default for ParseQueryOptions {
    fn default() -> Self {
        Self {
            decode: true,
            plus_as_space: true,
        }
    }
}

/// How query parameters are written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringifyQueryOptions {
    /// Percent-encode keys and values
    pub encode: bool,
    /// Prefix a non-empty result with `?`
    pub add_prefix: bool,
}

impl StringifyQueryOptions {
    /// No encoding and no `?` prefix.
    pub fn raw() -> Self {
        Self {
            encode: false,
            add_prefix: false,
        }
    }
}

impl Default for StringifyQueryOptions {
    fn default() -> Self {
        Self {
            encode: true,
            add_prefix: true,
        }
    }
}
