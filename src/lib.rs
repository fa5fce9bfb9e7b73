//! toolbox-url - URL and query string utilities
//!
//! Small, pure functions for taking a URL apart, changing its query
//! parameters and putting it back together.
//!
//! # Features
//!
//! - **Ordered**: Parameters keep the order they were written in
//! - **Repeated keys**: `a=1&a=2` collects into a list instead of losing values
//! - **Forgiving**: Malformed percent-escapes stay as written instead of failing
//! - **Relative input**: Paths and bare query strings parse as well as absolute URLs
//! - **Immutable updates**: Set, remove and merge return new mappings
//!
//! # Quick Start
//!
//! ```
//! use toolbox_url::{parse_url, update_url_params, remove_param, QueryParams, QueryValue};
//!
//! // Split a URL into its parts
//! let parsed = parse_url("https://example.com/tools?tab=json&page=2#top");
//! assert_eq!(parsed.base_url, "https://example.com");
//! assert_eq!(parsed.query.get("page"), Some(&QueryValue::from("2")));
//!
//! // Drop a parameter without touching the original mapping
//! let without_page = remove_param(&parsed.query, "page");
//! assert!(parsed.query.contains_key("page"));
//! assert!(!without_page.contains_key("page"));
//!
//! // Replace one parameter, keep everything else
//! let updated = update_url_params(
//!     "/tools?tab=json&page=2#top",
//!     &QueryParams::from([("tab", "color")]),
//! );
//! assert_eq!(updated, "/tools?tab=color&page=2#top");
//! ```
//!
//! # Error Handling
//!
//! The public operations are total and return plain values. [`QueryUrlError`]
//! is only returned by [`try_decode_component`], the strict decoder the
//! forgiving functions are built on.

// Re-export query functions
pub use crate::query::{
    decode_component, encode_component, get_param, merge_params, parse_query, parse_query_with,
    remove_param, set_param, stringify_query, stringify_query_with, try_decode_component,
};

// Re-export URL functions
pub use crate::url::{
    build_url, build_url_with, parse_url, parse_url_with, update_url_params,
    update_url_params_with,
};

// Re-export public types
pub use error::QueryUrlError;
pub use types::{
    ParseQueryOptions, ParsedUrl, QueryParams, QueryValue, StringifyQueryOptions, UrlParts,
};

// Module declarations
pub mod error;
pub mod query;
pub mod types;
pub mod url;
