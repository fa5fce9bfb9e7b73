//! Query string processing.
//!
//! This module contains the query-related functionality:
//! - Percent-encoding and decoding of individual keys and values
//! - Parsing query strings into ordered parameter mappings
//! - Serializing mappings back into query strings
//! - Non-mutating parameter updates

pub mod codec;
pub mod params;

// Re-export main functionality
pub use codec::{decode_component, encode_component, try_decode_component};
pub use params::{
    get_param, merge_params, parse_query, parse_query_with, remove_param, set_param,
    stringify_query, stringify_query_with,
};
