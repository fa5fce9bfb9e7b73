//! URL splitting and reassembly.
//!
//! This module contains the URL-level functionality:
//! - Splitting absolute or relative URLs into base, path, query and fragment
//! - Rebuilding a URL from its parts
//! - Updating the query parameters of a URL in one step

pub mod utils;

// Re-export main functionality
pub use utils::{
    build_url, build_url_with, parse_url, parse_url_with, update_url_params,
    update_url_params_with,
};
