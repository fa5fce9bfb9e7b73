//! Percent-encoding and decoding of single query components.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::error::QueryUrlError;
use crate::types::ParseQueryOptions;

/// Characters escaped in a query component: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Strictly percent-decode a component.
///
/// Every `%` must start a two-digit hex escape, and the decoded bytes must
/// be valid UTF-8. `+` is left alone.
///
/// # Examples
///
/// ```
/// use toolbox_url::{try_decode_component, QueryUrlError};
///
/// assert_eq!(try_decode_component("caf%C3%A9").unwrap(), "café");
/// assert_eq!(
///     try_decode_component("100%"),
///     Err(QueryUrlError::MalformedEscape { index: 3 })
/// );
/// ```
pub fn try_decode_component(raw: &str) -> Result<String, QueryUrlError> {
    let bytes = raw.as_bytes();
    for (index, _) in raw.match_indices('%') {
        let escape = &bytes[index + 1..];
        if escape.len() < 2 || !escape[..2].iter().all(u8::is_ascii_hexdigit) {
            return Err(QueryUrlError::MalformedEscape { index });
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| QueryUrlError::InvalidUtf8)
}

/// Decode a key or value according to `options`.
///
/// Malformed escapes are not an error here: the component comes back as
/// written (after any `+` substitution).
pub fn decode_component(raw: &str, options: &ParseQueryOptions) -> String {
    let value = if options.plus_as_space {
        raw.replace('+', " ")
    } else {
        raw.to_string()
    };

    if !options.decode {
        return value;
    }

    match try_decode_component(&value) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!("keeping raw query component `{value}`: {err}");
            value
        }
    }
}

/// Percent-encode a key or value, or borrow it unchanged when
/// `should_encode` is false.
pub fn encode_component(raw: &str, should_encode: bool) -> Cow<'_, str> {
    if should_encode {
        utf8_percent_encode(raw, COMPONENT).into()
    } else {
        Cow::Borrowed(raw)
    }
}
