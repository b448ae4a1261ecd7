//! Public URL construction
//!
//! A stored object is reachable at `{public_base_url}/{encode_key(key)}`. The key is
//! encoded as a single path segment with the same set `encodeURIComponent` uses, so
//! tools that list the bucket can rebuild the URL and decode it back to the key.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const KEY_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode an object key as one URL path segment.
pub fn encode_key(key: &str) -> String {
    utf8_percent_encode(key, KEY_SEGMENT).to_string()
}

/// Reverse of [`encode_key`]. Returns `None` if the segment is not valid UTF-8 once decoded.
pub fn decode_key(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Build the permanent public URL for `key` under `base_url`.
pub fn public_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), encode_key(key))
}
