//! api::warnings
//!
//! Decoding of the `X-Cf-Warnings` response header.
//!
//! The platform reports non-fatal warnings as a comma-separated list of
//! query-escaped strings. A response may carry the header more than once.

use percent_encoding::percent_decode_str;
use reqwest::header::HeaderMap;

use crate::actor::Warnings;

/// Name of the warnings header.
pub const WARNINGS_HEADER: &str = "X-Cf-Warnings";

/// Collect warnings from response headers, in header order.
pub fn from_headers(headers: &HeaderMap) -> Warnings {
    headers
        .get_all(WARNINGS_HEADER)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(parse)
        .collect()
}

/// Split and unescape one header value.
pub fn parse(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(unescape)
        .collect()
}

fn unescape(part: &str) -> String {
    let spaced = part.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
