//! Buffered HTTP response model.
//!
//! An [`HttpResponse`] is the complete result of one request: the status code,
//! the response headers and the raw body bytes, fully read into memory.
//!
//! ## Headers
//! - Header names are stored lower-cased, as the HTTP stack normalizes them.
//! - A header that was received several times is stored once, its values
//!   joined with `", "` in the order they arrived.
//! - The map is ordered by name, so the interleaved form is deterministic.
//!
//! ## Interleaved headers
//! The embedding runtime cannot receive a map. [`interleave_headers`] flattens
//! the map into `[k1, v1, k2, v2, ...]` and [`headers_from_interleaved`] rebuilds
//! it on the receiving side.
use std::collections::BTreeMap;

use http::HeaderMap;

const VALUE_SEPARATOR: &str = ", ";

/// Complete response of a finished request.
///
/// A 4xx/5xx status is a regular response; `body` then holds the error page
/// the server sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Response headers, one entry per (lower-cased) name.
    pub headers: BTreeMap<String, String>,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns the headers in interleaved form.
    pub fn interleaved_headers(&self) -> Vec<String> {
        interleave_headers(&self.headers)
    }
}

/// Collects a received header map into one string per name.
///
/// Repeated values are joined with `", "`. Values that are not valid UTF-8 are
/// decoded lossily.
pub fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected = BTreeMap::new();

    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(VALUE_SEPARATOR);

        collected.insert(name.as_str().to_string(), joined);
    }

    collected
}

/// Flattens a header map into `[key, value, key, value, ...]`.
///
/// Entries without a key are skipped.
pub fn interleave_headers(headers: &BTreeMap<String, String>) -> Vec<String> {
    let mut flat = Vec::with_capacity(headers.len() * 2);

    for (key, value) in headers {
        if key.is_empty() {
            continue;
        }
        flat.push(key.clone());
        flat.push(value.clone());
    }

    flat
}

/// Rebuilds a header map from its interleaved form. A trailing key without
/// value is ignored.
pub fn headers_from_interleaved<S: AsRef<str>>(flat: &[S]) -> BTreeMap<String, String> {
    flat.chunks_exact(2)
        .map(|pair| (pair[0].as_ref().to_string(), pair[1].as_ref().to_string()))
        .collect()
}
