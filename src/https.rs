//! One-call request API for scripts.
//!
//! Scripts call `request(url, options)` and receive the status, body and
//! headers in one go. The call runs through an [`HttpBridge`] the same way the
//! embedding runtime does, headers included: they are read back in their
//! interleaved form and rebuilt into a map.
use std::collections::BTreeMap;

use crate::bridge::HttpBridge;
use crate::config::BridgeConfig;
use crate::net::headers_from_interleaved;

const VALID_METHODS: [&str; 6] = ["GET", "HEAD", "POST", "PUT", "DELETE", "PATCH"];
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, thiserror::Error)]
pub enum HttpsError {
    #[error("expected one of \"get\", \"head\", \"post\", \"put\", \"delete\", or \"patch\", got \"{0}\"")]
    InvalidMethod(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Optional request settings.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Body to send. Switches the default method to `POST` and adds a form
    /// `Content-Type` unless the headers set one.
    pub data: Option<Vec<u8>>,
    /// Method name, case-insensitive. Defaults to `GET`, or `POST` when `data` is set.
    pub method: Option<String>,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub code: i32,
    pub body: Vec<u8>,
    pub headers: BTreeMap<String, String>,
}

/// Performs a request with the default configuration.
pub fn request(url: &str, options: Option<RequestOptions>) -> Result<Reply, HttpsError> {
    request_with(BridgeConfig::default(), url, options)
}

/// Performs a request with the given configuration.
pub fn request_with(
    config: BridgeConfig,
    url: &str,
    options: Option<RequestOptions>,
) -> Result<Reply, HttpsError> {
    let options = options.unwrap_or_default();
    let method = resolve_method(&options)?;

    let mut bridge = HttpBridge::new(Some(config));
    bridge.set_url(url);
    bridge.set_method(&method);

    if let Some(data) = options.data {
        bridge.add_header("Content-Type", FORM_CONTENT_TYPE);
        bridge.set_post_data(data);
    }
    for (key, value) in options.headers {
        bridge.add_header(key, value);
    }

    if !bridge.request() {
        let reason = bridge
            .last_error()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(HttpsError::RequestFailed(reason));
    }

    Ok(Reply {
        code: bridge.response_code(),
        body: bridge.response().map(<[u8]>::to_vec).unwrap_or_default(),
        headers: headers_from_interleaved(&bridge.interleaved_headers()),
    })
}

fn resolve_method(options: &RequestOptions) -> Result<String, HttpsError> {
    let Some(method) = options.method.as_deref() else {
        let default = if options.data.is_some() { "POST" } else { "GET" };
        return Ok(default.to_string());
    };

    let method = method.to_ascii_uppercase();
    if VALID_METHODS.contains(&method.as_str()) {
        Ok(method)
    } else {
        Err(HttpsError::InvalidMethod(method))
    }
}
