//! Reusable request object for the embedding scripting runtime.
//!
//! The runtime drives an [`HttpBridge`] through plain setters, one blocking
//! [`request`](HttpBridge::request) call and plain getters, because nothing but
//! strings, byte arrays, integers and booleans crosses its boundary:
//!
//! ```no_run
//! # use http_bridge::HttpBridge;
//! let mut bridge = HttpBridge::new(None);
//! bridge.set_url("https://example.com/");
//! bridge.add_header("Accept", "text/html");
//!
//! if bridge.request() {
//!     let code = bridge.response_code();
//!     let flat = bridge.interleaved_headers(); // [k1, v1, k2, v2, ...]
//!     let body = bridge.response().unwrap_or_default();
//! }
//! ```
//!
//! One instance serves one request at a time. [`reset`](HttpBridge::reset)
//! clears everything so the same instance can be reused for an unrelated request.
use crate::config::BridgeConfig;
use crate::errors::BridgeError;
use crate::net::{fetch, HttpRequest, HttpResponse};

pub struct HttpBridge {
    config: BridgeConfig,
    /// Request being configured
    request: HttpRequest,
    /// Response of the last successful request
    response: Option<HttpResponse>,
    /// Failure of the last request, for host-side diagnostics
    last_error: Option<BridgeError>,
}

impl Default for HttpBridge {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HttpBridge {
    /// Creates a bridge in its reset state. Uses the default configuration when
    /// `config` is `None`.
    pub fn new(config: Option<BridgeConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
            request: HttpRequest::default(),
            response: None,
            last_error: None,
        }
    }

    /// Returns every request and response field to its default.
    pub fn reset(&mut self) {
        self.request = HttpRequest::default();
        self.response = None;
        self.last_error = None;
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.request.set_url(url);
    }

    pub fn set_method(&mut self, method: &str) {
        self.request.set_method(method);
    }

    pub fn set_post_data(&mut self, data: impl Into<Vec<u8>>) {
        self.request.set_body(data);
    }

    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.request.add_header(key, value);
    }

    /// Performs the configured request, blocking until it completes.
    ///
    /// Returns `true` whenever a response was received, including 4xx/5xx
    /// statuses. Returns `false` on any URL, connection or I/O failure; the
    /// cause is then available through [`last_error`](Self::last_error).
    ///
    /// Called from a thread that is already driving an async runtime, the
    /// request is refused with [`BridgeError::NestedRuntime`] instead of blocking.
    pub fn request(&mut self) -> bool {
        self.response = None;
        self.last_error = None;

        match fetch(&self.config, &self.request) {
            Ok(response) => {
                log::debug!(
                    "HttpBridge: {} {} -> {}",
                    self.request.method(),
                    self.request.url().unwrap_or_default(),
                    response.status
                );
                self.response = Some(response);
                true
            }
            Err(e) => {
                log::error!("HttpBridge: request failed: {}", e);
                self.last_error = Some(e);
                false
            }
        }
    }

    /// Status of the last completed request, `0` if none completed.
    pub fn response_code(&self) -> i32 {
        self.response.as_ref().map_or(0, |r| i32::from(r.status))
    }

    /// Body of the last completed request.
    pub fn response(&self) -> Option<&[u8]> {
        self.response.as_ref().map(|r| r.body.as_slice())
    }

    /// Response headers of the last completed request as `[k1, v1, k2, v2, ...]`.
    ///
    /// Header names are lower-case (`x-a`, not `X-A`), as the HTTP stack
    /// normalizes them; compare names case-insensitively or in lower case.
    pub fn interleaved_headers(&self) -> Vec<String> {
        self.response
            .as_ref()
            .map(HttpResponse::interleaved_headers)
            .unwrap_or_default()
    }

    /// The full response of the last completed request.
    pub fn last_response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    pub fn last_error(&self) -> Option<&BridgeError> {
        self.last_error.as_ref()
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn pending_request(&self) -> &HttpRequest {
        &self.request
    }
}
