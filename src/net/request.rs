//! Request descriptor.
//!
//! An [`HttpRequest`] holds everything needed to perform one request: the raw URL,
//! the method, an optional body and the request headers. Nothing is validated
//! here; [`fetch`](crate::net::fetch) rejects bad URLs, methods and headers when
//! the request is performed.
use std::collections::BTreeMap;

const DEFAULT_METHOD: &str = "GET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    url: Option<String>,
    method: String,
    body: Option<Vec<u8>>,
    headers: BTreeMap<String, String>,
}

impl Default for HttpRequest {
    fn default() -> Self {
        Self {
            url: None,
            method: DEFAULT_METHOD.to_string(),
            body: None,
            headers: BTreeMap::new(),
        }
    }
}

impl HttpRequest {
    /// Creates a `GET` request for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.set_method(method);
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.set_body(body);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(key, value);
        self
    }

    /// Stores the raw URL string.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Stores the upper-cased method.
    pub fn set_method(&mut self, method: &str) {
        self.method = method.to_ascii_uppercase();
    }

    /// Replaces the body to send.
    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = Some(body.into());
    }

    /// Inserts or overwrites a request header. Names compare case-insensitively,
    /// so a later write replaces an earlier one whatever its spelling.
    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(&key));
        self.headers.insert(key, value.into());
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Returns true when the method allows a request body to be sent.
    pub fn can_send_data(&self) -> bool {
        self.method != "GET" && self.method != "HEAD"
    }

    /// Body that goes on the wire. Bodies set on `GET`/`HEAD` requests are dropped.
    pub fn outgoing_body(&self) -> Option<&[u8]> {
        if self.can_send_data() {
            self.body()
        } else {
            None
        }
    }
}
