pub const DEFAULT_USER_AGENT: &str = "HttpBridge/1.0";

/// Bridge configuration, set by the host when the bridge is created.
///
/// Timeouts, TLS and redirects follow the HTTP client defaults.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// User agent string for HTTP requests. A `User-Agent` request header overrides it.
    pub user_agent: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
