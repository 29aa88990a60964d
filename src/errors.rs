/// Everything that can make a bridge request fail.
///
/// HTTP error statuses (4xx/5xx) are not listed here: a well-formed error
/// response is a successful request.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("No URL set")]
    MissingUrl,

    #[error("Malformed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid request method: {0}")]
    InvalidMethod(String),

    #[error("Invalid request header: {0}")]
    InvalidHeader(String),

    #[error("Blocking request issued from inside an async runtime")]
    NestedRuntime,

    #[error("Cannot start I/O runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("Cannot open connection: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
}
