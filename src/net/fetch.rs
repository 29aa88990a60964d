use std::collections::BTreeMap;

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

use crate::config::BridgeConfig;
use crate::errors::BridgeError;
use crate::net::{collect_headers, HttpRequest, HttpResponse};

/// Performs one blocking request and returns the fully buffered response.
///
/// The URL must use `http` or `https`; nothing is sent otherwise. A client and a
/// single-threaded runtime are created for this call only and dropped before
/// returning, so no connection outlives the request. Fails with
/// [`BridgeError::NestedRuntime`] when called from inside an async runtime.
pub fn fetch(config: &BridgeConfig, request: &HttpRequest) -> Result<HttpResponse, BridgeError> {
    let url = parse_url(request.url())?;

    // block_on cannot nest inside a running runtime
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(BridgeError::NestedRuntime);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .pool_max_idle_per_host(0)
        .build()
        .map_err(BridgeError::Client)?;

    let method = Method::from_bytes(request.method().as_bytes())
        .map_err(|_| BridgeError::InvalidMethod(request.method().to_string()))?;
    let headers = build_headers(request.headers())?;
    let body = request.outgoing_body().map(<[u8]>::to_vec);

    runtime.block_on(send(client, method, url, headers, body))
}

async fn send(
    client: reqwest::Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
) -> Result<HttpResponse, BridgeError> {
    let mut builder = client.request(method, url).headers(headers);
    if let Some(body) = body {
        builder = builder.body(body);
    }

    // Status and headers are complete once send() resolves; the body is read after.
    let res = builder.send().await.map_err(BridgeError::Transport)?;
    let status = res.status().as_u16();
    let headers = collect_headers(res.headers());

    // Note: does not deal with streaming
    let body = res.bytes().await.map_err(BridgeError::Transport)?.to_vec();

    Ok(HttpResponse { status, headers, body })
}

/// Parses the raw URL and only lets `http` and `https` through.
fn parse_url(raw: Option<&str>) -> Result<Url, BridgeError> {
    let raw = raw.ok_or(BridgeError::MissingUrl)?;
    let url = Url::parse(raw)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BridgeError::UnsupportedScheme(other.to_string())),
    }
}

fn build_headers(map: &BTreeMap<String, String>) -> Result<HeaderMap, BridgeError> {
    let mut headers = HeaderMap::with_capacity(map.len());

    for (key, value) in map {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| BridgeError::InvalidHeader(key.clone()))?;
        let value = HeaderValue::from_bytes(value.as_bytes())
            .map_err(|_| BridgeError::InvalidHeader(key.clone()))?;
        headers.insert(name, value);
    }

    Ok(headers)
}
