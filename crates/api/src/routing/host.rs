//! Effective host extraction

use axum::http::{HeaderMap, Uri};

/// Header set by the edge proxy with the host the client asked for
const FORWARDED_HOST: &str = "x-forwarded-host";

/// Pick the host a request was addressed to.
///
/// Prefers `x-forwarded-host` (first entry of a proxy chain), then `host`,
/// then the URI authority (HTTP/2 requests carry no `host` header).
/// Returns `None` when nothing usable is present.
pub fn effective_host(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    headers
        .get(FORWARDED_HOST)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.split(',').next().unwrap_or(s))
        .map(normalize_host)
        .filter(|h| !h.is_empty())
        .or_else(|| {
            headers
                .get(axum::http::header::HOST)
                .and_then(|h| h.to_str().ok())
                .map(normalize_host)
                .filter(|h| !h.is_empty())
        })
        .or_else(|| uri.host().map(normalize_host).filter(|h| !h.is_empty()))
}

/// Normalize a host header value: strip the port, a trailing dot and case.
///
/// IPv6 literals keep their brackets (`[::1]:3000` -> `[::1]`).
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = match host.strip_prefix('[') {
        Some(rest) => match rest.find(']') {
            Some(end) => &host[..end + 2],
            None => host,
        },
        None => host.split(':').next().unwrap_or(host),
    };
    host.trim_end_matches('.').to_lowercase()
}

/// Literal loopback hosts used during local development
pub fn is_dev_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "[::1]")
}
