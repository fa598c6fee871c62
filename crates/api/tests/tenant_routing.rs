//! End-to-end tests for storefront subdomain routing
//!
//! Requests go through the full router, including the tenant routing
//! middleware, using `tower::ServiceExt::oneshot`.

#![allow(clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use vendly_api::{config::LogFormat, routes::create_router, AppState, Config};

fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".to_string(),
        public_url: "https://example.com".to_string(),
        root_domain: "example.com".to_string(),
        reserved_subdomains: ["www", "admin", "api", "ai", "support", "docs", "status"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        log_format: LogFormat::Pretty,
    }
}

fn app() -> Router {
    create_router(AppState::new(test_config()))
}

async fn get(host: &str, uri: &str) -> (StatusCode, Option<String>, Value) {
    let request = Request::builder()
        .uri(uri)
        .header(header::HOST, host)
        .body(Body::empty())
        .unwrap();
    send(request).await
}

async fn send(request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, location, body)
}

#[tokio::test]
async fn test_tenant_subdomain_is_rewritten() {
    let (status, _, body) = get("acme.example.com", "/products/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "tenant": "acme", "path": "/products/42", "via_subdomain": true })
    );
}

#[tokio::test]
async fn test_tenant_root_path() {
    let (status, _, body) = get("acme.example.com:443", "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "acme");
    assert_eq!(body["path"], "/");
    assert_eq!(body["via_subdomain"], true);
}

#[tokio::test]
async fn test_already_prefixed_path_is_not_doubled() {
    let (status, _, body) = get("acme.example.com", "/acme/foo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "acme");
    assert_eq!(body["path"], "/foo");
    // Reached without a rewrite, so no tenant extension was attached
    assert_eq!(body["via_subdomain"], false);
}

#[tokio::test]
async fn test_admin_path_on_storefront_redirects() {
    let (status, location, _) = get("acme.example.com", "/admin/x").await;

    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_root_domain_is_not_rewritten() {
    // `/products/42` on the root domain is the storefront "products", not a
    // rewrite of it: the path reaches the router untouched.
    let (status, _, body) = get("example.com", "/products/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "products");
    assert_eq!(body["path"], "/42");
    assert_eq!(body["via_subdomain"], false);
}

#[tokio::test]
async fn test_reserved_subdomain_is_not_rewritten() {
    // Not rewritten to /dashboard under a tenant, and not served as a
    // storefront named "dashboard" either
    let (status, _, body) = get("admin.example.com", "/dashboard").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["tenant"], Value::Null);

    let (status, _, body) = get("admin.example.com", "/acme/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "acme");
    assert_eq!(body["path"], "/orders");
    assert_eq!(body["via_subdomain"], false);

    let (status, _, body) = get("status.example.com", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_forwarded_host_takes_precedence() {
    let request = Request::builder()
        .uri("/cart?step=2")
        .header(header::HOST, "internal.fly.dev")
        .header("x-forwarded-host", "shop-42.example.com")
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "shop-42");
    assert_eq!(body["path"], "/cart");
    assert_eq!(body["via_subdomain"], true);
}

#[tokio::test]
async fn test_localhost_subdomain_is_rewritten() {
    let (status, _, body) = get("acme.localhost:3000", "/checkout").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "acme");
    assert_eq!(body["path"], "/checkout");
    assert_eq!(body["via_subdomain"], true);
}

#[tokio::test]
async fn test_localhost_paths_pass_through() {
    // Known platform route: passed through untouched, never a storefront
    for path in ["/sell", "/sell/start", "/marketplace", "/login"] {
        let (status, _, body) = get("localhost:3000", path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body["tenant"], Value::Null, "{path}");
    }

    // Unknown first segment reaches the storefront route as-is
    let (status, _, body) = get("localhost", "/zanzibar-store").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tenant"], "zanzibar-store");
    assert_eq!(body["via_subdomain"], false);
}

#[tokio::test]
async fn test_asset_paths_are_not_rewritten() {
    let (status, _, body) = get("acme.example.com", "/favicon.ico").await;

    // Falls through to the JSON 404 instead of the acme storefront
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_invalid_storefront_is_not_found() {
    let (status, _, body) = get("example.com", "/support").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    // Subdomain that is not a valid slug still rewrites, then 404s
    let (status, _, _) = get("a_b.example.com", "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_host_is_root_domain() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, _, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["root_domain"], "example.com");
}

#[tokio::test]
async fn test_health_probes() {
    let (status, _, _) = get("example.com", "/health/live").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = get("example.com", "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
}

async fn check_subdomain(subdomain: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/subdomains/check")
        .header(header::HOST, "example.com")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "subdomain": subdomain }).to_string()))
        .unwrap();

    let (status, _, body) = send(request).await;
    (status, body)
}

#[tokio::test]
async fn test_subdomain_check_available() {
    let (status, body) = check_subdomain(" Acme-Store ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], true);
    assert_eq!(body["subdomain"], "acme-store");
    assert_eq!(body["reason"], Value::Null);
}

#[tokio::test]
async fn test_subdomain_check_rejects_reserved_and_malformed() {
    let (status, body) = check_subdomain("support").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);
    assert_eq!(body["reason"], "This subdomain is reserved");

    // Extended at start-up through RESERVED_SUBDOMAINS
    let (_, body) = check_subdomain("status").await;
    assert_eq!(body["available"], false);

    // Platform route names would shadow their routes as /<slug>
    for name in ["dashboard", "sell", "marketplace", "login"] {
        let (status, body) = check_subdomain(name).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["available"], false, "{name}");
        assert_eq!(body["subdomain"], Value::Null, "{name}");
    }

    let (_, body) = check_subdomain("acme--store").await;
    assert_eq!(body["available"], false);
    assert_eq!(
        body["reason"],
        "Subdomain cannot contain consecutive hyphens"
    );
}

#[tokio::test]
async fn test_subdomain_check_requires_value() {
    let (status, body) = check_subdomain("   ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}
