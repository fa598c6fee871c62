//! Tenant routing middleware
//!
//! Applies the resolver's decision before route matching: requests on a
//! storefront subdomain are rewritten onto the tenant's path namespace.

use axum::{
    extract::{Request, State},
    http::{uri::PathAndQuery, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use super::{effective_host, DevPath, RoutingDecision};
use crate::state::AppState;

/// Tenant attached to a request that was rewritten from a storefront subdomain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTenant {
    pub subdomain: String,
}

/// Middleware that routes storefront subdomains to tenant paths.
///
/// Must wrap the router from outside (see `routes::create_router`) so the
/// rewritten URI is the one used for route matching.
pub async fn tenant_routing_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let host = effective_host(request.headers(), request.uri());
    let path = request.uri().path().to_string();
    let resolution = state.resolver.resolve(host.as_deref(), &path);

    match resolution.decision {
        RoutingDecision::Continue => {
            match state.resolver.classify_dev_path(host.as_deref(), &path) {
                Some(DevPath::TenantCandidate(slug)) => {
                    tracing::debug!(
                        path = %path,
                        slug = %slug,
                        "Dev host request with unknown first segment, passing through"
                    );
                }
                Some(_) => {}
                None => {
                    if let Some(subdomain) = resolution.subdomain.as_deref() {
                        tracing::debug!(
                            host = ?host,
                            subdomain = %subdomain,
                            path = %path,
                            "Storefront request passed through"
                        );
                    }
                }
            }
            next.run(request).await
        }
        RoutingDecision::Redirect(location) => {
            tracing::debug!(
                host = ?host,
                subdomain = ?resolution.subdomain,
                path = %path,
                location = %location,
                "Redirecting storefront request away from admin path"
            );
            Redirect::temporary(&location).into_response()
        }
        RoutingDecision::Rewrite(target) => {
            let Some(subdomain) = resolution.subdomain else {
                return next.run(request).await;
            };

            match rewrite_uri(request.uri(), &target) {
                Ok(uri) => {
                    tracing::debug!(
                        subdomain = %subdomain,
                        from = %path,
                        to = %target,
                        "Rewriting storefront request"
                    );
                    *request.uri_mut() = uri;
                    request.extensions_mut().insert(ResolvedTenant { subdomain });
                }
                Err(e) => {
                    tracing::warn!(
                        subdomain = %subdomain,
                        target = %target,
                        error = %e,
                        "Could not build rewritten URI, passing request through"
                    );
                }
            }
            next.run(request).await
        }
    }
}

/// Replace the path of `uri`, keeping scheme, authority and query
fn rewrite_uri(uri: &Uri, path: &str) -> Result<Uri, axum::http::Error> {
    let path_and_query = match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query)?);
    Ok(Uri::from_parts(parts)?)
}
