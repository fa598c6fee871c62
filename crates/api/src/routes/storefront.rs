//! Storefront entry routes
//!
//! Requests on `acme.<root>` arrive here as `/acme/...` after the tenant
//! routing middleware rewrote them. Page rendering happens downstream; this
//! handler validates the tenant and reports what was addressed.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use vendly_shared::TenantSlug;

use crate::error::{ApiError, ApiResult};
use crate::routing::ResolvedTenant;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StorefrontResponse {
    pub tenant: String,
    pub path: String,
    /// True when the request came in on the tenant's own subdomain
    pub via_subdomain: bool,
}

/// `/:tenant`
pub async fn storefront_home(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
    resolved: Option<Extension<ResolvedTenant>>,
) -> ApiResult<Json<StorefrontResponse>> {
    storefront_response(&state, &tenant, "/".to_string(), resolved)
}

/// `/:tenant/*path`
pub async fn storefront_page(
    State(state): State<AppState>,
    Path((tenant, path)): Path<(String, String)>,
    resolved: Option<Extension<ResolvedTenant>>,
) -> ApiResult<Json<StorefrontResponse>> {
    storefront_response(&state, &tenant, format!("/{}", path), resolved)
}

fn storefront_response(
    state: &AppState,
    tenant: &str,
    path: String,
    resolved: Option<Extension<ResolvedTenant>>,
) -> ApiResult<Json<StorefrontResponse>> {
    let slug = TenantSlug::parse_with(tenant, |s| state.resolver.is_platform_name(s))
        .map_err(|e| {
            tracing::debug!(tenant = %tenant, error = %e, "Unknown storefront");
            ApiError::NotFound
        })?;

    let via_subdomain = resolved
        .map(|Extension(t)| t.subdomain == slug.as_str())
        .unwrap_or(false);

    Ok(Json(StorefrontResponse {
        tenant: slug.into(),
        path,
        via_subdomain,
    }))
}

/// JSON 404 for anything no route matched
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
