//! Subdomain availability check for seller onboarding

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use vendly_shared::{SlugError, TenantSlug};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckSubdomainRequest {
    pub subdomain: String,
}

#[derive(Debug, Serialize)]
pub struct CheckSubdomainResponse {
    pub available: bool,
    pub subdomain: Option<String>,
    pub reason: Option<String>,
}

/// Check whether a subdomain can be claimed by a new storefront.
///
/// Covers format, reserved names and platform route names; uniqueness
/// belongs to the tenant store.
pub async fn check_subdomain_availability(
    State(state): State<AppState>,
    Json(req): Json<CheckSubdomainRequest>,
) -> ApiResult<Json<CheckSubdomainResponse>> {
    if req.subdomain.trim().is_empty() {
        return Err(ApiError::BadRequest("subdomain is required".to_string()));
    }

    let parsed = TenantSlug::parse_with(&req.subdomain, |s| state.resolver.is_platform_name(s));
    let response = match parsed {
        Ok(slug) => CheckSubdomainResponse {
            available: true,
            subdomain: Some(slug.into()),
            reason: None,
        },
        Err(err @ SlugError::Reserved(_)) => {
            tracing::debug!(subdomain = %req.subdomain, "Reserved subdomain requested");
            CheckSubdomainResponse {
                available: false,
                subdomain: None,
                reason: Some(err.to_string()),
            }
        }
        Err(err) => CheckSubdomainResponse {
            available: false,
            subdomain: None,
            reason: Some(err.to_string()),
        },
    };

    Ok(Json(response))
}
