//! Vendly API Library
//!
//! This crate contains the storefront routing server components for Vendly.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routing::{HostResolver, ResolvedTenant, RoutingDecision, TenantRoutingConfig};
pub use state::AppState;
