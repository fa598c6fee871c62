//! Host-based routing for tenant storefronts
//!
//! This module maps incoming Host headers to tenant storefronts,
//! enabling per-tenant URLs like:
//! - Storefront subdomains: acme.vendly.shop -> /acme
//! - Local development: acme.localhost:3000 -> /acme

mod host;
mod middleware;
mod resolver;

pub use host::{effective_host, is_dev_host, normalize_host};
pub use middleware::{tenant_routing_middleware, ResolvedTenant};
pub use resolver::{
    DevPath, HostResolver, Resolution, RoutingDecision, TenantRoutingConfig, ASSET_PREFIXES,
    DEV_KNOWN_ROUTES, FAVICON_PATHS,
};
