//! Host-to-Tenant Resolution
//!
//! Resolves an incoming host and path to a routing decision for storefronts.
//! Supports:
//! - Tenant subdomains: acme.vendly.shop/products -> rewrite to /acme/products
//! - Local development: acme.localhost/products -> rewrite to /acme/products
//! - Root domain and reserved subdomains: passed through untouched
//!
//! Resolution is a pure function of `(host, path, config)`; it never fails.

use std::collections::HashSet;

use vendly_shared::DEFAULT_RESERVED_SUBDOMAINS;

use super::host::{is_dev_host, normalize_host};
use crate::config::Config;

/// Framework and static asset prefixes that are never rewritten
pub const ASSET_PREFIXES: &[&str] = &["/_next", "/_static", "/assets", "/static"];

/// Favicon paths served from the root of every host
pub const FAVICON_PATHS: &[&str] = &["/favicon.ico", "/favicon.svg", "/favicon.png"];

/// First path segments that are platform routes on a bare dev host
pub const DEV_KNOWN_ROUTES: &[&str] = &[
    "sell",
    "api",
    "admin",
    "health",
    "marketplace",
    "dashboard",
    "onboarding",
    "login",
    "signup",
    "studio",
    "_next",
    "_static",
    "assets",
    "static",
    "images",
    "fonts",
    "favicon.ico",
];

/// Platform path namespace a storefront must not expose
const ADMIN_PATH: &str = "/admin";

const LOCALHOST_SUFFIX: &str = ".localhost";

/// What to do with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Forward the request untouched
    Continue,
    /// Send the client elsewhere (visible URL change)
    Redirect(String),
    /// Route internally to another path (URL unchanged for the client)
    Rewrite(String),
}

/// Full result of resolving a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Tenant subdomain, if the host addressed a storefront
    pub subdomain: Option<String>,
    /// What to do with the request
    pub decision: RoutingDecision,
}

/// Classification of a path requested on a bare dev host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevPath<'a> {
    /// `/`
    Root,
    /// First segment is a known platform route
    KnownRoute(&'a str),
    /// First segment starts with `_`
    Internal(&'a str),
    /// Anything else, most likely a tenant slug used as a path prefix
    TenantCandidate(&'a str),
}

/// Static routing configuration
#[derive(Debug, Clone)]
pub struct TenantRoutingConfig {
    /// Normalized root domain, e.g. `vendly.shop`
    pub root_domain: String,
    /// Subdomains that never resolve to a tenant
    pub reserved_subdomains: HashSet<String>,
    /// First path segments owned by the platform
    pub dev_known_routes: HashSet<String>,
}

impl TenantRoutingConfig {
    /// Built-in reserved names and dev routes for the given root domain
    pub fn new(root_domain: &str) -> Self {
        Self {
            root_domain: normalize_host(root_domain),
            reserved_subdomains: DEFAULT_RESERVED_SUBDOMAINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            dev_known_routes: DEV_KNOWN_ROUTES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add reserved names on top of the current set
    pub fn with_reserved<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_subdomains
            .extend(names.into_iter().map(|s| s.into().to_lowercase()));
        self
    }
}

impl From<&Config> for TenantRoutingConfig {
    fn from(config: &Config) -> Self {
        Self::new(&config.root_domain).with_reserved(config.reserved_subdomains.iter().cloned())
    }
}

/// Resolves hosts to tenant storefronts
#[derive(Debug, Clone)]
pub struct HostResolver {
    config: TenantRoutingConfig,
    root_suffix: String,
    www_host: String,
}

impl HostResolver {
    /// Create a new host resolver
    pub fn new(config: TenantRoutingConfig) -> Self {
        let root_suffix = format!(".{}", config.root_domain);
        let www_host = format!("www.{}", config.root_domain);
        Self {
            config,
            root_suffix,
            www_host,
        }
    }

    /// Create a resolver with built-in defaults for a root domain
    pub fn for_root_domain(root_domain: &str) -> Self {
        Self::new(TenantRoutingConfig::new(root_domain))
    }

    /// Check if a name is reserved for the platform
    pub fn is_reserved(&self, subdomain: &str) -> bool {
        self.config.reserved_subdomains.contains(subdomain)
    }

    /// Check if a name belongs to the platform, either as a reserved
    /// subdomain or as a top-level platform route (`/sell`, `/dashboard`).
    ///
    /// Such names can never be tenant slugs: `/<slug>` would shadow the route.
    pub fn is_platform_name(&self, name: &str) -> bool {
        self.is_reserved(name) || self.config.dev_known_routes.contains(name)
    }

    /// Resolve a host to a tenant subdomain.
    ///
    /// Returns `None` for a missing host, the root domain, `www`, reserved
    /// names and hosts outside both the root domain and `.localhost`.
    pub fn resolve_subdomain(&self, host: Option<&str>) -> Option<String> {
        let host = normalize_host(host?);

        if host == self.config.root_domain || host == self.www_host {
            return None;
        }

        let candidate = host
            .strip_suffix(self.root_suffix.as_str())
            .or_else(|| host.strip_suffix(LOCALHOST_SUFFIX))?;

        if candidate.is_empty() || self.is_reserved(candidate) {
            return None;
        }

        Some(candidate.to_string())
    }

    /// Decide how to route `path` on `host`
    pub fn resolve(&self, host: Option<&str>, path: &str) -> Resolution {
        let subdomain = self.resolve_subdomain(host);
        let decision = match subdomain.as_deref() {
            Some(subdomain) => route_tenant_path(subdomain, path),
            None => RoutingDecision::Continue,
        };
        Resolution {
            subdomain,
            decision,
        }
    }

    /// Routing decision only
    pub fn route(&self, host: Option<&str>, path: &str) -> RoutingDecision {
        self.resolve(host, path).decision
    }

    /// Classify a path requested on a bare dev host (`localhost`, `127.0.0.1`).
    ///
    /// Returns `None` for any other host. Every classification still
    /// routes as `Continue`; this only feeds diagnostics.
    pub fn classify_dev_path<'a>(&self, host: Option<&str>, path: &'a str) -> Option<DevPath<'a>> {
        let host = normalize_host(host?);
        if !is_dev_host(&host) {
            return None;
        }

        let segment = first_segment(path);
        let kind = if segment.is_empty() {
            DevPath::Root
        } else if self.config.dev_known_routes.contains(segment) {
            DevPath::KnownRoute(segment)
        } else if segment.starts_with('_') {
            DevPath::Internal(segment)
        } else {
            DevPath::TenantCandidate(segment)
        };
        Some(kind)
    }
}

/// Routing for a request that resolved to a tenant subdomain
fn route_tenant_path(subdomain: &str, path: &str) -> RoutingDecision {
    let path = if path.is_empty() { "/" } else { path };

    if is_asset_path(path) {
        return RoutingDecision::Continue;
    }

    if has_segment_prefix(path, ADMIN_PATH) {
        return RoutingDecision::Redirect("/".to_string());
    }

    let tenant_prefix = format!("/{}", subdomain);
    if has_segment_prefix(path, &tenant_prefix) {
        return RoutingDecision::Continue;
    }

    if path == "/" {
        RoutingDecision::Rewrite(tenant_prefix)
    } else {
        RoutingDecision::Rewrite(format!("{}{}", tenant_prefix, path))
    }
}

fn is_asset_path(path: &str) -> bool {
    FAVICON_PATHS.contains(&path)
        || ASSET_PREFIXES
            .iter()
            .any(|prefix| has_segment_prefix(path, prefix))
}

/// `path` is `prefix` itself or lies below it (`/acme`, `/acme/x`, not `/acme-sale`)
fn has_segment_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn first_segment(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or("")
}
