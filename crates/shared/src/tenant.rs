//! Tenant subdomain types
//!
//! A tenant (seller) owns exactly one storefront, addressed by a unique
//! subdomain slug such as `acme` in `acme.vendly.shop`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::SlugError;

/// Subdomains reserved for platform infrastructure.
///
/// These never resolve to a tenant, so `admin.<root>` keeps serving the
/// platform instead of a storefront called "admin".
pub const DEFAULT_RESERVED_SUBDOMAINS: &[&str] = &["www", "admin", "api", "ai", "support", "docs"];

/// Minimum slug length
pub const SLUG_MIN_LEN: usize = 3;

/// Maximum slug length
pub const SLUG_MAX_LEN: usize = 50;

/// Check whether a name is in the built-in reserved set
pub fn is_default_reserved(subdomain: &str) -> bool {
    DEFAULT_RESERVED_SUBDOMAINS.contains(&subdomain)
}

/// Validate the format of a tenant subdomain.
///
/// Does not check reserved names; callers hold the (possibly extended)
/// reserved set.
pub fn validate_subdomain(subdomain: &str) -> Result<(), SlugError> {
    if subdomain.len() < SLUG_MIN_LEN || subdomain.len() > SLUG_MAX_LEN {
        return Err(SlugError::Length {
            min: SLUG_MIN_LEN,
            max: SLUG_MAX_LEN,
        });
    }

    if !subdomain
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(SlugError::InvalidCharacters);
    }

    if subdomain.starts_with('-') || subdomain.ends_with('-') {
        return Err(SlugError::EdgeHyphen);
    }

    if subdomain.contains("--") {
        return Err(SlugError::ConsecutiveHyphens);
    }

    Ok(())
}

/// A validated tenant subdomain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantSlug(String);

impl TenantSlug {
    /// Parse against the built-in reserved set
    pub fn parse(input: &str) -> Result<Self, SlugError> {
        Self::parse_with(input, is_default_reserved)
    }

    /// Parse with a caller-supplied reserved-name check.
    ///
    /// Input is trimmed and lowercased before validation.
    pub fn parse_with<F>(input: &str, is_reserved: F) -> Result<Self, SlugError>
    where
        F: Fn(&str) -> bool,
    {
        let slug = input.trim().to_lowercase();
        validate_subdomain(&slug)?;

        if is_reserved(&slug) {
            return Err(SlugError::Reserved(slug));
        }

        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TenantSlug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TenantSlug> for String {
    fn from(slug: TenantSlug) -> Self {
        slug.0
    }
}
