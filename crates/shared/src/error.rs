//! Error types for Vendly

use thiserror::Error;

/// Reasons a string is not usable as a tenant subdomain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("Subdomain must be between {min} and {max} characters")]
    Length { min: usize, max: usize },

    #[error("Subdomain can only contain lowercase letters, numbers, and hyphens")]
    InvalidCharacters,

    #[error("Subdomain cannot start or end with a hyphen")]
    EdgeHyphen,

    #[error("Subdomain cannot contain consecutive hyphens")]
    ConsecutiveHyphens,

    #[error("This subdomain is reserved")]
    Reserved(String),
}
