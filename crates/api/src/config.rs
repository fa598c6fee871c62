//! Application configuration

use std::env;

use vendly_shared::DEFAULT_RESERVED_SUBDOMAINS;

use crate::routing::normalize_host;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub public_url: String,
    pub root_domain: String, // e.g., "vendly.shop" for *.vendly.shop storefronts

    // Tenant routing
    pub reserved_subdomains: Vec<String>,

    // Logging
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            root_domain: {
                let raw = env::var("ROOT_DOMAIN").unwrap_or_else(|_| "localhost".to_string());
                parse_root_domain(&raw)?
            },

            // Tenant routing
            reserved_subdomains: {
                let mut reserved: Vec<String> = DEFAULT_RESERVED_SUBDOMAINS
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                if let Ok(extra) = env::var("RESERVED_SUBDOMAINS") {
                    for name in extra.split(',') {
                        let name = name.trim().to_lowercase();
                        if !name.is_empty() && !reserved.contains(&name) {
                            reserved.push(name);
                        }
                    }
                }
                reserved
            },

            // Logging
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(ConfigError::Invalid("LOG_FORMAT must be 'pretty' or 'json'")),
            },
        })
    }
}

/// Normalize and sanity-check the configured root domain.
///
/// Accepts a bare host with an optional port (`vendly.shop`, `localhost:3000`);
/// the port is dropped because inbound hosts are compared without one.
fn parse_root_domain(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("ROOT_DOMAIN must not be empty"));
    }
    if trimmed.contains("://") || trimmed.contains('/') {
        return Err(ConfigError::Invalid(
            "ROOT_DOMAIN must be a bare domain without scheme or path",
        ));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid("ROOT_DOMAIN must not contain whitespace"));
    }

    let domain = normalize_host(trimmed);
    let domain = domain.trim_start_matches('.').to_string();
    if domain.is_empty() {
        return Err(ConfigError::Invalid("ROOT_DOMAIN must not be empty"));
    }
    Ok(domain)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}
