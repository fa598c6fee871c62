//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::routing::{HostResolver, TenantRoutingConfig};

/// State shared by every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<HostResolver>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let resolver = HostResolver::new(TenantRoutingConfig::from(&config));
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
        }
    }
}
