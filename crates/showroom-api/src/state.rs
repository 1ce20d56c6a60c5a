//! Application state shared across all handlers.

use std::sync::Arc;

use showroom_core::config::AppConfig;
use showroom_core::traits::IdentityProvider;
use showroom_service::Services;

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Business services.
    pub services: Services,
    /// Resolves bearer tokens into users.
    pub identity: Arc<dyn IdentityProvider>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("services", &self.services)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Build the state.
    pub fn new(
        config: Arc<AppConfig>,
        services: Services,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            config,
            services,
            identity,
        }
    }
}
