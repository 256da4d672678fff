//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::SellerConfig;
use crate::oauth::{OauthClient, OauthError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SellerConfig,
    pool: PgPool,
    oauth: Option<OauthClient>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SellerConfig, pool: PgPool) -> Self {
        let oauth = config.oauth.clone().map(OauthClient::new);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                oauth,
            }),
        }
    }

    /// Get a reference to the seller service configuration.
    #[must_use]
    pub fn config(&self) -> &SellerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the OAuth provider client, or an error when social sign-in is
    /// not configured for this deployment.
    ///
    /// # Errors
    ///
    /// Returns `OauthError::NotConfigured` when no provider is set up.
    pub fn oauth(&self) -> Result<&OauthClient, OauthError> {
        self.inner.oauth.as_ref().ok_or(OauthError::NotConfigured)
    }
}
