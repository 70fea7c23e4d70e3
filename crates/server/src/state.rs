//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::services::square::PaymentGateway;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; gives handlers access to configuration,
/// the entity store, and the payment gateway.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: Store,
    gateway: Arc<dyn PaymentGateway>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: Config, store: Store, gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                gateway,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the entity store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the payment gateway.
    #[must_use]
    pub fn gateway(&self) -> &dyn PaymentGateway {
        self.inner.gateway.as_ref()
    }
}
