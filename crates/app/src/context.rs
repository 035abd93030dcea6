//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use vault::{
    catalog::Catalog,
    checkout::Handoff,
    fixtures::{FixtureError, builtin_catalog, load_catalog},
};

use crate::{
    auth::{AuthProvider, FixedCodeProvider},
    config::store::StoreConfig,
    store::Store,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to load catalog")]
    Catalog(#[source] FixtureError),
}

#[derive(Clone)]
pub struct AppContext {
    pub catalog: Catalog<'static>,
    pub auth: Arc<dyn AuthProvider>,
    pub handoff: Handoff,
}

impl AppContext {
    /// Build application context from store settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog seed cannot be loaded.
    pub fn from_config(config: &StoreConfig) -> Result<Self, AppInitError> {
        let catalog = match &config.catalog {
            Some(path) => load_catalog(path),
            None => builtin_catalog(),
        }
        .map_err(AppInitError::Catalog)?;

        info!(
            products = catalog.len(),
            currency = catalog.currency().iso_alpha_code,
            "catalog loaded"
        );

        Ok(Self {
            catalog,
            auth: Arc::new(FixedCodeProvider::new(config.access_code.clone())),
            handoff: Handoff::new(config.recipient.clone()),
        })
    }

    /// Start a shopper session.
    #[must_use]
    pub fn into_store(self) -> Store {
        Store::new(self.catalog, self.auth, self.handoff)
    }
}
