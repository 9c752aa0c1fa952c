//! Process bootstrap: tracing and store construction

use std::sync::Arc;

use anyhow::Context;
use petpals_core::{KennelStore, SiteStore};
use petpals_store_postgres::PostgresStore;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect the PostgreSQL store and hand it out as the two trait objects
/// the request pipeline consumes.
pub async fn build_stores(
    config: &ServerConfig,
) -> anyhow::Result<(Arc<dyn SiteStore>, Arc<dyn KennelStore>)> {
    let database_url = config.database_url.as_deref().context(
        "database_url is required (set PETPALS_DATABASE_URL or add it to the config file)",
    )?;

    let store = Arc::new(
        PostgresStore::new(database_url)
            .await
            .context("Failed to initialize PostgreSQL store")?,
    );

    Ok((store.clone(), store))
}
