//! PetPals Kennel-Sites Server
//!
//! Serves every breeder's public kennel website from one process:
//! - Resolves inbound hostnames to tenants (subdomain or custom domain)
//! - Rewrites public tenant requests onto the kennel-site rendering route
//! - Renders one of four templates from the tenant's stored configuration
//!
//! Usage:
//! ```bash
//! # With config file
//! petpals-server --config config.yaml
//!
//! # Or with environment variables
//! PETPALS_DATABASE_URL=postgres://localhost/petpals petpals-server
//!
//! # With both (env vars override config)
//! PETPALS_ROOT_DOMAIN=petpals.com petpals-server --config config.yaml
//! ```
//!
//! Test with:
//! ```bash
//! curl -H 'Host: acme.petpals.com' http://localhost:3000/
//! curl -H 'Host: acme.petpals.com' http://localhost:3000/api/site/current
//! ```

mod app;
mod bootstrap;
mod config;

use clap::Parser;
use config::ServerConfig;
use std::net::SocketAddr;
use tracing::info;

/// PetPals kennel-sites server
#[derive(Parser)]
#[command(name = "petpals-server")]
#[command(about = "Multi-tenant kennel website server", long_about = None)]
struct Cli {
    /// Path to configuration file (YAML or TOML)
    #[arg(short, long, value_name = "FILE", env = "PETPALS_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    config.merge_env();

    bootstrap::init_tracing(&config.logging.level);

    let (site_store, kennel_store) = bootstrap::build_stores(&config).await?;
    let router = app::build_router(&config, site_store, kennel_store);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;

    info!("🐾 PetPals kennel-sites server starting on http://{}", addr);
    info!("   Root domain:  {}", config.root_domain);
    info!("   Tenant sites: <slug>.{} and bound custom domains", config.root_domain);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
