//! PetPals Kennel Site Rendering
//!
//! Everything between "a request resolved to a tenant" and "HTML left the
//! building": data fetch orchestration, the pure content mapper, and the
//! four askama templates. HTML templates and the site stylesheet are
//! compiled into the binary.

pub mod fetch;
pub mod handlers;
pub mod mapper;
pub mod props;
pub mod render;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use petpals_core::{KennelStore, SiteStore};
use petpals_ingress::KENNEL_SITE_PREFIX;

/// Default per-read timeout for the domain data fetchers
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared state for the kennel-site handlers.
///
/// Stores are trait objects so handlers run unchanged against PostgreSQL in
/// production and in-memory fakes in tests; there is no process-wide client
/// singleton anywhere.
#[derive(Clone)]
pub struct SiteState {
    pub site_store: Arc<dyn SiteStore>,
    pub kennel_store: Arc<dyn KennelStore>,

    /// Independent timeout applied to each domain read
    pub read_timeout: Duration,
}

impl SiteState {
    pub fn new(site_store: Arc<dyn SiteStore>, kennel_store: Arc<dyn KennelStore>) -> Self {
        Self {
            site_store,
            kennel_store,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }
}

/// Router for the internal kennel-site catch-all route.
///
/// The tenant middleware rewrites public tenant-host requests here; the
/// route itself is reachable directly only from inside the process.
pub fn kennel_site_router(state: SiteState) -> Router {
    Router::new()
        .route(KENNEL_SITE_PREFIX, get(handlers::site::render_kennel_site))
        .route(
            &format!("{}/static/site.css", KENNEL_SITE_PREFIX),
            get(handlers::static_files::serve_site_css),
        )
        .route(
            &format!("{}/static/images/dog-placeholder.svg", KENNEL_SITE_PREFIX),
            get(handlers::static_files::serve_dog_placeholder),
        )
        .route(
            &format!("{}/{{*path}}", KENNEL_SITE_PREFIX),
            get(handlers::site::render_kennel_site),
        )
        .with_state(state)
}

/// Router for the JSON API surface of the site service.
///
/// These handlers read the tenant header attached by the middleware rather
/// than relying on path rewriting.
pub fn site_api_router(state: SiteState) -> Router {
    Router::new()
        .route("/api/site/current", get(handlers::api::current_site))
        .with_state(state)
}
