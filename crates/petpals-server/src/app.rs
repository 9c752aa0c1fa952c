//! Router composition
//!
//! Wires the tenant middleware, the kennel-site routers and the main
//! application routes into one axum router. The main application itself is
//! out of scope for this service; the handlers here are the minimal surface
//! the routing states need to land on.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    middleware,
    response::Html,
    routing::get,
};
use petpals_core::{KennelStore, SiteStore};
use petpals_ingress::{TenantRouterState, tenant_router_middleware};
use petpals_routing::HostResolver;
use petpals_site::{SiteState, kennel_site_router, site_api_router};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the full request router
pub fn build_router(
    config: &ServerConfig,
    site_store: Arc<dyn SiteStore>,
    kennel_store: Arc<dyn KennelStore>,
) -> Router {
    let site_state = SiteState::new(site_store, kennel_store)
        .with_read_timeout(Duration::from_secs(config.site.read_timeout_secs));

    let tenant_state = TenantRouterState::new(HostResolver::new(config.root_domain.as_str()));

    Router::new()
        // Main application surface (placeholder; the real app is external)
        .route("/", get(landing))
        .route("/healthz", get(healthz))
        .route("/login", get(login))
        .route("/register", get(register))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/{*rest}", get(dashboard))
        // Tenant site rendering + API
        .merge(kennel_site_router(site_state.clone()))
        .merge(site_api_router(site_state))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(
            tenant_state,
            tenant_router_middleware,
        ))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn landing() -> Html<&'static str> {
    Html("<!DOCTYPE html><html><body><h1>PetPals</h1><p>The platform for dog breeders.</p></body></html>")
}

async fn login() -> Html<&'static str> {
    Html("<!DOCTYPE html><html><body><h1>Sign in to PetPals</h1></body></html>")
}

async fn register() -> Html<&'static str> {
    Html("<!DOCTYPE html><html><body><h1>Create a PetPals account</h1></body></html>")
}

async fn dashboard() -> Html<&'static str> {
    Html("<!DOCTYPE html><html><body><h1>Breeder dashboard</h1></body></html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use petpals_core::{DogRecord, LitterRecord, Result, TenantSite};
    use tower::ServiceExt;
    use uuid::Uuid;

    struct EmptySiteStore;

    #[async_trait]
    impl SiteStore for EmptySiteStore {
        async fn find_by_site_name(&self, _site_name: &str) -> Result<Option<TenantSite>> {
            Ok(None)
        }

        async fn find_by_custom_domain(&self, _domain: &str) -> Result<Option<TenantSite>> {
            Ok(None)
        }
    }

    struct EmptyKennelStore;

    #[async_trait]
    impl KennelStore for EmptyKennelStore {
        async fn list_dogs(&self, _breeder_id: Uuid) -> Result<Vec<DogRecord>> {
            Ok(vec![])
        }

        async fn list_stud_dogs(&self, _breeder_id: Uuid) -> Result<Vec<DogRecord>> {
            Ok(vec![])
        }

        async fn list_litters(&self, _breeder_id: Uuid) -> Result<Vec<LitterRecord>> {
            Ok(vec![])
        }
    }

    fn test_router() -> Router {
        build_router(
            &ServerConfig::default(),
            Arc::new(EmptySiteStore),
            Arc::new(EmptyKennelStore),
        )
    }

    #[tokio::test]
    async fn test_healthz() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .header(header::HOST, "petpals.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_landing_on_root_domain() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "petpals.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_tenant_renders_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "ghost.petpals.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_on_tenant_host_is_app_route() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/dashboard/dogs")
                    .header(header::HOST, "acme.petpals.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
