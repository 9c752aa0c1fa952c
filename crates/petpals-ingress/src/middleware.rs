//! Tenant routing middleware
//!
//! Runs in front of every request. Resolves the Host header to a tenant,
//! classifies the path, and either passes the request through to the main
//! application or rewrites it onto the internal kennel-site route. The
//! middleware never fails the pipeline: anything it cannot make sense of
//! degrades to plain pass-through.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Uri, header},
    middleware::Next,
    response::Response,
};
use petpals_core::ResolvedTenant;
use petpals_routing::{HostResolver, PathClass, PathClassifier};

/// Header carrying the resolved tenant to downstream handlers.
///
/// Value format: `subdomain:<slug>` or `domain:<hostname>`.
pub const TENANT_HEADER: &str = "x-petpals-tenant";

/// Internal path prefix for the public kennel-site rendering route
pub const KENNEL_SITE_PREFIX: &str = "/_kennel";

/// Extension carrying the resolved tenant as a typed value
#[derive(Debug, Clone)]
pub struct TenantExt(pub ResolvedTenant);

/// State for the tenant routing middleware
#[derive(Clone)]
pub struct TenantRouterState {
    pub resolver: HostResolver,
    pub classifier: PathClassifier,
}

impl TenantRouterState {
    pub fn new(resolver: HostResolver) -> Self {
        Self {
            resolver,
            classifier: PathClassifier::new(),
        }
    }
}

/// Middleware deciding main-app vs. tenant-site handling per request.
///
/// - No tenant resolves → pass through untouched.
/// - Tenant + `/api/*` → attach the tenant header, pass through; API
///   handlers read the header themselves.
/// - Tenant + app-reserved path (`/dashboard`, `/login`, `/register`) →
///   pass through untouched, so a breeder can manage their own site while
///   visitors see the public one.
/// - Tenant + anything else → rewrite the path under
///   [`KENNEL_SITE_PREFIX`] and attach the tenant header and extension.
pub async fn tenant_router_middleware(
    State(state): State<TenantRouterState>,
    mut req: Request,
    next: Next,
) -> Response {
    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok());

    let tenant = state.resolver.resolve(host);
    if !tenant.is_tenant() {
        return next.run(req).await;
    }

    match state.classifier.classify(req.uri().path()) {
        PathClass::AppReserved => next.run(req).await,
        PathClass::Api => {
            attach_tenant(&mut req, &tenant);
            next.run(req).await
        }
        PathClass::Public => {
            match rewrite_to_kennel_route(req.uri()) {
                Some(rewritten) => {
                    tracing::debug!(tenant = %tenant, uri = %rewritten, "rewriting to kennel-site route");
                    *req.uri_mut() = rewritten;
                    attach_tenant(&mut req, &tenant);
                }
                None => {
                    // Unbuildable URI: degrade to pass-through rather than 500
                    tracing::warn!(tenant = %tenant, uri = %req.uri(), "could not rewrite request, passing through");
                }
            }
            next.run(req).await
        }
    }
}

/// Recover the resolved tenant from the header the middleware attached
pub fn tenant_from_headers(headers: &HeaderMap) -> Option<ResolvedTenant> {
    let value = headers.get(TENANT_HEADER)?.to_str().ok()?;
    match value.split_once(':') {
        Some(("subdomain", slug)) if !slug.is_empty() => {
            Some(ResolvedTenant::Subdomain(slug.to_string()))
        }
        Some(("domain", domain)) if !domain.is_empty() => {
            Some(ResolvedTenant::CustomDomain(domain.to_string()))
        }
        _ => None,
    }
}

fn attach_tenant(req: &mut Request, tenant: &ResolvedTenant) {
    if let Ok(value) = HeaderValue::from_str(&tenant.to_string()) {
        req.headers_mut().insert(TENANT_HEADER, value);
    }
    req.extensions_mut().insert(TenantExt(tenant.clone()));
}

/// Prefix the request's path with the kennel-site route, keeping the query.
///
/// `/` becomes the bare prefix so the route table needs no trailing-slash
/// entry.
fn rewrite_to_kennel_route(uri: &Uri) -> Option<Uri> {
    let mut rewritten = String::from(KENNEL_SITE_PREFIX);
    if uri.path() != "/" {
        rewritten.push_str(uri.path());
    }
    if let Some(query) = uri.query() {
        rewritten.push('?');
        rewritten.push_str(query);
    }

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(rewritten.parse().ok()?);
    Uri::from_parts(parts).ok()
}
