//! PetPals Ingress
//!
//! The single entry point deciding, per inbound request, whether it belongs
//! to the main application or to a tenant's public kennel site. Tenant-site
//! requests are rewritten onto the internal catch-all rendering route with
//! the resolved tenant attached as a header and a typed request extension.

pub mod middleware;

pub use middleware::{
    KENNEL_SITE_PREFIX, TENANT_HEADER, TenantExt, TenantRouterState, tenant_from_headers,
    tenant_router_middleware,
};
