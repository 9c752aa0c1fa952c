//! Tenant references produced by hostname resolution
//!
//! A `ResolvedTenant` is the output of the host resolver: either the request
//! is for the primary application, or it targets one tenant's public kennel
//! site, identified by subdomain slug or by a bound custom domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The tenant a request resolved to, derived from the Host header.
///
/// `Subdomain` carries the slug stripped from `<slug>.<root domain>` and is
/// looked up by site name. `CustomDomain` carries the full hostname and is
/// looked up by bound domain value. `MainApp` means the request is for the
/// primary application, not a tenant site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedTenant {
    /// Request targets the primary application (no tenant)
    MainApp,
    /// Request targets a tenant site by subdomain slug
    Subdomain(String),
    /// Request targets a tenant site by bound custom domain
    CustomDomain(String),
}

impl ResolvedTenant {
    /// Whether this resolution points at a tenant site
    pub fn is_tenant(&self) -> bool {
        !matches!(self, ResolvedTenant::MainApp)
    }

    /// The slug or domain value, if a tenant resolved
    pub fn value(&self) -> Option<&str> {
        match self {
            ResolvedTenant::MainApp => None,
            ResolvedTenant::Subdomain(slug) => Some(slug),
            ResolvedTenant::CustomDomain(domain) => Some(domain),
        }
    }
}

impl fmt::Display for ResolvedTenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedTenant::MainApp => write!(f, "main-app"),
            ResolvedTenant::Subdomain(slug) => write!(f, "subdomain:{}", slug),
            ResolvedTenant::CustomDomain(domain) => write!(f, "domain:{}", domain),
        }
    }
}
