//! Hostname → tenant resolution
//!
//! Derives a [`ResolvedTenant`] from the HTTP Host header. Resolution is
//! total: malformed or surprising hosts degrade to `MainApp`, never to an
//! error, because the middleware consuming this must not be able to fail
//! the request pipeline.

use petpals_core::ResolvedTenant;

/// Subdomains that never resolve to a tenant site.
///
/// `www` is equivalent to the bare root domain; `api` and `app` are
/// platform-operated subdomains.
const RESERVED_SUBDOMAINS: &[&str] = &["www", "api", "app"];

/// Resolves hostnames against the configured root domain
#[derive(Debug, Clone)]
pub struct HostResolver {
    root_domain: String,
}

impl HostResolver {
    /// Create a resolver for the given root domain (e.g. `petpals.com`)
    pub fn new(root_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into().trim().to_ascii_lowercase(),
        }
    }

    /// The configured root domain
    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    /// Resolve a Host header value to a tenant reference.
    ///
    /// - Absent/empty host, the root domain, `www.` + root, IP literals and
    ///   bare loopback hosts resolve to `MainApp`.
    /// - `<slug>.<root domain>` resolves to `Subdomain(slug)` unless the
    ///   slug is reserved.
    /// - `<slug>.localhost` (and multi-label development hosts) resolve the
    ///   first dot-segment as a tentative slug.
    /// - Anything else is a candidate custom domain; the actual tenant
    ///   lookup happens in the site store by domain value.
    ///
    /// Ports are stripped before any comparison.
    pub fn resolve(&self, host: Option<&str>) -> ResolvedTenant {
        let Some(raw) = host else {
            return ResolvedTenant::MainApp;
        };

        let host = match strip_port(raw.trim()) {
            Some(h) if !h.is_empty() => h.to_ascii_lowercase(),
            _ => return ResolvedTenant::MainApp,
        };

        // IP literals can never name a tenant
        if host.parse::<std::net::IpAddr>().is_ok() {
            return ResolvedTenant::MainApp;
        }

        // Development hosts: first dot-segment is a tentative slug
        if host == "localhost" {
            return ResolvedTenant::MainApp;
        }
        if host.ends_with(".localhost") {
            let slug = host.split('.').next().unwrap_or_default();
            return self.slug_or_main(slug);
        }

        if host == self.root_domain || host == format!("www.{}", self.root_domain) {
            return ResolvedTenant::MainApp;
        }

        if let Some(slug) = host.strip_suffix(&format!(".{}", self.root_domain)) {
            return self.slug_or_main(slug);
        }

        tracing::debug!(host = %host, "host matched neither root domain nor subdomain, treating as custom domain");
        ResolvedTenant::CustomDomain(host)
    }

    fn slug_or_main(&self, slug: &str) -> ResolvedTenant {
        if slug.is_empty() || RESERVED_SUBDOMAINS.contains(&slug) {
            ResolvedTenant::MainApp
        } else {
            ResolvedTenant::Subdomain(slug.to_string())
        }
    }
}

/// Strip a trailing `:port` from a Host header value.
///
/// Handles bracketed IPv6 literals (`[::1]:8080`). Returns `None` only for
/// values that cannot contain a hostname at all.
fn strip_port(host: &str) -> Option<&str> {
    if let Some(rest) = host.strip_prefix('[') {
        // Bracketed IPv6 literal: keep the address inside the brackets
        return rest.split(']').next();
    }
    match host.split_once(':') {
        Some((name, _port)) => Some(name),
        None => Some(host),
    }
}
