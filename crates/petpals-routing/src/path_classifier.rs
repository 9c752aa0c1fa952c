//! Path classification for tenant-host requests
//!
//! Once a request has resolved to a tenant, the path decides how the
//! middleware treats it: API paths pass through with a tenant header,
//! app-reserved paths pass through untouched (so a breeder can log in and
//! manage their site on their own subdomain), and everything else is
//! rewritten to the public kennel-site route.

/// How the middleware should treat a path on a tenant hostname
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// `/api/*` — pass through with the tenant header attached
    Api,
    /// Login, registration, dashboard — pass through untouched
    AppReserved,
    /// Everything else — rewrite to the public site route
    Public,
}

/// Classifies request paths on tenant hostnames
#[derive(Debug, Clone)]
pub struct PathClassifier {
    reserved_prefixes: Vec<String>,
}

impl PathClassifier {
    /// Create a classifier with the default app-reserved prefixes
    ///
    /// # Reserved Prefixes (Pass Through Untouched)
    /// - `/dashboard` — authenticated breeder dashboard
    /// - `/login` — sign-in flow
    /// - `/register` — account registration flow
    pub fn new() -> Self {
        Self {
            reserved_prefixes: vec![
                "/dashboard".to_string(),
                "/login".to_string(),
                "/register".to_string(),
            ],
        }
    }

    /// Create a classifier with custom reserved prefixes
    pub fn with_reserved(prefixes: Vec<String>) -> Self {
        Self {
            reserved_prefixes: prefixes,
        }
    }

    /// Classify a request path.
    ///
    /// Prefixes match at segment boundaries: `/login` and `/login/reset`
    /// are reserved, `/loginfo` is not.
    ///
    /// # Examples
    /// ```
    /// use petpals_routing::{PathClass, PathClassifier};
    ///
    /// let classifier = PathClassifier::new();
    ///
    /// assert_eq!(classifier.classify("/api/dogs"), PathClass::Api);
    /// assert_eq!(classifier.classify("/dashboard/dogs"), PathClass::AppReserved);
    /// assert_eq!(classifier.classify("/"), PathClass::Public);
    /// assert_eq!(classifier.classify("/about"), PathClass::Public);
    /// ```
    pub fn classify(&self, path: &str) -> PathClass {
        if prefix_matches(path, "/api") {
            return PathClass::Api;
        }
        if self
            .reserved_prefixes
            .iter()
            .any(|prefix| prefix_matches(path, prefix))
        {
            return PathClass::AppReserved;
        }
        PathClass::Public
    }

    /// The configured app-reserved prefixes
    pub fn reserved_prefixes(&self) -> &[String] {
        &self.reserved_prefixes
    }
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Match a path against a prefix at a segment boundary
fn prefix_matches(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths() {
        let classifier = PathClassifier::new();
        assert_eq!(classifier.classify("/api"), PathClass::Api);
        assert_eq!(classifier.classify("/api/dogs"), PathClass::Api);
        assert_eq!(classifier.classify("/api/site/current"), PathClass::Api);
    }

    #[test]
    fn test_reserved_paths() {
        let classifier = PathClassifier::new();
        assert_eq!(classifier.classify("/dashboard"), PathClass::AppReserved);
        assert_eq!(classifier.classify("/dashboard/dogs"), PathClass::AppReserved);
        assert_eq!(classifier.classify("/login"), PathClass::AppReserved);
        assert_eq!(classifier.classify("/register"), PathClass::AppReserved);
        assert_eq!(classifier.classify("/register/breeder"), PathClass::AppReserved);
    }

    #[test]
    fn test_public_paths() {
        let classifier = PathClassifier::new();
        assert_eq!(classifier.classify("/"), PathClass::Public);
        assert_eq!(classifier.classify("/about"), PathClass::Public);
        assert_eq!(classifier.classify("/dogs"), PathClass::Public);
        assert_eq!(classifier.classify(""), PathClass::Public);
    }

    #[test]
    fn test_prefix_requires_segment_boundary() {
        let classifier = PathClassifier::new();
        assert_eq!(classifier.classify("/apiary"), PathClass::Public);
        assert_eq!(classifier.classify("/loginfo"), PathClass::Public);
        assert_eq!(classifier.classify("/dashboards"), PathClass::Public);
    }

    #[test]
    fn test_custom_reserved_prefixes() {
        let classifier = PathClassifier::with_reserved(vec!["/admin".to_string()]);
        assert_eq!(classifier.classify("/admin/site"), PathClass::AppReserved);
        assert_eq!(classifier.classify("/dashboard"), PathClass::Public);
    }
}
