//! Store traits for tenant sites and kennel domain data
//!
//! These traits are the seams between the request pipeline and the data
//! store. Handlers receive trait objects (`Arc<dyn SiteStore>`,
//! `Arc<dyn KennelStore>`), so the same rendering logic runs against the
//! PostgreSQL implementations in production and in-memory fakes in tests.
//! There are no module-level client singletons anywhere in this service.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{DogRecord, LitterRecord, Result, TenantSite};

/// Read-only lookup of tenant site records.
///
/// Both lookups return `Ok(None)` for a missing record. The publish flag is
/// returned as stored; collapsing unpublished records into the not-found
/// outcome is the caller's responsibility, so that the rule lives in exactly
/// one place (`petpals_site::fetch`).
#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Look up a site by its unique site name (subdomain slug)
    ///
    /// # Errors
    /// - `Error::Database` for store-level failures
    async fn find_by_site_name(&self, site_name: &str) -> Result<Option<TenantSite>>;

    /// Look up a site by a bound custom domain
    ///
    /// # Errors
    /// - `Error::Database` for store-level failures
    async fn find_by_custom_domain(&self, domain: &str) -> Result<Option<TenantSite>>;
}

/// Read-only, owner-scoped access to dogs and litters.
///
/// Every method takes the breeder id explicitly; implementations must filter
/// by it in the query itself. Cross-tenant leakage is the primary
/// correctness risk of this service, and the scoping must not depend on
/// callers remembering to filter afterwards.
#[async_trait]
pub trait KennelStore: Send + Sync {
    /// All dogs owned by the breeder, ordered by name
    ///
    /// # Errors
    /// - `Error::Database` for store-level failures
    async fn list_dogs(&self, breeder_id: Uuid) -> Result<Vec<DogRecord>>;

    /// The subset of the breeder's dogs flagged for stud service
    ///
    /// # Errors
    /// - `Error::Database` for store-level failures
    async fn list_stud_dogs(&self, breeder_id: Uuid) -> Result<Vec<DogRecord>>;

    /// All litters owned by the breeder, newest expected first
    ///
    /// # Errors
    /// - `Error::Database` for store-level failures
    async fn list_litters(&self, breeder_id: Uuid) -> Result<Vec<LitterRecord>>;
}
