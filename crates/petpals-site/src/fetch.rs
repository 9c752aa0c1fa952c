//! Domain data fetch orchestration
//!
//! The site lookup is the sole hard dependency: a missing or unpublished
//! record short-circuits the whole page to not-found before any domain read
//! is issued. The three domain reads then run concurrently, each bounded by
//! its own timeout, and each degrades to an empty collection on failure —
//! a kennel page missing its litter section is a degraded page, not a
//! broken one.

use std::time::Duration;

use petpals_core::{
    DogRecord, KennelStore, LitterRecord, ResolvedTenant, Result, SiteStore, TenantSite,
};

/// Everything a single kennel-site render needs
#[derive(Debug, Clone)]
pub struct SitePage {
    pub site: TenantSite,
    pub dogs: Vec<DogRecord>,
    pub stud_dogs: Vec<DogRecord>,
    pub litters: Vec<LitterRecord>,
}

/// Look up a site by tenant reference, collapsing unpublished records into
/// the not-found outcome.
///
/// The collapse happens here, in exactly one place, so an unpublished site
/// is indistinguishable from a missing one everywhere downstream.
pub async fn find_published_site(
    store: &dyn SiteStore,
    tenant: &ResolvedTenant,
) -> Result<Option<TenantSite>> {
    let site = match tenant {
        ResolvedTenant::Subdomain(slug) => store.find_by_site_name(slug).await?,
        ResolvedTenant::CustomDomain(domain) => store.find_by_custom_domain(domain).await?,
        ResolvedTenant::MainApp => None,
    };

    Ok(site.filter(|site| site.published))
}

/// Load the full page data for a tenant, or `None` if the site should
/// render as not-found.
///
/// # Errors
/// - `Error::Database` if the site lookup itself fails; domain-read
///   failures are absorbed and logged instead
pub async fn load_site_page(
    site_store: &dyn SiteStore,
    kennel_store: &dyn KennelStore,
    tenant: &ResolvedTenant,
    read_timeout: Duration,
) -> Result<Option<SitePage>> {
    let Some(site) = find_published_site(site_store, tenant).await? else {
        return Ok(None);
    };

    let breeder_id = site.breeder_id;
    let (dogs, stud_dogs, litters) = tokio::join!(
        recover(read_timeout, "dogs", kennel_store.list_dogs(breeder_id)),
        recover(
            read_timeout,
            "stud dogs",
            kennel_store.list_stud_dogs(breeder_id),
        ),
        recover(read_timeout, "litters", kennel_store.list_litters(breeder_id)),
    );

    Ok(Some(SitePage {
        site,
        dogs,
        stud_dogs,
        litters,
    }))
}

/// Run one domain read with a timeout, substituting an empty collection on
/// failure so a slow or broken section never takes the page down with it.
async fn recover<T, F>(read_timeout: Duration, section: &str, fut: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>>>,
{
    match tokio::time::timeout(read_timeout, fut).await {
        Ok(Ok(rows)) => rows,
        Ok(Err(err)) => {
            tracing::warn!(section, error = %err, "domain read failed, rendering without section");
            Vec::new()
        }
        Err(_) => {
            tracing::warn!(section, timeout_ms = read_timeout.as_millis() as u64, "domain read timed out, rendering without section");
            Vec::new()
        }
    }
}
