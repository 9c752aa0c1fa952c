//! Public kennel-site page handler
//!
//! The target of the middleware's path rewrite. Reads the tenant the
//! middleware attached, loads the page data, maps it, renders it. Every
//! terminal failure renders the same generic not-found page; no query
//! errors, stack traces or tenant ids ever reach the response body.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use petpals_ingress::{TenantExt, tenant_from_headers};

use crate::{SiteState, fetch, mapper, render};

pub async fn render_kennel_site(State(state): State<SiteState>, req: Request) -> Response {
    let tenant = req
        .extensions()
        .get::<TenantExt>()
        .map(|ext| ext.0.clone())
        .or_else(|| tenant_from_headers(req.headers()));

    let Some(tenant) = tenant.filter(|tenant| tenant.is_tenant()) else {
        return not_found();
    };

    let page = match fetch::load_site_page(
        &*state.site_store,
        &*state.kennel_store,
        &tenant,
        state.read_timeout,
    )
    .await
    {
        Ok(Some(page)) => page,
        Ok(None) => return not_found(),
        Err(err) => {
            tracing::error!(tenant = %tenant, error = %err, "site lookup failed");
            return not_found();
        }
    };

    let props = mapper::map_site(&page.site, &page.dogs, &page.stud_dogs, &page.litters);
    match render::render_site(&props) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(template = %props.kind(), error = %err, "template render failed");
            not_found()
        }
    }
}

/// The single not-found response used for every terminal outcome, so a
/// missing site and an unpublished one are indistinguishable.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(render::render_not_found())).into_response()
}
