//! JSON API handlers
//!
//! These run on un-rewritten `/api/*` paths; the middleware attaches the
//! tenant header and the handlers read it themselves.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use petpals_ingress::tenant_from_headers;

use crate::{SiteState, fetch};

/// Public summary of the current tenant's site
#[derive(Debug, Serialize)]
pub struct SiteSummary {
    pub site_name: String,
    pub template: String,
    pub color_scheme: String,
}

/// `GET /api/site/current` — the resolved tenant's public site summary
pub async fn current_site(State(state): State<SiteState>, headers: HeaderMap) -> Response {
    let Some(tenant) = tenant_from_headers(&headers) else {
        return not_found_json();
    };

    match fetch::find_published_site(&*state.site_store, &tenant).await {
        Ok(Some(site)) => Json(SiteSummary {
            site_name: site.site_name,
            template: site.template.as_tag().to_string(),
            color_scheme: site.color_scheme,
        })
        .into_response(),
        Ok(None) => not_found_json(),
        Err(err) => {
            tracing::error!(tenant = %tenant, error = %err, "site lookup failed");
            not_found_json()
        }
    }
}

fn not_found_json() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "site not found"})),
    )
        .into_response()
}
