//! Embedded static assets for kennel pages
//!
//! Compiled into the binary; no filesystem access at request time.

use axum::http::header;
use axum::response::IntoResponse;

const SITE_CSS: &str = include_str!("../../static/site.css");
const DOG_PLACEHOLDER_SVG: &str = include_str!("../../static/images/dog-placeholder.svg");

pub async fn serve_site_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        SITE_CSS,
    )
}

pub async fn serve_dog_placeholder() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        DOG_PLACEHOLDER_SVG,
    )
}
