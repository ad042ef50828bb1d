//! Server-rendered entry pages, each behind the route gate.

use axum::{
    extract::Extension,
    http::{header::CACHE_CONTROL, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;

use crate::signet::{
    gate::{decide, Gate, Page},
    marker::MarkerCodec,
};

const LANDING_HTML: &str = include_str!("../../../assets/landing.html");
const AUTH_HTML: &str = include_str!("../../../assets/auth.html");
const DASHBOARD_HTML: &str = include_str!("../../../assets/dashboard.html");

pub async fn landing(codec: Extension<Arc<MarkerCodec>>, headers: HeaderMap) -> Response {
    gated(Page::Landing, &codec, &headers, LANDING_HTML)
}

pub async fn auth(codec: Extension<Arc<MarkerCodec>>, headers: HeaderMap) -> Response {
    gated(Page::Auth, &codec, &headers, AUTH_HTML)
}

pub async fn dashboard(codec: Extension<Arc<MarkerCodec>>, headers: HeaderMap) -> Response {
    gated(Page::Dashboard, &codec, &headers, DASHBOARD_HTML)
}

fn gated(page: Page, codec: &MarkerCodec, headers: &HeaderMap, body: &'static str) -> Response {
    let authenticated = codec.is_authenticated(headers);
    let gate = decide(page, authenticated);

    debug!(?page, authenticated, ?gate, "route gate");

    let mut response = match gate {
        Gate::Serve => Html(body).into_response(),
        Gate::RedirectTo(path) => Redirect::temporary(path).into_response(),
    };

    // Both outcomes depend on the cookie, never let them be cached.
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
