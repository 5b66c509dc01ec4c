//! Plugin-discovery endpoints under `/.well-known/`.
//!
//! # Design
//! The logo and manifest template are embedded at compile time so the
//! binary has no runtime file dependencies. The manifest template carries
//! a `PLUGIN_HOSTNAME` token that each request replaces with the caller's
//! `Host` header, so one build serves any deployment hostname. The OpenAPI
//! document is built in code and serialized to YAML per request.

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::openapi;

const LOGO: &[u8] = include_bytes!("../assets/logo.png");
const MANIFEST_TEMPLATE: &str = include_str!("../assets/manifest.json");
const HOSTNAME_TOKEN: &str = "PLUGIN_HOSTNAME";

/// Request authority for URL substitution. `localhost` when the client
/// sent no `Host` header.
fn request_host(headers: &HeaderMap) -> &str {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost")
}

pub async fn plugin_logo() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], LOGO)
}

pub async fn plugin_manifest(headers: HeaderMap) -> impl IntoResponse {
    let host = request_host(&headers);
    let body = MANIFEST_TEMPLATE.replace(HOSTNAME_TOKEN, &format!("https://{host}"));
    ([(header::CONTENT_TYPE, "application/json")], body)
}

pub async fn openapi_document(headers: HeaderMap) -> Response {
    let doc = openapi::document(request_host(&headers));
    match serde_yaml::to_string(&doc) {
        Ok(yaml) => ([(header::CONTENT_TYPE, "text/yaml")], yaml).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to serialize OpenAPI document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
