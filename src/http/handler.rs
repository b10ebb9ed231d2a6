//! Custom logo request handler.
//!
//! # Responsibilities
//! - Accept GET only
//! - Require and parse the `type` and `theme` query parameters
//! - Look the pair up in the current catalog snapshot
//! - Serve the matched file with static-file semantics (content type,
//!   ranges, conditional requests)
//!
//! # Design Decisions
//! - Every validation step answers on failure and stops
//! - One catalog snapshot per request, even across a hot reload
//! - Unmatched lookups follow `MissingLogoPolicy`

use std::time::Instant;

use axum::{
    body::Body,
    extract::{Query, Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::config::MissingLogoPolicy;
use crate::http::error::{send_error, ApiError};
use crate::http::server::AppState;
use crate::logos::{LogoTheme, LogoType};
use crate::observability::metrics;

/// Logos are public but may be replaced at any time by an administrator.
const LOGO_CACHE_CONTROL: &str = "public, no-cache";

/// Entry point mounted at the configured logo path.
pub async fn custom_logo_handler(State(state): State<AppState>, request: Request) -> Response {
    let start_time = Instant::now();
    let response = handle(&state, request).await;
    metrics::record_request(response.status().as_u16(), start_time);
    response
}

async fn handle(state: &AppState, request: Request) -> Response {
    if request.method() != Method::GET {
        tracing::debug!(method = %request.method(), "Rejecting custom logo request method");
        let mut response = send_error(
            StatusCode::METHOD_NOT_ALLOWED,
            ApiError::new("Method unsupported, the only supported methods is GET"),
        );
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("GET"));
        return response;
    }

    let (raw_type, raw_theme) = query_params(&request);
    let (Some(raw_type), Some(raw_theme)) = (raw_type, raw_theme) else {
        let msg = format!(
            "GET request \"{}\" is missing 'theme' or 'type' query parameter",
            request.uri()
        );
        tracing::error!(uri = %request.uri(), "{}", msg);
        return send_error(StatusCode::BAD_REQUEST, ApiError::new(msg));
    };

    let theme = match raw_theme.parse::<LogoTheme>() {
        Ok(theme) => theme,
        Err(e) => {
            let msg = format!("failed to process URL query parameter 'theme': {}", e);
            tracing::error!(uri = %request.uri(), "{}", msg);
            return send_error(StatusCode::BAD_REQUEST, ApiError::new(msg));
        }
    };

    // The parameter label reads 'query' in the message; clients match on it.
    let logo_type = match raw_type.parse::<LogoType>() {
        Ok(logo_type) => logo_type,
        Err(e) => {
            let msg = format!("failed to process URL query parameter 'query': {}", e);
            tracing::error!(uri = %request.uri(), "{}", msg);
            return send_error(StatusCode::BAD_REQUEST, ApiError::new(msg));
        }
    };

    let catalog = state.catalog.load_full();
    let mut response = match catalog.find(logo_type, theme) {
        Some(logo) => {
            tracing::debug!(
                logo_type = %logo_type,
                theme = %theme,
                path = ?logo.path,
                "Serving custom logo"
            );
            serve_file(logo.path.clone(), request).await
        }
        None => missing_logo(state.on_missing, logo_type, theme),
    };

    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(LOGO_CACHE_CONTROL));
    response
}

/// First values of `type` and `theme`; an empty value counts as missing.
/// A query string that fails to decode counts as missing parameters, while
/// invalid percent escapes inside a value are kept literally.
fn query_params(request: &Request) -> (Option<String>, Option<String>) {
    let pairs = Query::<Vec<(String, String)>>::try_from_uri(request.uri())
        .map(|Query(pairs)| pairs)
        .unwrap_or_default();

    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty())
    };

    (first("type"), first("theme"))
}

async fn serve_file(path: std::path::PathBuf, request: Request) -> Response {
    let response = match ServeFile::new(&path).oneshot(request).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    };

    if response.status() == StatusCode::NOT_FOUND {
        tracing::warn!(path = ?path, "Configured custom logo file is not readable");
    }

    response.map(Body::new)
}

fn missing_logo(policy: MissingLogoPolicy, logo_type: LogoType, theme: LogoTheme) -> Response {
    tracing::debug!(logo_type = %logo_type, theme = %theme, "No custom logo configured");
    match policy {
        MissingLogoPolicy::Empty => StatusCode::OK.into_response(),
        MissingLogoPolicy::NotFound => send_error(
            StatusCode::NOT_FOUND,
            ApiError::new(format!(
                "no custom logo configured for type \"{}\" and theme \"{}\"",
                logo_type, theme
            )),
        ),
    }
}
