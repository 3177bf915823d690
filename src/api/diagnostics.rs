//! Setup diagnostic endpoint
//!
//! Plain HTTP, not callable: browsers hit it directly while an operator is
//! wiring up credentials, so every response carries permissive CORS headers.

use crate::services::diagnostics::inspect_setup;
use crate::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

fn add_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("3600"));
}

/// GET|POST /setupDiagnostic
pub async fn setup_diagnostic(State(state): State<AppState>) -> Response {
    let mut headers = HeaderMap::new();
    add_cors_headers(&mut headers);

    match inspect_setup(state.config_store.as_ref()).await {
        Ok(diagnostic) if diagnostic.config_exists => {
            info!(
                has_key_id = diagnostic.has_key_id,
                has_key_secret = diagnostic.has_key_secret,
                "setup diagnostic: configuration present"
            );
            (StatusCode::OK, headers, Json(diagnostic)).into_response()
        }
        Ok(diagnostic) => {
            info!("setup diagnostic: configuration missing");
            (StatusCode::NOT_FOUND, headers, Json(diagnostic)).into_response()
        }
        Err(e) => {
            error!(error = %e, "setup diagnostic failed");
            let body = json!({
                "error": e.to_string(),
                "timestamp": Utc::now(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, headers, Json(body)).into_response()
        }
    }
}

/// OPTIONS /setupDiagnostic
pub async fn options_setup_diagnostic() -> Response {
    let mut headers = HeaderMap::new();
    add_cors_headers(&mut headers);
    (StatusCode::NO_CONTENT, headers).into_response()
}
