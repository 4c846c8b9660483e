//! Endpoint handlers for the benchmark surface.
//!
//! # Responsibilities
//! - Extract query parameters and call into the registry / payload builder
//! - Translate domain errors into HTTP status codes and bodies
//!
//! # Design Decisions
//! - Unknown user and invalid input both map to 400; only a password
//!   mismatch yields 401, so the two failure classes stay distinguishable
//! - All bodies are text/plain, matching what benchmark clients expect
//! - Errors never propagate: a malformed request cannot take the
//!   process down

use std::collections::HashMap;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::auth::RegistryError;
use crate::http::server::AppState;
use crate::loadgen::PayloadError;
use crate::observability::metrics;

/// `GET /auth?username=..&password=..`
pub async fn authenticate(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let start = Instant::now();
    let username = params.get("username").map(String::as_str).unwrap_or("");
    let password = params.get("password").map(String::as_str).unwrap_or("");

    let (status, body) = match state.registry.authenticate(username, password) {
        Ok(count) => (
            StatusCode::OK,
            format!("{count:7} This user was authorized at {}\n", unix_millis()),
        ),
        Err(RegistryError::Unauthorized) => {
            tracing::debug!(username, "Password mismatch");
            (StatusCode::UNAUTHORIZED, "Authorization failed!".to_string())
        }
        Err(err) => {
            tracing::debug!(username, error = %err, "Authentication rejected");
            (StatusCode::BAD_REQUEST, "Unknown User".to_string())
        }
    };

    metrics::record_request("GET", status.as_u16(), "/auth", start);
    (status, body).into_response()
}

/// `GET /newUser?username=..&password=..`
pub async fn register(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let start = Instant::now();
    let username = params.get("username").map(String::as_str).unwrap_or("");
    let password = params.get("password").map(String::as_str).unwrap_or("");

    let (status, body) = match state.registry.register(username, password) {
        Ok(name) => {
            tracing::info!(username = %name, "Created user");
            (StatusCode::OK, format!("Created new user `{name}`\n"))
        }
        Err(RegistryError::AlreadyExists) => (
            StatusCode::BAD_REQUEST,
            "Creating a new user failed -> User already exists\n".to_string(),
        ),
        Err(err) => {
            tracing::debug!(username, error = %err, "Registration rejected");
            (
                StatusCode::BAD_REQUEST,
                "Creating a new user failed -> Insufficient arguments\n".to_string(),
            )
        }
    };

    metrics::record_request("GET", status.as_u16(), "/newUser", start);
    (status, body).into_response()
}

/// `GET /multi?multiplier=..`
pub async fn multi(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let start = Instant::now();
    let multiplier = params
        .get("multiplier")
        .and_then(|m| m.parse::<usize>().ok());

    let (status, body) = match multiplier {
        None => (
            StatusCode::BAD_REQUEST,
            "Server error bad arguments".to_string(),
        ),
        Some(multiplier) => match state.payload.generate(multiplier) {
            Ok(body) => (StatusCode::OK, body),
            Err(PayloadError::InvalidMultiplier) => (
                StatusCode::BAD_REQUEST,
                "Server error bad arguments".to_string(),
            ),
            Err(err @ PayloadError::TooLarge { .. }) => {
                tracing::warn!(multiplier, "Load payload request over cap");
                (StatusCode::PAYLOAD_TOO_LARGE, format!("{err}\n"))
            }
        },
    };

    metrics::record_request("GET", status.as_u16(), "/multi", start);
    (status, body).into_response()
}

/// Fallback for unrecognized paths.
pub async fn not_found() -> Response {
    let start = Instant::now();
    metrics::record_request("GET", StatusCode::NOT_FOUND.as_u16(), "none", start);
    (StatusCode::NOT_FOUND, "There is nothing to do here\n").into_response()
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
