//! Request identification middleware.
//!
//! # Responsibilities
//! - Tag every inbound request with a unique ID (UUID v4)
//! - Preserve an ID supplied by the client
//!
//! # Design Decisions
//! - The ID is added as early as possible so every log line for the
//!   request can carry it
//! - Plain tower Layer/Service pair; no per-request allocation beyond
//!   the ID itself

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Layer that installs [`RequestIdService`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service that inserts an `x-request-id` header when absent.
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        if !req.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                req.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(req)
    }
}
