//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router over the closed route set
//! - Wire up middleware (timeout, request ID, tracing)
//! - Own the shared application state (registry, payload builder)
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::auth::UserRegistry;
use crate::config::BenchConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::loadgen::LoadPayload;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<UserRegistry>,
    pub payload: Arc<LoadPayload>,
}

/// HTTP server for the benchmark target.
pub struct HttpServer {
    router: Router,
    config: BenchConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: BenchConfig) -> Self {
        let registry = Arc::new(UserRegistry::new());
        if config.registry.seed_users > 0 {
            registry.seed(config.registry.seed_users);
        }
        let payload = Arc::new(LoadPayload::from_config(&config.payload));

        let state = AppState { registry, payload };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &BenchConfig, state: AppState) -> Router {
        Router::new()
            .route("/auth", get(handlers::authenticate))
            .route("/newUser", get(handlers::register))
            .route("/multi", get(handlers::multi))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }
}
