//! Shared utilities for integration and load testing.

use std::net::SocketAddr;

use authbench::{BenchConfig, HttpServer, Shutdown};

/// Spawn a server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; trigger it to
/// stop the server at the end of the test.
pub async fn spawn_server(mut config: BenchConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = tokio::net::TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
