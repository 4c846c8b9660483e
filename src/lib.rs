//! HTTP Benchmark Target Server
//!
//! A small authentication/registration service with a synthetic
//! load-generation endpoint, built to benchmark HTTP server throughput
//! and concurrency handling.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               BENCHMARK TARGET                │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐    ┌───────────────────────┐    │
//!   ─────────────────┼─▶│  http   │───▶│ /auth    → auth        │    │
//!                    │  │ server  │    │ /newUser → registry    │    │
//!                    │  └─────────┘    │ /multi   → loadgen     │    │
//!                    │                 │ *        → 404         │    │
//!                    │                 └───────────┬────────────┘    │
//!                    │                             │                 │
//!                    │            ┌────────────────▼─────────────┐   │
//!                    │            │ auth (cipher + user registry)│   │
//!                    │            │ loadgen (payload builder)    │   │
//!                    │            └──────────────────────────────┘   │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │  │
//!                    │  │  │ config │ │observability│ │lifecycle│ │  │
//!                    │  │  └────────┘ └─────────────┘ └─────────┘ │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod auth;
pub mod http;
pub mod loadgen;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::schema::BenchConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
