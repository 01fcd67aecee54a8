//! # curlman
//!
//! A small terminal request composer that hands every request to `curl`.
//!
//! ## Features
//! - HTTP methods: GET, POST, PUT, DELETE
//! - Ordered, editable request headers
//! - Raw request body
//! - Response view with JSON pretty-printing
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - polls keys, draws render snapshots
//! - App Layer - focus state machine and request building
//! - Network Layer (Tokio) - runs the `curl` subprocess

pub mod constants;
pub mod config;
pub mod models;
pub mod input;
pub mod curl;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Header, HttpMethod, Request, RequestError, Response};
pub use config::Config;
pub use curl::build_args;
pub use messages::{AppMessage, NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{AppActor, AppState};
pub use network::NetworkActor;
