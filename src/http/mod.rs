//! HTTP server module.
//!
//! Serves plain HTTP through `axum-server` so the listener can be drained on
//! SIGTERM/SIGINT and callers can discover the bound address.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
