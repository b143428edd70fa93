//! hello-cicd: a minimal web service answering `GET /` with `Hello, World!`.
//!
//! The binary in `main.rs` wires configuration, logging and the server
//! together; everything it needs lives in these modules so integration
//! tests can drive the same router and server.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::create_router;
