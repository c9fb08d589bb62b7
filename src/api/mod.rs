//! HTTP API for Keygate

pub mod routes;
pub mod server;

pub use server::{create_router, run_server, AppState, SharedState};
