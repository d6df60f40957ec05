//! airprop-server: HTTP API over the AirProp property store
//!
//! Exposes CRUD for properties and tenants backed by SQLite.
//! Layering: handlers -> repositories (validation + queries) -> pool.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig};
