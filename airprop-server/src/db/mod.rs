//! Database layer - connection pool, schema setup, and repositories
//!
//! # Design Principles
//!
//! - Connection pool with foreign keys enabled per connection - no global handle
//! - All list operations use JOINs - no N+1 queries
//! - Check-then-act sequences (tenant FK validation) run in a transaction

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
