//! Infrastructure Layer
//!
//! Database implementations.

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod postgres;

pub use postgres::PgUserRepository;
