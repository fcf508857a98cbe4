//! Infrastructure Layer

pub mod github;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod postgres;

pub use github::{GithubClient, GithubConfig};
pub use postgres::PgProfileRepository;
