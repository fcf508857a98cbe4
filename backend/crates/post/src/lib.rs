//! Post Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post document with its Like and Comment sub-collections
//! - `application/` - Use cases (create, query, delete, like, comment)
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every route sits behind the bearer middleware from the `auth` crate.
//! A post is stored as one document; each mutation is a whole-document
//! read-modify-write, so two concurrent writers to the same post race and
//! the last save wins.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use domain::entity::post::{Comment, Like, Post};
pub use domain::repository::PostRepository;
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::{post_router, post_router_generic};

#[cfg(any(test, feature = "test-support"))]
pub use infra::memory::InMemoryPostRepository;

#[cfg(test)]
mod tests;
