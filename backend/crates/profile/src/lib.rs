//! Profile Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Profile document, Experience/Education sub-collections,
//!   repository and GitHub gateway traits
//! - `application/` - Use cases, including whole-account deletion
//! - `infra/` - PostgreSQL repository, GitHub HTTP client
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! A profile is stored as one document and every mutation rewrites it
//! whole; concurrent writers to the same profile race, last save wins.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use domain::entity::profile::{Education, Experience, Profile, Social};
pub use domain::repository::{GithubGateway, ProfileRepository};
pub use error::{ProfileError, ProfileResult};
pub use infra::github::{GithubClient, GithubConfig};
pub use infra::postgres::PgProfileRepository;
pub use presentation::router::{profile_router, profile_router_generic};

#[cfg(any(test, feature = "test-support"))]
pub use infra::memory::InMemoryProfileRepository;
