//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Token service and use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Registration with name + email + password
//! - Sign-in returning a signed bearer token
//! - Stateless token verification middleware shared by the other crates
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never serialized
//! - HS256 tokens carrying `{ user: { id } }`, fixed TTL, no revocation
//! - Unknown email and wrong password are indistinguishable to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{TokenError, TokenService};
pub use domain::entity::user::User;
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::{AuthMiddlewareState, AuthUser, AuthenticatedUser, require_auth};
pub use presentation::router::{auth_router, auth_router_generic};

#[cfg(any(test, feature = "test-support"))]
pub use infra::memory::InMemoryUserRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
