//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::{GithubAppState, ProfileAppState};
pub use router::{profile_router, profile_router_generic};
