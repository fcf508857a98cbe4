//! Application Layer
//!
//! Token service and use cases.

pub mod config;
pub mod current_user;
pub mod register;
pub mod sign_in;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use token::{Claims, TokenError, TokenService};
