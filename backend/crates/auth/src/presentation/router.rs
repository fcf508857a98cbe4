//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_auth};

/// Create the Auth router with PostgreSQL repository
///
/// Routes carry their full paths (`/api/users`, `/api/auth`), so the
/// router is merged rather than nested.
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenService::new(&config));
    let guard = AuthMiddlewareState::with_tokens(tokens.clone(), &config);

    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens,
    };

    Router::new()
        .route("/api/users", post(handlers::register::<R>))
        .route(
            "/api/auth",
            get(handlers::current_user::<R>)
                .route_layer(from_fn_with_state(guard, require_auth))
                .post(handlers::sign_in::<R>),
        )
        .with_state(state)
}
