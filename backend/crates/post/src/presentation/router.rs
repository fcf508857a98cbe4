//! Post Router

use auth::{AuthMiddlewareState, PgUserRepository, UserRepository, require_auth};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostAppState};

/// Create the Post router with PostgreSQL repositories
///
/// Nest under `/api/posts`. Every route requires a bearer token.
pub fn post_router(posts: PgPostRepository, users: PgUserRepository, guard: AuthMiddlewareState) -> Router {
    post_router_generic(posts, users, guard)
}

/// Create a generic Post router for any repository implementation
pub fn post_router_generic<P, U>(posts: P, users: U, guard: AuthMiddlewareState) -> Router
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = PostAppState {
        posts: Arc::new(posts),
        users: Arc::new(users),
    };

    Router::new()
        .route("/", post(handlers::create::<P, U>).get(handlers::list::<P, U>))
        .route(
            "/{id}",
            get(handlers::get_one::<P, U>).delete(handlers::remove::<P, U>),
        )
        .route("/like/{id}", put(handlers::like::<P, U>))
        .route("/unlike/{id}", put(handlers::unlike::<P, U>))
        .route("/comment/{id}", put(handlers::add_comment::<P, U>))
        .route(
            "/comment/{id}/{comment_id}",
            delete(handlers::remove_comment::<P, U>),
        )
        .route_layer(from_fn_with_state(guard, require_auth))
        .with_state(state)
}
