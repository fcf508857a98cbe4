//! Profile Router

use auth::{AuthMiddlewareState, PgUserRepository, UserRepository, require_auth};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use post::{PgPostRepository, PostRepository};
use std::sync::Arc;

use crate::domain::repository::{GithubGateway, ProfileRepository};
use crate::infra::github::GithubClient;
use crate::infra::postgres::PgProfileRepository;
use crate::presentation::handlers::{self, GithubAppState, ProfileAppState};

/// Create the Profile router with PostgreSQL repositories and the GitHub client
///
/// Nest under `/api/profile`. Listing, lookup by user and the GitHub proxy
/// are public; everything else requires a token.
pub fn profile_router(
    profiles: PgProfileRepository,
    users: PgUserRepository,
    posts: PgPostRepository,
    github: GithubClient,
    guard: AuthMiddlewareState,
) -> Router {
    profile_router_generic(profiles, users, posts, github, guard)
}

/// Create a generic Profile router for any repository implementation
pub fn profile_router_generic<P, U, Q, G>(
    profiles: P,
    users: U,
    posts: Q,
    github: G,
    guard: AuthMiddlewareState,
) -> Router
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
    G: GithubGateway + Clone + Send + Sync + 'static,
{
    let state = ProfileAppState {
        profiles: Arc::new(profiles),
        users: Arc::new(users),
        posts: Arc::new(posts),
    };

    let auth = || from_fn_with_state(guard.clone(), require_auth);

    let profile_routes = Router::new()
        .route("/me", get(handlers::me::<P, U, Q>).route_layer(auth()))
        .route(
            "/",
            post(handlers::upsert::<P, U, Q>)
                .delete(handlers::delete_account::<P, U, Q>)
                .route_layer(auth())
                .get(handlers::list::<P, U, Q>),
        )
        .route("/user/{user_id}", get(handlers::by_user::<P, U, Q>))
        .route(
            "/experience",
            put(handlers::add_experience::<P, U, Q>).route_layer(auth()),
        )
        .route(
            "/experience/{exp_id}",
            delete(handlers::remove_experience::<P, U, Q>).route_layer(auth()),
        )
        .route(
            "/education",
            put(handlers::add_education::<P, U, Q>).route_layer(auth()),
        )
        .route(
            "/education/{edu_id}",
            delete(handlers::remove_education::<P, U, Q>).route_layer(auth()),
        )
        .with_state(state);

    let github_routes = Router::new()
        .route("/github/{username}", get(handlers::github_repos::<G>))
        .with_state(GithubAppState {
            github: Arc::new(github),
        });

    profile_routes.merge(github_routes)
}
