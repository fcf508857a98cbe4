//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::net::SocketAddr;
use std::time::Duration;

use auth::application::config::DEFAULT_TOKEN_TTL;
use auth::{AuthConfig, AuthMiddlewareState, PgUserRepository, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use platform::config::{env_or, optional_env, parse_env, required_env};
use post::{PgPostRepository, post_router};
use profile::{GithubClient, GithubConfig, PgProfileRepository, profile_router};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,profile=info,post=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = required_env("DATABASE_URL")?;
    let max_connections = parse_env("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_config = load_auth_config()?;
    let guard = AuthMiddlewareState::new(&auth_config);
    let token_header = http::HeaderName::try_from(auth_config.token_header.as_str())?;

    let github = GithubClient::new(GithubConfig::new(
        optional_env("GITHUB_CLIENT_ID"),
        optional_env("GITHUB_CLIENT_SECRET"),
    ))?;

    let users = PgUserRepository::new(pool.clone());
    let posts = PgPostRepository::new(pool.clone());
    let profiles = PgProfileRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env_or("FRONTEND_ORIGINS", DEFAULT_FRONTEND_ORIGINS);

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
            token_header,
        ]));

    // Build router
    let app = Router::new()
        .merge(auth_router(users.clone(), auth_config))
        .nest(
            "/api/profile",
            profile_router(profiles, users.clone(), posts.clone(), github, guard.clone()),
        )
        .nest("/api/posts", post_router(posts, users, guard))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = parse_env("PORT", DEFAULT_PORT)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Token signing configuration
///
/// Release builds refuse to start without `JWT_SECRET`; debug builds fall
/// back to a per-process random secret, so tokens do not survive a restart.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let config = if cfg!(debug_assertions) {
        match optional_env("JWT_SECRET") {
            Some(secret) => AuthConfig::new(secret),
            None => {
                tracing::warn!("JWT_SECRET not set, using a random development secret");
                AuthConfig::development()
            }
        }
    } else {
        AuthConfig::new(required_env("JWT_SECRET")?)
    };

    // u32 seconds keeps `iat + ttl` well inside the i64 claim range
    let default_ttl = u32::try_from(DEFAULT_TOKEN_TTL.as_secs())?;
    let ttl_secs: u32 = parse_env("TOKEN_TTL_SECS", default_ttl)?;

    Ok(config
        .with_token_ttl(Duration::from_secs(u64::from(ttl_secs)))
        .with_pepper(optional_env("PASSWORD_PEPPER").map(String::into_bytes)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
