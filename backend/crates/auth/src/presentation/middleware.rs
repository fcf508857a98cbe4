//! Auth Middleware
//!
//! Bearer token gate for protected routes. Verification is stateless: no
//! store lookup happens here, handlers load the user when they need it.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderMap, header::AUTHORIZATION, request::Parts};
use axum::middleware::Next;
use axum::response::Response;
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenService>,
    pub token_header: Arc<str>,
}

impl AuthMiddlewareState {
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_tokens(Arc::new(TokenService::new(config)), config)
    }

    /// Share an existing token service (the one the auth routes sign with)
    pub fn with_tokens(tokens: Arc<TokenService>, config: &AuthConfig) -> Self {
        Self {
            tokens,
            token_header: Arc::from(config.token_header.as_str()),
        }
    }
}

/// Identity attached to request extensions once the token verified
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid bearer token
///
/// Mount with `axum::middleware::from_fn_with_state`. On any failure the
/// downstream handler is never invoked.
pub async fn require_auth(
    State(state): State<AuthMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_token(req.headers(), &state.token_header).ok_or(AuthError::MissingToken)?;

    let user_id = state.tokens.verify(token)?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Token from the configured header, else from `Authorization: Bearer`
fn extract_token<'a>(headers: &'a HeaderMap, token_header: &str) -> Option<&'a str> {
    let from_header = headers
        .get(token_header)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty());

    from_header.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
    })
}

/// Handler extractor for the authenticated identity
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .map(|user| AuthUser(user.user_id))
            .ok_or(AuthError::MissingToken)
    }
}
