//! Post Error Types

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type PostResult<T> = Result<T, PostError>;

#[derive(Debug, Error)]
pub enum PostError {
    /// Unknown or malformed post id
    #[error("This post is not available")]
    NotFound,

    #[error("Comment does not exist")]
    CommentNotFound,

    #[error("Post already liked")]
    AlreadyLiked,

    #[error("Like already unliked")]
    NotLiked,

    /// Token identity no longer resolves to a user
    #[error("User not found")]
    AuthorNotFound,

    /// Validation and ownership failures from the kernel
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::NotFound | PostError::CommentNotFound | PostError::AuthorNotFound => {
                ErrorKind::NotFound
            }
            PostError::AlreadyLiked | PostError::NotLiked => ErrorKind::Conflict,
            PostError::App(e) => e.kind(),
            PostError::Auth(e) => e.kind(),
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            PostError::App(e) => e,
            PostError::Auth(e) => e.into_app_error(),
            PostError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self.kind() {
            ErrorKind::Forbidden => tracing::warn!(error = %self, "Post ownership check failed"),
            kind if kind.is_server_error() => tracing::error!(error = ?self, "Post error"),
            _ => tracing::debug!(error = %self, "Post request rejected"),
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
