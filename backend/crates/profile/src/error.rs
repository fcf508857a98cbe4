//! Profile Error Types

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use post::PostError;
use thiserror::Error;

pub type ProfileResult<T> = Result<T, ProfileError>;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// The acting user has not created a profile yet
    #[error("There is no profile for this user")]
    NoProfile,

    /// Lookup by user id found nothing (or the id was malformed)
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Experience not found")]
    ExperienceNotFound,

    #[error("Education not found")]
    EducationNotFound,

    #[error("No Github profile found")]
    GithubNotFound,

    /// GitHub answered with something other than the repo list
    #[error("GitHub request failed: {0}")]
    Upstream(String),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Post(#[from] PostError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::NoProfile
            | ProfileError::ProfileNotFound
            | ProfileError::ExperienceNotFound
            | ProfileError::EducationNotFound
            | ProfileError::GithubNotFound => ErrorKind::NotFound,
            ProfileError::Upstream(_) => ErrorKind::BadGateway,
            ProfileError::App(e) => e.kind(),
            ProfileError::Auth(e) => e.kind(),
            ProfileError::Post(e) => e.kind(),
            ProfileError::Database(_) | ProfileError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            ProfileError::App(e) => e,
            ProfileError::Auth(e) => e.into_app_error(),
            ProfileError::Post(e) => e.into_app_error(),
            ProfileError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ProfileError::Upstream(reason) => {
                tracing::error!(reason = %reason, "GitHub proxy failed");
            }
            _ if self.kind() == ErrorKind::Forbidden => {
                tracing::warn!(error = %self, "Profile ownership check failed");
            }
            _ if self.kind().is_server_error() => {
                tracing::error!(error = ?self, "Profile error");
            }
            _ => {
                tracing::debug!(error = %self, "Profile request rejected");
            }
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
