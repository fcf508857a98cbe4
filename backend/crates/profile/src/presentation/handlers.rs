//! HTTP Handlers

use auth::{AuthUser, UserRepository};
use axum::Json;
use axum::extract::{Path, State};
use kernel::id::{EducationId, ExperienceId, UserId};
use post::PostRepository;
use std::sync::Arc;

use crate::application::{
    DeleteAccountUseCase, EntriesUseCase, GithubReposUseCase, ProfileQueryUseCase,
    UpsertProfileUseCase,
};
use crate::domain::repository::{GithubGateway, ProfileRepository};
use crate::error::{ProfileError, ProfileResult};
use crate::presentation::dto::{
    EducationRequest, ExperienceRequest, MessageResponse, ProfileRequest, ProfileResponse,
};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<P, U, Q>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    pub profiles: Arc<P>,
    pub users: Arc<U>,
    pub posts: Arc<Q>,
}

impl<P, U, Q> ProfileAppState<P, U, Q>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    fn query(&self) -> ProfileQueryUseCase<P, U> {
        ProfileQueryUseCase::new(self.profiles.clone(), self.users.clone())
    }

    fn entries(&self) -> EntriesUseCase<P> {
        EntriesUseCase::new(self.profiles.clone())
    }
}

/// State for the GitHub proxy route
#[derive(Clone)]
pub struct GithubAppState<G>
where
    G: GithubGateway + Clone + Send + Sync + 'static,
{
    pub github: Arc<G>,
}

/// GET /api/profile/me
pub async fn me<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
    AuthUser(user_id): AuthUser,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    let view = state.query().me(&user_id).await?;
    Ok(Json(view.into()))
}

/// POST /api/profile
pub async fn upsert<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<ProfileRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    let profile = UpsertProfileUseCase::new(state.profiles.clone())
        .execute(&user_id, req.into())
        .await?;

    let view = state.query().view(profile).await?;
    Ok(Json(view.into()))
}

/// GET /api/profile
pub async fn list<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
) -> ProfileResult<Json<Vec<ProfileResponse>>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    let views = state.query().all().await?;
    Ok(Json(views.into_iter().map(ProfileResponse::from).collect()))
}

/// GET /api/profile/user/{user_id}
pub async fn by_user<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
    Path(user_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    // A malformed id cannot name a profile
    let user_id: UserId = user_id.parse().map_err(|_| ProfileError::ProfileNotFound)?;
    let view = state.query().by_user(&user_id).await?;
    Ok(Json(view.into()))
}

/// DELETE /api/profile
///
/// Removes the caller's posts, profile and account.
pub async fn delete_account<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
    AuthUser(user_id): AuthUser,
) -> ProfileResult<Json<MessageResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    DeleteAccountUseCase::new(state.profiles.clone(), state.users.clone(), state.posts.clone())
        .execute(&user_id)
        .await?;

    Ok(Json(MessageResponse { msg: "User deleted" }))
}

/// PUT /api/profile/experience
pub async fn add_experience<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<ExperienceRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    let profile = state.entries().add_experience(&user_id, req.into()).await?;
    let view = state.query().view(profile).await?;
    Ok(Json(view.into()))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn remove_experience<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
    AuthUser(user_id): AuthUser,
    Path(exp_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    let exp_id: ExperienceId = exp_id.parse().map_err(|_| ProfileError::ExperienceNotFound)?;
    let profile = state.entries().remove_experience(&user_id, &exp_id).await?;
    let view = state.query().view(profile).await?;
    Ok(Json(view.into()))
}

/// PUT /api/profile/education
pub async fn add_education<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<EducationRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    let profile = state.entries().add_education(&user_id, req.into()).await?;
    let view = state.query().view(profile).await?;
    Ok(Json(view.into()))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn remove_education<P, U, Q>(
    State(state): State<ProfileAppState<P, U, Q>>,
    AuthUser(user_id): AuthUser,
    Path(edu_id): Path<String>,
) -> ProfileResult<Json<ProfileResponse>>
where
    P: ProfileRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    Q: PostRepository + Clone + Send + Sync + 'static,
{
    let edu_id: EducationId = edu_id.parse().map_err(|_| ProfileError::EducationNotFound)?;
    let profile = state.entries().remove_education(&user_id, &edu_id).await?;
    let view = state.query().view(profile).await?;
    Ok(Json(view.into()))
}

/// GET /api/profile/github/{username}
pub async fn github_repos<G>(
    State(state): State<GithubAppState<G>>,
    Path(username): Path<String>,
) -> ProfileResult<Json<serde_json::Value>>
where
    G: GithubGateway + Clone + Send + Sync + 'static,
{
    let repos = GithubReposUseCase::new(state.github.clone())
        .execute(&username)
        .await?;
    Ok(Json(repos))
}
