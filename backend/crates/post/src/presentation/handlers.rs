//! HTTP Handlers

use auth::{AuthUser, UserRepository};
use axum::Json;
use axum::extract::{Path, State};
use kernel::id::{CommentId, PostId};
use std::sync::Arc;

use crate::application::{
    CommentUseCase, CreatePostUseCase, DeletePostUseCase, LikeUseCase, PostQueryUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};
use crate::presentation::dto::{
    CommentResponse, LikeResponse, MessageResponse, PostResponse, TextRequest,
};

/// Shared state for post handlers
#[derive(Clone)]
pub struct PostAppState<P, U>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub posts: Arc<P>,
    pub users: Arc<U>,
}

/// A malformed id cannot name an existing post
fn parse_post_id(raw: &str) -> PostResult<PostId> {
    raw.parse().map_err(|_| PostError::NotFound)
}

/// POST /api/posts
pub async fn create<P, U>(
    State(state): State<PostAppState<P, U>>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<TextRequest>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post = CreatePostUseCase::new(state.posts.clone(), state.users.clone())
        .execute(&user_id, &req.text)
        .await?;

    Ok(Json(post.into()))
}

/// GET /api/posts
pub async fn list<P, U>(State(state): State<PostAppState<P, U>>) -> PostResult<Json<Vec<PostResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let posts = PostQueryUseCase::new(state.posts.clone()).list().await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// GET /api/posts/{id}
pub async fn get_one<P, U>(
    State(state): State<PostAppState<P, U>>,
    Path(id): Path<String>,
) -> PostResult<Json<PostResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let post = PostQueryUseCase::new(state.posts.clone()).get(&post_id).await?;
    Ok(Json(post.into()))
}

/// DELETE /api/posts/{id}
pub async fn remove<P, U>(
    State(state): State<PostAppState<P, U>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> PostResult<Json<MessageResponse>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    DeletePostUseCase::new(state.posts.clone())
        .execute(&user_id, &post_id)
        .await?;

    Ok(Json(MessageResponse {
        msg: "Post removed successfully",
    }))
}

/// PUT /api/posts/like/{id}
pub async fn like<P, U>(
    State(state): State<PostAppState<P, U>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> PostResult<Json<Vec<LikeResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let likes = LikeUseCase::new(state.posts.clone())
        .like(&user_id, &post_id)
        .await?;
    Ok(Json(likes.into_iter().map(LikeResponse::from).collect()))
}

/// PUT /api/posts/unlike/{id}
pub async fn unlike<P, U>(
    State(state): State<PostAppState<P, U>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
) -> PostResult<Json<Vec<LikeResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let likes = LikeUseCase::new(state.posts.clone())
        .unlike(&user_id, &post_id)
        .await?;
    Ok(Json(likes.into_iter().map(LikeResponse::from).collect()))
}

/// PUT /api/posts/comment/{id}
pub async fn add_comment<P, U>(
    State(state): State<PostAppState<P, U>>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<String>,
    Json(req): Json<TextRequest>,
) -> PostResult<Json<Vec<CommentResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let comments = CommentUseCase::new(state.posts.clone(), state.users.clone())
        .add(&user_id, &post_id, &req.text)
        .await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}

/// DELETE /api/posts/comment/{id}/{comment_id}
pub async fn remove_comment<P, U>(
    State(state): State<PostAppState<P, U>>,
    AuthUser(user_id): AuthUser,
    Path((id, comment_id)): Path<(String, String)>,
) -> PostResult<Json<Vec<CommentResponse>>>
where
    P: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let post_id = parse_post_id(&id)?;
    let comment_id: CommentId = comment_id.parse().map_err(|_| PostError::CommentNotFound)?;

    let comments = CommentUseCase::new(state.posts.clone(), state.users.clone())
        .remove(&user_id, &post_id, &comment_id)
        .await?;
    Ok(Json(comments.into_iter().map(CommentResponse::from).collect()))
}
