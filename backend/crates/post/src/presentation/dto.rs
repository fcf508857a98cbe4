//! API DTOs
//!
//! Wire names follow the document shape clients already consume:
//! `_id` for ids and `user` for the owning user's id.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, LikeId, PostId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entity::post::{Comment, Like, Post};

/// POST /api/posts, PUT /api/posts/comment/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    #[serde(rename = "_id")]
    pub id: LikeId,
    pub user: UserId,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            id: like.id,
            user: like.user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: CommentId,
    pub user: UserId,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            user: c.user_id,
            text: c.text,
            name: c.name,
            avatar: c.avatar,
            date: c.date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub user: UserId,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<LikeResponse>,
    pub comments: Vec<CommentResponse>,
    pub date: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.post_id,
            user: post.user_id,
            text: post.text,
            name: post.name,
            avatar: post.avatar,
            likes: post.likes.into_iter().map(LikeResponse::from).collect(),
            comments: post.comments.into_iter().map(CommentResponse::from).collect(),
            date: post.date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}
