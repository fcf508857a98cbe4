//! Post Entity
//!
//! A post with its likes and comments embedded, newest entries first.
//! Author name and avatar are copied in at write time and not kept in
//! sync with the user record afterwards.

use chrono::{DateTime, Utc};
use kernel::id::{CommentId, LikeId, PostId, UserId};
use kernel::ownership::{Owned, ensure_owner};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::text::PostText;
use crate::error::{PostError, PostResult};

/// Name and avatar snapshot of the writing user
#[derive(Debug, Clone)]
pub struct Author {
    pub user_id: UserId,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    pub id: LikeId,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: Author, text: PostText) -> Self {
        Self {
            id: CommentId::new(),
            user_id: author.user_id,
            text: text.into_inner(),
            name: author.name,
            avatar: author.avatar,
            date: Utc::now(),
        }
    }
}

impl Owned for Comment {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub user_id: UserId,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Owned for Post {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

impl Post {
    pub fn new(author: Author, text: PostText) -> Self {
        Self {
            post_id: PostId::new(),
            user_id: author.user_id,
            text: text.into_inner(),
            name: author.name,
            avatar: author.avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn is_liked_by(&self, user_id: &UserId) -> bool {
        self.likes.iter().any(|like| &like.user_id == user_id)
    }

    /// At most one like per user
    pub fn like(&mut self, user_id: UserId) -> PostResult<()> {
        if self.is_liked_by(&user_id) {
            return Err(PostError::AlreadyLiked);
        }
        self.likes.insert(
            0,
            Like {
                id: LikeId::new(),
                user_id,
            },
        );
        Ok(())
    }

    /// Removing a like that does not exist leaves the list unchanged
    pub fn unlike(&mut self, user_id: &UserId) -> PostResult<()> {
        let index = self
            .likes
            .iter()
            .position(|like| &like.user_id == user_id)
            .ok_or(PostError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    /// Remove one comment by its own id, only for its author
    pub fn remove_comment(&mut self, comment_id: &CommentId, actor: &UserId) -> PostResult<()> {
        let index = self
            .comments
            .iter()
            .position(|c| &c.id == comment_id)
            .ok_or(PostError::CommentNotFound)?;

        ensure_owner(&self.comments[index], actor)?;
        self.comments.remove(index);
        Ok(())
    }
}
