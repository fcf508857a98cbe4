//! Like / Unlike Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::{Like, Post};
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

pub struct LikeUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> LikeUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Returns the updated likes
    pub async fn like(&self, actor: &UserId, post_id: &PostId) -> PostResult<Vec<Like>> {
        let mut post = self.load(post_id).await?;
        post.like(*actor)?;
        self.posts.save(&post).await?;

        tracing::debug!(post_id = %post_id, user_id = %actor, "Post liked");
        Ok(post.likes)
    }

    pub async fn unlike(&self, actor: &UserId, post_id: &PostId) -> PostResult<Vec<Like>> {
        let mut post = self.load(post_id).await?;
        post.unlike(actor)?;
        self.posts.save(&post).await?;

        tracing::debug!(post_id = %post_id, user_id = %actor, "Post unliked");
        Ok(post.likes)
    }

    async fn load(&self, post_id: &PostId) -> PostResult<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }
}
