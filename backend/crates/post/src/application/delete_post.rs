//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};
use kernel::ownership::ensure_owner;

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

pub struct DeletePostUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> DeletePostUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    /// Existence is checked before ownership, so a stranger sees 404 for
    /// a missing post and 403 for someone else's
    pub async fn execute(&self, actor: &UserId, post_id: &PostId) -> PostResult<()> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)?;

        ensure_owner(&post, actor)?;

        if !self.posts.delete(post_id).await? {
            return Err(PostError::NotFound);
        }

        tracing::info!(post_id = %post_id, user_id = %actor, "Post removed");

        Ok(())
    }
}
