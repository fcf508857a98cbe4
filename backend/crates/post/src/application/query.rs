//! Post Query Use Case

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

pub struct PostQueryUseCase<P: PostRepository> {
    posts: Arc<P>,
}

impl<P: PostRepository> PostQueryUseCase<P> {
    pub fn new(posts: Arc<P>) -> Self {
        Self { posts }
    }

    pub async fn list(&self) -> PostResult<Vec<Post>> {
        self.posts.find_all().await
    }

    pub async fn get(&self, post_id: &PostId) -> PostResult<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }
}
