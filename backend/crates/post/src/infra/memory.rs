//! In-Memory Repository

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{PostId, UserId};
use tokio::sync::Mutex;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<Mutex<HashMap<PostId, Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        self.posts.lock().await.insert(post.post_id, post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        Ok(self.posts.lock().await.get(post_id).cloned())
    }

    async fn find_all(&self) -> PostResult<Vec<Post>> {
        let mut posts: Vec<Post> = self.posts.lock().await.values().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn save(&self, post: &Post) -> PostResult<()> {
        let mut posts = self.posts.lock().await;
        if let Some(stored) = posts.get_mut(&post.post_id) {
            *stored = post.clone();
        }
        Ok(())
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        Ok(self.posts.lock().await.remove(post_id).is_some())
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> PostResult<u64> {
        let mut posts = self.posts.lock().await;
        let before = posts.len();
        posts.retain(|_, post| &post.user_id != user_id);
        Ok((before - posts.len()) as u64)
    }
}
