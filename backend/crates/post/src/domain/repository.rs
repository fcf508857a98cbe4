//! Repository Traits

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::error::PostResult;

#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()>;

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    /// Newest first
    async fn find_all(&self) -> PostResult<Vec<Post>>;

    /// Overwrite the whole document, likes and comments included
    async fn save(&self, post: &Post) -> PostResult<()>;

    async fn delete(&self, post_id: &PostId) -> PostResult<bool>;

    /// Remove every post written by the user; returns how many went
    async fn delete_by_user_id(&self, user_id: &UserId) -> PostResult<u64>;
}
