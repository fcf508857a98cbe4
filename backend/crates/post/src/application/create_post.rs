//! Create Post Use Case

use std::sync::Arc;

use auth::UserRepository;
use kernel::id::UserId;

use crate::application::author::load_author;
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::text::PostText;
use crate::error::PostResult;

pub struct CreatePostUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    posts: Arc<P>,
    users: Arc<U>,
}

impl<P, U> CreatePostUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    pub async fn execute(&self, user_id: &UserId, text: &str) -> PostResult<Post> {
        let text = PostText::new(text)?;
        let author = load_author(self.users.as_ref(), user_id).await?;

        let post = Post::new(author, text);
        self.posts.create(&post).await?;

        tracing::info!(post_id = %post.post_id, user_id = %user_id, "Post created");

        Ok(post)
    }
}
