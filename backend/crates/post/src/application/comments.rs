//! Comment Use Case

use std::sync::Arc;

use auth::UserRepository;
use kernel::id::{CommentId, PostId, UserId};

use crate::application::author::load_author;
use crate::domain::entity::post::{Comment, Post};
use crate::domain::repository::PostRepository;
use crate::domain::value_object::text::PostText;
use crate::error::{PostError, PostResult};

pub struct CommentUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    posts: Arc<P>,
    users: Arc<U>,
}

impl<P, U> CommentUseCase<P, U>
where
    P: PostRepository,
    U: UserRepository,
{
    pub fn new(posts: Arc<P>, users: Arc<U>) -> Self {
        Self { posts, users }
    }

    /// Returns the updated comments, newest first
    pub async fn add(&self, actor: &UserId, post_id: &PostId, text: &str) -> PostResult<Vec<Comment>> {
        let text = PostText::new(text)?;
        let author = load_author(self.users.as_ref(), actor).await?;

        let mut post = self.load(post_id).await?;
        post.add_comment(Comment::new(author, text));
        self.posts.save(&post).await?;

        tracing::debug!(post_id = %post_id, user_id = %actor, "Comment added");
        Ok(post.comments)
    }

    pub async fn remove(
        &self,
        actor: &UserId,
        post_id: &PostId,
        comment_id: &CommentId,
    ) -> PostResult<Vec<Comment>> {
        let mut post = self.load(post_id).await?;
        post.remove_comment(comment_id, actor)?;
        self.posts.save(&post).await?;

        tracing::debug!(post_id = %post_id, comment_id = %comment_id, "Comment removed");
        Ok(post.comments)
    }

    async fn load(&self, post_id: &PostId) -> PostResult<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::NotFound)
    }
}
