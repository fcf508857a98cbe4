//! Delete Account Use Case
//!
//! Removes the caller's posts, profile and user record, in that order.
//! Likes and comments left on other users' posts stay.

use std::sync::Arc;

use auth::UserRepository;
use kernel::id::UserId;
use post::PostRepository;

use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

pub struct DeleteAccountUseCase<P, U, Q>
where
    P: ProfileRepository,
    U: UserRepository,
    Q: PostRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
    posts: Arc<Q>,
}

impl<P, U, Q> DeleteAccountUseCase<P, U, Q>
where
    P: ProfileRepository,
    U: UserRepository,
    Q: PostRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>, posts: Arc<Q>) -> Self {
        Self {
            profiles,
            users,
            posts,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> ProfileResult<()> {
        let posts_deleted = self.posts.delete_by_user_id(user_id).await?;
        let profile_deleted = self.profiles.delete_by_user_id(user_id).await?;
        let user_deleted = self.users.delete(user_id).await?;

        tracing::info!(
            user_id = %user_id,
            posts_deleted,
            profile_deleted,
            user_deleted,
            "Account deleted"
        );

        Ok(())
    }
}
