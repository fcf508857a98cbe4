//! Author snapshot lookup shared by the writing use cases

use auth::UserRepository;
use kernel::id::UserId;

use crate::domain::entity::post::Author;
use crate::error::{PostError, PostResult};

/// Copy the current name and avatar of the acting user
pub(crate) async fn load_author<U: UserRepository>(users: &U, user_id: &UserId) -> PostResult<Author> {
    let user = users
        .find_by_id(user_id)
        .await?
        .ok_or(PostError::AuthorNotFound)?;

    Ok(Author {
        user_id: user.user_id,
        name: user.name.into_inner(),
        avatar: user.avatar,
    })
}
