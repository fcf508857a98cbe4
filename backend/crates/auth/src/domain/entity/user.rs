//! User Entity
//!
//! A registered account. The password hash never leaves the crate in a
//! response: presentation maps users through `UserResponse`.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::UserPassword,
};

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub name: DisplayName,
    /// Unique, canonical (lowercased)
    pub email: Email,
    pub password_hash: UserPassword,
    /// Gravatar URL derived from the email at registration
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user, deriving the avatar from the email
    pub fn new(name: DisplayName, email: Email, password_hash: UserPassword) -> Self {
        let avatar = platform::crypto::avatar_url(email.as_str());

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            avatar,
            created_at: Utc::now(),
        }
    }
}
