//! Register Use Case
//!
//! Creates a new user account and signs a token for it.

use std::sync::Arc;

use kernel::id::UserId;
use kernel::validation::FieldErrors;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterOutput {
    pub user_id: UserId,
    pub token: String,
}

pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let name = DisplayName::new(&input.name);
        let email = Email::new(&input.email);
        let password = RawPassword::new(input.password);

        // Report every rejected field at once, then stop
        let mut errors = FieldErrors::new();
        for (field, result) in [
            ("name", name.as_ref().err()),
            ("email", email.as_ref().err()),
            ("password", password.as_ref().err()),
        ] {
            if let Some(e) = result {
                errors.push(field, e.message());
            }
        }
        errors.into_result()?;

        let (name, email, password) = (name?, email?, password?);

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&password, self.config.pepper())?;
        let user = User::new(name, email, password_hash);

        // The unique index still guards a concurrent registration with the same email
        self.user_repo.create(&user).await?;

        let token = self.tokens.issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
            token,
        })
    }
}
