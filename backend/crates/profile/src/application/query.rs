//! Profile Query Use Case
//!
//! Profiles are returned with a summary of their owning user.

use std::collections::HashMap;
use std::sync::Arc;

use auth::UserRepository;
use kernel::id::UserId;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// Name and avatar of the profile owner
#[derive(Debug, Clone)]
pub struct OwnerSummary {
    pub user_id: UserId,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub owner: OwnerSummary,
}

pub struct ProfileQueryUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    profiles: Arc<P>,
    users: Arc<U>,
}

impl<P, U> ProfileQueryUseCase<P, U>
where
    P: ProfileRepository,
    U: UserRepository,
{
    pub fn new(profiles: Arc<P>, users: Arc<U>) -> Self {
        Self { profiles, users }
    }

    /// The caller's own profile
    pub async fn me(&self, user_id: &UserId) -> ProfileResult<ProfileView> {
        let profile = self
            .profiles
            .find_by_user_id(user_id)
            .await?
            .ok_or(ProfileError::NoProfile)?;
        self.view(profile).await
    }

    pub async fn by_user(&self, user_id: &UserId) -> ProfileResult<ProfileView> {
        let profile = self
            .profiles
            .find_by_user_id(user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;
        self.view(profile).await
    }

    /// Every profile whose owner still exists
    pub async fn all(&self) -> ProfileResult<Vec<ProfileView>> {
        let profiles = self.profiles.find_all().await?;
        let ids: Vec<UserId> = profiles.iter().map(|p| p.user_id).collect();

        let owners: HashMap<UserId, OwnerSummary> = self
            .users
            .find_many(&ids)
            .await?
            .into_iter()
            .map(|u| {
                let summary = OwnerSummary {
                    user_id: u.user_id,
                    name: u.name.into_inner(),
                    avatar: u.avatar,
                };
                (summary.user_id, summary)
            })
            .collect();

        Ok(profiles
            .into_iter()
            .filter_map(|profile| {
                let owner = owners.get(&profile.user_id)?.clone();
                Some(ProfileView { profile, owner })
            })
            .collect())
    }

    /// Attach the owner summary to a loaded profile
    pub async fn view(&self, profile: Profile) -> ProfileResult<ProfileView> {
        let user = self
            .users
            .find_by_id(&profile.user_id)
            .await?
            .ok_or(ProfileError::ProfileNotFound)?;

        Ok(ProfileView {
            owner: OwnerSummary {
                user_id: user.user_id,
                name: user.name.into_inner(),
                avatar: user.avatar,
            },
            profile,
        })
    }
}
