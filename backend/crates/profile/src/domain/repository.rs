//! Repository and Gateway Traits

use kernel::id::{EducationId, ExperienceId, UserId};

use crate::domain::entity::profile::Profile;
use crate::domain::value_object::github_username::GithubUsername;
use crate::error::ProfileResult;

#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> ProfileResult<Option<Profile>>;

    async fn find_all(&self) -> ProfileResult<Vec<Profile>>;

    /// Profile embedding the experience entry, whoever owns it
    async fn find_by_experience_id(&self, id: &ExperienceId) -> ProfileResult<Option<Profile>>;

    async fn find_by_education_id(&self, id: &EducationId) -> ProfileResult<Option<Profile>>;

    /// Insert, or overwrite the user's existing profile document
    async fn save(&self, profile: &Profile) -> ProfileResult<()>;

    async fn delete_by_user_id(&self, user_id: &UserId) -> ProfileResult<bool>;
}

/// Read-only view of a user's public GitHub repositories
#[trait_variant::make(GithubGateway: Send)]
pub trait LocalGithubGateway {
    /// Latest repositories as returned by GitHub; unknown user is `GithubNotFound`
    async fn latest_repos(&self, username: &GithubUsername) -> ProfileResult<serde_json::Value>;
}
