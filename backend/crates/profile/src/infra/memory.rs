//! In-Memory Repository

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{EducationId, ExperienceId, UserId};
use tokio::sync::Mutex;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// Keyed by owner, like the unique `profiles.user_id` index
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<Mutex<HashMap<UserId, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        Ok(self.profiles.lock().await.get(user_id).cloned())
    }

    async fn find_all(&self) -> ProfileResult<Vec<Profile>> {
        let mut all: Vec<Profile> = self.profiles.lock().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_experience_id(&self, id: &ExperienceId) -> ProfileResult<Option<Profile>> {
        let profiles = self.profiles.lock().await;
        Ok(profiles
            .values()
            .find(|p| p.experience.iter().any(|e| &e.id == id))
            .cloned())
    }

    async fn find_by_education_id(&self, id: &EducationId) -> ProfileResult<Option<Profile>> {
        let profiles = self.profiles.lock().await;
        Ok(profiles
            .values()
            .find(|p| p.education.iter().any(|e| &e.id == id))
            .cloned())
    }

    async fn save(&self, profile: &Profile) -> ProfileResult<()> {
        let mut profiles = self.profiles.lock().await;
        match profiles.get_mut(&profile.user_id) {
            // Upsert keeps the original identity and creation time
            Some(stored) => {
                stored.details = profile.details.clone();
                stored.experience = profile.experience.clone();
                stored.education = profile.education.clone();
            }
            None => {
                profiles.insert(profile.user_id, profile.clone());
            }
        }
        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> ProfileResult<bool> {
        Ok(self.profiles.lock().await.remove(user_id).is_some())
    }
}
