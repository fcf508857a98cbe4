//! Create / Update Profile Use Case

use std::sync::Arc;

use kernel::id::UserId;
use kernel::validation::FieldErrors;

use crate::domain::entity::profile::{Profile, ProfileDetails, Social};
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::fields::{optional_text, split_skills};
use crate::error::ProfileResult;

#[derive(Debug, Default)]
pub struct ProfileInput {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    /// Raw entries, each may itself be comma separated
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl ProfileInput {
    fn into_details(self) -> ProfileResult<ProfileDetails> {
        let skills = split_skills(&self.skills);

        let mut errors = FieldErrors::new();
        errors.require("status", &self.status, "Status is required");
        errors.check(!skills.is_empty(), "skills", "Skills is required");
        errors.into_result()?;

        Ok(ProfileDetails {
            company: optional_text(self.company),
            website: optional_text(self.website),
            location: optional_text(self.location),
            status: self.status.trim().to_string(),
            skills,
            bio: optional_text(self.bio),
            github_username: optional_text(self.github_username),
            social: Social {
                youtube: optional_text(self.youtube),
                twitter: optional_text(self.twitter),
                facebook: optional_text(self.facebook),
                linkedin: optional_text(self.linkedin),
                instagram: optional_text(self.instagram),
            },
        })
    }
}

pub struct UpsertProfileUseCase<P: ProfileRepository> {
    profiles: Arc<P>,
}

impl<P: ProfileRepository> UpsertProfileUseCase<P> {
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }

    /// Submitted fields are merged over an existing profile; entries are untouched
    pub async fn execute(&self, user_id: &UserId, input: ProfileInput) -> ProfileResult<Profile> {
        let details = input.into_details()?;

        let profile = match self.profiles.find_by_user_id(user_id).await? {
            Some(mut existing) => {
                existing.update(details);
                tracing::info!(user_id = %user_id, "Profile updated");
                existing
            }
            None => {
                tracing::info!(user_id = %user_id, "Profile created");
                Profile::new(*user_id, details)
            }
        };

        self.profiles.save(&profile).await?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_status_and_skills() {
        let err = ProfileInput {
            skills: vec![" , ".to_string()],
            ..Default::default()
        }
        .into_details()
        .unwrap_err();

        let app = err.into_app_error();
        let fields: Vec<&str> = app.field_errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["status", "skills"]);
    }

    #[test]
    fn test_normalizes_fields() {
        let details = ProfileInput {
            company: Some("  Acme  ".to_string()),
            website: Some("".to_string()),
            status: " Developer ".to_string(),
            skills: vec!["Rust,  SQL".to_string()],
            twitter: Some(" @acme ".to_string()),
            ..Default::default()
        }
        .into_details()
        .unwrap();

        assert_eq!(details.company.as_deref(), Some("Acme"));
        assert_eq!(details.website, None);
        assert_eq!(details.status, "Developer");
        assert_eq!(details.skills, vec!["Rust", "SQL"]);
        assert_eq!(details.social.twitter.as_deref(), Some("@acme"));
        assert_eq!(details.social.youtube, None);
    }
}
