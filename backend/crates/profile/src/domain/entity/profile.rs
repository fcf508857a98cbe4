//! Profile Entity
//!
//! One profile per user. Experience and education entries are embedded,
//! newest first, and owned through the profile.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{EducationId, ExperienceId, ProfileId, UserId};
use kernel::ownership::{Owned, ensure_owner};
use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// The user-editable scalar part of a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: Social,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: EducationId,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub profile_id: ProfileId,
    pub user_id: UserId,
    pub details: ProfileDetails,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
}

impl Owned for Profile {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

impl Profile {
    pub fn new(user_id: UserId, details: ProfileDetails) -> Self {
        Self {
            profile_id: ProfileId::new(),
            user_id,
            details,
            experience: Vec::new(),
            education: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Merge submitted details over the stored ones
    ///
    /// `status` and `skills` are always replaced, `social` is replaced as a
    /// whole, and an omitted optional field keeps its stored value.
    /// Sub-collections are kept.
    pub fn update(&mut self, details: ProfileDetails) {
        let current = &mut self.details;
        current.company = details.company.or(current.company.take());
        current.website = details.website.or(current.website.take());
        current.location = details.location.or(current.location.take());
        current.bio = details.bio.or(current.bio.take());
        current.github_username = details.github_username.or(current.github_username.take());
        current.status = details.status;
        current.skills = details.skills;
        current.social = details.social;
    }

    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    pub fn remove_experience(&mut self, id: &ExperienceId, actor: &UserId) -> ProfileResult<()> {
        ensure_owner(&*self, actor)?;
        let index = self
            .experience
            .iter()
            .position(|e| &e.id == id)
            .ok_or(ProfileError::ExperienceNotFound)?;
        self.experience.remove(index);
        Ok(())
    }

    pub fn remove_education(&mut self, id: &EducationId, actor: &UserId) -> ProfileResult<()> {
        ensure_owner(&*self, actor)?;
        let index = self
            .education
            .iter()
            .position(|e| &e.id == id)
            .ok_or(ProfileError::EducationNotFound)?;
        self.education.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    fn details() -> ProfileDetails {
        ProfileDetails {
            company: None,
            website: None,
            location: None,
            status: "Developer".to_string(),
            skills: vec!["Rust".to_string()],
            bio: None,
            github_username: None,
            social: Social::default(),
        }
    }

    fn experience(title: &str) -> Experience {
        Experience {
            id: ExperienceId::new(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        }
    }

    #[test]
    fn test_entries_prepend() {
        let mut profile = Profile::new(UserId::new(), details());
        profile.add_experience(experience("old"));
        profile.add_experience(experience("new"));
        assert_eq!(profile.experience[0].title, "new");
    }

    #[test]
    fn test_remove_by_entry_id() {
        let owner = UserId::new();
        let mut profile = Profile::new(owner, details());
        let keep = experience("keep");
        let drop = experience("drop");
        let drop_id = drop.id;
        profile.add_experience(keep);
        profile.add_experience(drop);

        profile.remove_experience(&drop_id, &owner).unwrap();
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "keep");
    }

    #[test]
    fn test_stranger_cannot_remove() {
        let mut profile = Profile::new(UserId::new(), details());
        let entry = experience("mine");
        let id = entry.id;
        profile.add_experience(entry);

        let err = profile.remove_experience(&id, &UserId::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_stranger_cannot_remove_education() {
        let mut profile = Profile::new(UserId::new(), details());
        let entry = Education {
            id: EducationId::new(),
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "CS".to_string(),
            from: NaiveDate::from_ymd_opt(2010, 9, 1).unwrap(),
            to: None,
            current: false,
            description: None,
        };
        let id = entry.id;
        profile.add_education(entry);

        let err = profile.remove_education(&id, &UserId::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(profile.education.len(), 1);
    }

    #[test]
    fn test_missing_entry_leaves_collection() {
        let owner = UserId::new();
        let mut profile = Profile::new(owner, details());
        profile.add_experience(experience("only"));

        let err = profile.remove_education(&EducationId::new(), &owner).unwrap_err();
        assert!(matches!(err, ProfileError::EducationNotFound));
        assert!(matches!(
            profile.remove_experience(&ExperienceId::new(), &owner),
            Err(ProfileError::ExperienceNotFound)
        ));
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_update_keeps_entries() {
        let mut profile = Profile::new(UserId::new(), details());
        profile.add_experience(experience("job"));
        profile.update(ProfileDetails {
            status: "Manager".to_string(),
            ..details()
        });
        assert_eq!(profile.details.status, "Manager");
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_update_merges_optional_fields() {
        let mut profile = Profile::new(
            UserId::new(),
            ProfileDetails {
                company: Some("Acme".to_string()),
                bio: Some("hi".to_string()),
                social: Social {
                    twitter: Some("@jane".to_string()),
                    ..Social::default()
                },
                ..details()
            },
        );

        profile.update(ProfileDetails {
            website: Some("https://jane.dev".to_string()),
            skills: vec!["Go".to_string()],
            ..details()
        });

        assert_eq!(profile.details.company.as_deref(), Some("Acme"));
        assert_eq!(profile.details.bio.as_deref(), Some("hi"));
        assert_eq!(profile.details.website.as_deref(), Some("https://jane.dev"));
        assert_eq!(profile.details.skills, vec!["Go"]);
        assert_eq!(profile.details.social, Social::default());
    }
}
