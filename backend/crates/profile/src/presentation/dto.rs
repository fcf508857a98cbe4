//! API DTOs
//!
//! Field names match the JSON documents clients send and read:
//! `_id`, `user`, `githubusername`, `fieldofstudy`.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{EducationId, ExperienceId, ProfileId, UserId};
use serde::{Deserialize, Serialize};

use crate::application::{EducationInput, ExperienceInput, OwnerSummary, ProfileInput, ProfileView};
use crate::domain::entity::profile::{Education, Experience, Social};

/// `skills` arrives either as `"rust, go"` or as `["rust", "go"]`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SkillsField {
    Csv(String),
    List(Vec<String>),
}

impl Default for SkillsField {
    fn default() -> Self {
        SkillsField::List(Vec::new())
    }
}

impl SkillsField {
    fn into_entries(self) -> Vec<String> {
        match self {
            SkillsField::Csv(s) => vec![s],
            SkillsField::List(list) => list,
        }
    }
}

/// POST /api/profile
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: SkillsField,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl From<ProfileRequest> for ProfileInput {
    fn from(req: ProfileRequest) -> Self {
        Self {
            company: req.company,
            website: req.website,
            location: req.location,
            status: req.status,
            skills: req.skills.into_entries(),
            bio: req.bio,
            github_username: req.githubusername,
            youtube: req.youtube,
            twitter: req.twitter,
            facebook: req.facebook,
            linkedin: req.linkedin,
            instagram: req.instagram,
        }
    }
}

/// PUT /api/profile/experience
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<ExperienceRequest> for ExperienceInput {
    fn from(req: ExperienceRequest) -> Self {
        Self {
            title: req.title,
            company: req.company,
            location: req.location,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

/// PUT /api/profile/education
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationRequest {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<EducationRequest> for EducationInput {
    fn from(req: EducationRequest) -> Self {
        Self {
            school: req.school,
            degree: req.degree,
            field_of_study: req.fieldofstudy,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OwnerResponse {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub avatar: String,
}

impl From<OwnerSummary> for OwnerResponse {
    fn from(owner: OwnerSummary) -> Self {
        Self {
            id: owner.user_id,
            name: owner.name,
            avatar: owner.avatar,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceResponse {
    #[serde(rename = "_id")]
    pub id: ExperienceId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Experience> for ExperienceResponse {
    fn from(e: Experience) -> Self {
        Self {
            id: e.id,
            title: e.title,
            company: e.company,
            location: e.location,
            from: e.from,
            to: e.to,
            current: e.current,
            description: e.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationResponse {
    #[serde(rename = "_id")]
    pub id: EducationId,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Education> for EducationResponse {
    fn from(e: Education) -> Self {
        Self {
            id: e.id,
            school: e.school,
            degree: e.degree,
            fieldofstudy: e.field_of_study,
            from: e.from,
            to: e.to,
            current: e.current,
            description: e.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(rename = "_id")]
    pub id: ProfileId,
    pub user: OwnerResponse,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Social,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub date: DateTime<Utc>,
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        let ProfileView { profile, owner } = view;
        let d = profile.details;

        Self {
            id: profile.profile_id,
            user: owner.into(),
            company: d.company,
            website: d.website,
            location: d.location,
            status: d.status,
            skills: d.skills,
            bio: d.bio,
            githubusername: d.github_username,
            social: d.social,
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
            date: profile.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub msg: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_accepts_csv_and_list() {
        let csv: ProfileRequest = serde_json::from_str(r#"{"skills":"rust, go"}"#).unwrap();
        assert_eq!(ProfileInput::from(csv).skills, vec!["rust, go".to_string()]);

        let list: ProfileRequest = serde_json::from_str(r#"{"skills":["rust","go"]}"#).unwrap();
        assert_eq!(ProfileInput::from(list).skills.len(), 2);
    }

    #[test]
    fn test_missing_fields_default() {
        let req: EducationRequest = serde_json::from_str("{}").unwrap();
        assert!(req.school.is_empty());
        assert!(!req.current);
    }
}
