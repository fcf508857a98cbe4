//! Experience / Education Use Case
//!
//! Adding goes to the caller's own profile. Removing looks the entry up
//! wherever it is, so a stranger gets 403 rather than a silent no-op.

use std::sync::Arc;

use chrono::NaiveDate;
use kernel::id::{EducationId, ExperienceId, UserId};
use kernel::validation::FieldErrors;

use crate::domain::entity::profile::{Education, Experience, Profile};
use crate::domain::repository::ProfileRepository;
use crate::domain::value_object::fields::{optional_text, parse_date};
use crate::error::{ProfileError, ProfileResult};

#[derive(Debug, Default)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Default)]
pub struct EducationInput {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

/// Validate the `from`/`to` pair; `to` is dropped for a current entry
fn check_period(
    errors: &mut FieldErrors,
    from: &str,
    to: Option<String>,
    current: bool,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    let from_date = if from.trim().is_empty() {
        errors.push("from", "From date is required");
        None
    } else {
        let parsed = parse_date(from);
        errors.check(parsed.is_some(), "from", "Please enter a valid from date");
        parsed
    };

    let to_date = match optional_text(to) {
        Some(raw) if !current => {
            let parsed = parse_date(&raw);
            errors.check(parsed.is_some(), "to", "Please enter a valid to date");
            parsed
        }
        _ => None,
    };

    (from_date, to_date)
}

impl ExperienceInput {
    fn into_entry(self) -> ProfileResult<Experience> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title, "Title is required");
        errors.require("company", &self.company, "Company is required");
        let (from, to) = check_period(&mut errors, &self.from, self.to, self.current);
        errors.into_result()?;

        let from = from.ok_or_else(|| ProfileError::Internal("validated date missing".into()))?;

        Ok(Experience {
            id: ExperienceId::new(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: optional_text(self.location),
            from,
            to,
            current: self.current,
            description: optional_text(self.description),
        })
    }
}

impl EducationInput {
    fn into_entry(self) -> ProfileResult<Education> {
        let mut errors = FieldErrors::new();
        errors.require("school", &self.school, "School is required");
        errors.require("degree", &self.degree, "Degree is required");
        errors.require("fieldofstudy", &self.field_of_study, "Field of study is required");
        let (from, to) = check_period(&mut errors, &self.from, self.to, self.current);
        errors.into_result()?;

        let from = from.ok_or_else(|| ProfileError::Internal("validated date missing".into()))?;

        Ok(Education {
            id: EducationId::new(),
            school: self.school.trim().to_string(),
            degree: self.degree.trim().to_string(),
            field_of_study: self.field_of_study.trim().to_string(),
            from,
            to,
            current: self.current,
            description: optional_text(self.description),
        })
    }
}

pub struct EntriesUseCase<P: ProfileRepository> {
    profiles: Arc<P>,
}

impl<P: ProfileRepository> EntriesUseCase<P> {
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }

    pub async fn add_experience(&self, actor: &UserId, input: ExperienceInput) -> ProfileResult<Profile> {
        let entry = input.into_entry()?;
        let mut profile = self.own_profile(actor).await?;
        profile.add_experience(entry);
        self.profiles.save(&profile).await?;

        tracing::debug!(user_id = %actor, "Experience added");
        Ok(profile)
    }

    pub async fn remove_experience(&self, actor: &UserId, id: &ExperienceId) -> ProfileResult<Profile> {
        let mut profile = self
            .profiles
            .find_by_experience_id(id)
            .await?
            .ok_or(ProfileError::ExperienceNotFound)?;

        profile.remove_experience(id, actor)?;
        self.profiles.save(&profile).await?;

        tracing::debug!(user_id = %actor, experience_id = %id, "Experience removed");
        Ok(profile)
    }

    pub async fn add_education(&self, actor: &UserId, input: EducationInput) -> ProfileResult<Profile> {
        let entry = input.into_entry()?;
        let mut profile = self.own_profile(actor).await?;
        profile.add_education(entry);
        self.profiles.save(&profile).await?;

        tracing::debug!(user_id = %actor, "Education added");
        Ok(profile)
    }

    pub async fn remove_education(&self, actor: &UserId, id: &EducationId) -> ProfileResult<Profile> {
        let mut profile = self
            .profiles
            .find_by_education_id(id)
            .await?
            .ok_or(ProfileError::EducationNotFound)?;

        profile.remove_education(id, actor)?;
        self.profiles.save(&profile).await?;

        tracing::debug!(user_id = %actor, education_id = %id, "Education removed");
        Ok(profile)
    }

    async fn own_profile(&self, actor: &UserId) -> ProfileResult<Profile> {
        self.profiles
            .find_by_user_id(actor)
            .await?
            .ok_or(ProfileError::NoProfile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_of(err: ProfileError) -> Vec<String> {
        err.into_app_error()
            .field_errors()
            .iter()
            .map(|e| e.field.clone())
            .collect()
    }

    #[test]
    fn test_experience_requires_title_company_from() {
        let err = ExperienceInput::default().into_entry().unwrap_err();
        assert_eq!(fields_of(err), vec!["title", "company", "from"]);
    }

    #[test]
    fn test_from_must_be_iso_date() {
        let err = ExperienceInput {
            title: "Dev".into(),
            company: "Acme".into(),
            from: "01/02/2020".into(),
            ..Default::default()
        }
        .into_entry()
        .unwrap_err();
        assert_eq!(fields_of(err), vec!["from"]);
    }

    #[test]
    fn test_current_drops_to() {
        let entry = ExperienceInput {
            title: "Dev".into(),
            company: "Acme".into(),
            from: "2020-01-01".into(),
            to: Some("2021-01-01".into()),
            current: true,
            ..Default::default()
        }
        .into_entry()
        .unwrap();
        assert_eq!(entry.to, None);
        assert_eq!(entry.from, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn test_education_requires_fields() {
        let err = EducationInput {
            from: "2020-01-01".into(),
            ..Default::default()
        }
        .into_entry()
        .unwrap_err();
        assert_eq!(fields_of(err), vec!["school", "degree", "fieldofstudy"]);
    }

    #[test]
    fn test_bad_to_date() {
        let err = EducationInput {
            school: "MIT".into(),
            degree: "BSc".into(),
            field_of_study: "CS".into(),
            from: "2020-01-01".into(),
            to: Some("someday".into()),
            ..Default::default()
        }
        .into_entry()
        .unwrap_err();
        assert_eq!(fields_of(err), vec!["to"]);
    }
}
