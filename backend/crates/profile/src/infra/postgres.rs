//! PostgreSQL Repository Implementation
//!
//! Experience and education entries are JSONB arrays on the profile row.
//! Entry lookups use JSONB containment on the entry `id`.

use chrono::{DateTime, Utc};
use kernel::id::{EducationId, ExperienceId, ProfileId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::profile::{Education, Experience, Profile, ProfileDetails, Social};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

const SELECT_PROFILE: &str = r#"
    SELECT
        profile_id,
        user_id,
        company,
        website,
        location,
        status,
        skills,
        bio,
        github_username,
        social,
        experience,
        education,
        created_at
    FROM profiles
"#;

#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, clause: &str, bind: String) -> ProfileResult<Option<Profile>> {
        let sql = format!("{SELECT_PROFILE} WHERE {clause}");
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProfileRow::into_profile))
    }
}

impl ProfileRepository for PgProfileRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        let sql = format!("{SELECT_PROFILE} WHERE user_id = $1");
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn find_all(&self) -> ProfileResult<Vec<Profile>> {
        let sql = format!("{SELECT_PROFILE} ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, ProfileRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProfileRow::into_profile).collect())
    }

    async fn find_by_experience_id(&self, id: &ExperienceId) -> ProfileResult<Option<Profile>> {
        self.fetch_one_where(
            "experience @> jsonb_build_array(jsonb_build_object('id', $1::text))",
            id.to_string(),
        )
        .await
    }

    async fn find_by_education_id(&self, id: &EducationId) -> ProfileResult<Option<Profile>> {
        self.fetch_one_where(
            "education @> jsonb_build_array(jsonb_build_object('id', $1::text))",
            id.to_string(),
        )
        .await
    }

    async fn save(&self, profile: &Profile) -> ProfileResult<()> {
        let d = &profile.details;

        sqlx::query(
            r#"
            INSERT INTO profiles (
                profile_id,
                user_id,
                company,
                website,
                location,
                status,
                skills,
                bio,
                github_username,
                social,
                experience,
                education,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                company = EXCLUDED.company,
                website = EXCLUDED.website,
                location = EXCLUDED.location,
                status = EXCLUDED.status,
                skills = EXCLUDED.skills,
                bio = EXCLUDED.bio,
                github_username = EXCLUDED.github_username,
                social = EXCLUDED.social,
                experience = EXCLUDED.experience,
                education = EXCLUDED.education
            "#,
        )
        .bind(profile.profile_id.as_uuid())
        .bind(profile.user_id.as_uuid())
        .bind(&d.company)
        .bind(&d.website)
        .bind(&d.location)
        .bind(&d.status)
        .bind(&d.skills)
        .bind(&d.bio)
        .bind(&d.github_username)
        .bind(Json(&d.social))
        .bind(Json(&profile.experience))
        .bind(Json(&profile.education))
        .bind(profile.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> ProfileResult<bool> {
        let deleted = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    profile_id: Uuid,
    user_id: Uuid,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: String,
    skills: Vec<String>,
    bio: Option<String>,
    github_username: Option<String>,
    social: Json<Social>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    created_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            profile_id: ProfileId::from_uuid(self.profile_id),
            user_id: UserId::from_uuid(self.user_id),
            details: ProfileDetails {
                company: self.company,
                website: self.website,
                location: self.location,
                status: self.status,
                skills: self.skills,
                bio: self.bio,
                github_username: self.github_username,
                social: self.social.0,
            },
            experience: self.experience.0,
            education: self.education.0,
            created_at: self.created_at,
        }
    }
}
