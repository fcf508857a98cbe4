//! Application Layer

pub mod delete_account;
pub mod entries;
pub mod github_repos;
pub mod query;
pub mod upsert_profile;

pub use delete_account::DeleteAccountUseCase;
pub use entries::{EducationInput, EntriesUseCase, ExperienceInput};
pub use github_repos::GithubReposUseCase;
pub use query::{OwnerSummary, ProfileQueryUseCase, ProfileView};
pub use upsert_profile::{ProfileInput, UpsertProfileUseCase};
