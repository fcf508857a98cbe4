//! GitHub Repos Use Case

use std::sync::Arc;

use crate::domain::repository::GithubGateway;
use crate::domain::value_object::github_username::GithubUsername;
use crate::error::{ProfileError, ProfileResult};

pub struct GithubReposUseCase<G: GithubGateway> {
    gateway: Arc<G>,
}

impl<G: GithubGateway> GithubReposUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// A name GitHub could never issue is answered as not found
    pub async fn execute(&self, username: &str) -> ProfileResult<serde_json::Value> {
        let username = GithubUsername::parse(username).ok_or(ProfileError::GithubNotFound)?;
        self.gateway.latest_repos(&username).await
    }
}
