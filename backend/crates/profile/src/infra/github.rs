//! GitHub REST Client
//!
//! Lists a user's most recent public repositories through the GitHub API.
//! Application credentials are optional and only raise the rate limit.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::domain::repository::GithubGateway;
use crate::domain::value_object::github_username::GithubUsername;
use crate::error::{ProfileError, ProfileResult};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const REPO_LIMIT: u8 = 5;

#[derive(Clone)]
pub struct GithubConfig {
    pub base_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl GithubConfig {
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            base_url: DEFAULT_GITHUB_API_URL.to_string(),
            client_id,
            client_secret,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn repos_url(&self, username: &GithubUsername) -> String {
        format!(
            "{}/users/{}/repos?per_page={}&sort=created:asc",
            self.base_url.trim_end_matches('/'),
            username,
            REPO_LIMIT
        )
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> ProfileResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProfileError::Internal(format!("GitHub client: {e}")))?;

        Ok(Self { http, config })
    }
}

impl GithubGateway for GithubClient {
    async fn latest_repos(&self, username: &GithubUsername) -> ProfileResult<serde_json::Value> {
        let mut request = self
            .http
            .get(self.config.repos_url(username))
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");

        if let (Some(id), Some(secret)) = (&self.config.client_id, &self.config.client_secret) {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProfileError::Upstream(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(ProfileError::GithubNotFound),
            status => return Err(ProfileError::Upstream(format!("status {status}"))),
        }

        let repos = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ProfileError::Upstream(e.to_string()))?;

        tracing::debug!(username = %username, "Fetched GitHub repositories");

        Ok(repos)
    }
}
