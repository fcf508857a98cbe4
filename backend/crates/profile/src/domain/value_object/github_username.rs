//! GitHub Username Value Object
//!
//! Interpolated into the GitHub API path, so only the characters GitHub
//! itself allows get through.

use std::fmt;

const MAX_LENGTH: usize = 39;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubUsername(String);

impl GithubUsername {
    /// `None` when the name cannot exist on GitHub
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim();
        let valid = !name.is_empty()
            && name.len() <= MAX_LENGTH
            && !name.starts_with('-')
            && !name.ends_with('-')
            && !name.contains("--")
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

        valid.then(|| Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GithubUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_github_names() {
        assert!(GithubUsername::parse("octocat").is_some());
        assert!(GithubUsername::parse("my-name-42").is_some());
    }

    #[test]
    fn test_rejects_path_tricks() {
        for bad in ["", "../orgs", "a/b", "-lead", "trail-", "dou--ble", "名前"] {
            assert!(GithubUsername::parse(bad).is_none(), "{bad}");
        }
        assert!(GithubUsername::parse(&"a".repeat(40)).is_none());
    }
}
