//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

/// Default bearer token lifetime (100 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(360_000);

/// Header carrying the bearer token
pub const DEFAULT_TOKEN_HEADER: &str = "x-auth-token";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for HS256 token signing
    pub jwt_secret: Vec<u8>,
    /// Token lifetime from issuance
    pub token_ttl: Duration,
    /// Request header checked before `Authorization: Bearer`
    pub token_header: String,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            token_ttl: DEFAULT_TOKEN_TTL,
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::new(platform::crypto::random_bytes(32))
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper;
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("token_header", &self.token_header)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::new("secret");
        assert_eq!(config.token_ttl.as_secs(), 360_000);
        assert_eq!(config.token_header, "x-auth-token");
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_development_secrets_differ() {
        assert_ne!(AuthConfig::development().jwt_secret, AuthConfig::development().jwt_secret);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig::new("hunter2").with_pepper(Some(b"pepper".to_vec()));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("112"));
        assert!(debug.contains("REDACTED"));
    }
}
