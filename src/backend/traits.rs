//! Trait abstraction for the account backend to enable mocking in tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Which side of the marketplace an account belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Developer,
    Client,
}

impl AccountRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Client => "client",
        }
    }
}

/// Identifier handed out for a new account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Signed-in session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Uuid,
    pub role: AccountRole,
    pub email: String,
}

/// Everything a signup form collects
#[derive(Clone, PartialEq, Eq)]
pub struct SignupProfile {
    pub role: AccountRole,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub tech_stack: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub company: Option<String>,
}

// Password stays out of Debug output so profiles can be logged.
impl fmt::Debug for SignupProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupProfile")
            .field("role", &self.role)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("tech_stack", &self.tech_stack)
            .field("github_url", &self.github_url)
            .field("linkedin_url", &self.linkedin_url)
            .field("company", &self.company)
            .finish()
    }
}

/// Errors a real account backend could report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Credentials were rejected")]
    Rejected,
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },
    #[error("Account service unavailable: {0}")]
    Unavailable(String),
}

/// Trait for account backend operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a session
    async fn submit_credentials(
        &self,
        role: AccountRole,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError>;

    /// Create a new account
    async fn submit_signup(&self, profile: SignupProfile) -> Result<AccountId, AuthError>;

    /// Send a password reset link
    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SignupProfile {
        SignupProfile {
            role: AccountRole::Client,
            full_name: "Ada".to_string(),
            email: "ada@client.io".to_string(),
            password: "hunter22".to_string(),
            tech_stack: None,
            github_url: None,
            linkedin_url: None,
            company: Some("Analytical Engines".to_string()),
        }
    }

    #[test]
    fn test_profile_debug_redacts_password() {
        let debug_str = format!("{:?}", profile());
        assert!(!debug_str.contains("hunter22"));
        assert!(debug_str.contains("<redacted>"));
        assert!(debug_str.contains("ada@client.io"));
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::Rejected.to_string(), "Credentials were rejected");
        assert_eq!(
            AuthError::Validation {
                field: "email".to_string(),
                message: "taken".to_string()
            }
            .to_string(),
            "Invalid email: taken"
        );
        assert_eq!(
            AuthError::Unavailable("timeout".to_string()).to_string(),
            "Account service unavailable: timeout"
        );
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&AccountRole::Developer).unwrap();
        assert_eq!(json, "\"developer\"");
    }

    #[tokio::test]
    async fn test_mock_backend_can_reject() {
        let mut mock = MockAuthBackend::new();
        mock.expect_submit_credentials()
            .returning(|_, _, _| Err(AuthError::Rejected));
        let result = mock
            .submit_credentials(AccountRole::Client, "a@b.c", "secret1")
            .await;
        assert_eq!(result, Err(AuthError::Rejected));
    }
}
