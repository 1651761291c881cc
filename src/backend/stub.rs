//! In-process stand-in for the account service
//!
//! Every call succeeds. Calls are only logged, nothing is stored.

use super::traits::{AccountId, AccountRole, AuthBackend, AuthError, Session, SignupProfile};
use async_trait::async_trait;
use uuid::Uuid;

/// Backend that accepts everything that passed client-side validation
#[derive(Debug, Default, Clone)]
pub struct StubBackend;

impl StubBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthBackend for StubBackend {
    async fn submit_credentials(
        &self,
        role: AccountRole,
        email: &str,
        _password: &str,
    ) -> Result<Session, AuthError> {
        tracing::info!(role = role.label(), email, "Simulated sign-in accepted");
        Ok(Session {
            token: Uuid::new_v4(),
            role,
            email: email.to_string(),
        })
    }

    async fn submit_signup(&self, profile: SignupProfile) -> Result<AccountId, AuthError> {
        let id = AccountId(Uuid::new_v4());
        tracing::info!(
            role = profile.role.label(),
            email = %profile.email,
            account_id = %id,
            "Simulated signup accepted"
        );
        Ok(id)
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        tracing::info!(email, "Simulated password reset link sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_always_accepted() {
        let backend = StubBackend::new();
        let session = tokio_test::block_on(backend.submit_credentials(
            AccountRole::Developer,
            "dev@test.com",
            "secret1",
        ))
        .unwrap();
        assert_eq!(session.role, AccountRole::Developer);
        assert_eq!(session.email, "dev@test.com");
    }

    #[test]
    fn test_sessions_get_distinct_tokens() {
        let backend = StubBackend::new();
        let a = tokio_test::block_on(backend.submit_credentials(
            AccountRole::Client,
            "a@b.c",
            "secret1",
        ))
        .unwrap();
        let b = tokio_test::block_on(backend.submit_credentials(
            AccountRole::Client,
            "a@b.c",
            "secret1",
        ))
        .unwrap();
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_signup_returns_account_id() {
        let backend = StubBackend::new();
        let profile = SignupProfile {
            role: AccountRole::Developer,
            full_name: "Dev".to_string(),
            email: "dev@test.com".to_string(),
            password: "secret1".to_string(),
            tech_stack: Some("Rust".to_string()),
            github_url: None,
            linkedin_url: None,
            company: None,
        };
        let id = tokio_test::block_on(backend.submit_signup(profile));
        assert!(id.is_ok());
    }

    #[test]
    fn test_password_reset_succeeds() {
        let backend = StubBackend::new();
        let result = tokio_test::block_on(backend.request_password_reset("dev@test.com"));
        assert_eq!(result, Ok(()));
    }
}
