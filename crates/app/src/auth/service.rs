//! Auth providers.
//!
//! The storefront gate compares a code against a single configured literal.
//! It is a stand-in with no security value; a real credential check replaces
//! [`FixedCodeProvider`] behind the same trait.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{AuthError, Credentials, Principal};

/// Code accepted when none is configured.
pub const DEFAULT_ACCESS_CODE: &str = "1234";

#[derive(Debug, Clone)]
pub struct FixedCodeProvider {
    code: String,
}

impl FixedCodeProvider {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl Default for FixedCodeProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_CODE)
    }
}

#[async_trait]
impl AuthProvider for FixedCodeProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        if !credentials.is_complete() {
            return Err(AuthError::MissingCredentials);
        }

        if credentials.code != self.code {
            return Err(AuthError::AccessDenied);
        }

        Ok(Principal {
            identifier: credentials.identifier.trim().to_string(),
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Check the given credentials.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Principal, AuthError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn accepts_configured_code() -> TestResult {
        let provider = FixedCodeProvider::default();

        let principal = provider
            .authenticate(&Credentials::new(" specialist@vault ", "1234"))
            .await?;

        assert_eq!(principal.identifier, "specialist@vault");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_wrong_code() {
        let provider = FixedCodeProvider::new("9999");

        let result = provider
            .authenticate(&Credentials::new("specialist@vault", "1234"))
            .await;

        assert_eq!(result, Err(AuthError::AccessDenied));
    }

    #[tokio::test]
    async fn rejects_blank_fields() {
        let provider = FixedCodeProvider::default();

        let result = provider.authenticate(&Credentials::new("", "1234")).await;

        assert_eq!(result, Err(AuthError::MissingCredentials));
    }

    #[test]
    fn debug_output_hides_code() {
        let rendered = format!("{:?}", Credentials::new("a", "1234"));

        assert!(!rendered.contains("1234"));
    }
}
