use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerificationCodeStoreError {
    #[error("Store error: {0}")]
    StoreError(String),
}

/// Short-lived one-time codes keyed by email.
#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    /// Store (or replace) the code for `email`, expiring after `ttl`.
    async fn store_code(
        &self,
        email: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<(), VerificationCodeStoreError>;

    /// `None` once the code has expired or was never issued.
    async fn get_code(&self, email: &str) -> Result<Option<String>, VerificationCodeStoreError>;

    async fn delete_code(&self, email: &str) -> Result<(), VerificationCodeStoreError>;
}
