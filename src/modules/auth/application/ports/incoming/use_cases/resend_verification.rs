use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResendVerificationError {
    #[error("User not found")]
    UserNotFound,

    #[error("User is already verified")]
    AlreadyVerified,

    #[error("Failed to send verification email: {0}")]
    EmailDeliveryFailed(String),

    #[error("Code store error: {0}")]
    CodeStoreError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Replace the pending code for an unverified account and mail it right away.
#[async_trait]
pub trait ResendVerificationUseCase: Send + Sync {
    /// `email` must already be normalized.
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError>;
}
