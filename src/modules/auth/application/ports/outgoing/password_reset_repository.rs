use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PasswordResetRepositoryError {
    /// Unknown, already used or expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PasswordResetRepository: Send + Sync {
    async fn create_token(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), PasswordResetRepositoryError>;

    /// Atomically consume the token and set the owner's password.
    ///
    /// The token row is deleted in the same transaction as the password update,
    /// so a token can be redeemed at most once.
    async fn redeem_token(
        &self,
        token_hash: &str,
        new_password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<Uuid, PasswordResetRepositoryError>;
}
