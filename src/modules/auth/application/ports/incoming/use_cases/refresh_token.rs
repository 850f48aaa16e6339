use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Refresh token has expired")]
    TokenExpired,

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Token repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    /// Returns a new access token.
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError>;
}
