use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    /// Not a refresh token, not decodable, expired, or issued to someone else.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LogoutUserUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, refresh_token: &str) -> Result<(), LogoutError>;
}
