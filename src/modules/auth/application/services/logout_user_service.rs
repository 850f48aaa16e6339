use async_trait::async_trait;
use chrono::DateTime;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{LogoutError, LogoutUserUseCase};
use crate::auth::application::ports::outgoing::token_provider::REFRESH_TOKEN;
use crate::auth::application::ports::outgoing::{
    TokenProvider, TokenRepository, TokenRepositoryError,
};

use super::token_hasher::hash_token;

pub struct LogoutUserService<T>
where
    T: TokenRepository,
{
    blacklist: T,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<T> LogoutUserService<T>
where
    T: TokenRepository,
{
    pub fn new(blacklist: T, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self { blacklist, tokens }
    }
}

#[async_trait]
impl<T> LogoutUserUseCase for LogoutUserService<T>
where
    T: TokenRepository,
{
    async fn execute(&self, caller: UserId, refresh_token: &str) -> Result<(), LogoutError> {
        let claims = self
            .tokens
            .verify_token(refresh_token)
            .map_err(|_| LogoutError::InvalidToken)?;

        if claims.token_type != REFRESH_TOKEN || claims.sub != caller.value() {
            tracing::warn!(user_id = %caller, "Logout with a foreign or non-refresh token");
            return Err(LogoutError::InvalidToken);
        }

        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(LogoutError::InvalidToken)?;

        match self
            .blacklist
            .blacklist_token(hash_token(refresh_token), claims.sub, expires_at)
            .await
        {
            // expired inside the validation leeway: nothing left to revoke
            Ok(()) | Err(TokenRepositoryError::InvalidToken) => {}
            Err(TokenRepositoryError::DatabaseError(msg)) => {
                return Err(LogoutError::RepositoryError(msg))
            }
        }

        tracing::info!(user_id = %caller, "User logged out");
        Ok(())
    }
}
