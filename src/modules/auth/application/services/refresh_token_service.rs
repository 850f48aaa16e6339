use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    RefreshTokenError, RefreshTokenUseCase,
};
use crate::auth::application::ports::outgoing::token_provider::REFRESH_TOKEN;
use crate::auth::application::ports::outgoing::{
    TokenError, TokenProvider, TokenRepository, TokenSubject, UserQuery,
};

use super::token_hasher::hash_token;

/// Exchanges a refresh token for an access token. Flags in the new token come
/// from the stored user, not from the refresh token's claims.
pub struct RefreshTokenService<Q, T>
where
    Q: UserQuery,
    T: TokenRepository,
{
    query: Q,
    blacklist: T,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, T> RefreshTokenService<Q, T>
where
    Q: UserQuery,
    T: TokenRepository,
{
    pub fn new(query: Q, blacklist: T, tokens: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            query,
            blacklist,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, T> RefreshTokenUseCase for RefreshTokenService<Q, T>
where
    Q: UserQuery,
    T: TokenRepository,
{
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshTokenError> {
        let claims = self.tokens.verify_token(refresh_token).map_err(|e| match e {
            TokenError::TokenExpired => RefreshTokenError::TokenExpired,
            _ => RefreshTokenError::InvalidToken,
        })?;

        if claims.token_type != REFRESH_TOKEN {
            return Err(RefreshTokenError::InvalidToken);
        }

        let revoked = self
            .blacklist
            .is_token_blacklisted(&hash_token(refresh_token))
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?;
        if revoked {
            tracing::warn!(user_id = %claims.sub, "Revoked refresh token presented");
            return Err(RefreshTokenError::TokenRevoked);
        }

        let user = self
            .query
            .find_by_id(claims.sub)
            .await
            .map_err(|e| RefreshTokenError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                tracing::warn!(user_id = %claims.sub, "Refresh token for missing account");
                RefreshTokenError::InvalidToken
            })?;

        self.tokens
            .generate_access_token(TokenSubject {
                user_id: user.id,
                is_verified: user.is_verified,
                is_staff: user.is_staff,
            })
            .map_err(|e| RefreshTokenError::TokenGenerationFailed(e.to_string()))
    }
}
