use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    LoginCommand, LoginError, LoginResult, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, TokenSubject, UserQuery,
};

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        query: Q,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        let user = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        // Unverified accounts may sign in; the flag travels in the token.
        let subject = TokenSubject {
            user_id: user.id,
            is_verified: user.is_verified,
            is_staff: user.is_staff,
        };

        let access_token = self
            .tokens
            .generate_access_token(subject)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(subject)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResult {
            access_token,
            refresh_token,
            user: user.to_account_view(),
        })
    }
}
