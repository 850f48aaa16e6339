use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    ConfirmPasswordResetCommand, ConfirmPasswordResetError, ConfirmPasswordResetUseCase,
    RequestPasswordResetError, RequestPasswordResetUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, PasswordResetRepository, PasswordResetRepositoryError, UserQuery,
};
use crate::email::application::ports::outgoing::AccountNotifier;

use super::token_hasher::hash_token;
use super::{secrets, RESET_TOKEN_TTL_HOURS};

//
// ──────────────────────────────────────────────────────────
// Request
// ──────────────────────────────────────────────────────────
//

pub struct RequestPasswordResetService<Q, P>
where
    Q: UserQuery,
    P: PasswordResetRepository,
{
    query: Q,
    resets: P,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl<Q, P> RequestPasswordResetService<Q, P>
where
    Q: UserQuery,
    P: PasswordResetRepository,
{
    pub fn new(query: Q, resets: P, notifier: Arc<dyn AccountNotifier + Send + Sync>) -> Self {
        Self {
            query,
            resets,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, P> RequestPasswordResetUseCase for RequestPasswordResetService<Q, P>
where
    Q: UserQuery,
    P: PasswordResetRepository,
{
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError> {
        let Some(user) = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?
        else {
            tracing::info!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = secrets::reset_token();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);
        self.resets
            .create_token(user.id, hash_token(&token), expires_at)
            .await
            .map_err(|e| RequestPasswordResetError::RepositoryError(e.to_string()))?;

        self.notifier
            .send_password_reset(&user.email, &token)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %user.id, error = %e, "Reset email delivery failed");
                RequestPasswordResetError::EmailDeliveryFailed(e.to_string())
            })?;

        tracing::info!(user_id = %user.id, "Password reset link sent");
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Confirm
// ──────────────────────────────────────────────────────────
//

pub struct ConfirmPasswordResetService<P>
where
    P: PasswordResetRepository,
{
    resets: P,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<P> ConfirmPasswordResetService<P>
where
    P: PasswordResetRepository,
{
    pub fn new(resets: P, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self { resets, hasher }
    }
}

#[async_trait]
impl<P> ConfirmPasswordResetUseCase for ConfirmPasswordResetService<P>
where
    P: PasswordResetRepository,
{
    async fn execute(
        &self,
        command: ConfirmPasswordResetCommand,
    ) -> Result<(), ConfirmPasswordResetError> {
        let new_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ConfirmPasswordResetError::HashingFailed(e.to_string()))?;

        let user_id = self
            .resets
            .redeem_token(&hash_token(command.token()), new_hash, Utc::now())
            .await
            .map_err(|e| match e {
                PasswordResetRepositoryError::InvalidToken => {
                    ConfirmPasswordResetError::InvalidToken
                }
                PasswordResetRepositoryError::DatabaseError(msg) => {
                    ConfirmPasswordResetError::RepositoryError(msg)
                }
            })?;

        tracing::info!(user_id = %user_id, "Password reset completed");
        Ok(())
    }
}
