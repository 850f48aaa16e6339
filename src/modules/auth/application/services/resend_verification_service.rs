use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    ResendVerificationError, ResendVerificationUseCase,
};
use crate::auth::application::ports::outgoing::{UserQuery, VerificationCodeStore};
use crate::email::application::ports::outgoing::AccountNotifier;

use super::secrets;
use super::VERIFICATION_CODE_TTL;

pub struct ResendVerificationService<Q, C>
where
    Q: UserQuery,
    C: VerificationCodeStore,
{
    query: Q,
    codes: C,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl<Q, C> ResendVerificationService<Q, C>
where
    Q: UserQuery,
    C: VerificationCodeStore,
{
    pub fn new(query: Q, codes: C, notifier: Arc<dyn AccountNotifier + Send + Sync>) -> Self {
        Self {
            query,
            codes,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, C> ResendVerificationUseCase for ResendVerificationService<Q, C>
where
    Q: UserQuery,
    C: VerificationCodeStore,
{
    async fn execute(&self, email: &str) -> Result<(), ResendVerificationError> {
        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| ResendVerificationError::QueryError(e.to_string()))?
            .ok_or(ResendVerificationError::UserNotFound)?;

        if user.is_verified {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        let code = secrets::verification_code();
        self.codes
            .store_code(&user.email, &code, VERIFICATION_CODE_TTL)
            .await
            .map_err(|e| ResendVerificationError::CodeStoreError(e.to_string()))?;

        self.notifier
            .send_verification_code(&user.email, &code)
            .await
            .map_err(|e| ResendVerificationError::EmailDeliveryFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "Verification code re-sent");
        Ok(())
    }
}
