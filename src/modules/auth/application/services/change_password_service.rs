use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase,
};
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

pub struct ChangePasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ChangePasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ChangePasswordUseCase for ChangePasswordService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        let user = self
            .query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .hasher
            .verify_password(command.old_password(), &user.password_hash)
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;
        if !matches {
            tracing::warn!(user_id = %user_id, "Password change with wrong old password");
            return Err(ChangePasswordError::InvalidOldPassword);
        }

        let new_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}
