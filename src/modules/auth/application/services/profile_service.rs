use async_trait::async_trait;

use crate::auth::application::domain::entities::{AccountView, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    DeleteAccountError, DeleteAccountUseCase, FetchProfileError, FetchProfileUseCase,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
use crate::auth::application::ports::outgoing::{
    UpdateProfileData, UserQuery, UserRepository, UserRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Fetch
// ──────────────────────────────────────────────────────────
//

pub struct FetchProfileService<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: UserId) -> Result<AccountView, FetchProfileError> {
        self.query
            .find_by_id(user_id.value())
            .await
            .map_err(|e| FetchProfileError::QueryError(e.to_string()))?
            .map(|user| user.to_account_view())
            .ok_or(FetchProfileError::UserNotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
//

pub struct UpdateProfileService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<AccountView, UpdateProfileError> {
        let (name, email) = command.into_parts();

        let updated = self
            .repository
            .update_profile(user_id.value(), UpdateProfileData { name, email })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => UpdateProfileError::EmailAlreadyExists,
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                UserRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
            })?;

        tracing::info!(user_id = %user_id, "Profile updated");
        Ok(updated.into())
    }
}

//
// ──────────────────────────────────────────────────────────
// Delete
// ──────────────────────────────────────────────────────────
//

pub struct DeleteAccountService<R>
where
    R: UserRepository,
{
    repository: R,
}

impl<R> DeleteAccountService<R>
where
    R: UserRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteAccountUseCase for DeleteAccountService<R>
where
    R: UserRepository,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteAccountError> {
        self.repository
            .delete_user(user_id.value())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteAccountError::UserNotFound,
                other => DeleteAccountError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %user_id, "Account deleted");
        Ok(())
    }
}
